/// Testing utilities for widget rendering
///
/// This module provides helper functions for testing widgets in isolation.
use super::RenderableWidget;
use crate::config::DisplayConfig;
use crate::formatting::BoxChars;
use ratatui::{buffer::Buffer, layout::Rect, style::Color};

pub use crate::tui::testing::{assert_buffer, buffer_lines};

/// Create a test DisplayConfig with unicode box characters
///
/// This provides consistent theming for tests.
pub fn test_config() -> DisplayConfig {
    DisplayConfig {
        use_unicode: true,
        selection_fg: Color::Rgb(255, 165, 0),
        star_fg: Color::Yellow,
        error_fg: Color::Red,
        box_chars: BoxChars::unicode(),
    }
}

/// Create a test DisplayConfig with ASCII box characters
///
/// Useful for tests that want predictable ASCII-only output.
pub fn test_config_ascii() -> DisplayConfig {
    DisplayConfig {
        use_unicode: false,
        box_chars: BoxChars::ascii(),
        ..test_config()
    }
}

/// Render a widget to a buffer and return it for testing
pub fn render_widget(widget: &impl RenderableWidget, width: u16, height: u16) -> Buffer {
    render_widget_with_config(widget, width, height, &test_config())
}

/// Render a widget to a buffer with a custom config
pub fn render_widget_with_config(
    widget: &impl RenderableWidget,
    width: u16,
    height: u16,
    config: &DisplayConfig,
) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf, config);
    buf
}

/// Get the text content of a specific line in the buffer
pub fn buffer_line(buf: &Buffer, line: u16) -> String {
    let area = buf.area();
    (0..area.width)
        .map(|x| buf[(x, line)].symbol())
        .collect()
}

/// Column of the first occurrence of `needle` on `line`, in cells
pub fn find_in_line(buf: &Buffer, line: u16, needle: &str) -> Option<u16> {
    let area = buf.area();
    let first = needle.chars().next()?.to_string();
    (0..area.width).find(|&x| {
        buf[(x, line)].symbol() == first
            && needle
                .chars()
                .enumerate()
                .all(|(i, c)| {
                    let col = x + i as u16;
                    col < area.width && buf[(col, line)].symbol() == c.to_string()
                })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    struct TestWidget {
        text: String,
    }

    impl RenderableWidget for TestWidget {
        fn render(&self, area: Rect, buf: &mut Buffer, _config: &DisplayConfig) {
            buf.set_string(area.x, area.y, &self.text, Style::default());
        }
    }

    #[test]
    fn test_render_widget() {
        let widget = TestWidget {
            text: "Hello".to_string(),
        };
        let buf = render_widget(&widget, 10, 1);
        assert_eq!(buffer_line(&buf, 0), "Hello     ");
        assert_eq!(find_in_line(&buf, 0, "llo"), Some(2));
        assert_eq!(find_in_line(&buf, 0, "xyz"), None);
    }

    #[test]
    fn test_configs() {
        assert_eq!(test_config().box_chars.horizontal, "─");
        assert_eq!(test_config_ascii().box_chars.horizontal, "-");
        assert_eq!(test_config_ascii().star_fg, Color::Yellow);
    }
}
