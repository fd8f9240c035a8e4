/// TabBar widget - displays main navigation tabs
///
/// Renders a horizontal bar of tabs separated by vertical bars, with a
/// separator line underneath that joins the gaps.
use crate::config::DisplayConfig;
use crate::tui::types::Tab;
use crate::tui::widgets::RenderableWidget;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

/// Widget for displaying navigation tabs as a horizontal bar
#[derive(Debug)]
pub struct TabBar {
    pub current_tab: Tab,
    /// Whether the tab bar is focused (affects styling)
    pub focused: bool,
}

impl TabBar {
    pub fn new(current_tab: Tab, focused: bool) -> Self {
        Self {
            current_tab,
            focused,
        }
    }

    fn base_style(&self) -> Style {
        if self.focused {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    fn tab_style(&self, tab: Tab, config: &DisplayConfig) -> Style {
        if tab != self.current_tab {
            return self.base_style();
        }
        let style = Style::default().fg(config.selection_fg);
        if self.focused {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    fn build_tab_line(&self, config: &DisplayConfig) -> Vec<(String, Style)> {
        let separator = format!(" {} ", config.box_chars.vertical);
        let mut segments = Vec::new();
        for (i, tab) in Tab::all().into_iter().enumerate() {
            if i > 0 {
                segments.push((separator.clone(), self.base_style()));
            }
            segments.push((tab.label().to_string(), self.tab_style(tab, config)));
        }
        segments
    }

    fn build_separator_line(&self, area_width: usize, config: &DisplayConfig) -> String {
        let horizontal = &config.box_chars.horizontal;
        let mut line = String::new();
        let mut pos = 0;
        for (i, tab) in Tab::all().into_iter().enumerate() {
            if i > 0 {
                line.push_str(horizontal);
                line.push_str(&config.box_chars.connector_up);
                line.push_str(horizontal);
                pos += 3;
            }
            let width = tab.label().width();
            line.push_str(&horizontal.repeat(width));
            pos += width;
        }
        if pos < area_width {
            line.push_str(&horizontal.repeat(area_width - pos));
        }
        line
    }
}

impl RenderableWidget for TabBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        let right = area.x + area.width;
        let mut x = area.x;
        for (text, style) in self.build_tab_line(config) {
            if x >= right {
                break;
            }
            buf.set_stringn(x, area.y, &text, (right - x) as usize, style);
            x += text.width() as u16;
        }

        let separator = self.build_separator_line(area.width as usize, config);
        buf.set_stringn(
            area.x,
            area.y + 1,
            &separator,
            area.width as usize,
            self.base_style(),
        );
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}
