/// StatusBar widget - displays status information at the bottom of the screen
///
/// This widget renders a two-line status bar with:
/// - Top line: horizontal separator with connector aligned to the vertical bar
/// - Bottom line: left status message (or error) │ right loading/refresh indicator
use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;
use chrono::{DateTime, Local};
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use std::time::SystemTime;
use unicode_width::UnicodeWidthStr;

pub const LOADING_INDICATOR: &str = "Loading...";
pub const NEVER_REFRESHED: &str = "--:--:--";

/// Widget for displaying the status message and refresh state
#[derive(Debug, Default)]
pub struct StatusBar {
    pub message: Option<String>,
    pub is_error: bool,
    /// Any fetch in flight
    pub loading: bool,
    pub last_refresh: Option<SystemTime>,
}

impl StatusBar {
    pub fn new(message: Option<String>, is_error: bool) -> Self {
        Self {
            message,
            is_error,
            ..Self::default()
        }
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn with_last_refresh(mut self, last_refresh: Option<SystemTime>) -> Self {
        self.last_refresh = last_refresh;
        self
    }

    fn build_right_text(&self) -> String {
        if self.loading {
            return LOADING_INDICATOR.to_string();
        }
        match self.last_refresh {
            Some(time) => DateTime::<Local>::from(time).format("%H:%M:%S").to_string(),
            None => NEVER_REFRESHED.to_string(),
        }
    }

    fn build_separator_line(&self, area_width: usize, bar_position: usize, config: &DisplayConfig) -> String {
        let horizontal = &config.box_chars.horizontal;
        format!(
            "{}{}{}",
            horizontal.repeat(bar_position),
            config.box_chars.connector_up,
            horizontal.repeat(area_width.saturating_sub(bar_position + 1))
        )
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        let right_text = self.build_right_text();
        // Layout: " message" [padding] "│ right "
        let right_width = right_text.width() + 3;
        let bar_position = (area.width as usize).saturating_sub(right_width);

        let separator = self.build_separator_line(area.width as usize, bar_position, config);
        buf.set_stringn(area.x, area.y, &separator, area.width as usize, Style::default());

        let y = area.y + 1;
        if let Some(message) = &self.message {
            let style = if self.is_error {
                Style::default().fg(config.error_fg)
            } else {
                Style::default()
            };
            let room = bar_position.saturating_sub(2);
            buf.set_stringn(area.x + 1, y, message, room, style);
        }

        if bar_position < area.width as usize {
            let right = format!("{} {} ", config.box_chars.vertical, right_text);
            let room = area.width as usize - bar_position;
            buf.set_stringn(area.x + bar_position as u16, y, &right, room, Style::default());
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}
