/// Widget-based rendering infrastructure for TUI
///
/// Widgets are small structs built from slices of `AppState` that render
/// themselves directly into a ratatui Buffer.

#[cfg(test)]
pub mod testing;

pub mod roster_table;
pub use roster_table::RosterTable;

pub mod status_bar;
pub use status_bar::StatusBar;

pub mod tab_bar;
pub use tab_bar::TabBar;

pub mod transactions_table;
pub use transactions_table::TransactionsTable;

use crate::config::DisplayConfig;
use ratatui::{buffer::Buffer, layout::Rect};

/// Core trait for renderable widgets
///
/// Widgets render themselves directly to a ratatui Buffer, avoiding string-based
/// intermediate representations. This enables:
/// - Direct styling without character position calculations
/// - Testability (can render to test buffers)
///
/// # Object Safety
///
/// This trait is object-safe, meaning you can use trait objects to store
/// different widget types in collections.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }

    /// Get the preferred width of this widget
    ///
    /// Returns None if the widget can adapt to any width.
    fn preferred_width(&self) -> Option<u16> {
        None
    }
}
