//! General test utilities for TUI tests.
//!
//! This module provides common test helpers used across multiple test modules.
//! For widget-specific rendering helpers, see `crate::tui::widgets::testing`.

use std::sync::Arc;

use ratatui::buffer::Buffer;

use crate::data_provider::RosterDataProvider;
use crate::dev::mock_client::MockClient;

/// Creates an Arc-wrapped mock data provider for testing.
///
/// Serves the fixture teams, rosters and transactions without touching the network.
pub fn create_client() -> Arc<dyn RosterDataProvider> {
    Arc::new(MockClient::new())
}

/// Constant for general rendering width
pub const RENDER_WIDTH: u16 = 80;

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Helper for buffer assertions
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    let buffer_width = buf.area().width as usize;

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].chars().count(),
            buffer_width,
            "Line {} width mismatch: expected {}, got {}",
            i,
            buffer_width,
            actual[i].chars().count()
        );
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_returns_arc() {
        let client = create_client();
        assert_eq!(Arc::strong_count(&client), 1);
    }

    #[tokio::test]
    async fn test_create_client_serves_fixtures() {
        let client = create_client();
        assert_eq!(client.teams().await.unwrap().len(), 5);
    }
}
