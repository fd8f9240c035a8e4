/// Core type definitions used across the TUI
///
/// This module contains fundamental types that are used throughout
/// the TUI, particularly for navigation.

/// Tab enum for main navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Rosters,
    Transactions,
}

impl Tab {
    pub fn all() -> [Self; 2] {
        [Self::Rosters, Self::Transactions]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rosters => "Rosters",
            Self::Transactions => "Transactions",
        }
    }

    /// Number key that jumps to this tab
    pub fn number(&self) -> char {
        match self {
            Self::Rosters => '1',
            Self::Transactions => '2',
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Rosters => Self::Transactions,
            Self::Transactions => Self::Rosters,
        }
    }

    pub fn prev(&self) -> Self {
        // Two tabs: previous and next coincide
        self.next()
    }
}
