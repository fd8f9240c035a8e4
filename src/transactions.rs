/// Transactions table: column layout and display formatting
use crate::formatting::{format_transaction_date, humanize_slug, BoxChars};
use crate::model::Transaction;
use crate::pagination::Paginator;
use crate::table::Alignment;

pub const EMPTY_MESSAGE: &str = "No transactions to display.";

/// Column headers with their widths; the last column takes the remaining space
pub const COLUMNS: [(&str, usize, Alignment); 5] = [
    ("Date", 10, Alignment::Left),
    ("Player", 22, Alignment::Left),
    ("Type", 10, Alignment::Left),
    ("Team", 14, Alignment::Left),
    ("Description", 0, Alignment::Left),
];

/// Display strings for one transaction, in column order
pub fn display_row(transaction: &Transaction) -> [String; 5] {
    [
        format_transaction_date(&transaction.date),
        humanize_slug(&transaction.player_slug),
        transaction.transaction_type.clone(),
        humanize_slug(&transaction.team_slug),
        transaction.description.clone(),
    ]
}

/// One navigation control in the footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterControl {
    pub label: String,
    pub enabled: bool,
}

/// `« First  ← Prev  Page X of Y  Next →  Last »`
///
/// The page label is returned as an always-enabled control in the middle.
pub fn footer_controls(
    paginator: &Paginator,
    item_count: usize,
    box_chars: &BoxChars,
) -> Vec<FooterControl> {
    let can_prev = paginator.can_prev();
    let can_next = paginator.can_next(item_count);
    vec![
        FooterControl {
            label: format!("{} First", box_chars.double_left),
            enabled: can_prev,
        },
        FooterControl {
            label: format!("{} Prev", box_chars.arrow_left),
            enabled: can_prev,
        },
        FooterControl {
            label: paginator.label(item_count),
            enabled: true,
        },
        FooterControl {
            label: format!("Next {}", box_chars.arrow_right),
            enabled: can_next,
        },
        FooterControl {
            label: format!("Last {}", box_chars.double_right),
            enabled: can_next,
        },
    ]
}

/// Footer as plain text, controls separated by two spaces
pub fn footer_text(paginator: &Paginator, item_count: usize, box_chars: &BoxChars) -> String {
    footer_controls(paginator, item_count, box_chars)
        .into_iter()
        .map(|c| c.label)
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::create_mock_transactions;

    #[test]
    fn test_display_row_humanizes_slugs() {
        let transaction = Transaction {
            date: "2024-07-06T00:00:00".to_string(),
            player_slug: "lebron-james".to_string(),
            team_slug: "los-angeles-lakers".to_string(),
            transaction_type: "Signing".to_string(),
            description: "Re-signed.".to_string(),
        };
        assert_eq!(
            display_row(&transaction),
            [
                "7/6/2024".to_string(),
                "Lebron James".to_string(),
                "Signing".to_string(),
                "Los Angeles Lakers".to_string(),
                "Re-signed.".to_string(),
            ]
        );
    }

    #[test]
    fn test_footer_on_first_page() {
        let items = create_mock_transactions(20);
        let paginator = Paginator::default();
        let controls = footer_controls(&paginator, items.len(), &BoxChars::unicode());
        assert!(!controls[0].enabled);
        assert!(!controls[1].enabled);
        assert!(controls[3].enabled);
        assert!(controls[4].enabled);
        assert_eq!(
            footer_text(&paginator, items.len(), &BoxChars::unicode()),
            "« First  ← Prev  Page 1 of 3  Next →  Last »"
        );
    }

    #[test]
    fn test_footer_on_last_page_ascii() {
        let paginator = Paginator::at_page(8, 3);
        let controls = footer_controls(&paginator, 20, &BoxChars::ascii());
        assert!(controls[0].enabled);
        assert!(!controls[3].enabled);
        assert_eq!(
            footer_text(&paginator, 20, &BoxChars::ascii()),
            "<< First  <- Prev  Page 3 of 3  Next ->  Last >>"
        );
    }

    #[test]
    fn test_footer_with_no_items() {
        let paginator = Paginator::default();
        let controls = footer_controls(&paginator, 0, &BoxChars::unicode());
        assert!(controls.iter().filter(|c| c.label != "Page 1 of 1").all(|c| !c.enabled));
    }
}
