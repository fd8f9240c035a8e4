use crate::config::DisplayConfig;
use crate::data_provider::RosterDataProvider;
use crate::formatting::{fit_cell, format_header};
use crate::model::Transaction;
use crate::pagination::{Paginator, ITEMS_PER_PAGE};
use crate::transactions::{display_row, footer_text, COLUMNS, EMPTY_MESSAGE};
use anyhow::Result;
use tracing::error;

/// Width given to the description column on a plain terminal
const DESCRIPTION_WIDTH: usize = 48;

/// Format one page; `error` is shown above the table when the fetch failed
pub fn format_transactions(
    transactions: &[Transaction],
    page: usize,
    error: Option<&str>,
    display: &DisplayConfig,
) -> String {
    let mut paginator = Paginator::at_page(ITEMS_PER_PAGE, page);
    paginator.clamp(transactions.len());

    let mut output = String::new();
    output.push('\n');
    output.push_str(&format_header("Recent NBA Transactions", true, display));
    output.push('\n');
    if let Some(error) = error {
        output.push_str(&format!("Error: {}\n", error));
    }

    let widths: Vec<usize> = COLUMNS
        .iter()
        .map(|&(_, w, _)| if w == 0 { DESCRIPTION_WIDTH } else { w })
        .collect();

    let header: Vec<String> = COLUMNS
        .iter()
        .zip(&widths)
        .map(|(&(title, _, align), &w)| fit_cell(title, w, align))
        .collect();
    output.push_str(header.join(" ").trim_end());
    output.push('\n');
    let total_width = widths.iter().sum::<usize>() + widths.len() - 1;
    output.push_str(&display.box_chars.horizontal.repeat(total_width));
    output.push('\n');

    let rows = paginator.page(transactions);
    if rows.is_empty() {
        output.push_str(EMPTY_MESSAGE);
        output.push('\n');
    }
    for transaction in rows {
        let line: Vec<String> = display_row(transaction)
            .iter()
            .zip(COLUMNS.iter().zip(&widths))
            .map(|(text, (&(_, _, align), &w))| fit_cell(text, w, align))
            .collect();
        output.push_str(line.join(" ").trim_end());
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&footer_text(&paginator, transactions.len(), &display.box_chars));
    output.push('\n');
    output
}

/// Fetch and format one page; a failed fetch renders an empty table with the error
pub async fn report(client: &dyn RosterDataProvider, page: usize, display: &DisplayConfig) -> String {
    match client.transactions().await {
        Ok(transactions) => format_transactions(&transactions, page, None, display),
        Err(e) => {
            error!("Failed to fetch transactions: {}", e);
            format_transactions(&[], page, Some(&e.to_string()), display)
        }
    }
}

pub async fn run(client: &dyn RosterDataProvider, page: usize, display: &DisplayConfig) -> Result<()> {
    print!("{}", report(client, page, display).await);
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::mock_client::MockClient;
    use crate::fixtures::create_mock_transactions;

    #[test]
    fn test_format_last_page() {
        let transactions = create_mock_transactions(20);
        let output = format_transactions(&transactions, 3, None, &DisplayConfig::default());
        let body: Vec<&str> = output
            .lines()
            .filter(|l| l.starts_with("7/"))
            .collect();
        assert_eq!(body.len(), 4);
        assert!(body[0].starts_with("7/17/2024"));
        assert!(output.contains("Page 3 of 3"));
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let transactions = create_mock_transactions(20);
        let output = format_transactions(&transactions, 99, None, &DisplayConfig::default());
        assert!(output.contains("Page 3 of 3"));
    }

    #[test]
    fn test_format_empty() {
        let output = format_transactions(&[], 1, None, &DisplayConfig::default());
        assert!(output.contains("No transactions to display.\n"));
        assert!(output.contains("Page 1 of 1"));
    }

    #[tokio::test]
    async fn test_failed_fetch_shows_error_above_empty_table() {
        let output = report(&MockClient::failing(), 1, &DisplayConfig::default()).await;
        assert!(output.contains("Error: HTTP 500: mock failure\n"));
        assert!(output.contains("No transactions to display.\n"));
        assert!(output.contains("Page 1 of 1"));
    }

    #[test]
    fn test_no_error_line_on_success() {
        let output = format_transactions(&create_mock_transactions(3), 1, None, &DisplayConfig::default());
        assert!(!output.contains("Error:"));
    }
}
