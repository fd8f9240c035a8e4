/// TransactionsTable widget - paged player movement list with a navigation footer
use crate::config::DisplayConfig;
use crate::formatting::fit_cell;
use crate::model::Transaction;
use crate::pagination::Paginator;
use crate::transactions::{display_row, footer_controls, COLUMNS, EMPTY_MESSAGE};
use crate::tui::widgets::RenderableWidget;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

pub const TITLE: &str = "NBA Player Movement";
pub const LOADING_MESSAGE: &str = "Loading transactions...";

/// Title, error line, header, separator
const HEADER_HEIGHT: u16 = 4;

#[derive(Debug)]
pub struct TransactionsTable<'a> {
    pub transactions: &'a [Transaction],
    pub paginator: &'a Paginator,
    pub error: Option<&'a str>,
    pub loading: bool,
}

/// Widths of each column for a given total width; the last column takes what is left
fn column_widths(total_width: usize) -> Vec<usize> {
    let fixed: usize = COLUMNS
        .iter()
        .filter(|(_, w, _)| *w > 0)
        .map(|(_, w, _)| w + 1)
        .sum();
    COLUMNS
        .iter()
        .map(|&(_, width, _)| {
            if width == 0 {
                total_width.saturating_sub(fixed)
            } else {
                width
            }
        })
        .collect()
}

fn render_cells(
    cells: &[String],
    widths: &[usize],
    x: u16,
    y: u16,
    right: u16,
    buf: &mut Buffer,
    style: Style,
) {
    let mut x = x;
    for ((text, &width), &(_, _, align)) in cells.iter().zip(widths).zip(COLUMNS.iter()) {
        if x >= right || width == 0 {
            break;
        }
        let text = fit_cell(text, width, align);
        buf.set_stringn(x, y, &text, (right - x) as usize, style);
        x += width as u16 + 1;
    }
}

impl RenderableWidget for TransactionsTable<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as usize;
        let right = area.x + area.width;
        let bottom = area.y + area.height;

        buf.set_stringn(area.x, area.y, TITLE, width, Style::default().add_modifier(Modifier::BOLD));
        if area.height < 2 {
            return;
        }

        if let Some(error) = self.error {
            buf.set_stringn(
                area.x,
                area.y + 1,
                format!("Error: {}", error),
                width,
                Style::default().fg(config.error_fg),
            );
        }
        if area.height <= HEADER_HEIGHT {
            return;
        }

        let widths = column_widths(width);
        let headers: Vec<String> = COLUMNS.iter().map(|(h, _, _)| h.to_string()).collect();
        render_cells(
            &headers,
            &widths,
            area.x,
            area.y + 2,
            right,
            buf,
            Style::default().add_modifier(Modifier::BOLD),
        );
        let grid_width = widths.iter().map(|w| w + 1).sum::<usize>().saturating_sub(1);
        buf.set_stringn(
            area.x,
            area.y + 3,
            config.box_chars.horizontal.repeat(grid_width.min(width)),
            width,
            Style::default(),
        );

        // Footer sits on the last line, rows fill the space between
        let footer_y = bottom - 1;
        let mut y = area.y + HEADER_HEIGHT;

        let page = self.paginator.page(self.transactions);
        if self.loading && self.transactions.is_empty() {
            buf.set_stringn(area.x, y, LOADING_MESSAGE, width, Style::default());
        } else if page.is_empty() {
            buf.set_stringn(area.x, y, EMPTY_MESSAGE, width, Style::default());
        } else {
            for transaction in page {
                if y >= footer_y {
                    break;
                }
                render_cells(&display_row(transaction), &widths, area.x, y, right, buf, Style::default());
                y += 1;
            }
        }

        if footer_y < area.y + HEADER_HEIGHT {
            return;
        }
        let mut x = area.x;
        for (i, control) in footer_controls(self.paginator, self.transactions.len(), &config.box_chars)
            .into_iter()
            .enumerate()
        {
            if i > 0 {
                x += 2;
            }
            if x >= right {
                break;
            }
            let style = if control.enabled {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
            };
            buf.set_stringn(x, footer_y, &control.label, (right - x) as usize, style);
            x += control.label.width() as u16;
        }
    }
}
