/// Sortable table framework
///
/// This module provides the types shared by every tabular view:
/// - CellValue: what a cell displays (text or a star rating)
/// - SortKey: what a column sorts by, derived from the row rather than a raw field
/// - ColumnDef: column definition with cell and sort-key extraction functions
/// - SortState / SortableGrid: a single active sort column and its direction
use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::formatting::BoxChars;
use crate::stars::render_stars;

/// Value types that can appear in table cells
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    /// Plain text cell
    Text(String),

    /// Star rating, rendered as five glyphs
    Stars(Option<f64>),
}

impl CellValue {
    /// Get the display text for this cell
    pub fn display_text(&self, box_chars: &BoxChars) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Stars(rating) => render_stars(*rating, box_chars),
        }
    }
}

/// Text alignment for table cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
}

/// Comparable value a column sorts by
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    /// Numbers compare numerically, text lexicographically; numbers sort before text
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

/// Column definition for a table
///
/// # Type Parameters
/// - `T`: The row data type
pub struct ColumnDef<T> {
    /// Stable identifier used by sort state ("name", "pts", ...)
    pub id: &'static str,

    /// Column header text
    pub header: String,

    /// Column width in characters
    pub width: usize,

    /// Text alignment
    pub align: Alignment,

    /// Function to extract cell value from row data
    pub cell_fn: Box<dyn Fn(&T) -> CellValue + Send + Sync>,

    /// Function to extract the sort key from row data
    pub sort_fn: Box<dyn Fn(&T) -> SortKey + Send + Sync>,
}

impl<T> ColumnDef<T> {
    pub fn new<F, S>(
        id: &'static str,
        header: impl Into<String>,
        width: usize,
        align: Alignment,
        cell_fn: F,
        sort_fn: S,
    ) -> Self
    where
        F: Fn(&T) -> CellValue + Send + Sync + 'static,
        S: Fn(&T) -> SortKey + Send + Sync + 'static,
    {
        Self {
            id,
            header: header.into(),
            width,
            align,
            cell_fn: Box::new(cell_fn),
            sort_fn: Box::new(sort_fn),
        }
    }
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("cell_fn", &"<function>")
            .field("sort_fn", &"<function>")
            .finish()
    }
}

/// The single active sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column_id: String,
    pub descending: bool,
}

impl SortState {
    pub fn ascending(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            descending: false,
        }
    }

    /// Sort state after the header of `column_id` is selected
    ///
    /// Selecting the active column flips its direction; any other column
    /// becomes the active one, ascending.
    pub fn toggled(current: Option<&SortState>, column_id: &str) -> SortState {
        match current {
            Some(state) if state.column_id == column_id => SortState {
                column_id: state.column_id.clone(),
                descending: !state.descending,
            },
            _ => SortState::ascending(column_id),
        }
    }
}

/// Stable sort of `rows` by the column named in `sort`
///
/// Rows keep their incoming order when `sort` is None or names an unknown column.
pub fn sort_rows<'a, T>(rows: &mut Vec<&'a T>, columns: &[ColumnDef<T>], sort: Option<&SortState>) {
    let Some(sort) = sort else {
        return;
    };
    let Some(column) = columns.iter().find(|c| c.id == sort.column_id) else {
        debug!("TABLE: unknown sort column '{}'", sort.column_id);
        return;
    };

    let mut keyed: Vec<(SortKey, &'a T)> = rows
        .iter()
        .map(|row| ((column.sort_fn)(*row), *row))
        .collect();

    if sort.descending {
        keyed.sort_by(|a, b| b.0.compare(&a.0));
    } else {
        keyed.sort_by(|a, b| a.0.compare(&b.0));
    }

    rows.clear();
    rows.extend(keyed.into_iter().map(|(_, row)| row));
}

/// Column set plus the active sort state
#[derive(Debug)]
pub struct SortableGrid<T> {
    columns: Vec<ColumnDef<T>>,
    sort: Option<SortState>,
}

impl<T> SortableGrid<T> {
    pub fn new(columns: Vec<ColumnDef<T>>) -> Self {
        Self {
            columns,
            sort: None,
        }
    }

    pub fn with_sort(mut self, sort: Option<SortState>) -> Self {
        self.sort = sort;
        self
    }

    pub fn columns(&self) -> &[ColumnDef<T>] {
        &self.columns
    }

    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Header selection: toggle or switch the active sort column
    pub fn select_column(&mut self, column_id: &str) {
        if !self.columns.iter().any(|c| c.id == column_id) {
            debug!("TABLE: ignoring selection of unknown column '{}'", column_id);
            return;
        }
        self.sort = Some(SortState::toggled(self.sort.as_ref(), column_id));
    }

    /// Apply the active sort to a fresh row set
    pub fn arrange<'a>(&self, mut rows: Vec<&'a T>) -> Vec<&'a T> {
        sort_rows(&mut rows, &self.columns, self.sort.as_ref());
        rows
    }

    /// Header text with the sort direction marker on the active column
    pub fn header_label(&self, column: &ColumnDef<T>, box_chars: &BoxChars) -> String {
        match &self.sort {
            Some(sort) if sort.column_id == column.id => {
                let marker = if sort.descending {
                    &box_chars.sort_desc
                } else {
                    &box_chars.sort_asc
                };
                format!("{} {}", column.header, marker)
            }
            _ => column.header.clone(),
        }
    }

    /// Cell values for one row, in column order
    pub fn cells(&self, row: &T) -> Vec<CellValue> {
        self.columns.iter().map(|c| (c.cell_fn)(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Row {
        label: &'static str,
        value: f64,
    }

    fn columns() -> Vec<ColumnDef<Row>> {
        vec![
            ColumnDef::new(
                "label",
                "Label",
                10,
                Alignment::Left,
                |r: &Row| CellValue::Text(r.label.to_string()),
                |r: &Row| SortKey::Text(r.label.to_string()),
            ),
            ColumnDef::new(
                "value",
                "Value",
                6,
                Alignment::Right,
                |r: &Row| CellValue::Text(format!("{:.1}", r.value)),
                |r: &Row| SortKey::Number(r.value),
            ),
        ]
    }

    fn labels(rows: &[&Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.label).collect()
    }

    fn sample() -> Vec<Row> {
        vec![
            Row { label: "c", value: 10.0 },
            Row { label: "a", value: 2.5 },
            Row { label: "d", value: 100.0 },
            Row { label: "b", value: 9.0 },
        ]
    }

    /// Heap's algorithm, enough for the small inputs used here
    fn permutations(n: usize) -> Vec<Vec<usize>> {
        fn generate(k: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
            if k <= 1 {
                out.push(current.clone());
                return;
            }
            generate(k - 1, current, out);
            for i in 0..k - 1 {
                if k % 2 == 0 {
                    current.swap(i, k - 1);
                } else {
                    current.swap(0, k - 1);
                }
                generate(k - 1, current, out);
            }
        }
        let mut out = Vec::new();
        generate(n, &mut (0..n).collect(), &mut out);
        out
    }

    #[test]
    fn test_no_sort_keeps_fetch_order() {
        let data = sample();
        let grid = SortableGrid::new(columns());
        let rows = grid.arrange(data.iter().collect());
        assert_eq!(labels(&rows), vec!["c", "a", "d", "b"]);
    }

    #[test]
    fn test_numeric_column_sorts_numerically() {
        let data = sample();
        let grid = SortableGrid::new(columns()).with_sort(Some(SortState::ascending("value")));
        let rows = grid.arrange(data.iter().collect());
        // Lexicographic order on the rendered text would put "100.0" first
        assert_eq!(labels(&rows), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_descending_is_reverse_of_ascending_for_every_permutation() {
        let data = sample();
        for perm in permutations(data.len()) {
            let rows: Vec<&Row> = perm.iter().map(|&i| &data[i]).collect();

            let mut asc = rows.clone();
            sort_rows(&mut asc, &columns(), Some(&SortState::ascending("value")));

            let mut desc = rows.clone();
            let state = SortState {
                column_id: "value".to_string(),
                descending: true,
            };
            sort_rows(&mut desc, &columns(), Some(&state));

            let mut reversed = labels(&asc);
            reversed.reverse();
            assert_eq!(labels(&desc), reversed);
        }
    }

    #[test]
    fn test_sort_is_stable_under_ties() {
        let data = vec![
            Row { label: "first", value: 1.0 },
            Row { label: "second", value: 0.0 },
            Row { label: "third", value: 1.0 },
            Row { label: "fourth", value: 0.0 },
        ];
        let mut asc: Vec<&Row> = data.iter().collect();
        sort_rows(&mut asc, &columns(), Some(&SortState::ascending("value")));
        assert_eq!(labels(&asc), vec!["second", "fourth", "first", "third"]);

        let mut desc: Vec<&Row> = data.iter().collect();
        let state = SortState {
            column_id: "value".to_string(),
            descending: true,
        };
        sort_rows(&mut desc, &columns(), Some(&state));
        assert_eq!(labels(&desc), vec!["first", "third", "second", "fourth"]);
    }

    #[test]
    fn test_toggle_same_column() {
        let first = SortState::toggled(None, "value");
        assert!(!first.descending);
        let second = SortState::toggled(Some(&first), "value");
        assert!(second.descending);
        let third = SortState::toggled(Some(&second), "value");
        assert_eq!(third, first);
    }

    #[test]
    fn test_new_column_resets_to_ascending() {
        let desc = SortState {
            column_id: "value".to_string(),
            descending: true,
        };
        let next = SortState::toggled(Some(&desc), "label");
        assert_eq!(next, SortState::ascending("label"));
    }

    #[test]
    fn test_select_column_ignores_unknown_ids() {
        let mut grid = SortableGrid::new(columns());
        grid.select_column("nope");
        assert!(grid.sort_state().is_none());
        grid.select_column("label");
        assert_eq!(grid.sort_state(), Some(&SortState::ascending("label")));
    }

    #[test]
    fn test_unknown_sort_column_leaves_order() {
        let data = sample();
        let mut rows: Vec<&Row> = data.iter().collect();
        sort_rows(&mut rows, &columns(), Some(&SortState::ascending("missing")));
        assert_eq!(labels(&rows), vec!["c", "a", "d", "b"]);
    }

    #[test]
    fn test_resort_after_row_set_changes() {
        let data = sample();
        let mut grid = SortableGrid::new(columns());
        grid.select_column("value");
        grid.select_column("value");

        let all = grid.arrange(data.iter().collect());
        assert_eq!(labels(&all), vec!["d", "c", "b", "a"]);

        let subset: Vec<&Row> = data.iter().filter(|r| r.label != "d").collect();
        let rows = grid.arrange(subset);
        assert_eq!(labels(&rows), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_header_label_marks_active_column() {
        let mut grid = SortableGrid::new(columns());
        let chars = BoxChars::unicode();
        assert_eq!(grid.header_label(&grid.columns()[1], &chars), "Value");

        grid.select_column("value");
        assert_eq!(grid.header_label(&grid.columns()[1], &chars), "Value ▲");
        assert_eq!(grid.header_label(&grid.columns()[0], &chars), "Label");

        grid.select_column("value");
        assert_eq!(grid.header_label(&grid.columns()[1], &chars), "Value ▼");
    }

    #[test]
    fn test_sort_key_mixed_types() {
        assert_eq!(
            SortKey::Number(100.0).compare(&SortKey::Text("a".to_string())),
            Ordering::Less
        );
        assert_eq!(
            SortKey::Text("B".to_string()).compare(&SortKey::Text("a".to_string())),
            Ordering::Less
        );
    }

    #[test]
    fn test_column_def_debug() {
        let cols = columns();
        let debug_str = format!("{:?}", cols[0]);
        assert!(debug_str.contains("Label"));
        assert!(debug_str.contains("<function>"));
    }

    #[test]
    fn test_cells_follow_column_order() {
        let grid = SortableGrid::new(columns());
        let row = Row { label: "x", value: 3.0 };
        assert_eq!(
            grid.cells(&row),
            vec![
                CellValue::Text("x".to_string()),
                CellValue::Text("3.0".to_string())
            ]
        );
    }
}
