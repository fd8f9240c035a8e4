pub mod players;
pub mod teams;
pub mod transactions;

use anyhow::{bail, Result};

use crate::table::SortState;

/// Parse the `--sort` column and `--desc` flag into a sort state
///
/// Column ids match the roster grid: name, team, stars, pts, reb, ast.
pub fn parse_sort(column: Option<String>, descending: bool) -> Result<Option<SortState>> {
    let Some(column) = column else {
        if descending {
            bail!("--desc requires --sort");
        }
        return Ok(None);
    };
    let column_id = column.to_lowercase();
    if !crate::roster::player_columns()
        .iter()
        .any(|c| c.id == column_id)
    {
        bail!(
            "Unknown sort column '{}'. Use one of: name, team, stars, pts, reb, ast",
            column
        );
    }
    Ok(Some(SortState {
        column_id,
        descending,
    }))
}
