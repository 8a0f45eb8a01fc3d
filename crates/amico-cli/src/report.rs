//! Human-readable tables for a comparison.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use amico_catalog::Record;

use crate::commands::{Comparison, MatchedPair};

/// Banner shown at start-up.
pub const LOGO: &str = r"                    _
   ____ _____ ___  (_)________
  / __ `/ __ `__ \/ / ___/ __ \
 / /_/ / / / / / / / /__/ /_/ /
 \__,_/_/ /_/ /_/_/\___/\____/";

const ID_HEADER: &str = "dataset number";
const LABEL_HEADER: &str = "short description";

/// One row of a dataset listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetRow<'a> {
    pub ldn: &'a str,
    pub physics_short: &'a str,
}

impl<'a> From<&'a Record> for DatasetRow<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            ldn: &record.ldn,
            physics_short: &record.physics_short,
        }
    }
}

/// One row of the match listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRow<'a> {
    pub first_ldn: &'a str,
    pub first_physics_short: &'a str,
    pub second_ldn: &'a str,
    pub second_physics_short: &'a str,
    pub score: f64,
}

impl<'a> From<&'a MatchedPair> for MatchRow<'a> {
    fn from(pair: &'a MatchedPair) -> Self {
        Self {
            first_ldn: &pair.first.ldn,
            first_physics_short: &pair.first.physics_short,
            second_ldn: &pair.second.ldn,
            second_physics_short: &pair.second.physics_short,
            score: pair.score,
        }
    }
}

pub fn dataset_rows(records: &[Record]) -> Vec<DatasetRow<'_>> {
    records.iter().map(DatasetRow::from).collect()
}

pub fn match_rows(matches: &[MatchedPair]) -> Vec<MatchRow<'_>> {
    matches.iter().map(MatchRow::from).collect()
}

pub fn datasets_table(records: &[Record]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(ID_HEADER), header_cell(LABEL_HEADER)]);
    apply_table_style(&mut table);
    for row in dataset_rows(records) {
        table.add_row(vec![Cell::new(row.ldn), label_cell(row.physics_short)]);
    }
    table
}

/// Match listing, or `None` when there is nothing to show.
pub fn matches_table(matches: &[MatchedPair]) -> Option<Table> {
    if matches.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(ID_HEADER),
        header_cell(LABEL_HEADER),
        header_cell(ID_HEADER),
        header_cell(LABEL_HEADER),
        header_cell("match (%)"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    for row in match_rows(matches) {
        table.add_row(vec![
            Cell::new(row.first_ldn),
            label_cell(row.first_physics_short),
            Cell::new(row.second_ldn),
            label_cell(row.second_physics_short),
            Cell::new(format!("{:.1}", row.score)),
        ]);
    }
    Some(table)
}

/// Both dataset listings followed by the matches (or "no matches").
pub fn render_comparison(comparison: &Comparison) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "datasets of pattern {}:\n{}\n\n",
        comparison.first_pattern,
        datasets_table(&comparison.first)
    ));
    out.push_str(&format!(
        "datasets of pattern {}:\n{}\n\n",
        comparison.second_pattern,
        datasets_table(&comparison.second)
    ));
    out.push_str(&format!(
        "datasets matched with {}% match parameter:\n",
        comparison.threshold
    ));
    match matches_table(&comparison.matches) {
        Some(table) => out.push_str(&format!("{table}\n")),
        None => out.push_str("no matches\n"),
    }
    out
}

pub fn print_comparison(comparison: &Comparison) {
    print!("{}", render_comparison(comparison));
}

pub(crate) fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

pub(crate) fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub(crate) fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    if label.is_empty() {
        Cell::new("-").fg(Color::DarkGrey)
    } else {
        Cell::new(label)
    }
}
