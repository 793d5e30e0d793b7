//! Static HTML table extraction
//!
//! Every `<table>` in a document becomes a grid of cell strings. Nested
//! tables are extracted on their own and their rows are not repeated in the
//! enclosing table's grid.

use scraper::{ElementRef, Html, Selector};

/// Cell text of one HTML table, row by row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTable {
    /// Element id of the table, if any
    pub id: Option<String>,

    /// Rows of whitespace-collapsed cell text
    pub rows: Vec<Vec<String>>,
}

impl ParsedTable {
    /// Serializes the table to one lowercase blob: a line per row, cells
    /// separated by single spaces
    pub fn text_blob(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
            .to_lowercase()
    }

    /// Returns true if any keyword occurs as a substring of the text blob
    ///
    /// Keywords are expected to be lowercase already.
    pub fn contains_any(&self, keywords: &[String]) -> bool {
        let blob = self.text_blob();
        keywords.iter().any(|keyword| blob.contains(keyword.as_str()))
    }

    fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

/// Extracts every table that has at least one cell
///
/// Finding no table is not an error; the result is simply empty.
pub fn extract_tables(document: &Html) -> Vec<ParsedTable> {
    let (Ok(table_selector), Ok(row_selector)) = (Selector::parse("table"), Selector::parse("tr"))
    else {
        return Vec::new();
    };

    document
        .select(&table_selector)
        .map(|table| parse_table(table, &row_selector))
        .filter(|table| table.cell_count() > 0)
        .collect()
}

fn parse_table(table: ElementRef<'_>, row_selector: &Selector) -> ParsedTable {
    let rows = table
        .select(row_selector)
        .filter(|row| owning_table(*row) == Some(table))
        .map(parse_row)
        .filter(|cells| !cells.is_empty())
        .collect();

    ParsedTable {
        id: table.value().id().map(str::to_string),
        rows,
    }
}

/// Nearest `<table>` ancestor of a row
fn owning_table(row: ElementRef<'_>) -> Option<ElementRef<'_>> {
    row.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "table")
}

fn parse_row(row: ElementRef<'_>) -> Vec<String> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| matches!(cell.value().name(), "td" | "th"))
        .map(cell_text)
        .collect()
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
