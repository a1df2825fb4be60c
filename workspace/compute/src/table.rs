use csv::{ReaderBuilder, WriterBuilder};
use tracing::{debug, instrument};

use crate::error::{ComputeError, Result};

/// A CSV document parsed into a header row plus data rows.
///
/// The first record of the input becomes `headers`; every following record
/// becomes one row. Rows always have exactly `headers.len()` cells because
/// ragged input is rejected at parse time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ParsedTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// True when the input had no records at all.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

/// Parses CSV text into a [`ParsedTable`].
///
/// Quoting and embedded delimiters follow standard CSV rules, so a quoted
/// cell may contain commas and newlines. Header cells are trimmed; data
/// cells are kept verbatim. A record whose width differs from the header
/// row fails the whole parse. Empty input yields an empty table rather
/// than an error.
#[instrument(skip(text), fields(bytes = text.len()))]
pub fn parse_csv(text: &str) -> Result<ParsedTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record_result in reader.records() {
        let record = record_result?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    debug!(rows = rows.len(), columns = headers.len(), "parsed CSV table");
    Ok(ParsedTable { headers, rows })
}

/// Serializes a table back to CSV text.
///
/// Cells containing delimiters, quotes or newlines are escaped by the
/// writer, so `parse_csv(&format_csv(t)?)` reproduces `t`.
#[instrument(skip(table), fields(rows = table.rows.len(), columns = table.headers.len()))]
pub fn format_csv(table: &ParsedTable) -> Result<String> {
    if table.is_empty() {
        return Ok(String::new());
    }

    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ComputeError::Encoding(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ComputeError::Encoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_table() {
        let table = parse_csv("product,category,stock\nGreen Tea,Beverage,150\nMug,Kitchenware,40\n")
            .unwrap();
        assert_eq!(table.headers, vec!["product", "category", "stock"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0], vec!["Green Tea", "Beverage", "150"]);
        assert_eq!(table.rows[1], vec!["Mug", "Kitchenware", "40"]);
    }

    #[test]
    fn test_every_row_matches_header_width() {
        let table = parse_csv("a,b,c\n1,2,3\n4,5,6\n7,8,9\n").unwrap();
        assert_eq!(table.column_count(), 3);
        for row in &table.rows {
            assert_eq!(row.len(), table.column_count());
        }
    }

    #[test]
    fn test_ragged_row_is_rejected() {
        let result = parse_csv("a,b,c\n1,2\n");
        assert!(matches!(result, Err(ComputeError::Csv(_))));

        let result = parse_csv("a,b\n1,2,3\n");
        assert!(matches!(result, Err(ComputeError::Csv(_))));
    }

    #[test]
    fn test_empty_input_yields_empty_table() {
        let table = parse_csv("").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_header_only_input_yields_zero_rows() {
        let table = parse_csv("sku,price\n").unwrap();
        assert_eq!(table.headers, vec!["sku", "price"]);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_quoted_cells_keep_embedded_delimiters() {
        let table = parse_csv("name,notes\n\"Almond Butter\",\"creamy, unsalted\"\n").unwrap();
        assert_eq!(table.rows[0], vec!["Almond Butter", "creamy, unsalted"]);
    }

    #[test]
    fn test_headers_are_trimmed() {
        let table = parse_csv(" product , stock \nTea,10\n").unwrap();
        assert_eq!(table.headers, vec!["product", "stock"]);
    }

    #[test]
    fn test_round_trip_preserves_escaped_cells() {
        let original = parse_csv(
            "name,notes\n\"quoted \"\"value\"\"\",\"line\none\"\n\"a,b\",plain\n",
        )
        .unwrap();
        let formatted = format_csv(&original).unwrap();
        let reparsed = parse_csv(&formatted).unwrap();
        assert_eq!(reparsed, original);
    }
}
