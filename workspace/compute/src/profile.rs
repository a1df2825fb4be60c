use common::{ColumnProfile, TableProfile};
use tracing::{debug, instrument};

use crate::table::ParsedTable;

/// Summarizes a parsed table column by column.
///
/// Counts non-empty cells per column and, for cells that parse as numbers,
/// tracks min, max and mean. Columns with no numeric cells report `None`
/// for all three statistics.
#[instrument(skip(table), fields(rows = table.rows.len(), columns = table.headers.len()))]
pub fn profile_table(table: &ParsedTable) -> TableProfile {
    let columns = table
        .headers
        .iter()
        .enumerate()
        .map(|(index, header)| profile_column(table, index, header))
        .collect();

    debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        "profiled table"
    );
    TableProfile {
        row_count: table.row_count() as u64,
        column_count: table.column_count() as u64,
        columns,
    }
}

fn profile_column(table: &ParsedTable, index: usize, header: &str) -> ColumnProfile {
    let mut non_empty = 0u64;
    let mut numeric = 0u64;
    let mut sum = 0.0f64;
    let mut min: Option<f64> = None;
    let mut max: Option<f64> = None;

    for row in &table.rows {
        let cell = row.get(index).map(String::as_str).unwrap_or("").trim();
        if cell.is_empty() {
            continue;
        }
        non_empty += 1;

        if let Ok(value) = cell.parse::<f64>() {
            numeric += 1;
            sum += value;
            min = Some(min.map_or(value, |m| m.min(value)));
            max = Some(max.map_or(value, |m| m.max(value)));
        }
    }

    let mean = (numeric > 0).then(|| sum / numeric as f64);
    ColumnProfile {
        name: header.to_string(),
        non_empty,
        numeric,
        min,
        max,
        mean,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::parse_csv;

    #[test]
    fn test_profiles_numeric_and_text_columns() {
        let table = parse_csv("product,stock\nGreen Tea,150\nBread,80\nMug,40\n").unwrap();
        let profile = profile_table(&table);

        assert_eq!(profile.row_count, 3);
        assert_eq!(profile.column_count, 2);

        let product = &profile.columns[0];
        assert_eq!(product.name, "product");
        assert_eq!(product.non_empty, 3);
        assert_eq!(product.numeric, 0);
        assert_eq!(product.min, None);
        assert_eq!(product.mean, None);

        let stock = &profile.columns[1];
        assert_eq!(stock.name, "stock");
        assert_eq!(stock.numeric, 3);
        assert_eq!(stock.min, Some(40.0));
        assert_eq!(stock.max, Some(150.0));
        assert_eq!(stock.mean, Some(90.0));
    }

    #[test]
    fn test_blank_cells_are_not_counted() {
        let table = parse_csv("sku,price\nA,1.5\nB,\nC,  \n").unwrap();
        let profile = profile_table(&table);

        let price = &profile.columns[1];
        assert_eq!(price.non_empty, 1);
        assert_eq!(price.numeric, 1);
        assert_eq!(price.mean, Some(1.5));
    }

    #[test]
    fn test_empty_table_profiles_to_zero() {
        let table = parse_csv("").unwrap();
        let profile = profile_table(&table);
        assert_eq!(profile.row_count, 0);
        assert_eq!(profile.column_count, 0);
        assert!(profile.columns.is_empty());
    }
}
