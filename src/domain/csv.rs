use super::models::ResultSet;

pub const EXPORT_FILENAME: &str = "query_results.csv";
pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// Header line, then one line per row, joined with `\n`.
///
/// Cells are written with their display form and are not quoted, so values
/// containing commas will spill into extra columns.
#[must_use]
pub fn to_csv(result: &ResultSet) -> String {
    let header = result.columns.join(",");
    let rows = result
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("{header}\n{rows}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::CellValue;

    #[test]
    fn test_simple_export() {
        let result = ResultSet::new(&["a", "b"], vec![vec![CellValue::Int(1), CellValue::Int(2)]]);
        assert_eq!(to_csv(&result), "a,b\n1,2");
    }

    #[test]
    fn test_embedded_commas_are_not_escaped() {
        let result = ResultSet::new(
            &["name", "total"],
            vec![vec![CellValue::from("Rai, Omee"), CellValue::from("$1,500.00")]],
        );
        assert_eq!(to_csv(&result), "name,total\nRai, Omee,$1,500.00");
    }

    #[test]
    fn test_mixed_cells_and_rows() {
        let result = ResultSet::new(
            &["category", "count"],
            vec![
                vec![CellValue::from("Books"), CellValue::Int(120)],
                vec![CellValue::from("Pens"), CellValue::Float(2.5)],
            ],
        );
        assert_eq!(to_csv(&result), "category,count\nBooks,120\nPens,2.5");
    }
}
