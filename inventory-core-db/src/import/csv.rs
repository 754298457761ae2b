use csv::{ReaderBuilder, WriterBuilder};
use inventory_core_api::{ApiError, ApiResult, AssetDraft, RecordSchema};

use crate::models::asset::AssetRecord;

/// Parse a CSV document into drafts keyed by attribute name.
///
/// The first row is the header; cells are matched against schema labels and
/// unknown columns are ignored. Rows shorter than the header read as empty
/// cells, fully empty rows are dropped, and unparseable lines become empty
/// drafts so the reconciler counts them as invalid instead of losing them.
pub fn parse_rows(schema: &RecordSchema, csv_text: &str) -> ApiResult<Vec<AssetDraft>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ApiError::ValidationError(format!("unreadable CSV header: {e}")))?
        .clone();
    let columns: Vec<Option<String>> = headers
        .iter()
        .map(|header| {
            schema
                .field_by_label(header.trim())
                .map(|field| field.name.clone())
        })
        .collect();
    if !columns.iter().any(Option::is_some) {
        return Err(ApiError::ValidationError(
            "CSV header matches no schema column".to_string(),
        ));
    }

    let mut drafts = Vec::new();
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(_) => {
                drafts.push(AssetDraft::new());
                continue;
            }
        };
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let mut draft = AssetDraft::new();
        for (index, column) in columns.iter().enumerate() {
            if let Some(name) = column {
                draft = draft.set(name.clone(), record.get(index).unwrap_or(""));
            }
        }
        drafts.push(draft);
    }
    Ok(drafts)
}

/// Downloadable template: just the header row.
pub fn template(schema: &RecordSchema) -> ApiResult<String> {
    write_rows(schema, &[])
}

/// Export the given (already derived/filtered) records, in schema field
/// order, with RFC 4180 quoting.
pub fn export(schema: &RecordSchema, records: &[&AssetRecord]) -> ApiResult<String> {
    write_rows(schema, records)
}

fn write_rows(schema: &RecordSchema, records: &[&AssetRecord]) -> ApiResult<String> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer
        .write_record(schema.csv_headers())
        .map_err(|e| ApiError::InternalError(format!("CSV write failed: {e}")))?;
    for record in records {
        let row: Vec<String> = schema
            .fields()
            .iter()
            .map(|field| record.field_str(&field.name))
            .collect();
        writer
            .write_record(&row)
            .map_err(|e| ApiError::InternalError(format!("CSV write failed: {e}")))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ApiError::InternalError(format!("CSV write failed: {e}")))?;
    String::from_utf8(bytes).map_err(|e| ApiError::InternalError(format!("CSV write failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> RecordSchema {
        RecordSchema::parts_inventory()
    }

    #[test]
    fn parses_header_mapped_rows() {
        let text = "Part Number,Category,Description,Quantity,Price,Retail\n\
                    PN-1,Bolts,Hex bolt,10,1.25,2.50\n\
                    PN-2,Nuts,Wing nut,4,0.75,1.50\n";
        let rows = parse_rows(&schema(), text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("partNumber"), Some("PN-1"));
        assert_eq!(rows[1].get("description"), Some("Wing nut"));
    }

    #[test]
    fn header_order_does_not_matter_and_unknown_columns_are_ignored() {
        let text = "Category,Part Number,Internal Code\nBolts,PN-1,XYZ\n";
        let rows = parse_rows(&schema(), text).unwrap();
        assert_eq!(rows[0].get("partNumber"), Some("PN-1"));
        assert_eq!(rows[0].get("category"), Some("Bolts"));
        assert_eq!(rows[0].get("internalCode"), None);
    }

    #[test]
    fn short_rows_read_as_empty_cells() {
        let text = "Part Number,Category,Description,Quantity,Price,Retail\nPN-1,Bolts\n";
        let rows = parse_rows(&schema(), text).unwrap();
        assert_eq!(rows[0].get("partNumber"), Some("PN-1"));
        assert_eq!(rows[0].get("description"), Some(""));
    }

    #[test]
    fn fully_empty_rows_are_dropped() {
        let text = "Part Number,Category,Description,Quantity,Price,Retail\n,,,,,\n";
        let rows = parse_rows(&schema(), text).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn quoted_cells_keep_embedded_commas() {
        let text = "Part Number,Category,Description,Quantity,Price,Retail\n\
                    PN-1,Bolts,\"Hex bolt, zinc\",10,1.25,2.50\n";
        let rows = parse_rows(&schema(), text).unwrap();
        assert_eq!(rows[0].get("description"), Some("Hex bolt, zinc"));
    }

    #[test]
    fn unusable_header_is_a_validation_error() {
        let err = parse_rows(&schema(), "a,b,c\n1,2,3\n").unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));
    }

    #[test]
    fn template_is_the_header_row() {
        let text = template(&schema()).unwrap();
        assert_eq!(
            text.trim_end(),
            "Part Number,Category,Description,Quantity,Price,Retail"
        );
    }

    #[test]
    fn export_round_trips_through_parse() {
        let draft = AssetDraft::new()
            .set("partNumber", "PN-1")
            .set("category", "Bolts")
            .set("description", "Hex bolt, zinc")
            .set("quantity", "10")
            .set("price", "1.25")
            .set("retail", "2.50");
        let record = AssetRecord::from_draft(&schema(), &draft).unwrap();
        let text = export(&schema(), &[&record]).unwrap();
        let rows = parse_rows(&schema(), &text).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("description"), Some("Hex bolt, zinc"));
    }
}
