// Row → OutputRecord projection for the heatmap view.

use crate::domain::entities::output_record::OutputRecord;
use crate::domain::entities::row::Row;
use tracing::trace;

pub const NAME_FIELD: &str = "processor";
pub const KEY_FIELD: &str = "unixtime";
pub const TIME_FIELD: &str = "time";
pub const VALUE_FIELD: &str = "cumulative_hits";

/// String form of `field` in `row`, or `"None"` when the row lacks it.
pub fn string_or_none(row: &Row, field: &str) -> String {
    match row.get(field) {
        Some(value) => value.to_string(),
        None => "None".to_string(),
    }
}

/// Project every row to an [`OutputRecord`], preserving order one-to-one.
pub fn parse_dataset(rows: &[Row]) -> Vec<OutputRecord> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            for (field, value) in row.iter() {
                trace!(row = index, field, value = %value, "result field");
            }

            let record = OutputRecord {
                name: string_or_none(row, NAME_FIELD),
                key: string_or_none(row, KEY_FIELD),
                time: string_or_none(row, TIME_FIELD),
                value: string_or_none(row, VALUE_FIELD),
            };
            trace!(
                row = index,
                processor = %record.name,
                time = %record.time,
                cumulative_hits = %record.value,
                "projected row"
            );
            record
        })
        .collect()
}
