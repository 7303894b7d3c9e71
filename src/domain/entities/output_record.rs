use serde::{Deserialize, Serialize};

/// Fixed four-field projection of a result row consumed by the heatmap plot.
///
/// Field order is significant: it is the key order of the serialized JSON object.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    /// Series label, taken from `processor`.
    pub name: String,
    /// Bucket key, taken from `unixtime`.
    pub key: String,
    pub time: String,
    /// Cell intensity, taken from `cumulative_hits`.
    pub value: String,
}
