use crate::application::shared::json_render::to_classic_json;
use serde::Serialize;

/// Envelope used by view modules that report paging alongside their data.
#[derive(Debug, Clone, Serialize)]
pub struct JsonResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    pub data: T,
}

impl<T> JsonResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            offset: None,
            count: None,
            total: None,
            data,
        }
    }

    pub fn with_window(mut self, offset: usize, count: usize, total: u64) -> Self {
        self.offset = Some(offset);
        self.count = Some(count);
        self.total = Some(total);
        self
    }
}

impl<T: Serialize> JsonResponse<T> {
    /// The wrapper's own encoding.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        to_classic_json(self)
    }
}
