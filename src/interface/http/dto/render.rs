use serde::Deserialize;

/// Query string of the module render endpoint.
///
/// Values stay as text: pagination is coerced by the use case so that bad input is
/// reported the same way whatever transport carried it.
#[derive(Debug, Default, Deserialize)]
pub struct RenderQuery {
    pub client_app: Option<String>,
    pub sid: Option<String>,
    pub count: Option<String>,
    pub offset: Option<String>,
    pub entity_name: Option<String>,
}
