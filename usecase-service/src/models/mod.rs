use serde::{Deserialize, Serialize};

/// A use-case lookup submitted by the UI.
///
/// Every field is optional: the form may be partially filled, and absent
/// fields fall through to the not-found sentinel rather than erroring.
#[derive(Debug, Default, Deserialize)]
pub struct LookupRequest {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default, rename = "businessFunction")]
    pub business_function: Option<String>,
}

/// Use cases (plus any trailing country insights) for one lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResponse {
    pub usecases: Vec<String>,
}
