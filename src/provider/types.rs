use serde::{Deserialize, Serialize};

/// The parts of the translation API response this crate reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatePayload {
    pub error_code: String,
    #[serde(default)]
    pub translation: Option<Vec<String>>,
    #[serde(default)]
    pub webdict: Option<WebDict>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebDict {
    #[serde(default)]
    pub url: Option<String>,
}

impl TranslatePayload {
    pub fn first_translation(&self) -> Option<&str> {
        self.translation.as_ref()?.first().map(String::as_str)
    }

    pub fn webdict_url(&self) -> Option<&str> {
        self.webdict.as_ref()?.url.as_deref()
    }
}
