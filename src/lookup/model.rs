use serde::{Deserialize, Serialize};

/// One row shown by the launcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub title: String,
    pub subtitle: String,
    /// Value handed to the launcher action (copy/paste).
    #[serde(rename = "arg")]
    pub action_value: String,
    /// Text the speak action reads out.
    #[serde(rename = "pronounce")]
    pub pronunciation_key: String,
    #[serde(rename = "quicklookurl")]
    pub detail_link: String,
}

/// Script-filter envelope printed on stdout.
#[derive(Debug, Serialize)]
pub struct LauncherItems<'a> {
    pub items: &'a [LookupResult],
}
