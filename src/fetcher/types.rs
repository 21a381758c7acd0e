use bytes::Bytes;
use reqwest::StatusCode;
use url::Url;

use crate::lookup::repair::latin1_view;

#[derive(Debug)]
pub struct PageResponse {
    pub url_final: Url,
    pub status: StatusCode,
    pub content_type: String,
    pub body: Bytes,
}

impl PageResponse {
    /// Body with one char per byte, whatever the page charset.
    ///
    /// Extracted titles are repaired back to UTF-8 when rows are built, so
    /// the page is never decoded twice.
    pub fn transport_text(&self) -> String {
        latin1_view(&self.body)
    }
}
