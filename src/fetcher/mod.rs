pub mod client;
pub mod errors;
pub mod source;
pub mod types;

pub use client::{fetch, get_client};
pub use errors::FetchError;
#[cfg(test)]
pub use source::MockPageSource;
pub use source::{HttpPageSource, PageSource};
pub use types::PageResponse;
