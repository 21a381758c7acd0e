pub mod client;
pub mod codes;
pub mod errors;
pub mod types;

pub use client::{ProviderClient, TranslateRequest};
pub use codes::{ERROR_MESSAGES, SUCCESS_CODE, error_message};
pub use errors::ProviderError;
pub use types::{TranslatePayload, WebDict};
