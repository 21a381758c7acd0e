pub mod dispatch;
pub mod model;
pub mod page;
pub mod repair;
pub mod script;
pub mod session;

#[cfg(test)]
mod tests;

pub use dispatch::{parse, parse_with_detail_url};
pub use model::{LauncherItems, LookupResult};
pub use page::extract_from_page;
pub use repair::repair_encoding;
pub use script::is_chinese_script;
pub use session::Session;
