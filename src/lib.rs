pub mod config;
pub mod dom;
pub mod fetcher;
pub mod lookup;
pub mod provider;
