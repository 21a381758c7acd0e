use anyhow::Result;
use async_trait::async_trait;
use ydlookup::{
    fetcher::{FetchError, PageSource},
    lookup::{LauncherItems, parse, repair::latin1_view},
    provider::TranslatePayload,
};

/// Serves a saved web-dictionary page instead of going to the network.
struct SavedPage(&'static str);

#[async_trait]
impl PageSource for SavedPage {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        tracing::info!(%url, file = self.0, "serving saved page");
        let bytes = std::fs::read(self.0).map_err(|e| FetchError::Io(e.to_string()))?;
        Ok(latin1_view(&bytes))
    }
}

/// Runs a lookup for "test" against the bundled page fixture and prints the
/// launcher JSON.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let payload: TranslatePayload = serde_json::from_str(
        r#"{
            "errorCode": "0",
            "translation": ["测试"],
            "webdict": {"url": "http://mobile.youdao.com/dict?le=eng&q=test"}
        }"#,
    )?;

    let source = SavedPage("src/lookup/tests/fixtures/webdict.html");
    let results = parse("test", &payload, &source).await;

    println!(
        "{}",
        serde_json::to_string_pretty(&LauncherItems { items: &results })?
    );
    Ok(())
}
