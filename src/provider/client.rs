use rand::Rng;
use reqwest::header::ACCEPT;
use tracing::{debug, instrument};
use url::Url;

use crate::config::Config;
use crate::fetcher::get_client;
use crate::lookup::script::is_chinese_script;
use crate::provider::{errors::ProviderError, types::TranslatePayload};

/// One signed translation query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateRequest {
    pub word: String,
    pub from: &'static str,
    pub to: &'static str,
    pub app_key: String,
    pub salt: String,
    pub sign: String,
}

impl TranslateRequest {
    pub fn new(word: &str, app_key: &str, app_secret: &str) -> Self {
        let salt = rand::thread_rng().gen_range(0..10_000).to_string();
        Self::with_salt(word, app_key, app_secret, &salt)
    }

    /// Chinese queries go to English, anything else to Chinese.
    pub fn with_salt(word: &str, app_key: &str, app_secret: &str, salt: &str) -> Self {
        let (from, to) = if is_chinese_script(word) {
            ("zh-CHS", "en")
        } else {
            ("auto", "zh-CHS")
        };
        let sign = format!(
            "{:x}",
            md5::compute(format!("{app_key}{word}{salt}{app_secret}"))
        );

        Self {
            word: word.to_string(),
            from,
            to,
            app_key: app_key.to_string(),
            salt: salt.to_string(),
            sign,
        }
    }

    pub fn query_pairs(&self) -> [(&str, &str); 6] {
        [
            ("q", self.word.as_str()),
            ("from", self.from),
            ("to", self.to),
            ("appKey", self.app_key.as_str()),
            ("salt", self.salt.as_str()),
            ("sign", self.sign.as_str()),
        ]
    }

    pub fn url(&self, api_url: &Url) -> Url {
        let mut url = api_url.clone();
        url.query_pairs_mut().extend_pairs(self.query_pairs());
        url
    }
}

#[derive(Debug, Clone)]
pub struct ProviderClient {
    api_url: Url,
    app_key: String,
    app_secret: String,
}

impl ProviderClient {
    pub fn new(api_url: &str, app_key: &str, app_secret: &str) -> Result<Self, ProviderError> {
        Ok(Self {
            api_url: Url::parse(api_url)?,
            app_key: app_key.to_string(),
            app_secret: app_secret.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        Self::new(config.api_url(), config.app_key(), config.app_secret())
    }

    #[instrument(skip(self))]
    pub async fn translate(&self, word: &str) -> Result<TranslatePayload, ProviderError> {
        let request = TranslateRequest::new(word, &self.app_key, &self.app_secret);
        debug!(from = request.from, to = request.to, "sending translation request");

        let response = get_client()
            .get(request.url(&self.api_url))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(ProviderError::from_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Http(status));
        }

        let payload: TranslatePayload = response
            .json()
            .await
            .map_err(ProviderError::from_reqwest_error)?;
        debug!(code = %payload.error_code, "translation response");
        Ok(payload)
    }
}
