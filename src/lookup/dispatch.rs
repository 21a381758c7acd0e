use tracing::{info, instrument, warn};

use crate::dom::parse_html;
use crate::fetcher::PageSource;
use crate::lookup::model::LookupResult;
use crate::lookup::page::extract_from_page;
use crate::lookup::session::{DEFAULT_DETAIL_URL, Session};
use crate::provider::{SUCCESS_CODE, TranslatePayload, error_message};

pub const ERROR_TITLE: &str = "👻 翻译出错啦";
pub const ERROR_ACTION: &str = "Ooops...";

/// Turn a provider payload for `word` into launcher rows.
///
/// Provider errors become a single row. On success the direct translation
/// comes first, followed by whatever the web-dictionary page yields; a page
/// that cannot be fetched only costs those extra rows.
pub async fn parse(
    word: &str,
    payload: &TranslatePayload,
    source: &dyn PageSource,
) -> Vec<LookupResult> {
    parse_with_detail_url(word, payload, source, DEFAULT_DETAIL_URL).await
}

#[instrument(skip(payload, source, detail_url), fields(code = %payload.error_code))]
pub async fn parse_with_detail_url(
    word: &str,
    payload: &TranslatePayload,
    source: &dyn PageSource,
    detail_url: &str,
) -> Vec<LookupResult> {
    let mut session = Session::with_detail_url(word, detail_url);

    if payload.error_code != SUCCESS_CODE {
        let message = error_message(&payload.error_code);
        info!(%message, "provider returned an error");
        session.add_result(ERROR_TITLE, &message, ERROR_ACTION, "", false);
        return session.into_results();
    }

    add_translation(&mut session, payload);

    if let Some(url) = payload.webdict_url() {
        add_webdict(&mut session, url, source).await;
    }

    session.into_results()
}

fn add_translation(session: &mut Session, payload: &TranslatePayload) {
    let Some(translation) = payload.first_translation() else {
        return;
    };
    let word = session.word().to_string();
    let pronounce = if session.is_chinese() {
        translation
    } else {
        word.as_str()
    };
    // No title repair here: the text is decoded JSON, and repair would turn
    // Latin-1 letters ("résumé") into U+FFFD.
    session.add_result(translation, &word, translation, pronounce, false);
}

async fn add_webdict(session: &mut Session, url: &str, source: &dyn PageSource) {
    let body = match source.get(url).await {
        Ok(body) => body,
        Err(err) => {
            warn!(%url, error = %err, "web dictionary fetch failed");
            return;
        }
    };

    let before = session.results().len();
    let document = parse_html(&body);
    extract_from_page(session, document.root());
    info!(%url, rows = session.results().len() - before, "web dictionary parsed");
}
