use async_trait::async_trait;
use std::fs;

use crate::dom::parse_html;
use crate::fetcher::{FetchError, PageSource};
use crate::lookup::page::{PRONOUNCE_PROMPT, extract_from_page};
use crate::lookup::repair::latin1_view;
use crate::lookup::{Session, parse};
use crate::provider::TranslatePayload;

const FIXTURE: &str = "src/lookup/tests/fixtures/webdict.html";

/// Serves the fixture the way the HTTP source would: one char per byte.
struct FixtureSource;

#[async_trait]
impl PageSource for FixtureSource {
    async fn get(&self, _url: &str) -> Result<String, FetchError> {
        let bytes = fs::read(FIXTURE).map_err(|e| FetchError::Io(e.to_string()))?;
        Ok(latin1_view(&bytes))
    }
}

fn expected_titles() -> Vec<&'static str> {
    vec![
        "英 [test]; 美 [tɛst]",
        "n. 测试；试验；化验；检验",
        "vt. 试验；测试；接受测验",
        "n. 用于检验在线词典页面解析结果的一条特别冗长",
        "测验",
        "考验",
        "测验",
    ]
}

#[test]
fn test_extract_fixture_from_transport_text() {
    let bytes = fs::read(FIXTURE).expect("Failed to read test fixture");
    let document = parse_html(&latin1_view(&bytes));

    let mut session = Session::new("test");
    extract_from_page(&mut session, document.root());

    let rows = session.results();
    let titles: Vec<_> = rows.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, expected_titles());

    assert_eq!(rows[0].subtitle, PRONOUNCE_PROMPT);
    assert_eq!(rows[1].subtitle, "test");
    // Long definition overflows into the subtitle.
    assert_eq!(rows[3].title.chars().count(), 24);
    assert_eq!(rows[3].subtitle, "的中文释义示例文本");
    assert!(rows.iter().all(|r| r.action_value == "test"));
    assert!(rows.iter().all(|r| r.pronunciation_key == "test"));
}

#[test]
fn test_extract_fixture_from_decoded_text() {
    // Already-decoded Han text is left alone by the title repair.
    let html = fs::read_to_string(FIXTURE).expect("Failed to read test fixture");
    let document = parse_html(&html);

    let mut session = Session::new("test");
    extract_from_page(&mut session, document.root());

    let titles: Vec<_> = session.results().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, expected_titles());
}

#[test]
fn test_collapsed_panel_is_skipped() {
    let html = fs::read_to_string(FIXTURE).expect("Failed to read test fixture");
    let document = parse_html(&html);

    let mut session = Session::new("test");
    extract_from_page(&mut session, document.root());

    assert!(
        session
            .results()
            .iter()
            .all(|r| !r.title.contains("hidden") && !r.title.contains("collapsed"))
    );
}

#[test]
fn test_character_references_in_transport_text() {
    let html = concat!(
        r#"<div class="content-wrp dict-container opened"><ul>"#,
        "<li>n. 测试&#x8BD5;验</li>",
        "<li>&#27979;验</li>",
        "<li>a &amp; 测试</li>",
        "<li>n.&nbsp;测试</li>",
        "</ul></div>"
    );
    let document = parse_html(&latin1_view(html.as_bytes()));

    let mut session = Session::new("test");
    extract_from_page(&mut session, document.root());

    let titles: Vec<_> = session.results().iter().map(|r| r.title.as_str()).collect();
    // A resolved &nbsp; is the same char as a stray 0xA0 byte.
    assert_eq!(
        titles,
        vec!["n. 测试试验", "测验", "a & 测试", "n.\u{fffd}测试"]
    );
}

#[tokio::test]
async fn test_parse_merges_translation_and_page() {
    let payload: TranslatePayload = serde_json::from_str(
        r#"{
            "errorCode": "0",
            "translation": ["测试"],
            "webdict": {"url": "http://mobile.youdao.com/dict?le=eng&q=test"}
        }"#,
    )
    .unwrap();

    let rows = parse("test", &payload, &FixtureSource).await;

    let mut expected = vec!["测试"];
    expected.extend(expected_titles());
    let titles: Vec<_> = rows.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, expected);
    assert!(
        rows.iter()
            .all(|r| r.detail_link == "https://www.youdao.com/w/test")
    );
}

#[tokio::test]
async fn test_parse_with_unparseable_page_keeps_translation() {
    struct GarbageSource;

    #[async_trait]
    impl PageSource for GarbageSource {
        async fn get(&self, _url: &str) -> Result<String, FetchError> {
            Ok("\u{0}<<<>>>not html at all".to_string())
        }
    }

    let payload: TranslatePayload = serde_json::from_str(
        r#"{"errorCode":"0","translation":["测试"],"webdict":{"url":"http://x"}}"#,
    )
    .unwrap();

    let rows = parse("test", &payload, &GarbageSource).await;
    assert_eq!(rows.len(), 1);
}
