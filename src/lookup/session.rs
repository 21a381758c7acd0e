use crate::lookup::model::LookupResult;
use crate::lookup::repair::repair_encoding;
use crate::lookup::script::is_chinese_script;

pub const DEFAULT_DETAIL_URL: &str = "https://www.youdao.com/w/";

/// Title limits in chars; wider glyphs get fewer.
pub const CJK_TITLE_CAP: usize = 24;
pub const LATIN_TITLE_CAP: usize = 60;

/// State of a single lookup: the word, its script and the rows found so far.
#[derive(Debug, Clone)]
pub struct Session {
    word: String,
    is_chinese: bool,
    detail_link: String,
    results: Vec<LookupResult>,
}

impl Session {
    pub fn new(word: impl Into<String>) -> Self {
        Self::with_detail_url(word, DEFAULT_DETAIL_URL)
    }

    pub fn with_detail_url(word: impl Into<String>, detail_url: &str) -> Self {
        let word = word.into();
        Self {
            is_chinese: is_chinese_script(&word),
            detail_link: format!("{detail_url}{word}"),
            word,
            results: Vec::new(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn is_chinese(&self) -> bool {
        self.is_chinese
    }

    pub fn detail_link(&self) -> &str {
        &self.detail_link
    }

    pub fn results(&self) -> &[LookupResult] {
        &self.results
    }

    pub fn into_results(self) -> Vec<LookupResult> {
        self.results
    }

    /// Append a row with empty action and pronunciation, repairing the title.
    pub fn add(&mut self, title: &str, subtitle: &str) -> &[LookupResult] {
        self.add_result(title, subtitle, "", "", true)
    }

    /// Append a row and return every row so far.
    ///
    /// The title is capped by its own script (not the query's). Overflow
    /// becomes the subtitle, replacing the one passed in.
    pub fn add_result(
        &mut self,
        title: &str,
        subtitle: &str,
        action_value: &str,
        pronunciation_key: &str,
        repair_title: bool,
    ) -> &[LookupResult] {
        let title = if repair_title {
            repair_encoding(title)
        } else {
            title.to_string()
        };

        let cap = title_cap(&title);
        let split = title.char_indices().nth(cap).map(|(at, _)| at);
        let (title, subtitle) = match split {
            Some(at) => (title[..at].to_string(), title[at..].to_string()),
            None => (title, subtitle.to_string()),
        };

        self.results.push(LookupResult {
            title,
            subtitle,
            action_value: action_value.to_string(),
            pronunciation_key: pronunciation_key.to_string(),
            detail_link: self.detail_link.clone(),
        });
        &self.results
    }
}

pub fn title_cap(title: &str) -> usize {
    if is_chinese_script(title) {
        CJK_TITLE_CAP
    } else {
        LATIN_TITLE_CAP
    }
}


#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_title_never_exceeds_cap(title in "\\PC{0,120}", subtitle in "\\PC{0,10}") {
            let mut session = Session::new("w");
            session.add_result(&title, &subtitle, "", "", false);
            let row = &session.results()[0];
            prop_assert!(row.title.chars().count() <= title_cap(&title));
            prop_assert_eq!(format!("{}{}", row.title, row.subtitle).starts_with(&title), true);
        }
    }
}
