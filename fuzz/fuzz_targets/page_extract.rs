#![no_main]

use libfuzzer_sys::fuzz_target;

use ydlookup::dom::parse_html;
use ydlookup::lookup::{Session, extract_from_page, repair::latin1_view};

fuzz_target!(|data: &[u8]| {
    // Same view of the bytes the HTTP page source hands over.
    let html = latin1_view(data);
    let document = parse_html(&html);

    let mut session = Session::new("fuzz");
    extract_from_page(&mut session, document.root());

    for row in session.results() {
        assert!(row.title.chars().count() <= 60);
    }
});
