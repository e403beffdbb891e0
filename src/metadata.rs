use std::collections::HashMap;

use scraper::{Html, Selector};

/// Prefix marking a `<meta>` tag as an essay metadata declaration.
pub(crate) const META_PREFIX: &str = "essay-";

/// Collect `<meta name="essay-*" content="...">` fields from an HTML document.
///
/// Field names are stored with the prefix stripped; a missing `content`
/// attribute becomes an empty string. When the same field appears more than
/// once, the last declaration wins. html5ever's error recovery keeps
/// malformed markup elsewhere in the document from aborting the scan.
pub(crate) fn extract_meta(html: &str) -> HashMap<String, String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("meta[name]").unwrap();

    let mut meta = HashMap::new();
    for element in document.select(&selector) {
        let name = element.value().attr("name").unwrap_or_default();
        if let Some(field) = name.strip_prefix(META_PREFIX) {
            let content = element.value().attr("content").unwrap_or_default();
            meta.insert(field.to_string(), content.to_string());
        }
    }

    meta
}
