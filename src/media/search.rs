use std::sync::OnceLock;

use regex::Regex;

use crate::core::models::Language;
use crate::media::images::ImageFetcher;

// <img ... src="..."> attribute values, double or single quoted
fn img_src_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"<img[^>]+src=["']([^"']+)["']"#).unwrap())
}

/// Scrapes candidate image sources for a keyword from the language-local
/// image-search results page. Single attempt; any failure degrades to an
/// empty candidate list. The first hit is always the provider's own logo
/// and is dropped.
pub fn search_image_urls(keyword: &str, language: Language, fetcher: &dyn ImageFetcher) -> Vec<String> {
    let url = format!(
        "https://www.google.{}/search?q={}&tbm=isch",
        language.search_domain(),
        keyword.replace(' ', "+")
    );

    let html = match fetcher.fetch(&url) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            eprintln!("[images] search failed for '{}': {}", keyword, e);
            return Vec::new();
        }
    };

    let mut urls: Vec<String> =
        img_src_re().captures_iter(&html).map(|captures| captures[1].to_string()).collect();
    if !urls.is_empty() {
        urls.remove(0);
    }
    urls
}
