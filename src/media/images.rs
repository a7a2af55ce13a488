use rayon::iter::{
    IntoParallelRefIterator,
    ParallelIterator,
};
use reqwest::blocking::Client;

use crate::core::{
    http,
    session::Session,
    AnkigenError,
};

/// External image-source boundary, kept narrow so tests can substitute
/// fixture bytes for network fetches.
pub trait ImageFetcher: Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, AnkigenError>;
}

pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    pub fn new() -> Result<Self, AnkigenError> {
        Ok(HttpImageFetcher { client: http::http_client()? })
    }
}

impl ImageFetcher for HttpImageFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, AnkigenError> {
        http::fetch_bytes(&self.client, url)
    }
}

pub fn image_name(index: u32, ordinal: usize) -> String {
    format!("image{}_{}.png", index, ordinal)
}

/// Resolves the session's pending image selection into persisted image
/// assets for the in-progress item. Fetches run in parallel but slot order
/// stays the user's selection order. A source that fails to fetch, decode or
/// persist is dropped; the item degrades to fewer images.
pub fn resolve_images(session: &mut Session, fetcher: &dyn ImageFetcher) -> Vec<String> {
    let sources: Vec<String> = session.pending_images().to_vec();
    if sources.is_empty() {
        return Vec::new();
    }

    let index = session.next_index();
    let decoded: Vec<Option<image::DynamicImage>> = sources
        .par_iter()
        .map(|url| match fetcher.fetch(url).and_then(decode) {
            Ok(img) => Some(img),
            Err(e) => {
                eprintln!("[images] dropping {}: {}", url, e);
                None
            }
        })
        .collect();

    let mut names = Vec::new();
    for img in decoded.into_iter().flatten() {
        let name = image_name(index, names.len());
        let path = session.media_path(&name);
        match img.save(&path) {
            Ok(()) => {
                session.register_media(&name);
                names.push(name);
            }
            Err(e) => eprintln!("[images] could not save {}: {}", name, e),
        }
    }
    names
}

fn decode(bytes: Vec<u8>) -> Result<image::DynamicImage, AnkigenError> {
    Ok(image::load_from_memory(&bytes)?)
}
