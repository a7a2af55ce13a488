use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use crate::core::{
    models::{
        CardMode,
        Language,
        StudyItem,
    },
    AnkigenError,
};

const APP_NAME: &str = "ankigen";

/// At most two images can be attached to the item currently being built.
pub const MAX_PENDING_IMAGES: usize = 2;

/// Owns everything a single authoring run accumulates: the item counter,
/// the generated-media manifest, the finalized items and the pending image
/// selection. Mode and language are fixed at construction.
pub struct Session {
    mode: CardMode,
    language: Language,
    index: u32,
    media_dir: PathBuf,
    media: Vec<String>,
    items: Vec<StudyItem>,
    pending_images: Vec<String>,
}

impl Session {
    pub fn new(mode: CardMode, language: Language) -> Result<Self, AnkigenError> {
        let base = match dirs::data_local_dir() {
            Some(data_dir) => data_dir.join(APP_NAME).join("media"),
            None => PathBuf::from("."),
        };
        Self::with_media_dir(mode, language, &base)
    }

    /// Same as [`Session::new`] but with an explicit media directory.
    pub fn with_media_dir(
        mode: CardMode,
        language: Language,
        media_dir: &Path,
    ) -> Result<Self, AnkigenError> {
        fs::create_dir_all(media_dir)?;
        Ok(Session {
            mode,
            language,
            index: 0,
            media_dir: media_dir.to_path_buf(),
            media: Vec::new(),
            items: Vec::new(),
            pending_images: Vec::new(),
        })
    }

    pub fn mode(&self) -> CardMode {
        self.mode
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Sequence index the next finalized item will take. Asset names for the
    /// in-progress item are derived from this value.
    pub fn next_index(&self) -> u32 {
        self.index
    }

    pub fn items(&self) -> &[StudyItem] {
        &self.items
    }

    pub fn media(&self) -> &[String] {
        &self.media
    }

    pub fn media_path(&self, name: &str) -> PathBuf {
        self.media_dir.join(name)
    }

    pub fn pending_images(&self) -> &[String] {
        &self.pending_images
    }

    /// Adds an image source for the current item, keeping only the two most
    /// recent selections in selection order.
    pub fn select_image(&mut self, url: impl Into<String>) {
        self.pending_images.push(url.into());
        if self.pending_images.len() > MAX_PENDING_IMAGES {
            self.pending_images.remove(0);
        }
    }

    pub fn clear_pending_images(&mut self) {
        self.pending_images.clear();
    }

    /// Persists generated bytes under `name` in the media directory and
    /// records the file in the manifest.
    pub fn write_media(&mut self, name: &str, bytes: &[u8]) -> Result<(), AnkigenError> {
        fs::write(self.media_path(name), bytes)?;
        self.register_media(name);
        Ok(())
    }

    /// Records an already-persisted file in the manifest so reset can always
    /// clean it up, bundled or not.
    pub fn register_media(&mut self, name: &str) {
        self.media.push(name.to_string());
    }

    pub fn push_item(&mut self, item: StudyItem) {
        self.items.push(item);
        self.index += 1;
    }

    /// Deletes every session-generated media file, clears all accumulated
    /// state and returns the counter to its initial value. Packages already
    /// exported are independent artifacts and are left alone.
    pub fn reset(&mut self) {
        for name in &self.media {
            let path = self.media_dir.join(name);
            if path.exists() {
                if let Err(e) = fs::remove_file(&path) {
                    eprintln!("[session] could not delete {}: {}", path.display(), e);
                }
            }
        }
        self.media.clear();
        self.items.clear();
        self.pending_images.clear();
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn session(dir: &TempDir) -> Session {
        Session::with_media_dir(CardMode::Lexicon, Language::German, dir.path()).unwrap()
    }

    #[test]
    fn pending_selection_keeps_last_two_in_order() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir);

        session.select_image("a");
        session.select_image("b");
        session.select_image("c");

        assert_eq!(session.pending_images(), &["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn write_media_persists_and_registers() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir);

        session.write_media("sound0_0.mp3", b"bytes").unwrap();

        assert!(session.media_path("sound0_0.mp3").exists());
        assert_eq!(session.media(), &["sound0_0.mp3".to_string()]);
    }

    #[test]
    fn reset_deletes_media_and_zeroes_counter() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir);

        session.write_media("sound0_0.mp3", b"bytes").unwrap();
        session.push_item(StudyItem {
            mode: CardMode::Lexicon,
            fields: vec!["x".to_string()],
            media: vec!["sound0_0.mp3".to_string()],
        });
        session.select_image("url");
        assert_eq!(session.next_index(), 1);

        session.reset();

        assert!(!session.media_path("sound0_0.mp3").exists());
        assert!(session.media().is_empty());
        assert!(session.items().is_empty());
        assert!(session.pending_images().is_empty());
        assert_eq!(session.next_index(), 0);
    }
}
