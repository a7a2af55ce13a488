use reqwest::{
    blocking::Client,
    header::USER_AGENT,
};

use crate::core::{
    http,
    models::Language,
    AnkigenError,
};

const TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// External text-to-speech boundary. One call per narrated field; failures
/// are recoverable per item, never fatal to the session.
pub trait NarrationService {
    fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>, AnkigenError>;
}

/// Deterministic audio asset name: running item index plus the per-field
/// ordinal inside that item.
pub fn audio_name(index: u32, ordinal: usize) -> String {
    format!("sound{}_{}.mp3", index, ordinal)
}

pub struct GoogleTts {
    client: Client,
}

impl GoogleTts {
    pub fn new() -> Result<Self, AnkigenError> {
        Ok(GoogleTts { client: http::http_client()? })
    }
}

impl NarrationService for GoogleTts {
    fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>, AnkigenError> {
        let narration_err = |reason: String| AnkigenError::Narration {
            language: language.code().to_string(),
            reason,
        };

        let resp = self
            .client
            .get(TTS_ENDPOINT)
            .query(&[("ie", "UTF-8"), ("client", "tw-ob"), ("tl", language.code()), ("q", text)])
            .header(USER_AGENT, "ankigen/0.1 (+reqwest)")
            .send()
            .map_err(|e| narration_err(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(narration_err(format!("HTTP {}", resp.status())));
        }

        let bytes = resp.bytes().map_err(|e| narration_err(e.to_string()))?;
        println!("[tts] synthesized {} bytes ({} chars, {})", bytes.len(), text.chars().count(), language.code());
        Ok(bytes.to_vec())
    }
}
