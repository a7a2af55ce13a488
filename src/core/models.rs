use serde::{
    Deserialize,
    Serialize,
};

/// Target languages supported by the fixed deck registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    German,
    Spanish,
    French,
}

impl Language {
    /// ISO 639-1 code, also the TTS language selector.
    pub fn code(&self) -> &'static str {
        match self {
            Language::German => "de",
            Language::Spanish => "es",
            Language::French => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "de" => Some(Language::German),
            "es" => Some(Language::Spanish),
            "fr" => Some(Language::French),
            _ => None,
        }
    }

    // Google top-level domain for localized image search
    pub fn search_domain(&self) -> &'static str {
        self.code()
    }

    /// Only German carries article-based gender markup on rendered fields.
    pub fn has_grammatical_gender(&self) -> bool {
        matches!(self, Language::German)
    }
}

/// The three record grammars. Selected once per session; every downstream
/// stage (parser, note builder, deck registry) dispatches on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardMode {
    Lexicon,
    Pronunciation,
    Grammar,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LexiconFields {
    pub base_t: String, // base form, target language
    pub base_s: String, // gloss, source language
    pub full_t: String, // full form with article
    pub s1_t: String,   // sample sentence 1, target
    pub s1_s: String,   // sample sentence 1, source
    pub s2_t: String,   // sample sentence 2, target
    pub s2_s: String,   // sample sentence 2, source
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PronunciationFields {
    pub word: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrammarFields {
    pub front: String,
    pub back: String,
    pub rule: String, // optional in the input, empty when absent
}

/// One parsed input line. Fields are public so the editing surface can
/// adjust values between parse and build; treated as immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Lexicon(LexiconFields),
    Pronunciation(PronunciationFields),
    Grammar(GrammarFields),
}

impl Record {
    pub fn mode(&self) -> CardMode {
        match self {
            Record::Lexicon(_) => CardMode::Lexicon,
            Record::Pronunciation(_) => CardMode::Pronunciation,
            Record::Grammar(_) => CardMode::Grammar,
        }
    }
}

/// One finalized, fully-rendered note ready for packaging. `fields` is
/// ordered exactly like the mode's model field list; a field with no
/// narration still holds an empty string in its audio slot.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyItem {
    pub mode: CardMode,
    pub fields: Vec<String>,
    pub media: Vec<String>, // filenames referenced inside `fields`
}
