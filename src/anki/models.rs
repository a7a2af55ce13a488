use genanki_rs::{
    Field,
    Model,
    Template,
};

use crate::core::models::{
    CardMode,
    Language,
};

// Model and deck ids are compatibility constants: decks users already have
// were generated with exactly these ids, and Anki merges on id.
pub const LEXICON_MODEL_ID: i64 = 1284830180;
pub const PRONUNCIATION_MODEL_ID: i64 = 1081735104;
pub const GRAMMAR_MODEL_ID: i64 = 1091735125;

pub const CARD_CSS: &str = ".card{
    font-family: arial;
    font-size: 20px;
    text-align: center;
    color: black;
    background-color: white;
    }";

/// The fixed note model for a record grammar: field list, front/back
/// templates and the shared stylesheet.
pub fn note_model(mode: CardMode) -> Model {
    match mode {
        CardMode::Lexicon => Model::new_with_options(
            LEXICON_MODEL_ID,
            "Language (and reversed card) card generator",
            vec![
                Field::new("baseS"),
                Field::new("baseT"),
                Field::new("AbaseT"),
                Field::new("fullT"),
                Field::new("AfullT"),
                Field::new("s1T"),
                Field::new("As1T"),
                Field::new("s2T"),
                Field::new("As2T"),
                Field::new("image1"),
                Field::new("image2"),
            ],
            vec![
                Template::new("Card 1").qfmt("{{baseS}}<br>{{image1}} {{image2}}").afmt(
                    r##"{{baseS}}<br>{{image1}} {{image2}} <br> {{fullT}} {{AfullT}}<hr id="answer">{{s1T}} {{As1T}}<br> {{s2T}} {{As2T}}"##,
                ),
                Template::new("Card 2").qfmt("{{baseT}} {{AbaseT}}").afmt(
                    r##"{{fullT}} {{AfullT}}<br>{{baseS}}<hr id="answer">{{image1}} {{image2}}<br> {{s1T}}{{As1T}}<br> {{s2T}} {{As2T}}"##,
                ),
            ],
            Some(CARD_CSS),
            None,
            None,
            None,
            None,
        ),
        CardMode::Pronunciation => Model::new_with_options(
            PRONUNCIATION_MODEL_ID,
            "Simple Model with Media",
            vec![Field::new("Question"), Field::new("MyMedia")],
            vec![Template::new("Card 1")
                .qfmt("{{Question}}")
                .afmt(r##"{{FrontSide}}<hr id="answer">{{MyMedia}}"##)],
            Some(CARD_CSS),
            None,
            None,
            None,
            None,
        ),
        CardMode::Grammar => Model::new_with_options(
            GRAMMAR_MODEL_ID,
            "Simple Model with Media",
            vec![
                Field::new("Question"),
                Field::new("Answer"),
                Field::new("MyMedia"),
                Field::new("explanation"),
            ],
            vec![Template::new("Card 1")
                .qfmt("{{Question}}")
                .afmt(r##"{{FrontSide}}<hr id="answer">{{Answer}}<br>{{MyMedia}}<br>{{explanation}}"##)],
            Some(CARD_CSS),
            None,
            None,
            None,
            None,
        ),
    }
}

/// Number of rendered field slots the mode's model declares.
pub fn field_count(mode: CardMode) -> usize {
    match mode {
        CardMode::Lexicon => 11,
        CardMode::Pronunciation => 2,
        CardMode::Grammar => 4,
    }
}

/// Fixed (deck id, deck name) per grammar and language. Preserved exactly so
/// exports merge into decks produced by earlier versions.
pub fn deck_info(mode: CardMode, language: Language) -> (i64, &'static str) {
    match (mode, language) {
        (CardMode::Lexicon, Language::German) => (87654321, "Deutsch"),
        (CardMode::Lexicon, Language::Spanish) => (87654322, "Espanol"),
        (CardMode::Lexicon, Language::French) => (87654323, "Francais"),
        (CardMode::Pronunciation, Language::German) => (100234568, "DeutschAussprache"),
        (CardMode::Pronunciation, Language::Spanish) => (100234569, "EspanolPronunciacion"),
        (CardMode::Pronunciation, Language::French) => (100234570, "FrancaisPrononciation"),
        (CardMode::Grammar, Language::German) => (1234567, "Grammar_Deutsch"),
        (CardMode::Grammar, Language::Spanish) => (1234568, "Grammar_Espanol"),
        (CardMode::Grammar, Language::French) => (1234569, "Grammar_Francais"),
    }
}
