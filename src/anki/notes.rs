use crate::{
    core::{
        models::{
            CardMode,
            GrammarFields,
            Language,
            LexiconFields,
            PronunciationFields,
            Record,
            StudyItem,
        },
        session::Session,
        AnkigenError,
    },
    media::{
        images::{
            resolve_images,
            ImageFetcher,
        },
        narration::{
            audio_name,
            NarrationService,
        },
    },
};

// Definite article -> fixed display color, German only.
const GENDER_COLORS: [(&str, &str); 3] = [
    ("die ", "rgb(255, 88, 111)"),
    ("das ", "rgb(88, 255, 101)"),
    ("der ", "rgb(88, 141, 255)"),
];

/// Wraps a rendered field in a color span keyed to its leading definite
/// article. Applied to display text only, never to narration input.
pub fn color_gender(field: &str, language: Language) -> String {
    if !language.has_grammatical_gender() {
        return field.to_string();
    }
    for (article, color) in GENDER_COLORS {
        if field.starts_with(article) {
            return format!("<span style=\"color: {};\">{}</span>", color, field);
        }
    }
    field.to_string()
}

/// Builds one study item from a parsed record and finalizes it into the
/// session. Narration must fully succeed first: on failure nothing is
/// finalized, the counter does not advance and prior items are untouched.
pub fn build_note(
    record: &Record,
    session: &mut Session,
    narration: &dyn NarrationService,
    images: &dyn ImageFetcher,
) -> Result<(), AnkigenError> {
    let item = match record {
        Record::Lexicon(fields) => build_lexicon(fields, session, narration, images)?,
        Record::Pronunciation(fields) => build_pronunciation(fields, session, narration)?,
        Record::Grammar(fields) => build_grammar(fields, session, narration)?,
    };

    session.push_item(item);
    if record.mode() == CardMode::Lexicon {
        session.clear_pending_images();
    }
    Ok(())
}

/// Builds every record in order; used by the batch grammars where no
/// per-item image selection happens between records.
pub fn build_all(
    records: &[Record],
    session: &mut Session,
    narration: &dyn NarrationService,
    images: &dyn ImageFetcher,
) -> Result<usize, AnkigenError> {
    for record in records {
        build_note(record, session, narration, images)?;
    }
    println!("[notes] built {} items", records.len());
    Ok(records.len())
}

// Output slots: [baseS, baseT, AbaseT, fullT, AfullT, s1T, As1T, s2T, As2T,
// image1, image2]. The narrated table fixes each field's audio ordinal, so
// an empty field keeps its ordinal and its pair of empty slots.
fn build_lexicon(
    fields: &LexiconFields,
    session: &mut Session,
    narration: &dyn NarrationService,
    images: &dyn ImageFetcher,
) -> Result<StudyItem, AnkigenError> {
    let index = session.next_index();
    let language = session.language();
    let mut media = Vec::new();

    let narrated = [&fields.base_t, &fields.full_t, &fields.s1_t, &fields.s2_t];
    let mut rendered: Vec<(String, String)> = Vec::with_capacity(narrated.len());
    for (ordinal, text) in narrated.into_iter().enumerate() {
        if text.is_empty() {
            rendered.push((String::new(), String::new()));
            continue;
        }
        let name = audio_name(index, ordinal);
        let bytes = narration.synthesize(text, language)?;
        session.write_media(&name, &bytes)?;
        media.push(name.clone());
        rendered.push((text.clone(), format!("[sound:{}]", name)));
    }

    // markup strictly after synthesis: narration came from the unmarked text
    rendered[1].0 = color_gender(&rendered[1].0, language);

    let mut note_fields = vec![fields.base_s.clone()];
    for (text, audio_ref) in rendered {
        note_fields.push(text);
        note_fields.push(audio_ref);
    }

    let image_files = resolve_images(session, images);
    let mut image_refs: Vec<String> =
        image_files.iter().map(|name| format!("<img src=\"{}\">", name)).collect();
    while image_refs.len() < 2 {
        image_refs.push(String::new());
    }
    media.extend(image_files);
    note_fields.extend(image_refs);

    Ok(StudyItem { mode: CardMode::Lexicon, fields: note_fields, media })
}

fn build_pronunciation(
    fields: &PronunciationFields,
    session: &mut Session,
    narration: &dyn NarrationService,
) -> Result<StudyItem, AnkigenError> {
    let name = audio_name(session.next_index(), 0);
    let bytes = narration.synthesize(&fields.word, session.language())?;
    session.write_media(&name, &bytes)?;

    Ok(StudyItem {
        mode: CardMode::Pronunciation,
        fields: vec![fields.word.clone(), format!("[sound:{}]", name)],
        media: vec![name],
    })
}

fn build_grammar(
    fields: &GrammarFields,
    session: &mut Session,
    narration: &dyn NarrationService,
) -> Result<StudyItem, AnkigenError> {
    // an empty answer would hand the TTS service an empty string; skip it
    // and leave the media slot empty, like an empty lexicon field
    let (audio_ref, media) = if fields.back.is_empty() {
        (String::new(), Vec::new())
    } else {
        let name = audio_name(session.next_index(), 0);
        let bytes = narration.synthesize(&fields.back, session.language())?;
        session.write_media(&name, &bytes)?;
        (format!("[sound:{}]", name), vec![name])
    };

    Ok(StudyItem {
        mode: CardMode::Grammar,
        fields: vec![fields.front.clone(), fields.back.clone(), audio_ref, fields.rule.clone()],
        media,
    })
}
