use std::path::{
    Path,
    PathBuf,
};

use genanki_rs::{
    Deck,
    Note,
    Package,
};

use crate::{
    anki::models::{
        deck_info,
        note_model,
    },
    core::{
        session::Session,
        AnkigenError,
    },
};

/// Assembles everything the session has accumulated into a single `.apkg`
/// in `out_dir`, named after the session's fixed deck. Additive and
/// rebuildable: a later call with more accumulated items produces a
/// superset package. A failure here invalidates this export attempt only;
/// the session's items survive for a retry.
pub fn assemble(session: &Session, out_dir: &Path) -> Result<PathBuf, AnkigenError> {
    // every referenced file must exist before anything is serialized
    for item in session.items() {
        for name in &item.media {
            if !session.media_path(name).exists() {
                return Err(AnkigenError::MissingMedia(name.clone()));
            }
        }
    }

    let (deck_id, deck_name) = deck_info(session.mode(), session.language());
    let mut deck = Deck::new(deck_id, deck_name, "");
    for item in session.items() {
        let fields: Vec<&str> = item.fields.iter().map(String::as_str).collect();
        deck.add_note(Note::new(note_model(item.mode), fields)?);
    }

    let media_paths: Vec<String> = session
        .media()
        .iter()
        .map(|name| session.media_path(name).to_string_lossy().into_owned())
        .collect();
    let media_refs: Vec<&str> = media_paths.iter().map(String::as_str).collect();
    let mut package = Package::new(vec![deck], media_refs)?;

    let out_path = out_dir.join(format!("{}.apkg", deck_name));
    let out_str = out_path
        .to_str()
        .ok_or_else(|| AnkigenError::Custom(format!("Non-UTF8 output path: {:?}", out_path)))?;
    package.write_to_file(out_str)?;

    println!("[package] wrote {} notes to {}", session.items().len(), out_path.display());
    Ok(out_path)
}
