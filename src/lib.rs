pub mod anki;
pub mod core;
pub mod media;
pub mod parser;

pub use crate::anki::{assemble, build_all, build_note};
pub use crate::core::{AnkigenError, CardMode, Language, Record, Session, StudyItem};
