pub mod errors;
pub mod http;
pub mod models;
pub mod session;

pub use errors::AnkigenError;
pub use models::{CardMode, Language, Record, StudyItem};
pub use session::Session;
