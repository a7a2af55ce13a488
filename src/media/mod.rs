pub mod images;
pub mod narration;
pub mod search;

pub use images::{resolve_images, HttpImageFetcher, ImageFetcher};
pub use narration::{GoogleTts, NarrationService};
pub use search::search_image_urls;
