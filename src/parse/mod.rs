mod error;
mod normalize;
pub mod sites;
pub(crate) mod static_selector;
mod text_from_selection;
pub mod today;

pub use error::{Error, Result};
pub use normalize::{capitalize, join_dishes, normalize};
pub use sites::ExtractFn;
pub use today::Today;

use scraper::Html;

/// Parses `body` and runs `extract` on it.
pub fn extract_dishes(body: &str, extract: ExtractFn, today: &Today) -> Result<String> {
    let html = Html::parse_document(body);
    extract(&html, today)
}
