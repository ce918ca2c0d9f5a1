//! One extractor per restaurant. Each one knows exactly one site's markup
//! and nothing else, so expect them to break when the site is redesigned.
mod aleksis;
mod asema;
mod plevna;
mod pollowaari;
mod shalimar;
mod tuulensuu;
mod ylioppilastalo;

use scraper::Html;

use super::{Result, Today};

/// Turns a fetched page into today's dishes joined with `", "`.
///
/// A page that lacks the structure the site is known for is an error. A page
/// that has the structure but nothing for today yields an empty string.
pub type ExtractFn = fn(&Html, &Today) -> Result<String>;

pub use aleksis::extract as aleksis;
pub use asema::extract as asema;
pub use plevna::extract as plevna;
pub use pollowaari::extract as pollowaari;
pub use shalimar::extract as shalimar;
pub use tuulensuu::extract as tuulensuu;
pub use ylioppilastalo::extract as ylioppilastalo;

#[cfg(test)]
pub(crate) fn example(name: &str) -> Html {
    let html = std::fs::read_to_string(format!("./src/parse/html_examples/{name}.html"))
        .expect("example html should exist");
    Html::parse_document(&html)
}
