use regex::{Regex, RegexBuilder};
use scraper::Html;

use crate::parse::{
    normalize,
    text_from_selection::{inner_lines, select_anchor},
    today::FINNISH_ABBREVIATIONS,
    Error, Result, Today,
};
use crate::static_selector;

/// The whole week is plain text, one line per day: `Ti: Kalaa ja perunaa`.
pub fn extract(html: &Html, today: &Today) -> Result<String> {
    static_selector!(CONTENT_SELECTOR <- "div.entry-content");
    let content = select_anchor(&CONTENT_SELECTOR, html.root_element(), "entry content")?;
    let prefix = weekday_prefix(today.pick(&FINNISH_ABBREVIATIONS))?;
    let dishes = inner_lines(content)
        .iter()
        .find(|line| prefix.is_match(line))
        .map(|line| normalize(&prefix.replace(line, "")))
        .unwrap_or_default();
    Ok(dishes)
}

fn weekday_prefix(abbreviation: &str) -> Result<Regex> {
    RegexBuilder::new(&format!(r"^{}\s*:\s*", regex::escape(abbreviation)))
        .case_insensitive(true)
        .build()
        .map_err(|e| Error::Internal(format!("weekday prefix for {abbreviation}: {e}")))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::parse::{sites::example, today::tuesday};

    #[test]
    fn test_strips_weekday_prefix() {
        let html = example("ylioppilastalo");
        let dishes = extract(&html, &tuesday()).expect("The example html should be valid");
        assert_eq!(dishes, "Kalaleike, tillikastike ja perunat / Kasviskiusaus");
    }

    #[test]
    fn test_prefix_is_case_insensitive() {
        let html = example("ylioppilastalo");
        let thursday = Today::from_date(NaiveDate::from_ymd_opt(2026, 10, 22).unwrap());
        assert_eq!(extract(&html, &thursday).unwrap(), "Hernekeitto ja pannari");
    }

    #[test]
    fn test_no_line_for_today() {
        let html = example("ylioppilastalo");
        let saturday = Today::from_date(NaiveDate::from_ymd_opt(2026, 10, 24).unwrap());
        assert_eq!(extract(&html, &saturday).unwrap(), "");
    }

    #[test]
    fn test_inline_markup_in_todays_line() {
        let html = Html::parse_document(
            r#"<div class="entry-content"><p>Ma: Keitto<br>Ti: Kala <b>ja</b> peruna<br>Ke: Pasta</p></div>"#,
        );
        assert_eq!(extract(&html, &tuesday()).unwrap(), "Kala ja peruna");
    }

    #[test]
    fn test_longer_word_is_not_a_prefix() {
        let html = Html::parse_document(
            r#"<div class="entry-content"><p>Tiistai: suljettu<br>Ke: Pasta</p></div>"#,
        );
        assert_eq!(extract(&html, &tuesday()).unwrap(), "");
    }
}
