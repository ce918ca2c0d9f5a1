use regex::Regex;
use scraper::Html;

use crate::parse::{
    join_dishes,
    text_from_selection::{inner_lines, select_anchor},
    Error, Result, Today,
};
use crate::static_selector;

/// The weekly list is a run of paragraphs, each opening with a line such as
/// `Tiistai 20.10.` followed by that day's dishes. Some weeks the date line
/// is its own paragraph and the dishes follow in the next one.
pub fn extract(html: &Html, today: &Today) -> Result<String> {
    static_selector!(COLUMN_SELECTOR <- "div.rightcolumn");
    static_selector!(PARAGRAPH_SELECTOR <- "p");
    let column = select_anchor(&COLUMN_SELECTOR, html.root_element(), "right column")?;
    let date = date_pattern(&today.day_month())?;

    let paragraphs: Vec<Vec<String>> = column.select(&PARAGRAPH_SELECTOR).map(inner_lines).collect();
    let Some((index, date_line)) = paragraphs.iter().enumerate().find_map(|(i, lines)| {
        lines
            .iter()
            .position(|line| date.is_match(line))
            .map(|line| (i, line))
    }) else {
        return Ok(String::new());
    };

    let rest = &paragraphs[index][date_line + 1..];
    if !rest.is_empty() {
        // a paragraph may hold several days, stop at the next date line
        let dishes = rest.iter().take_while(|line| !any_date().is_match(line));
        return Ok(join_dishes(dishes));
    }
    match paragraphs.get(index + 1) {
        Some(next) if !next.iter().any(|line| any_date().is_match(line)) => Ok(join_dishes(next)),
        _ => Ok(String::new()),
    }
}

/// Matches `dd.mm` only when it is not part of a longer number.
fn date_pattern(day_month: &str) -> Result<Regex> {
    Regex::new(&format!(r"(?:^|\D){}(?:\D|$)", regex::escape(day_month)))
        .map_err(|e| Error::Internal(format!("date pattern for {day_month}: {e}")))
}

fn any_date() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\d{1,2}\.\d{1,2}\b").expect("regex should be valid"))
}
