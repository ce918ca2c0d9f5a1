use scraper::{ElementRef, Html};

use crate::parse::{
    join_dishes,
    text_from_selection::{select_anchor, text_from_selection},
    today::FINNISH_ESSIVE,
    Result, Today,
};
use crate::static_selector;

/// Days are headed `Tiistaina 20.10.` and every dish is split into a title
/// and a side, which the site reads aloud as "title ja side".
pub fn extract(html: &Html, today: &Today) -> Result<String> {
    static_selector!(WEEK_SELECTOR <- "div.lunch-week");
    static_selector!(DAY_SELECTOR <- "div.lunch-day");
    static_selector!(HEADING_SELECTOR <- "h4");
    static_selector!(ITEM_SELECTOR <- "div.lunch-item");
    let week = select_anchor(&WEEK_SELECTOR, html.root_element(), "lunch week")?;
    let weekday = today.pick(&FINNISH_ESSIVE).to_lowercase();

    let Some(day) = week.select(&DAY_SELECTOR).find(|day| {
        text_from_selection(&HEADING_SELECTOR, *day)
            .is_some_and(|heading| heading.to_lowercase().starts_with(&weekday))
    }) else {
        return Ok(String::new());
    };

    Ok(join_dishes(day.select(&ITEM_SELECTOR).filter_map(dish)))
}

fn dish(item: ElementRef<'_>) -> Option<String> {
    static_selector!(TITLE_SELECTOR <- ".title");
    static_selector!(DESCRIPTION_SELECTOR <- ".description");
    let title = text_from_selection(&TITLE_SELECTOR, item);
    let description = text_from_selection(&DESCRIPTION_SELECTOR, item);
    match (title, description) {
        (Some(title), Some(description)) => Some(format!("{title} ja {description}")),
        (title, description) => title.or(description),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{sites::example, today::tuesday};

    #[test]
    fn test_title_and_description_are_joined() {
        let html = example("tuulensuu");
        let dishes = extract(&html, &tuesday()).expect("The example html should be valid");
        assert_eq!(
            dishes,
            "Paahdettua kirjolohta ja tilliperunoita, Kikherne-pinaattikastiketta ja riisiä, Päivän keitto"
        );
    }

    #[test]
    fn test_nominative_heading_does_not_match() {
        let html = Html::parse_document(
            r#"<div class="lunch-week"><div class="lunch-day"><h4>Tiistai</h4>
            <div class="lunch-item"><span class="title">Keitto</span></div></div></div>"#,
        );
        assert_eq!(extract(&html, &tuesday()).unwrap(), "");
    }

    #[test]
    fn test_missing_week() {
        let html = Html::parse_document("<p>Tiistaina suljettu</p>");
        assert!(extract(&html, &tuesday()).is_err());
    }
}
