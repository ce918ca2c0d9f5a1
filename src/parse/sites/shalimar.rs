use scraper::Html;

use crate::parse::{join_dishes, text_from_selection::inner_text, Error, Result, Today};
use crate::static_selector;

/// The front page only ever shows today's lunch table, so no date check is needed.
pub fn extract(html: &Html, _today: &Today) -> Result<String> {
    static_selector!(TABLE_SELECTOR <- "table.todayLunch");
    static_selector!(DISH_SELECTOR <- "td.dish");
    let table = html
        .select(&TABLE_SELECTOR)
        .next()
        .ok_or_else(|| Error::html_parse_error("Today's lunch table not found"))?;
    Ok(join_dishes(table.select(&DISH_SELECTOR).map(inner_text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{sites::example, today::tuesday};

    #[test]
    fn test_collects_every_dish_cell() {
        let html = example("shalimar");
        let dishes = extract(&html, &tuesday()).expect("The example html should be valid");
        assert_eq!(
            dishes,
            "Chicken Tikka Masala, Palak Paneer, Lamb Rogan Josh (L, G)"
        );
    }

    #[test]
    fn test_missing_table() {
        let html = Html::parse_document("<html><body><p>Suljettu</p></body></html>");
        assert!(matches!(
            extract(&html, &tuesday()),
            Err(Error::HtmlParse(_))
        ));
    }

    #[test]
    fn test_empty_table() {
        let html = Html::parse_document(
            r#"<table class="todayLunch"><tr><td class="price">10,90</td></tr></table>"#,
        );
        assert_eq!(extract(&html, &tuesday()).unwrap(), "");
    }
}
