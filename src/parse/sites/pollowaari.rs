use scraper::Html;

use crate::parse::{
    join_dishes,
    text_from_selection::{inner_text, select_anchor},
    today::TAB_IDS,
    Result, Today,
};
use crate::static_selector;

/// Every weekday is a tab pane with an english id such as `tab-tuesday`.
pub fn extract(html: &Html, today: &Today) -> Result<String> {
    static_selector!(TABS_SELECTOR <- "div.tab-content");
    static_selector!(PANE_SELECTOR <- "div.tab-pane");
    static_selector!(DISH_SELECTOR <- "li");
    let tabs = select_anchor(&TABS_SELECTOR, html.root_element(), "tab content")?;
    let id = today.pick(&TAB_IDS);
    let dishes = tabs
        .select(&PANE_SELECTOR)
        .find(|pane| pane.value().id() == Some(id))
        .map(|pane| join_dishes(pane.select(&DISH_SELECTOR).map(inner_text)))
        .unwrap_or_default();
    Ok(dishes)
}
