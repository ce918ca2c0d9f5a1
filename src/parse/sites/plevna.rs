use scraper::Html;

use crate::parse::{
    join_dishes,
    text_from_selection::{inner_text, select_anchor},
    Error, Result, Today,
};
use crate::static_selector;

/// The page marks the current day itself: the active tab carries both the
/// weekday label and a `data-date`, and the menu block for that day is tagged
/// with the same pair. The site's clock is trusted over ours here.
///
/// The last dish of every day is the weekly special, repeated on each tab,
/// so it is dropped whenever the day has anything else.
pub fn extract(html: &Html, _today: &Today) -> Result<String> {
    static_selector!(ACTIVE_TAB_SELECTOR <- "ul.days li.active");
    static_selector!(MENU_SELECTOR <- "div.menu");
    static_selector!(DISH_SELECTOR <- "div.dish");
    let tab = select_anchor(&ACTIVE_TAB_SELECTOR, html.root_element(), "active day tab")?;
    let label = inner_text(tab);
    let date = tab
        .value()
        .attr("data-date")
        .ok_or_else(|| Error::html_parse_error("Active day tab has no data-date"))?;

    let Some(menu) = html.select(&MENU_SELECTOR).find(|menu| {
        let menu = menu.value();
        menu.attr("data-day")
            .is_some_and(|day| day.trim().eq_ignore_ascii_case(&label))
            && menu.attr("data-date").map(str::trim) == Some(date.trim())
    }) else {
        return Ok(String::new());
    };

    let mut dishes: Vec<String> = menu.select(&DISH_SELECTOR).map(inner_text).collect();
    if dishes.len() > 1 {
        dishes.pop();
    }
    Ok(join_dishes(dishes))
}
