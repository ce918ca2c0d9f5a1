use scraper::{ElementRef, Html};

use crate::parse::{
    capitalize, join_dishes,
    text_from_selection::{inner_text, select_anchor},
    today::FINNISH_NOMINATIVE,
    Result, Today,
};
use crate::static_selector;

/// Each day is an `h3` such as `TIISTAI 20.10.` followed by its dish lists.
/// The site shouts every dish in capitals.
pub fn extract(html: &Html, today: &Today) -> Result<String> {
    static_selector!(LUNCH_SELECTOR <- "div.lunch");
    static_selector!(HEADING_SELECTOR <- "h3");
    static_selector!(DISH_SELECTOR <- "li");
    let lunch = select_anchor(&LUNCH_SELECTOR, html.root_element(), "lunch")?;
    let weekday = today.pick(&FINNISH_NOMINATIVE).to_lowercase();

    let Some(heading) = lunch
        .select(&HEADING_SELECTOR)
        .find(|h| first_word(*h).is_some_and(|word| word == weekday))
    else {
        return Ok(String::new());
    };

    let dishes = heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .take_while(|sibling| sibling.value().name() != "h3")
        .flat_map(|section| section.select(&DISH_SELECTOR))
        .map(|dish| capitalize(&inner_text(dish)));
    Ok(join_dishes(dishes))
}

fn first_word(heading: ElementRef<'_>) -> Option<String> {
    inner_text(heading)
        .split_whitespace()
        .next()
        .map(str::to_lowercase)
}
