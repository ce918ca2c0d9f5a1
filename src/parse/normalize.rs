use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

pub fn remove_excess_whitespace(s: &str) -> Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `\s` is unicode aware so this also folds nbsp and friends
    let re = RE.get_or_init(|| Regex::new(r"\s\s+|[^\S ]").expect("regex should be valid"));
    re.replace_all(s, " ")
}

/// Trims `s` and collapses every run of whitespace into one space.
pub fn normalize(s: &str) -> String {
    remove_excess_whitespace(s.trim()).into_owned()
}

/// Normalizes every fragment, drops the empty ones and joins the rest with `", "`.
pub fn join_dishes<I, S>(dishes: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    dishes
        .into_iter()
        .map(|dish| normalize(dish.as_ref()))
        .filter(|dish| !dish.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Lowercases `s` and uppercases its first character.
pub fn capitalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut chars = lower.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
