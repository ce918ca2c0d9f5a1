//! Turning a finished batch into chat lines.

/// Shown for a restaurant that produced no dishes, for whatever reason.
pub const NOTHING_TODAY: &str = "Ei mitään tänään";

/// Dishes per restaurant, in registry order. `None` marks a source that failed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Menus {
    entries: Vec<(&'static str, Option<String>)>,
}

impl Menus {
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, dishes)| dishes.as_deref())
    }

    pub fn lines(&self) -> Vec<String> {
        lines(self)
    }
}

impl FromIterator<(&'static str, Option<String>)> for Menus {
    fn from_iter<I: IntoIterator<Item = (&'static str, Option<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// One `name: dishes` line per restaurant, substituting [`NOTHING_TODAY`]
/// for failed or empty entries.
pub fn lines(menus: &Menus) -> Vec<String> {
    menus
        .entries
        .iter()
        .map(|(name, dishes)| {
            let dishes = dishes
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .unwrap_or(NOTHING_TODAY);
            format!("{name}: {dishes}")
        })
        .collect()
}
