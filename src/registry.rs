//! The fixed set of locations and the restaurants in each one.
use std::{collections::HashSet, slice::Iter};

use url::Url;

use crate::{
    error::{Error, Result},
    parse::{sites, ExtractFn},
};

#[derive(Clone)]
pub struct RestaurantEntry {
    name: &'static str,
    url: Url,
    extract: ExtractFn,
}

impl RestaurantEntry {
    pub fn new(name: &'static str, url: &str, extract: ExtractFn) -> Result<Self> {
        Ok(Self {
            name,
            url: Url::parse(url)?,
            extract,
        })
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn url(&self) -> &Url {
        &self.url
    }

    pub const fn extractor(&self) -> ExtractFn {
        self.extract
    }
}

impl std::fmt::Debug for RestaurantEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestaurantEntry")
            .field("name", &self.name)
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct Location {
    key: &'static str,
    aliases: &'static [&'static str],
    entries: Vec<RestaurantEntry>,
}

impl Location {
    pub fn new(
        key: &'static str,
        aliases: &'static [&'static str],
        entries: Vec<RestaurantEntry>,
    ) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::Registry(format!("{key} has no restaurants")));
        }
        let mut names = HashSet::with_capacity(entries.len());
        if let Some(dup) = entries.iter().find(|e| !names.insert(e.name)) {
            return Err(Error::Registry(format!(
                "{key} lists {} more than once",
                dup.name
            )));
        }
        Ok(Self {
            key,
            aliases,
            entries,
        })
    }

    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Entries in output order.
    pub fn entries(&self) -> Iter<RestaurantEntry> {
        self.entries.iter()
    }

    pub fn restaurant_count(&self) -> usize {
        self.entries.len()
    }

    fn answers_to(&self, query: &str) -> bool {
        std::iter::once(self.key)
            .chain(self.aliases.iter().copied())
            .any(|name| name.to_lowercase() == query)
    }
}

/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Registry {
    locations: Vec<Location>,
}

impl Registry {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    pub fn builtin() -> Result<Self> {
        let jyvaskyla = Location::new(
            "jyväskylä",
            &["jkl", "jyvaskyla"],
            vec![
                RestaurantEntry::new("Shalimar", "http://www.ravintolashalimar.fi/", sites::shalimar)?,
                RestaurantEntry::new(
                    "Asemaravintola",
                    "http://vanhaasemaravintola.fi/lounaslista/",
                    sites::asema,
                )?,
                RestaurantEntry::new("Pöllöwaari", "https://www.pollowaari.fi/lounas/", sites::pollowaari)?,
                RestaurantEntry::new(
                    "Ylioppilastalo",
                    "https://www.ylioppilastalo.fi/lounas/",
                    sites::ylioppilastalo,
                )?,
            ],
        )?;
        let tampere = Location::new(
            "tampere",
            &["tre"],
            vec![
                RestaurantEntry::new("Aleksis", "https://www.ravintola-aleksis.fi/lounas/", sites::aleksis)?,
                RestaurantEntry::new("Plevna", "https://www.plevna.fi/lounas/", sites::plevna)?,
                RestaurantEntry::new("Tuulensuu", "https://www.gastropub.net/tuulensuu/lounas/", sites::tuulensuu)?,
            ],
        )?;
        Ok(Self::new(vec![jyvaskyla, tampere]))
    }

    /// Case-insensitive lookup by key or alias.
    pub fn find(&self, query: &str) -> Option<&Location> {
        let query = query.trim().to_lowercase();
        self.locations.iter().find(|l| l.answers_to(&query))
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.locations.iter().map(Location::key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let registry = Registry::builtin().expect("builtin registry should be valid");
        assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["jyväskylä", "tampere"]);
        let jkl = registry.find("jyväskylä").unwrap();
        assert_eq!(
            jkl.entries().map(RestaurantEntry::name).collect::<Vec<_>>(),
            vec!["Shalimar", "Asemaravintola", "Pöllöwaari", "Ylioppilastalo"]
        );
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(registry.find("JYVÄSKYLÄ").map(Location::key), Some("jyväskylä"));
        assert_eq!(registry.find(" Tampere ").map(Location::key), Some("tampere"));
        assert_eq!(registry.find("JKL").map(Location::key), Some("jyväskylä"));
        assert_eq!(registry.find("tre").map(Location::key), Some("tampere"));
        assert!(registry.find("helsinki").is_none());
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let entry = || RestaurantEntry::new("Shalimar", "http://example.com/", sites::shalimar).unwrap();
        let err = Location::new("x", &[], vec![entry(), entry()]).unwrap_err();
        assert!(matches!(err, Error::Registry(_)));
    }

    #[test]
    fn test_empty_location_is_rejected() {
        assert!(matches!(Location::new("x", &[], vec![]), Err(Error::Registry(_))));
    }

    #[test]
    fn test_bad_url() {
        assert!(matches!(
            RestaurantEntry::new("x", "not a url", sites::shalimar),
            Err(Error::Url(_))
        ));
    }
}
