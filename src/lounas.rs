//! Fans a location out to its restaurants and gathers the results.
use std::{panic::AssertUnwindSafe, sync::Arc};

use futures::FutureExt;
use tokio::task::JoinSet;

use crate::{
    error::{Error, Result},
    fetch::Fetch,
    format::Menus,
    parse::{self, Today},
    registry::{Registry, RestaurantEntry},
};

#[derive(Debug)]
pub struct Lounas<F> {
    registry: Arc<Registry>,
    fetcher: Arc<F>,
}

impl<F: Fetch> Lounas<F> {
    pub const fn new(registry: Arc<Registry>, fetcher: Arc<F>) -> Self {
        Self { registry, fetcher }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Today's dishes for every restaurant in `location`.
    pub async fn run(&self, location: &str) -> Result<Menus> {
        self.run_on(location, Today::now()).await
    }

    /// Like [`Self::run`] but for an explicit day.
    ///
    /// A failing restaurant only ever turns its own entry into `None`. The only
    /// errors are an unknown location, reported before anything is fetched,
    /// and the task group itself being torn down.
    pub async fn run_on(&self, location: &str, today: Today) -> Result<Menus> {
        let Some(location) = self.registry.find(location) else {
            return Err(Error::UnknownLocation(location.trim().to_string()));
        };
        log::info!(
            "Fetching {} lunch menus in {} for {}",
            location.restaurant_count(),
            location.key(),
            today.date()
        );

        let mut tasks = JoinSet::new();
        for (slot, entry) in location.entries().enumerate() {
            let fetcher = Arc::clone(&self.fetcher);
            let entry = entry.clone();
            tasks.spawn(async move {
                let outcome = AssertUnwindSafe(dishes_for(fetcher.as_ref(), &entry, &today))
                    .catch_unwind()
                    .await;
                let dishes = match outcome {
                    Ok(Ok(Some(dishes))) => Some(dishes),
                    Ok(Ok(None)) => {
                        log::warn!("{} returned no content", entry.name());
                        None
                    }
                    Ok(Err(e)) => {
                        log::warn!("No dishes from {}: {e}", entry.name());
                        None
                    }
                    Err(_) => {
                        log::warn!("{} panicked while extracting dishes", entry.name());
                        None
                    }
                };
                (slot, dishes)
            });
        }

        let mut dishes = vec![None; location.restaurant_count()];
        while let Some(joined) = tasks.join_next().await {
            let (slot, outcome) = joined.map_err(|e| Error::Aggregate(e.to_string()))?;
            dishes[slot] = outcome;
        }
        Ok(location
            .entries()
            .map(RestaurantEntry::name)
            .zip(dishes)
            .collect())
    }
}

/// `Ok(None)` when the site had nothing to give.
async fn dishes_for<F: Fetch>(
    fetcher: &F,
    entry: &RestaurantEntry,
    today: &Today,
) -> Result<Option<String>> {
    let Some(body) = fetcher.fetch(entry.url()).await? else {
        return Ok(None);
    };
    Ok(Some(parse::extract_dishes(&body, entry.extractor(), today)?))
}
