//! Network access for the extractors. Everything above this module only sees
//! the `Fetch` trait, so tests can swap in canned pages.
use std::future::Future;

use reqwest::{redirect, Client, StatusCode};
use tracing::{instrument, Level};
use url::Url;

use crate::{
    config::Config,
    error::{Error, Result},
};

pub trait Fetch: Send + Sync + 'static {
    /// Fetches `url`. `Ok(None)` means the site answered but there was nothing
    /// to read, which is not the same thing as failing to reach it.
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<Option<String>>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .gzip(true)
            .timeout(config.timeout)
            .redirect(redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    #[instrument(skip_all, fields(url = %url), level = Level::TRACE)]
    async fn fetch(&self, url: &Url) -> Result<Option<String>> {
        let start = std::time::Instant::now();
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if matches!(
            status,
            StatusCode::NO_CONTENT | StatusCode::NOT_FOUND | StatusCode::GONE
        ) {
            log::debug!("{url} has no content ({status})");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Error::Http(format!("{url} responded with {status}")));
        }
        let text = response.text().await?;
        log::trace!("Got text of {url} in \t {:?}", start.elapsed());
        Ok(Some(text).filter(|t| !t.trim().is_empty()))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_from_default_config() {
        assert!(HttpFetcher::new(&Config::default()).is_ok());
    }
}
