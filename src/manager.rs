use tracing::{debug, trace, warn};

use crate::compat::{Cow, String, ToOwned, format};
use crate::config::{Config, HistoryMode};
use crate::environment::{Environment, HistoryState};
use crate::helpers::{join_url, split_url};
use crate::params::{ParamValue, QueryParams};

/// Keeps query-string parameters in sync with navigation history.
///
/// Every operation reads the current URL (or an explicit override), rewrites
/// its query string and writes the result to history in the configured
/// [`HistoryMode`]. The new URL is returned even if the write fails.
#[derive(Debug, Clone)]
pub struct QueryStringManager<E> {
    env: E,
    config: Config,
}

impl<E: Environment> QueryStringManager<E> {
    /// Manager with the default config (`reset: true`, replace mode).
    pub fn new(env: E) -> Self {
        Self::with_config(env, Config::default())
    }

    pub fn with_config(env: E, config: Config) -> Self {
        Self { env, config }
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn history_mode(&self) -> HistoryMode {
        self.config.history_mode()
    }

    pub fn environment(&self) -> &E {
        &self.env
    }

    pub fn into_environment(self) -> E {
        self.env
    }

    /// Decode the current location's query string. Nothing is written.
    pub fn current_params(&self) -> QueryParams {
        QueryParams::parse(&self.env.search())
    }

    /// Merge `params_to_set` into the query string and write the result.
    ///
    /// Keys already present keep their position and take the new value; new
    /// keys are appended in the order given. The `?` is always written, so an
    /// empty result ends in a bare `?`. With `url_override` the current
    /// location is ignored and the override is rewritten instead.
    ///
    /// ```
    /// use search_sync::{MemoryEnvironment, QueryStringManager};
    ///
    /// let env = MemoryEnvironment::new("/items?page=1");
    /// let manager = QueryStringManager::new(&env);
    /// let url = manager.set_params([("page", "2"), ("sort", "name")], None);
    /// assert_eq!(url, "/items?page=2&sort=name");
    /// assert_eq!(env.write_count(), 1);
    /// ```
    pub fn set_params<I, K, V>(&self, params_to_set: I, url_override: Option<&str>) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        let source = self.source_url(url_override);
        let (base, query) = split_url(&source);

        let mut params = query.map(QueryParams::parse).unwrap_or_default();
        params.merge(params_to_set);

        let url = format!("{base}?{}", params.to_query_string());
        self.write(&url);
        url
    }

    /// Remove `params_to_omit` from the query string and write the result.
    ///
    /// When the source URL has no query string nothing is written and the base
    /// path is returned as is. Keys that are not present are ignored. Removing
    /// every parameter yields the bare path without a trailing `?`.
    pub fn omit_params<I, S>(&self, params_to_omit: I, url_override: Option<&str>) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let source = self.source_url(url_override);
        let (base, query) = split_url(&source);

        let Some(query) = query.filter(|query| !query.is_empty()) else {
            trace!(url = base, "no query string, skipping history write");
            return base.to_owned();
        };

        let remaining = QueryParams::parse(query).without(params_to_omit);

        let url = join_url(base, &remaining.to_query_string());
        self.write(&url);
        url
    }

    fn source_url<'a>(&self, url_override: Option<&'a str>) -> Cow<'a, str> {
        match url_override {
            Some(url) => Cow::Borrowed(url),
            None => Cow::Owned(self.env.current_url()),
        }
    }

    fn write(&self, url: &str) {
        let mode = self.config.history_mode();
        debug!(mode = mode.as_str(), url, "writing history entry");
        if let Err(err) = self
            .env
            .write_entry(mode, &HistoryState::default(), "", url)
        {
            warn!(mode = mode.as_str(), url, error = %err, "history write failed");
        }
    }
}

/// Build a manager over `env`. `None` uses [`Config::default`].
pub fn create_query_string_manager<E: Environment>(
    env: E,
    config: Option<Config>,
) -> QueryStringManager<E> {
    QueryStringManager::with_config(env, config.unwrap_or_default())
}
