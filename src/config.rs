use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::client::{SearchClient, DEFAULT_BASE_URL, DEFAULT_SEARCH_PATH};
use crate::controller::DEFAULT_VALIDATION_MESSAGE;
use crate::render::{RenderOptions, DEFAULT_NO_RESULTS_MESSAGE, DEFAULT_PLACEHOLDER_IMAGE};
use crate::SearchError;

/// Settings for talking to the search backend and presenting its results
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    /// Backend base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the search endpoint
    #[serde(default = "default_search_path")]
    pub search_path: String,
    /// Request timeout in seconds. Unset means no client-side timeout.
    #[serde(default)]
    pub timeout: Option<u64>,
    /// Image shown on every card
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
    /// Shown when the backend returns no recipes
    #[serde(default = "default_no_results_message")]
    pub no_results_message: String,
    /// Shown when the input has no ingredients
    #[serde(default = "default_validation_message")]
    pub validation_message: String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            search_path: default_search_path(),
            timeout: None,
            placeholder_image: default_placeholder_image(),
            no_results_message: default_no_results_message(),
            validation_message: default_validation_message(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_search_path() -> String {
    DEFAULT_SEARCH_PATH.to_string()
}

fn default_placeholder_image() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}

fn default_no_results_message() -> String {
    DEFAULT_NO_RESULTS_MESSAGE.to_string()
}

fn default_validation_message() -> String {
    DEFAULT_VALIDATION_MESSAGE.to_string()
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FINDER__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            placeholder_image: self.placeholder_image.clone(),
            no_results_message: self.no_results_message.clone(),
            ..RenderOptions::default()
        }
    }

    /// Build a [`SearchClient`] pointed at the configured backend
    pub fn client(&self) -> Result<SearchClient, SearchError> {
        let mut builder = SearchClient::builder()
            .base_url(&self.base_url)
            .search_path(&self.search_path);
        if let Some(secs) = self.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }
}

/// See [`FinderConfig::load`]
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_FINDER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
