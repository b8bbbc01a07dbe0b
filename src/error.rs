use thiserror::Error;

/// Errors that can occur while searching for recipes
#[derive(Error, Debug)]
pub enum SearchError {
    /// The input contained no usable ingredient
    #[error("No ingredients provided")]
    NoIngredients,

    /// The request could not be sent or the body could not be read
    #[error("Failed to reach recipe search: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("Recipe search returned status {0}")]
    Status(u16),

    /// The response body was not a list of recipes
    #[error("Failed to parse recipe search response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl SearchError {
    /// Whether this is a retrieval failure, as opposed to bad user input
    pub fn is_retrieval(&self) -> bool {
        matches!(
            self,
            SearchError::Fetch(_) | SearchError::Status(_) | SearchError::Parse(_)
        )
    }
}
