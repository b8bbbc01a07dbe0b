use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::model::{RecipeResult, SearchRequest};
use crate::{IngredientList, SearchError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_SEARCH_PATH: &str = "/search_recipes";

/// Anything that can turn an ingredient list into recipe results
#[async_trait]
pub trait RecipeSearch: Send + Sync {
    async fn search(&self, ingredients: &IngredientList)
        -> Result<Vec<RecipeResult>, SearchError>;
}

/// HTTP client for the `/search_recipes` backend
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    endpoint: String,
}

impl SearchClient {
    /// Creates a builder with the default backend location and no timeout
    pub fn builder() -> SearchClientBuilder {
        SearchClientBuilder::default()
    }

    /// Client for a backend at `base_url` using the default search path
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, SearchError> {
        Self::builder().base_url(base_url).build()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Parse a successful response body. An empty body or `null` means no recipes.
fn parse_recipes(body: &str) -> Result<Vec<RecipeResult>, SearchError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let recipes: Option<Vec<RecipeResult>> = serde_json::from_str(body)?;
    Ok(recipes.unwrap_or_default())
}

#[async_trait]
impl RecipeSearch for SearchClient {
    async fn search(
        &self,
        ingredients: &IngredientList,
    ) -> Result<Vec<RecipeResult>, SearchError> {
        debug!("POST {} with {:?}", self.endpoint, ingredients.as_slice());

        let response = self
            .client
            .post(&self.endpoint)
            .json(&SearchRequest { ingredients })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        debug!("{}", body);
        parse_recipes(&body)
    }
}

/// Builder for [`SearchClient`]
#[derive(Debug, Default)]
pub struct SearchClientBuilder {
    base_url: Option<String>,
    search_path: Option<String>,
    timeout: Option<Duration>,
}

impl SearchClientBuilder {
    /// Set the backend base URL, e.g. `http://localhost:5000`
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the search path, `/search_recipes` by default
    pub fn search_path(mut self, path: impl Into<String>) -> Self {
        self.search_path = Some(path.into());
        self
    }

    /// Bound each request. Without this the transport's own policy applies.
    ///
    /// # Example
    /// ```
    /// use recipe_finder::SearchClient;
    /// use std::time::Duration;
    ///
    /// let client = SearchClient::builder()
    ///     .base_url("http://localhost:5000")
    ///     .timeout(Duration::from_secs(10))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(client.endpoint(), "http://localhost:5000/search_recipes");
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn build(self) -> Result<SearchClient, SearchError> {
        let base_url = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let path = self.search_path.as_deref().unwrap_or(DEFAULT_SEARCH_PATH);
        let endpoint = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(SearchClient {
            client: builder.build()?,
            endpoint,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[test]
    fn test_endpoint_joining() {
        let client = SearchClient::builder()
            .base_url("http://example.com/")
            .search_path("search_recipes")
            .build()
            .unwrap();
        assert_eq!(client.endpoint(), "http://example.com/search_recipes");

        let client = SearchClient::builder().build().unwrap();
        assert_eq!(client.endpoint(), "http://localhost:5000/search_recipes");
    }

    #[test]
    fn test_parse_absent_body() {
        assert!(parse_recipes("").unwrap().is_empty());
        assert!(parse_recipes("  \n").unwrap().is_empty());
        assert!(parse_recipes("null").unwrap().is_empty());
        assert!(parse_recipes("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let result = parse_recipes(r#"{"error": "Something went wrong"}"#);
        assert!(matches!(result, Err(SearchError::Parse(_))));
    }

    #[tokio::test]
    async fn test_search_posts_ingredients() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/search_recipes")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({ "ingredients": ["egg", "flour"] })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"label": "Crepes", "url": "https://example.com/crepes", "ingredientLines": ["2 eggs", "1 cup flour"]}]"#,
            )
            .create_async()
            .await;

        let client = SearchClient::with_base_url(server.url()).unwrap();
        let ingredients = IngredientList::parse("egg, flour").unwrap();

        let recipes = client.search(&ingredients).await.unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].label, "Crepes");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_server_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/search_recipes")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "Something went wrong. Please try again."}"#)
            .create_async()
            .await;

        let client = SearchClient::with_base_url(server.url()).unwrap();
        let ingredients = IngredientList::parse("egg").unwrap();

        let result = client.search(&ingredients).await;
        assert!(matches!(result, Err(SearchError::Status(500))));
        mock.assert_async().await;
    }
}
