//! Search a recipe backend by ingredients and render the results as cards.
//!
//! The [`SearchController`] owns the UI state (loading and error indicators,
//! the results container, the premium modal) and drives one search per
//! trigger. Rendering is a pure mapping from [`RecipeResult`]s to
//! [`RecipeCard`]s, with HTML and text presentations on top.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod ingredients;
pub mod model;
pub mod render;

pub use client::{RecipeSearch, SearchClient, SearchClientBuilder};
pub use config::FinderConfig;
pub use controller::{Indicator, SearchController, SearchOutcome, UiState};
pub use error::SearchError;
pub use ingredients::{parse_ingredients, IngredientList};
pub use model::RecipeResult;
pub use render::{render_results, to_html, to_text, RecipeCard, RenderOptions, ResultsView};

/// Build a controller wired to the backend described by `config`
pub fn controller_from_config(
    config: &FinderConfig,
) -> Result<SearchController<SearchClient>, SearchError> {
    let client = config.client()?;
    Ok(
        SearchController::with_options(client, config.render_options())
            .validation_message(config.validation_message.clone()),
    )
}

/// Parse `raw` and run a single search against the configured backend
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), recipe_finder::SearchError> {
/// let recipes = recipe_finder::search_recipes("egg, flour, milk").await?;
/// for recipe in recipes {
///     println!("{} ({})", recipe.label, recipe.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(raw: &str) -> Result<Vec<RecipeResult>, SearchError> {
    let ingredients = IngredientList::parse(raw)?;
    let client = FinderConfig::load()?.client()?;
    client.search(&ingredients).await
}
