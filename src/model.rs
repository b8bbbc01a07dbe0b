use serde::{Deserialize, Serialize};

use crate::IngredientList;

/// Body of `POST /search_recipes`
#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub ingredients: &'a IngredientList,
}

/// One recipe as returned by the search backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecipeResult {
    pub label: String,
    pub url: String,
    #[serde(rename = "ingredientLines")]
    pub ingredient_lines: Vec<String>,
}
