use serde::Serialize;

use crate::SearchError;

/// Split raw user input on commas, trimming each piece and dropping empty ones.
///
/// Order is preserved and duplicates are kept.
pub fn parse_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// A non-empty, ordered list of trimmed ingredient names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IngredientList(Vec<String>);

impl IngredientList {
    /// Parse raw input, failing with [`SearchError::NoIngredients`] when nothing is left.
    pub fn parse(raw: &str) -> Result<Self, SearchError> {
        let ingredients = parse_ingredients(raw);
        if ingredients.is_empty() {
            return Err(SearchError::NoIngredients);
        }
        Ok(IngredientList(ingredients))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
