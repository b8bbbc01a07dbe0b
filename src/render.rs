//! Turns recipe results into card descriptors, independent of any markup.
//!
//! [`render_results`] is pure; [`to_html`] and [`to_text`] are the two
//! presentations built on top of it.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::model::RecipeResult;

pub const DEFAULT_PLACEHOLDER_IMAGE: &str =
    "https://placehold.co/600x400/000000/FFFFFF?text=Recipe";
pub const DEFAULT_NO_RESULTS_MESSAGE: &str = "No recipes found for these ingredients.";

/// Presentation settings shared by every card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub placeholder_image: String,
    pub image_alt: String,
    pub no_results_message: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            image_alt: "Recipe Image".to_string(),
            no_results_message: DEFAULT_NO_RESULTS_MESSAGE.to_string(),
        }
    }
}

/// One rendered recipe card. The whole card links out to `link`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    pub title: String,
    pub link: String,
    /// Cards open their link in a new browsing context
    pub opens_new_context: bool,
    pub image_url: String,
    pub image_alt: String,
    pub ingredient_lines: Vec<String>,
}

/// Contents of the results container
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultsView {
    /// Nothing shown
    #[default]
    Cleared,
    /// The search succeeded with no recipes
    NoResults(String),
    /// One card per recipe, in response order
    Cards(Vec<RecipeCard>),
}

impl ResultsView {
    pub fn cards(&self) -> &[RecipeCard] {
        match self {
            ResultsView::Cards(cards) => cards,
            _ => &[],
        }
    }
}

pub fn render_card(recipe: &RecipeResult, options: &RenderOptions) -> RecipeCard {
    RecipeCard {
        title: recipe.label.clone(),
        link: recipe.url.clone(),
        opens_new_context: true,
        image_url: options.placeholder_image.clone(),
        image_alt: options.image_alt.clone(),
        ingredient_lines: recipe.ingredient_lines.clone(),
    }
}

pub fn render_results(recipes: &[RecipeResult], options: &RenderOptions) -> ResultsView {
    if recipes.is_empty() {
        return ResultsView::NoResults(options.no_results_message.clone());
    }
    ResultsView::Cards(
        recipes
            .iter()
            .map(|recipe| render_card(recipe, options))
            .collect(),
    )
}

fn card_html(card: &RecipeCard) -> String {
    let target = if card.opens_new_context {
        r#" target="_blank" rel="noopener""#
    } else {
        ""
    };
    let lines: String = card
        .ingredient_lines
        .iter()
        .map(|line| format!("<li>- {}</li>", encode_text(line)))
        .collect();

    format!(
        r#"<a href="{href}"{target} class="card block"><img src="{src}" alt="{alt}" class="recipe-image"><div class="p-4"><h2 class="text-xl font-semibold text-gray-800 mb-2">{title}</h2><ul class="text-sm text-gray-600">{lines}</ul></div></a>"#,
        href = encode_double_quoted_attribute(&card.link),
        target = target,
        src = encode_double_quoted_attribute(&card.image_url),
        alt = encode_double_quoted_attribute(&card.image_alt),
        title = encode_text(&card.title),
        lines = lines,
    )
}

/// Markup for the results container. All recipe fields are escaped.
pub fn to_html(view: &ResultsView) -> String {
    match view {
        ResultsView::Cleared => String::new(),
        ResultsView::NoResults(message) => format!(
            r#"<p class="text-center text-gray-500 col-span-full">{}</p>"#,
            encode_text(message)
        ),
        ResultsView::Cards(cards) => cards.iter().map(card_html).collect(),
    }
}

pub fn to_text(view: &ResultsView) -> String {
    match view {
        ResultsView::Cleared => String::new(),
        ResultsView::NoResults(message) => format!("{}\n", message),
        ResultsView::Cards(cards) => {
            let mut out = String::new();
            for card in cards {
                out.push_str(&card.title);
                out.push('\n');
                out.push_str(&format!("  {}\n", card.link));
                for line in &card.ingredient_lines {
                    out.push_str(&format!("  - {}\n", line));
                }
                out.push('\n');
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pancakes() -> RecipeResult {
        RecipeResult {
            label: "Pancakes".to_string(),
            url: "https://example.com/pancakes".to_string(),
            ingredient_lines: vec!["2 eggs".to_string(), "1 cup flour".to_string()],
        }
    }

    #[test]
    fn test_empty_results_render_message_only() {
        let view = render_results(&[], &RenderOptions::default());
        assert_eq!(
            view,
            ResultsView::NoResults(DEFAULT_NO_RESULTS_MESSAGE.to_string())
        );
        assert!(view.cards().is_empty());
    }

    #[test]
    fn test_single_recipe_renders_one_card() {
        let view = render_results(&[pancakes()], &RenderOptions::default());
        let cards = view.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Pancakes");
        assert_eq!(cards[0].link, "https://example.com/pancakes");
        assert_eq!(cards[0].ingredient_lines, vec!["2 eggs", "1 cup flour"]);
        assert_eq!(cards[0].image_url, DEFAULT_PLACEHOLDER_IMAGE);
        assert!(cards[0].opens_new_context);
    }

    #[test]
    fn test_cards_keep_response_order() {
        let mut second = pancakes();
        second.label = "Waffles".to_string();
        let view = render_results(&[pancakes(), second], &RenderOptions::default());
        let titles: Vec<&str> = view.cards().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Pancakes", "Waffles"]);
    }

    #[test]
    fn test_custom_options() {
        let options = RenderOptions {
            placeholder_image: "https://img.example.com/x.png".to_string(),
            image_alt: "x".to_string(),
            no_results_message: "Nothing.".to_string(),
        };
        assert_eq!(
            render_results(&[], &options),
            ResultsView::NoResults("Nothing.".to_string())
        );
        let view = render_results(&[pancakes()], &options);
        assert_eq!(view.cards()[0].image_url, "https://img.example.com/x.png");
    }

    #[test]
    fn test_html_escapes_recipe_fields() {
        let mut recipe = pancakes();
        recipe.label = "<script>alert(1)</script>".to_string();
        recipe.url = r#"https://example.com/"onmouseover="x"#.to_string();
        let html = to_html(&render_results(&[recipe], &RenderOptions::default()));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains(r#""onmouseover""#));
    }

    #[test]
    fn test_cleared_renders_nothing() {
        assert_eq!(to_html(&ResultsView::Cleared), "");
        assert_eq!(to_text(&ResultsView::Cleared), "");
    }

    #[test]
    fn test_text_rendering() {
        let text = to_text(&render_results(&[pancakes()], &RenderOptions::default()));
        assert_eq!(
            text,
            "Pancakes\n  https://example.com/pancakes\n  - 2 eggs\n  - 1 cup flour\n\n"
        );
    }
}
