use log::{error, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::render::{render_results, RenderOptions, ResultsView};
use crate::{IngredientList, RecipeSearch, SearchError};

pub const DEFAULT_VALIDATION_MESSAGE: &str = "Please enter at least one ingredient.";

/// Status indicator of the search area. Loading and error can never both show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indicator {
    #[default]
    Idle,
    Loading,
    Failed,
}

/// Everything the page shows, as named fields
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    pub indicator: Indicator,
    pub results: ResultsView,
    pub validation_message: Option<String>,
    pub modal_visible: bool,
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        self.indicator == Indicator::Loading
    }

    pub fn is_error_visible(&self) -> bool {
        self.indicator == Indicator::Failed
    }
}

/// What a single trigger of [`SearchController::submit`] ended in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Input had no ingredients; nothing was sent
    Invalid,
    /// Another search was still in flight; this trigger was ignored
    Busy,
    /// Cards were rendered for this many recipes
    Rendered(usize),
    /// The backend found nothing
    NoResults,
    /// The request failed; the error indicator is shown
    Failed,
}

/// Held for the duration of one search. Dropping it, on completion or when the
/// search future is dropped mid-flight, hides the loading indicator and clears
/// the in-flight flag.
struct InFlight<'a> {
    flag: &'a AtomicBool,
    state: &'a Mutex<UiState>,
}

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool, state: &'a Mutex<UiState>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight { flag, state })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.indicator == Indicator::Loading {
            state.indicator = Indicator::Idle;
        }
        self.flag.store(false, Ordering::Release);
    }
}

/// Owns the UI state and drives search submissions and the premium modal.
///
/// At most one search runs at a time; triggers arriving while one is in
/// flight return [`SearchOutcome::Busy`] without touching the state.
pub struct SearchController<S> {
    searcher: S,
    options: RenderOptions,
    validation_message: String,
    state: Mutex<UiState>,
    in_flight: AtomicBool,
}

impl<S: RecipeSearch> SearchController<S> {
    pub fn new(searcher: S) -> Self {
        Self::with_options(searcher, RenderOptions::default())
    }

    pub fn with_options(searcher: S, options: RenderOptions) -> Self {
        Self {
            searcher,
            options,
            validation_message: DEFAULT_VALIDATION_MESSAGE.to_string(),
            state: Mutex::new(UiState::default()),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn validation_message(mut self, message: impl Into<String>) -> Self {
        self.validation_message = message.into();
        self
    }

    fn state(&self) -> MutexGuard<'_, UiState> {
        // State is plain data, a panic elsewhere cannot leave it half-written.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current UI state
    pub fn snapshot(&self) -> UiState {
        self.state().clone()
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Validate `raw`, run one search and render its outcome.
    pub async fn submit(&self, raw: &str) -> SearchOutcome {
        let ingredients = match IngredientList::parse(raw) {
            Ok(ingredients) => ingredients,
            Err(_) => {
                self.state().validation_message = Some(self.validation_message.clone());
                return SearchOutcome::Invalid;
            }
        };

        let Some(_guard) = InFlight::acquire(&self.in_flight, &self.state) else {
            warn!("Search already in progress, ignoring {:?}", raw);
            return SearchOutcome::Busy;
        };

        {
            let mut state = self.state();
            state.indicator = Indicator::Loading;
            state.validation_message = None;
            state.results = ResultsView::Cleared;
        }

        let result = self.searcher.search(&ingredients).await;

        let mut state = self.state();
        match result {
            Ok(recipes) => {
                state.results = render_results(&recipes, &self.options);
                state.indicator = Indicator::Idle;
                if recipes.is_empty() {
                    SearchOutcome::NoResults
                } else {
                    SearchOutcome::Rendered(recipes.len())
                }
            }
            Err(err) => {
                log_failure(&err);
                state.results = ResultsView::Cleared;
                state.indicator = Indicator::Failed;
                SearchOutcome::Failed
            }
        }
    }

    /// Show the premium payment modal
    pub fn show_modal(&self) {
        self.state().modal_visible = true;
    }

    /// Hide the premium payment modal
    pub fn hide_modal(&self) {
        self.state().modal_visible = false;
    }
}

fn log_failure(err: &SearchError) {
    error!("Error fetching recipes: {}", err);
}
