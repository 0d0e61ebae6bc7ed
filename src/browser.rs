use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, warn};
use tokio::sync::RwLock;

use crate::client::MealSource;
use crate::error::ApiError;
use crate::filter::{apply_filters, FilterState};
use crate::model::Meal;
use crate::sample::sample_meals;

/// Owned, immutable view of the browser at one point in time. Presentation
/// layers poll this instead of reaching into shared mutable fields.
#[derive(Debug, Clone)]
pub struct BrowserSnapshot {
    /// The unfiltered pool currently loaded, replaced wholesale per operation
    pub pool: Vec<Meal>,
    /// The pool after category and search filtering
    pub displayed: Vec<Meal>,
    /// Category names for the filter list
    pub categories: Vec<String>,
    /// Current search text and selected category
    pub filter: FilterState,
    /// Detail record selected via [`MealBrowser::load_meal_detail`]
    pub selected_meal: Option<Meal>,
    /// True while a load operation is in flight
    pub loading: bool,
}

#[derive(Debug, Default)]
struct BrowserState {
    pool: Vec<Meal>,
    displayed: Vec<Meal>,
    categories: Vec<String>,
    filter: FilterState,
    selected_meal: Option<Meal>,
    loading: bool,
}

impl BrowserState {
    fn refresh_displayed(&mut self) {
        self.displayed = apply_filters(
            &self.pool,
            &self.filter.search,
            self.filter.category.as_deref(),
        );
    }
}

/// Aggregating state holder over a [`MealSource`].
///
/// Each load operation replaces the pool wholesale on completion. Operations
/// may overlap; a monotonic generation counter makes sure only the newest
/// operation's completion writes the pool or clears the loading flag, so a
/// stale response can never clobber a fresher one.
pub struct MealBrowser<S> {
    source: S,
    state: RwLock<BrowserState>,
    generation: AtomicU64,
}

impl<S: MealSource> MealBrowser<S> {
    pub fn new(source: S) -> Self {
        MealBrowser {
            source,
            state: RwLock::new(BrowserState::default()),
            generation: AtomicU64::new(0),
        }
    }

    pub async fn snapshot(&self) -> BrowserSnapshot {
        let state = self.state.read().await;
        BrowserSnapshot {
            pool: state.pool.clone(),
            displayed: state.displayed.clone(),
            categories: state.categories.clone(),
            filter: state.filter.clone(),
            selected_meal: state.selected_meal.clone(),
            loading: state.loading,
        }
    }

    /// Load the default pool: one smoke-test search plus the Filipino area and
    /// the Seafood, Beef and Chicken categories, fetched independently and
    /// merged in that order with first-occurrence-wins deduplication by id.
    ///
    /// An empty merge falls back to a plain chicken search; if that too is
    /// empty, the built-in sample set keeps the listing non-blank.
    pub async fn load_all(&self) {
        let generation = self.begin().await;

        let (smoke, filipino, seafood, beef, chicken) = tokio::join!(
            self.source.search_meals("chicken"),
            self.source.meals_by_area("Filipino"),
            self.source.meals_by_category("Seafood"),
            self.source.meals_by_category("Beef"),
            self.source.meals_by_category("Chicken"),
        );

        let mut combined = Vec::new();
        for (context, result) in [
            ("smoke-test search", smoke),
            ("Filipino area", filipino),
            ("Seafood category", seafood),
            ("Beef category", beef),
            ("Chicken category", chicken),
        ] {
            combined.extend(empty_on_error(context, result));
        }
        let mut pool = dedup_by_id(combined);

        if pool.is_empty() {
            pool = empty_on_error(
                "broad chicken search",
                self.source.search_meals("chicken").await,
            );
        }
        if pool.is_empty() {
            debug!("all network paths empty, using built-in sample meals");
            pool = sample_meals();
        }

        self.finish(generation, pool).await;
    }

    /// Refresh the category filter list. A failed listing degrades to the
    /// categories present in the current pool, skipping blanks and the
    /// service's "N/A" sentinel.
    pub async fn load_categories(&self) {
        match self.source.categories().await {
            Ok(categories) => {
                let names = categories.into_iter().filter_map(|c| c.name).collect();
                self.state.write().await.categories = sorted_distinct(names);
            }
            Err(e) => {
                warn!("category listing failed, deriving from loaded meals: {e}");
                let mut state = self.state.write().await;
                let names = state
                    .pool
                    .iter()
                    .filter_map(|meal| meal.category.clone())
                    .filter(|c| !c.trim().is_empty() && c != "N/A")
                    .collect();
                state.categories = sorted_distinct(names);
            }
        }
    }

    /// Select a category (or `None` for "all") and reload the pool for it.
    pub async fn select_category(&self, category: Option<&str>) {
        {
            let mut state = self.state.write().await;
            state.filter.category = category.map(str::to_owned);
        }

        match category {
            None => self.load_all().await,
            // Filipino is an area in the remote service, not a category
            Some(c) if c.eq_ignore_ascii_case("Filipino") => self.load_filipino().await,
            Some(c) => self.load_for_category(c).await,
        }
    }

    /// Update the search text and recompute the displayed set.
    pub async fn set_search(&self, query: impl Into<String>) {
        let mut state = self.state.write().await;
        state.filter.search = query.into();
        state.refresh_displayed();
    }

    /// Reset search and category, then reload the default pool.
    pub async fn clear_filters(&self) {
        {
            let mut state = self.state.write().await;
            state.filter = FilterState::default();
        }
        self.load_all().await;
    }

    /// Fetch the full record for one meal. A blank id is a no-op; a failed or
    /// empty lookup clears any previously selected detail.
    pub async fn load_meal_detail(&self, id: &str) {
        if id.trim().is_empty() {
            return;
        }
        let detail = match self.source.meal_by_id(id).await {
            Ok(meal) => meal,
            Err(e) => {
                warn!("detail lookup failed for meal {id}: {e}");
                None
            }
        };
        self.state.write().await.selected_meal = detail;
    }

    async fn load_filipino(&self) {
        let generation = self.begin().await;
        let pool = empty_on_error(
            "Filipino area",
            self.source.meals_by_area("Filipino").await,
        );
        // raw replacement, no merge with the prior pool
        self.finish(generation, pool).await;
    }

    async fn load_for_category(&self, category: &str) {
        let generation = self.begin().await;

        let mut pool = empty_on_error(
            "category filter",
            self.source.meals_by_category(category).await,
        );

        // The filter endpoint knows nothing about some categories; retry as a
        // name search and keep only results that explicitly carry the category.
        if pool.is_empty() {
            let results = empty_on_error(
                "category name search",
                self.source.search_meals(category).await,
            );
            let wanted = category.trim();
            pool = results
                .into_iter()
                .filter(|meal| {
                    meal.category
                        .as_deref()
                        .map(|c| c.trim().eq_ignore_ascii_case(wanted))
                        .unwrap_or(false)
                })
                .collect();
        }

        if pool.is_empty() {
            let query = fallback_query(category);
            debug!("category '{category}' empty twice, searching '{query}' instead");
            pool = empty_on_error("fallback search", self.source.search_meals(query).await);
        }

        self.finish(generation, pool).await;
    }

    /// Start a load operation: bump the generation and raise the loading flag.
    async fn begin(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.write().await.loading = true;
        generation
    }

    /// Complete a load operation. Stale completions (a newer operation has
    /// begun since) are discarded without touching the pool or loading flag.
    async fn finish(&self, generation: u64, pool: Vec<Meal>) {
        let mut state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("discarding stale load completion (generation {generation})");
            return;
        }
        state.pool = pool;
        state.loading = false;
        state.refresh_displayed();
    }
}

fn empty_on_error(context: &str, result: Result<Vec<Meal>, ApiError>) -> Vec<Meal> {
    match result {
        Ok(meals) => meals,
        Err(e) => {
            warn!("{context} query failed, treating as empty: {e}");
            Vec::new()
        }
    }
}

fn dedup_by_id(meals: Vec<Meal>) -> Vec<Meal> {
    let mut seen = HashSet::new();
    meals
        .into_iter()
        .filter(|meal| seen.insert(meal.id.clone()))
        .collect()
}

fn sorted_distinct(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names.dedup();
    names
}

/// Last-resort search query per category when both the category filter and a
/// name search come back empty.
fn fallback_query(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "seafood" => "fish",
        "beef" => "beef",
        "chicken" => "chicken",
        "pork" => "pork",
        "dessert" => "cake",
        _ => "chicken",
    }
}
