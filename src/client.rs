use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::model::{CategoriesResponse, Category, Meal, MealsResponse};

/// Query seam between the aggregation layer and the remote recipe service.
///
/// Every operation is fallible; callers decide what an error means. The
/// browser maps failures to empty results and falls back through alternate
/// queries, but nothing here swallows errors on its own.
#[async_trait]
pub trait MealSource: Send + Sync {
    /// `filter.php?c=` - meals whose category equals `category` per the service
    async fn meals_by_category(&self, category: &str) -> Result<Vec<Meal>, ApiError>;

    /// `filter.php?a=` - meals tagged with a cuisine area
    async fn meals_by_area(&self, area: &str) -> Result<Vec<Meal>, ApiError>;

    /// `lookup.php?i=` - full record for one meal, or `None` if unknown
    async fn meal_by_id(&self, id: &str) -> Result<Option<Meal>, ApiError>;

    /// `search.php?s=` - meals whose name matches `query` per the service
    async fn search_meals(&self, query: &str) -> Result<Vec<Meal>, ApiError>;

    /// `categories.php` - all known categories
    async fn categories(&self) -> Result<Vec<Category>, ApiError>;
}

/// HTTP client for TheMealDB's fixed JSON endpoints.
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(MealDbClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        MealDbClient {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get_body(&self, path: &str, query: &[(&str, &str)]) -> Result<String, ApiError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
                url,
            });
        }
        Ok(response.text().await?)
    }

    async fn get_meals(&self, path: &str, query: &[(&str, &str)]) -> Result<Vec<Meal>, ApiError> {
        let body = self.get_body(path, query).await?;
        let response: MealsResponse = serde_json::from_str(&body)?;
        let meals = response.into_meals();
        debug!("GET {}?{:?} -> {} meals", path, query, meals.len());
        Ok(meals)
    }
}

#[async_trait]
impl MealSource for MealDbClient {
    async fn meals_by_category(&self, category: &str) -> Result<Vec<Meal>, ApiError> {
        self.get_meals("filter.php", &[("c", category)]).await
    }

    async fn meals_by_area(&self, area: &str) -> Result<Vec<Meal>, ApiError> {
        self.get_meals("filter.php", &[("a", area)]).await
    }

    async fn meal_by_id(&self, id: &str) -> Result<Option<Meal>, ApiError> {
        let meals = self.get_meals("lookup.php", &[("i", id)]).await?;
        Ok(meals.into_iter().next())
    }

    async fn search_meals(&self, query: &str) -> Result<Vec<Meal>, ApiError> {
        self.get_meals("search.php", &[("s", query)]).await
    }

    async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let body = self.get_body("categories.php", &[]).await?;
        let response: CategoriesResponse = serde_json::from_str(&body)?;
        Ok(response.into_categories())
    }
}
