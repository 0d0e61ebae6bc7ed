use serde::Deserialize;

/// A single dish record as returned by TheMealDB.
///
/// Apart from the id, every field in the wire format may be absent or null;
/// the id is the deduplication key when query results are merged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal", default)]
    pub name: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
}

/// A recipe category from the `categories.php` listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    #[serde(rename = "idCategory", default)]
    pub id: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub name: Option<String>,
    #[serde(rename = "strCategoryDescription", default)]
    pub description: Option<String>,
    #[serde(rename = "strCategoryThumb", default)]
    pub thumbnail: Option<String>,
}

/// Envelope for every meal-returning endpoint. The service signals "no
/// results" with a JSON `null` rather than an empty array, so the field is
/// optional and flattened away by [`MealsResponse::into_meals`].
#[derive(Debug, Deserialize)]
pub struct MealsResponse {
    #[serde(default)]
    pub meals: Option<Vec<Meal>>,
}

impl MealsResponse {
    pub fn into_meals(self) -> Vec<Meal> {
        self.meals.unwrap_or_default()
    }
}

/// Envelope for `categories.php`, with the same null-means-empty convention.
#[derive(Debug, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
}

impl CategoriesResponse {
    pub fn into_categories(self) -> Vec<Category> {
        self.categories.unwrap_or_default()
    }
}
