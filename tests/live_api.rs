//! Smoke tests against the live TheMealDB endpoint.

use kusina::{ClientConfig, MealDbClient, MealSource};

/// This test is ignored by default since it requires network access
#[tokio::test]
#[ignore]
async fn live_search_returns_named_meals() {
    let client = MealDbClient::new(&ClientConfig::default()).unwrap();
    let meals = client.search_meals("chicken").await.unwrap();
    assert!(!meals.is_empty());
    assert!(meals.iter().all(|m| m.name.is_some()));
}

/// This test is ignored by default since it requires network access
#[tokio::test]
#[ignore]
async fn live_categories_include_the_staples() {
    let client = MealDbClient::new(&ClientConfig::default()).unwrap();
    let categories = client.categories().await.unwrap();
    let names: Vec<_> = categories.into_iter().filter_map(|c| c.name).collect();
    assert!(names.iter().any(|n| n == "Beef"));
    assert!(names.iter().any(|n| n == "Seafood"));
}

/// This test is ignored by default since it requires network access
#[tokio::test]
#[ignore]
async fn live_lookup_of_unknown_id_is_none() {
    let client = MealDbClient::new(&ClientConfig::default()).unwrap();
    let meal = client.meal_by_id("0").await.unwrap();
    assert!(meal.is_none());
}
