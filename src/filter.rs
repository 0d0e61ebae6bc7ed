use crate::model::Meal;

/// The user-controlled inputs to filtering. The displayed set is always a
/// pure function of the aggregated pool and this state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-form search text, matched case-insensitively as a substring
    pub search: String,
    /// Selected category; `None` means "all"
    pub category: Option<String>,
}

/// Filter the aggregated pool down to the displayed set.
///
/// A selected category retains a meal either by exact match on its trimmed
/// explicit category, or, failing that, when [`infer_category`] on the meal
/// name yields the selected category. Non-empty search text then narrows the
/// result to meals whose name contains it, case-insensitively. Order is
/// preserved throughout.
pub fn apply_filters(meals: &[Meal], search: &str, category: Option<&str>) -> Vec<Meal> {
    let search = search.trim().to_lowercase();

    let mut filtered: Vec<Meal> = match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(selected) => meals
            .iter()
            .filter(|meal| {
                let explicit = meal.category.as_deref().map(str::trim);
                if explicit == Some(selected) {
                    true
                } else {
                    infer_category(meal.name.as_deref()) == selected
                }
            })
            .cloned()
            .collect(),
        None => meals.to_vec(),
    };

    if !search.is_empty() {
        filtered.retain(|meal| {
            meal.name
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&search)
        });
    }

    filtered
}

/// Infer a category from a meal name. First match wins, in table order; a
/// blank or absent name yields the empty string, which matches no category.
pub fn infer_category(name: Option<&str>) -> &'static str {
    let name = match name {
        Some(n) if !n.trim().is_empty() => n.to_lowercase(),
        _ => return "",
    };

    if name.contains("chicken") {
        "Chicken"
    } else if name.contains("beef") {
        "Beef"
    } else if name.contains("pork") {
        "Pork"
    } else if name.contains("fish")
        || name.contains("seafood")
        || name.contains("salmon")
        || name.contains("tuna")
    {
        "Seafood"
    } else if name.contains("cake")
        || name.contains("dessert")
        || name.contains("ice cream")
        || name.contains("halo")
    {
        "Dessert"
    } else if name.contains("soup") {
        "Soup"
    } else if name.contains("salad") {
        "Salad"
    } else if name.contains("pasta") || name.contains("noodle") {
        "Pasta"
    } else if name.contains("rice") {
        "Rice"
    } else if name.contains("egg") {
        "Breakfast"
    } else {
        "Miscellaneous"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(id: &str, name: &str, category: Option<&str>) -> Meal {
        Meal {
            id: id.to_string(),
            name: Some(name.to_string()),
            category: category.map(str::to_string),
            instructions: None,
            thumbnail: None,
        }
    }

    #[test]
    fn no_filters_returns_pool_unchanged() {
        let pool = vec![
            meal("1", "Chicken Adobo", Some("Chicken")),
            meal("2", "Halo-Halo", Some("Dessert")),
        ];
        assert_eq!(apply_filters(&pool, "", None), pool);
    }

    #[test]
    fn explicit_category_wins_regardless_of_name() {
        let pool = vec![meal("1", "Mystery Stew", Some("Seafood"))];
        let filtered = apply_filters(&pool, "", Some("Seafood"));
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn blank_category_falls_back_to_name_inference() {
        // "tuna" places this in Seafood before "salad" is ever considered
        let pool = vec![meal("1", "Tuna Salad", None)];
        assert_eq!(apply_filters(&pool, "", Some("Seafood")).len(), 1);
        assert!(apply_filters(&pool, "", Some("Salad")).is_empty());
    }

    #[test]
    fn category_match_trims_both_sides() {
        let pool = vec![meal("1", "Bistek", Some("  Beef  "))];
        assert_eq!(apply_filters(&pool, "", Some(" Beef ")).len(), 1);
    }

    #[test]
    fn explicit_category_match_is_case_sensitive() {
        let pool = vec![meal("1", "Kare-Kare", Some("beef"))];
        // lower-case explicit category fails the exact match, and the name
        // does not infer Beef either
        assert!(apply_filters(&pool, "", Some("Beef")).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let pool = vec![
            meal("1", "Chicken Adobo", Some("Chicken")),
            meal("2", "Sinigang na Isda", Some("Seafood")),
        ];
        let filtered = apply_filters(&pool, "  ADOBO ", None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn search_and_category_compose_by_intersection() {
        let pool = vec![
            meal("1", "Chicken Adobo", Some("Chicken")),
            meal("2", "Chicken Curry", Some("Chicken")),
            meal("3", "Pork Adobo", Some("Pork")),
        ];
        let filtered = apply_filters(&pool, "adobo", Some("Chicken"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn nameless_meal_is_dropped_by_search() {
        let mut nameless = meal("1", "x", None);
        nameless.name = None;
        assert!(apply_filters(&[nameless], "adobo", None).is_empty());
    }

    #[test]
    fn inference_first_match_wins() {
        // "chicken" is checked before "rice"
        assert_eq!(infer_category(Some("Chicken Fried Rice")), "Chicken");
        // "fish" before "soup"
        assert_eq!(infer_category(Some("Fish Soup")), "Seafood");
    }

    #[test]
    fn inference_table() {
        assert_eq!(infer_category(Some("Beef Caldereta")), "Beef");
        assert_eq!(infer_category(Some("Lechon with Pork Rind")), "Pork");
        assert_eq!(infer_category(Some("Halo-Halo Special")), "Dessert");
        assert_eq!(infer_category(Some("Pancit Noodles")), "Pasta");
        assert_eq!(infer_category(Some("Garlic Rice")), "Rice");
        assert_eq!(infer_category(Some("Scrambled Egg")), "Breakfast");
        assert_eq!(infer_category(Some("Sisig")), "Miscellaneous");
    }

    #[test]
    fn blank_name_infers_nothing() {
        assert_eq!(infer_category(None), "");
        assert_eq!(infer_category(Some("   ")), "");
    }
}
