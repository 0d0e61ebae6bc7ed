//! Coarse category guesser used by listing views when a meal arrives without
//! explicit category metadata (the `filter.php` endpoints omit it).
//!
//! This table is intentionally separate from the filter engine's
//! [`infer_category`](crate::filter::infer_category): it is keyed on title
//! plus ingredients, is less granular, and defaults to "Other" rather than
//! "Miscellaneous". Keep the two apart; callers depend on their differences.

/// Label/keyword table, checked in order; first label with any hit wins.
const GUESS_TABLE: &[(&str, &[&str])] = &[
    (
        "Dessert",
        &[
            "cake",
            "cookie",
            "brownie",
            "pudding",
            "dessert",
            "ice cream",
            "gelato",
            "pastry",
            "chocolate",
        ],
    ),
    (
        "Pasta",
        &[
            "pasta",
            "spaghetti",
            "lasagna",
            "penne",
            "macaroni",
            "fettuccine",
        ],
    ),
    ("Chicken", &["chicken", "fried chicken", "roast chicken"]),
    (
        "Seafood",
        &["fish", "salmon", "tuna", "shrimp", "prawn", "crab", "seafood"],
    ),
    ("Soup", &["soup", "broth", "stew", "chowder"]),
    ("Salad", &["salad", "lettuce", "greens", "vinaigrette"]),
];

/// Guess a display category from a meal title and its ingredient text.
pub fn guess_category(title: Option<&str>, ingredients: Option<&str>) -> &'static str {
    let text = format!(
        "{} {}",
        title.unwrap_or_default(),
        ingredients.unwrap_or_default()
    )
    .to_lowercase();

    for (label, keywords) in GUESS_TABLE {
        if keywords.iter().any(|keyword| text.contains(keyword)) {
            return label;
        }
    }
    "Other"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_from_title() {
        assert_eq!(guess_category(Some("Spaghetti Carbonara"), None), "Pasta");
        assert_eq!(guess_category(Some("Tinolang Manok Soup"), None), "Soup");
    }

    #[test]
    fn ingredients_contribute_to_the_guess() {
        assert_eq!(
            guess_category(Some("Sinigang"), Some("tamarind, prawn, kangkong")),
            "Seafood"
        );
    }

    #[test]
    fn table_order_decides_ties() {
        // "chocolate" (Dessert) is checked before "chicken"
        assert_eq!(
            guess_category(Some("Chocolate Chicken"), None),
            "Dessert"
        );
        // "fish" (Seafood) is checked before "stew" (Soup)
        assert_eq!(guess_category(Some("Fish Stew"), None), "Seafood");
    }

    #[test]
    fn unknown_text_is_other() {
        assert_eq!(guess_category(Some("Sisig"), None), "Other");
        assert_eq!(guess_category(None, None), "Other");
    }

    #[test]
    fn diverges_from_filter_inference_on_defaults() {
        // Same unknown input lands in "Other" here but "Miscellaneous" in the
        // filter engine's table
        assert_eq!(guess_category(Some("Sisig"), None), "Other");
        assert_eq!(crate::filter::infer_category(Some("Sisig")), "Miscellaneous");
    }
}
