use crate::model::Meal;

/// Fixed offline fallback shown when every network path yields nothing, so a
/// listing is never blank. Ids "1" through "5" are reserved for these.
pub fn sample_meals() -> Vec<Meal> {
    fn meal(id: &str, name: &str, category: &str, instructions: &str) -> Meal {
        Meal {
            id: id.to_string(),
            name: Some(name.to_string()),
            category: Some(category.to_string()),
            instructions: Some(instructions.to_string()),
            thumbnail: None,
        }
    }

    vec![
        meal(
            "1",
            "Chicken Adobo",
            "Chicken",
            "A classic Filipino dish made with chicken, soy sauce, vinegar, and garlic.",
        ),
        meal(
            "2",
            "Sinigang na Isda",
            "Seafood",
            "A sour tamarind soup with fish and vegetables.",
        ),
        meal(
            "3",
            "Beef Caldereta",
            "Beef",
            "A rich beef stew with tomato sauce and vegetables.",
        ),
        meal(
            "4",
            "Lechon Kawali",
            "Pork",
            "Crispy fried pork belly, a Filipino favorite.",
        ),
        meal(
            "5",
            "Halo-Halo",
            "Dessert",
            "A colorful Filipino dessert with shaved ice, sweet beans, and ice cream.",
        ),
    ]
}
