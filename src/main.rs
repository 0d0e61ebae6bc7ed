use std::env;

use kusina::{
    guess_category, ClientConfig, Meal, MealBrowser, MealDbClient, MealSource,
};

const USAGE: &str = "usage: kusina <search TEXT | category NAME | area NAME | lookup ID | categories | browse>";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).ok_or(USAGE)?;

    let config = ClientConfig::load()?;
    let client = MealDbClient::new(&config)?;

    match command.as_str() {
        "search" => {
            let text = args.get(2).ok_or(USAGE)?;
            print_meals(&client.search_meals(text).await?);
        }
        "category" => {
            let name = args.get(2).ok_or(USAGE)?;
            print_meals(&client.meals_by_category(name).await?);
        }
        "area" => {
            let name = args.get(2).ok_or(USAGE)?;
            print_meals(&client.meals_by_area(name).await?);
        }
        "lookup" => {
            let id = args.get(2).ok_or(USAGE)?;
            match client.meal_by_id(id).await? {
                Some(meal) => print_detail(&meal),
                None => println!("no meal with id {id}"),
            }
        }
        "categories" => {
            for category in client.categories().await? {
                if let Some(name) = category.name {
                    println!("{name}");
                }
            }
        }
        "browse" => {
            // Full aggregation pass, like the app's home screen
            let browser = MealBrowser::new(client);
            browser.load_all().await;
            browser.load_categories().await;

            let snapshot = browser.snapshot().await;
            println!("categories: {}", snapshot.categories.join(", "));
            print_meals(&snapshot.displayed);
        }
        _ => return Err(USAGE.into()),
    }

    Ok(())
}

fn print_meals(meals: &[Meal]) {
    if meals.is_empty() {
        println!("no meals found");
        return;
    }
    for meal in meals {
        let name = meal.name.as_deref().unwrap_or("(unnamed)");
        // filter endpoints omit the category; guess one for display
        let category = match meal.category.as_deref() {
            Some(c) if !c.trim().is_empty() && c != "N/A" => c,
            _ => guess_category(meal.name.as_deref(), meal.instructions.as_deref()),
        };
        println!("{:>6}  [{category}] {name}", meal.id);
    }
}

fn print_detail(meal: &Meal) {
    println!("{}", meal.name.as_deref().unwrap_or("(unnamed)"));
    if let Some(category) = &meal.category {
        println!("category: {category}");
    }
    if let Some(thumbnail) = &meal.thumbnail {
        println!("thumbnail: {thumbnail}");
    }
    if let Some(instructions) = &meal.instructions {
        println!("\n{instructions}");
    }
}
