// tests/support/builders.rs
use recipe_core::application::{
    commands::{categories::CreateCategoryCommand, recipes::CreateRecipeCommand},
    dto::{AuthenticatedUser, CategoryDto, RecipeDto},
};
use serde_json::{Value, json};

use super::helpers::TestApp;

pub fn recipe_command(category_id: i64, title: &str) -> CreateRecipeCommand {
    CreateRecipeCommand {
        category_id,
        title: title.into(),
        instructions: "<p>Mix and bake.</p>".into(),
        ingredients: "<ul><li>flour</li><li>sugar</li></ul>".into(),
        prep_time: 15,
        cook_time: 30,
        servings: 4,
        image: None,
    }
}

pub fn recipe_body(category_id: i64, title: &str) -> Value {
    json!({
        "category": category_id,
        "title": title,
        "instructions": "<p>Mix and bake.</p>",
        "ingredients": "<ul><li>flour</li><li>sugar</li></ul>",
        "prep_time": 15,
        "cook_time": 30,
        "servings": 4
    })
}

pub async fn seed_category(app: &TestApp, admin: &AuthenticatedUser, title: &str) -> CategoryDto {
    app.services
        .category_commands
        .create_category(admin, CreateCategoryCommand { title: title.into() })
        .await
        .expect("create category")
}

pub async fn seed_recipe(
    app: &TestApp,
    author: &AuthenticatedUser,
    category_id: i64,
    title: &str,
) -> RecipeDto {
    app.services
        .recipe_commands
        .create_recipe(author, recipe_command(category_id, title))
        .await
        .expect("create recipe")
}
