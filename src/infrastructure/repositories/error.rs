use crate::domain::errors::DomainError;

const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_CATEGORY_TITLE: &str = "categories_title_key";
const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_RECIPE_SLUG: &str = "recipes_slug_key";
const CNT_RECIPE_AUTHOR: &str = "recipes_author_id_fkey";
const CNT_RECIPE_CATEGORY: &str = "recipes_category_id_fkey";
const CNT_REVIEW_RECIPE: &str = "reviews_recipe_id_fkey";
const CNT_FAVOURITE_PAIR: &str = "favourites_pkey";
const CNT_FAVOURITE_RECIPE: &str = "favourites_recipe_id_fkey";
const CNT_REVIEW_RATING: &str = "reviews_rating_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_USER_EMAIL => DomainError::Conflict("email is already in use".into()),
                    CNT_CATEGORY_TITLE => {
                        DomainError::Conflict("category with this title already exists".into())
                    }
                    CNT_CATEGORY_SLUG | CNT_RECIPE_SLUG => {
                        DomainError::Conflict("slug already exists".into())
                    }
                    CNT_FAVOURITE_PAIR => DomainError::Conflict("favourite already exists".into()),
                    CNT_RECIPE_AUTHOR => DomainError::NotFound("author not found".into()),
                    CNT_RECIPE_CATEGORY => DomainError::NotFound("category not found".into()),
                    CNT_REVIEW_RECIPE | CNT_FAVOURITE_RECIPE => {
                        DomainError::NotFound("recipe not found".into())
                    }
                    CNT_REVIEW_RATING => {
                        DomainError::Validation("rating must be between 1 and 5".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
