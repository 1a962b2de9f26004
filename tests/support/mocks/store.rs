// tests/support/mocks/store.rs
//! In-memory stand-in for the Postgres repositories. One store backs every
//! repository trait so cascades and joins behave like the real schema.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use recipe_core::domain::{
    category::{Category, CategoryId, CategoryRepository, CategoryUpdate, NewCategory},
    errors::{DomainError, DomainResult},
    favourite::{Favourite, FavouriteRepository},
    recipe::{
        NewRecipe, Recipe, RecipeFilter, RecipeId, RecipeReadRepository, RecipeUpdate,
        RecipeWriteRepository,
    },
    review::{NewReview, Review, ReviewId, ReviewRepository, ReviewWithAuthor},
    slug::{Slug, SlugLookup, SlugScope},
    user::{NewUser, Role, User, UserId, UserRepository, UserUpdate},
};
use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Debug, Default)]
struct Tables {
    next_id: i64,
    users: Vec<User>,
    categories: Vec<Category>,
    recipes: Vec<Recipe>,
    reviews: Vec<Review>,
    favourites: Vec<Favourite>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn username(&self, id: UserId) -> Option<&str> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .map(|user| user.username.as_str())
    }

    fn matches(&self, recipe: &Recipe, filter: &RecipeFilter) -> bool {
        if filter.author_id.is_some_and(|author| recipe.author_id != author) {
            return false;
        }
        if filter
            .category_id
            .is_some_and(|category| recipe.category_id != category)
        {
            return false;
        }
        let Some(term) = filter.search.as_deref() else {
            return true;
        };
        let needle = term.to_lowercase();
        recipe.title.as_str().to_lowercase().contains(&needle)
            || recipe.ingredients.as_str().to_lowercase().contains(&needle)
            || self.reviews.iter().any(|review| {
                review.recipe_id == recipe.id
                    && self
                        .username(review.user_id)
                        .is_some_and(|name| name.to_lowercase().contains(&needle))
            })
    }

    fn filtered(&self, filter: &RecipeFilter) -> Vec<Recipe> {
        let mut rows: Vec<Recipe> = self
            .recipes
            .iter()
            .filter(|recipe| self.matches(recipe, filter))
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.0.cmp(&a.id.0))
        });
        rows
    }

    fn drop_recipe(&mut self, id: RecipeId) {
        self.recipes.retain(|recipe| recipe.id != id);
        self.reviews.retain(|review| review.recipe_id != id);
        self.favourites.retain(|fav| fav.recipe_id != id);
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn favourite_count(&self) -> usize {
        self.tables.lock().unwrap().favourites.len()
    }

    pub fn has_favourite(&self, user_id: i64, recipe_id: i64) -> bool {
        self.tables
            .lock()
            .unwrap()
            .favourites
            .iter()
            .any(|fav| fav.user_id.0 == user_id && fav.recipe_id.0 == recipe_id)
    }

    pub fn recipe_count(&self) -> usize {
        self.tables.lock().unwrap().recipes.len()
    }

    pub fn user(&self, username: &str) -> Option<User> {
        self.tables
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|user| user.username.as_str() == username)
            .cloned()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut tables = self.tables.lock().unwrap();
        if tables.users.iter().any(|u| u.username == new_user.username) {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        if tables.users.iter().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict("email is already in use".into()));
        }
        let user = User {
            id: UserId(tables.next_id()),
            username: new_user.username,
            email: new_user.email,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            password_hash: new_user.password_hash,
            role: if tables.users.is_empty() {
                Role::Admin
            } else {
                new_user.role
            },
            is_active: new_user.is_active,
            created_at: new_user.created_at,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(
        &self,
        username: &recipe_core::domain::user::Username,
    ) -> DomainResult<Option<User>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| &u.username == username).cloned())
    }

    async fn find_by_email(
        &self,
        email: &recipe_core::domain::user::Email,
    ) -> DomainResult<Option<User>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| &u.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut tables = self.tables.lock().unwrap();
        let user = tables
            .users
            .iter_mut()
            .find(|u| u.id == update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(first_name) = update.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            user.last_name = last_name;
        }
        if let Some(password_hash) = update.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(is_active) = update.is_active {
            user.is_active = is_active;
        }
        Ok(user.clone())
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut tables = self.tables.lock().unwrap();
        if tables.categories.iter().any(|c| c.title == category.title) {
            return Err(DomainError::Conflict("category title already exists".into()));
        }
        if tables.categories.iter().any(|c| c.slug == category.slug) {
            return Err(DomainError::Conflict("category slug already exists".into()));
        }
        let row = Category {
            id: CategoryId(tables.next_id()),
            title: category.title,
            slug: category.slug,
            created_date: category.created_date,
        };
        tables.categories.push(row.clone());
        Ok(row)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut tables = self.tables.lock().unwrap();
        if tables
            .categories
            .iter()
            .any(|c| c.id != update.id && c.title == update.title)
        {
            return Err(DomainError::Conflict("category title already exists".into()));
        }
        let row = tables
            .categories
            .iter_mut()
            .find(|c| c.id == update.id)
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        row.title = update.title;
        row.slug = update.slug;
        Ok(row.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.categories.iter().any(|c| c.id == id) {
            return Err(DomainError::NotFound("category not found".into()));
        }
        tables.categories.retain(|c| c.id != id);
        let doomed: Vec<RecipeId> = tables
            .recipes
            .iter()
            .filter(|r| r.category_id == id)
            .map(|r| r.id)
            .collect();
        for recipe_id in doomed {
            tables.drop_recipe(recipe_id);
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let tables = self.tables.lock().unwrap();
        let mut rows = tables.categories.clone();
        rows.sort_by(|a, b| {
            a.title
                .as_str()
                .cmp(b.title.as_str())
                .then_with(|| a.id.0.cmp(&b.id.0))
        });
        Ok(rows)
    }
}

#[async_trait]
impl RecipeWriteRepository for MemoryStore {
    async fn insert(&self, recipe: NewRecipe) -> DomainResult<Recipe> {
        let mut tables = self.tables.lock().unwrap();
        if tables.recipes.iter().any(|r| r.slug == recipe.slug) {
            return Err(DomainError::Conflict("recipe slug already exists".into()));
        }
        if !tables.categories.iter().any(|c| c.id == recipe.category_id) {
            return Err(DomainError::NotFound("category not found".into()));
        }
        let row = Recipe {
            id: RecipeId(tables.next_id()),
            author_id: recipe.author_id,
            category_id: recipe.category_id,
            title: recipe.title,
            slug: recipe.slug,
            instructions: recipe.instructions,
            ingredients: recipe.ingredients,
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            servings: recipe.servings,
            image: recipe.image,
            created_at: recipe.created_at,
            updated_at: recipe.created_at,
        };
        tables.recipes.push(row.clone());
        Ok(row)
    }

    async fn update(&self, update: RecipeUpdate) -> DomainResult<Recipe> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(slug) = &update.slug {
            if tables
                .recipes
                .iter()
                .any(|r| r.id != update.id && &r.slug == slug)
            {
                return Err(DomainError::Conflict("recipe slug already exists".into()));
            }
        }
        let row = tables
            .recipes
            .iter_mut()
            .find(|r| r.id == update.id)
            .ok_or_else(|| DomainError::NotFound("recipe not found".into()))?;
        if let Some(category_id) = update.category_id {
            row.category_id = category_id;
        }
        if let Some(title) = update.title {
            row.title = title;
        }
        if let Some(slug) = update.slug {
            row.slug = slug;
        }
        if let Some(instructions) = update.instructions {
            row.instructions = instructions;
        }
        if let Some(ingredients) = update.ingredients {
            row.ingredients = ingredients;
        }
        if let Some(prep_time) = update.prep_time {
            row.prep_time = prep_time;
        }
        if let Some(cook_time) = update.cook_time {
            row.cook_time = cook_time;
        }
        if let Some(servings) = update.servings {
            row.servings = servings;
        }
        if let Some(image) = update.image {
            row.image = image;
        }
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: RecipeId) -> DomainResult<()> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.recipes.iter().any(|r| r.id == id) {
            return Err(DomainError::NotFound("recipe not found".into()));
        }
        tables.drop_recipe(id);
        Ok(())
    }
}

#[async_trait]
impl RecipeReadRepository for MemoryStore {
    async fn find_by_id(&self, id: RecipeId) -> DomainResult<Option<Recipe>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.recipes.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Recipe>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.recipes.iter().find(|r| &r.slug == slug).cloned())
    }

    async fn list(&self, filter: &RecipeFilter, limit: Option<u32>) -> DomainResult<Vec<Recipe>> {
        let mut rows = self.tables.lock().unwrap().filtered(filter);
        if let Some(limit) = limit {
            rows.truncate(limit as usize);
        }
        Ok(rows)
    }

    async fn list_page(
        &self,
        filter: &RecipeFilter,
        limit: u32,
        offset: u64,
    ) -> DomainResult<(Vec<Recipe>, u64)> {
        let rows = self.tables.lock().unwrap().filtered(filter);
        let total = rows.len() as u64;
        let page = rows
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn list_favourited_by(&self, user_id: UserId) -> DomainResult<Vec<Recipe>> {
        let tables = self.tables.lock().unwrap();
        let mut favourites: Vec<&Favourite> = tables
            .favourites
            .iter()
            .filter(|fav| fav.user_id == user_id)
            .collect();
        favourites.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.recipe_id.0.cmp(&a.recipe_id.0))
        });
        Ok(favourites
            .into_iter()
            .filter_map(|fav| tables.recipes.iter().find(|r| r.id == fav.recipe_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ReviewRepository for MemoryStore {
    async fn insert(&self, review: NewReview) -> DomainResult<Review> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.recipes.iter().any(|r| r.id == review.recipe_id) {
            return Err(DomainError::NotFound("recipe not found".into()));
        }
        let row = Review {
            id: ReviewId(tables.next_id()),
            recipe_id: review.recipe_id,
            user_id: review.user_id,
            comment: review.comment,
            rating: review.rating,
            created_date: review.created_date,
        };
        tables.reviews.push(row.clone());
        Ok(row)
    }

    async fn list_for_recipes(
        &self,
        recipe_ids: &[RecipeId],
    ) -> DomainResult<Vec<ReviewWithAuthor>> {
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<ReviewWithAuthor> = tables
            .reviews
            .iter()
            .filter(|review| recipe_ids.contains(&review.recipe_id))
            .map(|review| ReviewWithAuthor {
                review: review.clone(),
                username: tables.username(review.user_id).unwrap_or_default().to_string(),
            })
            .collect();
        rows.sort_by_key(|row| (row.review.recipe_id.0, row.review.id.0));
        Ok(rows)
    }
}

#[async_trait]
impl FavouriteRepository for MemoryStore {
    async fn get_or_create(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
        now: DateTime<Utc>,
    ) -> DomainResult<(Favourite, bool)> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(existing) = tables
            .favourites
            .iter()
            .find(|fav| fav.user_id == user_id && fav.recipe_id == recipe_id)
        {
            return Ok((existing.clone(), false));
        }
        if !tables.recipes.iter().any(|r| r.id == recipe_id) {
            return Err(DomainError::NotFound("recipe not found".into()));
        }
        let favourite = Favourite {
            user_id,
            recipe_id,
            created_at: now,
        };
        tables.favourites.push(favourite.clone());
        Ok((favourite, true))
    }

    async fn find(&self, user_id: UserId, recipe_id: RecipeId) -> DomainResult<Option<Favourite>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .favourites
            .iter()
            .find(|fav| fav.user_id == user_id && fav.recipe_id == recipe_id)
            .cloned())
    }

    async fn delete(&self, user_id: UserId, recipe_id: RecipeId) -> DomainResult<bool> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.favourites.len();
        tables
            .favourites
            .retain(|fav| !(fav.user_id == user_id && fav.recipe_id == recipe_id));
        Ok(tables.favourites.len() < before)
    }

    async fn favourited_among(
        &self,
        user_id: UserId,
        recipe_ids: &[RecipeId],
    ) -> DomainResult<HashSet<RecipeId>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .favourites
            .iter()
            .filter(|fav| fav.user_id == user_id && recipe_ids.contains(&fav.recipe_id))
            .map(|fav| fav.recipe_id)
            .collect())
    }
}

#[async_trait]
impl SlugLookup for MemoryStore {
    async fn contains_match(
        &self,
        scope: SlugScope,
        candidate: &str,
        exclude_id: Option<i64>,
    ) -> DomainResult<bool> {
        let tables = self.tables.lock().unwrap();
        let needle = candidate.to_lowercase();
        let hit = |id: i64, slug: &Slug| {
            Some(id) != exclude_id && slug.as_str().to_lowercase().contains(&needle)
        };
        Ok(match scope {
            SlugScope::Recipe => tables.recipes.iter().any(|r| hit(r.id.0, &r.slug)),
            SlugScope::Category => tables.categories.iter().any(|c| hit(c.id.0, &c.slug)),
        })
    }
}
