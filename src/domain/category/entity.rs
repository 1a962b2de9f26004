// src/domain/category/entity.rs
use crate::domain::category::value_objects::{CategoryId, CategoryTitle};
use crate::domain::slug::Slug;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub title: CategoryTitle,
    pub slug: Slug,
    pub created_date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub title: CategoryTitle,
    pub slug: Slug,
    pub created_date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub title: CategoryTitle,
    pub slug: Slug,
}
