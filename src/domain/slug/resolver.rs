// src/domain/slug/resolver.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SlugLookup, SlugScope};

/// Length of the random lowercase suffix appended on collision.
pub const SUFFIX_LEN: usize = 4;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 16;

/// Domain service producing slugs that are unique within a [`SlugScope`].
///
/// The collision check is a containment test: a candidate collides when any
/// existing slug of the same scope contains it, ignoring case. On collision a
/// `-xxxx` suffix is appended to the current candidate and the check repeats,
/// so candidates grow with every retry. A reserved word of the scope (see
/// [`SlugScope::reserved`]) is treated as a collision. The loop is bounded by
/// `max_attempts` attempts.
pub struct SlugResolver {
    lookup: Arc<dyn SlugLookup>,
    generator: Arc<dyn SlugGenerator>,
    max_attempts: u32,
}

impl SlugResolver {
    pub fn new(lookup: Arc<dyn SlugLookup>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            lookup,
            generator,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub async fn resolve(
        &self,
        scope: SlugScope,
        title: &str,
        exclude_id: Option<i64>,
    ) -> DomainResult<Slug> {
        let base = self.generator.slugify(title);
        let mut candidate = if base.is_empty() {
            scope.fallback().to_string()
        } else {
            base
        };

        for attempt in 1..=self.max_attempts {
            if !scope.is_reserved(&candidate)
                && !self
                    .lookup
                    .contains_match(scope, &candidate, exclude_id)
                    .await?
            {
                return Slug::new(candidate);
            }

            tracing::debug!(%scope, %candidate, attempt, "slug collision");
            let suffix = self.generator.random_suffix(SUFFIX_LEN);
            candidate = format!("{candidate}-{suffix}");
        }

        tracing::warn!(%scope, title, attempts = self.max_attempts, "slug generation exhausted");
        Err(DomainError::GenerationExhausted(format!(
            "no unique {scope} slug for '{title}' after {} attempts",
            self.max_attempts
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slug::is_slug_text;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct MemoryLookup {
        rows: Mutex<Vec<(SlugScope, i64, String)>>,
    }

    impl MemoryLookup {
        fn new(rows: &[(SlugScope, i64, &str)]) -> Self {
            Self {
                rows: Mutex::new(
                    rows.iter()
                        .map(|(scope, id, slug)| (*scope, *id, slug.to_string()))
                        .collect(),
                ),
            }
        }

        fn push(&self, scope: SlugScope, id: i64, slug: &Slug) {
            self.rows
                .lock()
                .unwrap()
                .push((scope, id, slug.as_str().to_string()));
        }
    }

    #[async_trait]
    impl SlugLookup for MemoryLookup {
        async fn contains_match(
            &self,
            scope: SlugScope,
            candidate: &str,
            exclude_id: Option<i64>,
        ) -> DomainResult<bool> {
            let needle = candidate.to_lowercase();
            Ok(self.rows.lock().unwrap().iter().any(|(s, id, slug)| {
                *s == scope
                    && Some(*id) != exclude_id
                    && slug.to_lowercase().contains(&needle)
            }))
        }
    }

    struct AlwaysCollides;

    #[async_trait]
    impl SlugLookup for AlwaysCollides {
        async fn contains_match(&self, _: SlugScope, _: &str, _: Option<i64>) -> DomainResult<bool> {
            Ok(true)
        }
    }

    struct QueuedSuffixes {
        suffixes: Mutex<VecDeque<&'static str>>,
    }

    impl QueuedSuffixes {
        fn new(suffixes: &[&'static str]) -> Self {
            Self {
                suffixes: Mutex::new(suffixes.iter().copied().collect()),
            }
        }
    }

    impl SlugGenerator for QueuedSuffixes {
        fn slugify(&self, input: &str) -> String {
            slug::slugify(input)
        }

        fn random_suffix(&self, _len: usize) -> String {
            self.suffixes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or("zzzz")
                .to_string()
        }
    }

    fn resolver(lookup: Arc<dyn SlugLookup>, suffixes: &[&'static str]) -> SlugResolver {
        SlugResolver::new(lookup, Arc::new(QueuedSuffixes::new(suffixes)))
    }

    #[tokio::test]
    async fn fresh_title_becomes_plain_slug() {
        let resolver = resolver(Arc::new(MemoryLookup::new(&[])), &[]);
        let slug = resolver
            .resolve(SlugScope::Recipe, "Chocolate Cake", None)
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "chocolate-cake");
    }

    #[tokio::test]
    async fn colliding_title_gets_random_suffix() {
        let lookup = Arc::new(MemoryLookup::new(&[(SlugScope::Recipe, 1, "chocolate-cake")]));
        let resolver = resolver(lookup, &["qwer"]);
        let slug = resolver
            .resolve(SlugScope::Recipe, "Chocolate Cake!!", None)
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "chocolate-cake-qwer");
    }

    #[tokio::test]
    async fn containment_counts_as_collision() {
        let lookup = Arc::new(MemoryLookup::new(&[(SlugScope::Recipe, 1, "chocolate-cake")]));
        let resolver = resolver(lookup, &["abcd"]);
        let slug = resolver
            .resolve(SlugScope::Recipe, "Cake", None)
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "cake-abcd");
    }

    #[tokio::test]
    async fn scopes_do_not_collide() {
        let lookup = Arc::new(MemoryLookup::new(&[(SlugScope::Category, 1, "desserts")]));
        let resolver = resolver(lookup, &[]);
        let slug = resolver
            .resolve(SlugScope::Recipe, "Desserts", None)
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "desserts");
    }

    #[tokio::test]
    async fn update_ignores_own_row() {
        let lookup = Arc::new(MemoryLookup::new(&[(SlugScope::Recipe, 7, "banana-bread")]));
        let resolver = resolver(lookup, &[]);
        let slug = resolver
            .resolve(SlugScope::Recipe, "Banana Bread", Some(7))
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "banana-bread");
    }

    #[tokio::test]
    async fn suffix_grows_while_collisions_continue() {
        let lookup = Arc::new(MemoryLookup::new(&[
            (SlugScope::Recipe, 1, "soup"),
            (SlugScope::Recipe, 2, "soup-aaaa"),
        ]));
        let resolver = resolver(lookup, &["aaaa", "bbbb"]);
        let slug = resolver
            .resolve(SlugScope::Recipe, "Soup", None)
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "soup-aaaa-bbbb");
    }

    #[tokio::test]
    async fn repeated_titles_resolve_to_distinct_slugs() {
        let lookup = Arc::new(MemoryLookup::new(&[]));
        let resolver = resolver(lookup.clone(), &["aaaa", "bbbb", "cccc"]);
        let mut seen = Vec::new();
        for id in 1..=3 {
            let slug = resolver
                .resolve(SlugScope::Category, "Quick Meals", None)
                .await
                .unwrap();
            assert!(!seen.contains(&slug));
            lookup.push(SlugScope::Category, id, &slug);
            seen.push(slug);
        }
        assert_eq!(seen[0].as_str(), "quick-meals");
    }

    #[tokio::test]
    async fn punctuation_only_title_uses_scope_fallback() {
        let resolver = resolver(Arc::new(MemoryLookup::new(&[])), &[]);
        let slug = resolver
            .resolve(SlugScope::Category, "!!!", None)
            .await
            .unwrap();
        assert_eq!(slug.as_str(), "category");
    }

    #[tokio::test]
    async fn output_is_always_slug_text() {
        let resolver = resolver(Arc::new(MemoryLookup::new(&[])), &[]);
        for title in ["Crème Brûlée", "  Mom's  BEST   chili #2 ", "pad_thai", "日本"] {
            let slug = resolver.resolve(SlugScope::Recipe, title, None).await.unwrap();
            assert!(is_slug_text(slug.as_str()), "bad slug {slug}");
        }
    }

    #[tokio::test]
    async fn reserved_recipe_words_get_a_suffix() {
        let resolver = resolver(Arc::new(MemoryLookup::new(&[])), &["abcd", "efgh"]);
        let search = resolver
            .resolve(SlugScope::Recipe, "Search", None)
            .await
            .unwrap();
        let filter = resolver
            .resolve(SlugScope::Recipe, "FILTER", None)
            .await
            .unwrap();
        assert_eq!(search.as_str(), "search-abcd");
        assert_eq!(filter.as_str(), "filter-efgh");

        let category = resolver
            .resolve(SlugScope::Category, "Search", None)
            .await
            .unwrap();
        assert_eq!(category.as_str(), "search");
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let resolver = resolver(Arc::new(AlwaysCollides), &[]).with_max_attempts(3);
        let err = resolver
            .resolve(SlugScope::Recipe, "Pie", None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::GenerationExhausted(_)));
    }
}
