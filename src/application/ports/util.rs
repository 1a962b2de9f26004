// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Lowercase, hyphen-separated ASCII form of `input`. May be empty.
    fn slugify(&self, input: &str) -> String;

    /// `len` random lowercase ASCII letters.
    fn random_suffix(&self, len: usize) -> String;
}
