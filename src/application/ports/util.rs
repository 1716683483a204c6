// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Never returns an empty string.
    fn slugify(&self, input: &str) -> String;
}
