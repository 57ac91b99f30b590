// src/application/ports/util.rs

/// Pure slugification of titles and tag names. Uniqueness is not this port's
/// concern; the slug service layers its probe loop on top.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
