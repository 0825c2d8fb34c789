//! Slug derivation for project titles.
//!
//! Slugs are derived once at creation time and never change afterwards;
//! they are the stable identifier external links use. Uniqueness is
//! enforced by the database, not here.

/// Derive a URL-safe slug from a title.
///
/// Lowercases the title, keeps ASCII alphanumerics, and collapses every
/// other run of characters into a single hyphen. Leading and trailing
/// hyphens are stripped.
///
/// # Examples
///
/// ```
/// use portfolio_core::slug::slugify;
///
/// assert_eq!(slugify("Logo Set"), "logo-set");
/// assert_eq!(slugify("  Print -- Posters 2024  "), "print-posters-2024");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
