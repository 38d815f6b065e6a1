//! Route slugs for catalogs.
//!
//! A slug is the catalog name lower-cased with every whitespace run
//! collapsed into a single hyphen. Nothing else is stripped, so
//! `"Kids' Wear"` becomes `"kids'-wear"`.

/// Build the route slug for a catalog name.
///
/// # Примеры
/// ```
/// use contracts::domain::a001_catalog::slug::slugify;
/// assert_eq!(slugify("Football Shoes"), "football-shoes");
/// assert_eq!(slugify("Sports \t  supplies"), "sports-supplies");
/// ```
pub fn slugify(name: &str) -> String {
    // Lower-case the whole name first: final sigma depends on context.
    let lowered = name.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for ch in lowered.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;
        slug.push(ch);
    }

    slug
}
