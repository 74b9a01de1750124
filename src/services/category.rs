//! Category service
//!
//! Combines the user's categories with the built-in defaults and resolves
//! the category a user typed into a form.

use std::collections::HashSet;

use crate::models::{Category, CategoryId};

/// Merge user and default categories into one list
///
/// User categories come first, in their original order. A default category
/// is dropped when a category with the same name is already in the list, so
/// the result never holds two categories with one name.
pub fn merge_categories(user: Vec<Category>, defaults: Vec<Category>) -> Vec<Category> {
    let mut seen = HashSet::new();
    user.into_iter()
        .chain(defaults)
        .filter(|c| seen.insert(c.name.clone()))
        .collect()
}

/// Find a category by id (full or `cat-` short form) or by name
///
/// Name matching is exact first, then case-insensitive.
pub fn resolve_category<'a>(categories: &'a [Category], identifier: &str) -> Option<&'a Category> {
    let identifier = identifier.trim();

    if let Ok(id) = identifier.parse::<CategoryId>() {
        if let Some(category) = categories.iter().find(|c| c.id == id) {
            return Some(category);
        }
    }

    categories
        .iter()
        .find(|c| c.id.to_string() == identifier)
        .or_else(|| categories.iter().find(|c| c.name == identifier))
        .or_else(|| {
            categories
                .iter()
                .find(|c| c.name.to_lowercase() == identifier.to_lowercase())
        })
}
