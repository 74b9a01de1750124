//! Category display formatting

use crate::models::{Category, CategorySource};

/// Format the merged category list
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'expensio init' to create default categories."
            .to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {}\n",
        "ID",
        "Name",
        "Source",
        name_width = name_width
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:-<7}\n",
        "",
        "",
        "",
        name_width = name_width
    ));

    for category in categories {
        let source = match category.source {
            CategorySource::User => "custom",
            CategorySource::Default => "default",
        };
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {}\n",
            category.id.to_string(),
            category.name,
            source,
            name_width = name_width
        ));
    }

    output
}
