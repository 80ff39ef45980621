//! Bracketed category labels. Info records carry no tag in either sink.

use super::color::{Color, colorize};
use crate::category::Category;

#[must_use]
pub const fn plain_tag(category: Category) -> Option<&'static str> {
    match category {
        Category::Info => None,
        Category::Debug => Some("[DEBUG]:"),
        Category::Success => Some("[SUCCESS]:"),
        Category::Error => Some("[ERROR]:"),
    }
}

const fn tag_color(category: Category) -> Option<Color> {
    match category {
        Category::Info => None,
        Category::Debug => Some(Color::Yellow),
        Category::Success => Some(Color::Green),
        Category::Error => Some(Color::Red),
    }
}

/// Console form of the tag: colour escape, plain label, reset.
#[must_use]
pub fn colored_tag(category: Category) -> Option<String> {
    let tag = plain_tag(category)?;
    let color = tag_color(category)?;
    Some(colorize(tag, color))
}
