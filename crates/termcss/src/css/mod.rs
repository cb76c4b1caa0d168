//! CSS text primitives.
//!
//! This module provides the two building blocks every generated rule is made of:
//!
//! - [`Declaration`]: A single `property: value;` pair
//! - [`Rule`]: One or more selectors sharing an ordered declaration block
//!
//! Neither type validates CSS syntax. Property names, values and selectors are
//! produced by the expanders and trusted verbatim.

mod declaration;
mod rule;

pub use declaration::Declaration;
pub use rule::Rule;

/// Builds a class selector from a class name, escaping characters that are
/// not valid unescaped in a CSS identifier.
///
/// # Example
///
/// ```rust
/// use termcss::css::class;
///
/// assert_eq!(class("pt-2"), ".pt-2");
/// assert_eq!(class("text-0.5"), ".text-0\\.5");
/// ```
pub fn class(name: &str) -> String {
    let mut selector = String::with_capacity(name.len() + 1);
    selector.push('.');
    for c in name.chars() {
        if matches!(c, '.' | ':' | '/') {
            selector.push('\\');
        }
        selector.push(c);
    }
    selector
}
