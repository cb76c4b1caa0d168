//! Single property/value declarations.

use std::fmt;

/// A `property: value` pair inside a rule block.
///
/// Declarations are immutable once built. Rendering never reorders or
/// normalizes the strings it was given.
///
/// # Example
///
/// ```rust
/// use termcss::css::Declaration;
///
/// let decl = Declaration::new("padding-top", "calc(var(--row) * 2)");
/// assert_eq!(decl.render(), "padding-top: calc(var(--row) * 2);");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    property: String,
    value: String,
}

impl Declaration {
    /// Creates a declaration from a property name and its value.
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Renders the canonical `property: value;` text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

impl<P: Into<String>, V: Into<String>> From<(P, V)> for Declaration {
    fn from((property, value): (P, V)) -> Self {
        Declaration::new(property, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let decl = Declaration::new("color", "var(--red)");
        assert_eq!(decl.render(), "color: var(--red);");
    }

    #[test]
    fn test_render_is_verbatim() {
        let decl = Declaration::new("font-family", "\"Monaco Nerd Font\"");
        assert_eq!(decl.render(), "font-family: \"Monaco Nerd Font\";");
    }

    #[test]
    fn test_from_tuple() {
        let decl: Declaration = ("margin", "auto").into();
        assert_eq!(decl.property(), "margin");
        assert_eq!(decl.value(), "auto");
    }
}
