//! Rule blocks: a selector list and its declarations.

use std::fmt;

use super::Declaration;

/// A CSS rule: comma-joined selectors followed by a declaration block.
///
/// Selectors are kept in insertion order and deduplicated, so callers can
/// merge class names that must share one block without tracking what was
/// already added. Declarations are kept exactly as given, duplicates and all.
///
/// Rendering produces the block followed by a blank line, which is how rules
/// are separated in the assembled stylesheet.
///
/// # Example
///
/// ```rust
/// use termcss::css::Rule;
///
/// let rule = Rule::new(".pt-2")
///     .selector(".py-2")
///     .selector(".p-2")
///     .selector(".py-2")
///     .declare("padding-top", "calc(var(--row) * 2)");
///
/// assert_eq!(
///     rule.render(),
///     ".pt-2, .py-2, .p-2 {\n  padding-top: calc(var(--row) * 2);\n}\n\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    selectors: Vec<String>,
    declarations: Vec<Declaration>,
}

impl Rule {
    /// Creates a rule with a single selector and no declarations.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selectors: vec![selector.into()],
            declarations: Vec::new(),
        }
    }

    /// Creates a rule from a list of selectors, dropping repeats.
    pub fn with_selectors<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rule = Self {
            selectors: Vec::new(),
            declarations: Vec::new(),
        };
        for selector in selectors {
            rule.push_selector(selector.into());
        }
        rule
    }

    /// Adds a selector, returning the updated rule for chaining.
    ///
    /// A selector that is already present is ignored.
    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.push_selector(selector.into());
        self
    }

    /// Appends a declaration, returning the updated rule for chaining.
    pub fn declare(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push(Declaration::new(property, value));
        self
    }

    /// Appends every declaration from `declarations` in order.
    pub fn declare_all<I, D>(mut self, declarations: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Declaration>,
    {
        self.declarations
            .extend(declarations.into_iter().map(Into::into));
        self
    }

    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Renders the declaration block alone, without selectors or braces.
    ///
    /// Two rules with equal blocks apply identical styling, which is what
    /// selector merging guarantees for every class in one rule.
    pub fn block(&self) -> String {
        self.declarations
            .iter()
            .map(Declaration::render)
            .collect::<Vec<_>>()
            .join("\n  ")
    }

    /// Renders the full rule text, including the trailing blank line.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn push_selector(&mut self, selector: String) {
        if !self.selectors.contains(&selector) {
            self.selectors.push(selector);
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{\n  {}\n}}\n\n",
            self.selectors.join(", "),
            self.block()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_selector_single_declaration() {
        let rule = Rule::new(".grow").declare("flex-grow", "1");
        assert_eq!(rule.render(), ".grow {\n  flex-grow: 1;\n}\n\n");
    }

    #[test]
    fn test_declarations_keep_order() {
        let rule = Rule::new(".flex-col")
            .declare("display", "flex")
            .declare("flex-direction", "column");
        assert_eq!(
            rule.render(),
            ".flex-col {\n  display: flex;\n  flex-direction: column;\n}\n\n"
        );
    }

    #[test]
    fn test_duplicate_declarations_are_kept() {
        let rule = Rule::new("a").declare("color", "red").declare("color", "red");
        assert_eq!(rule.declarations().len(), 2);
    }

    #[test]
    fn test_selectors_deduplicated_in_order() {
        let rule = Rule::with_selectors([".a", ".b", ".a", ".c", ".b"]);
        assert_eq!(rule.selectors(), &[".a", ".b", ".c"]);
    }

    #[test]
    fn test_selector_chain_ignores_repeat() {
        let rule = Rule::new(".a").selector(".a").selector(".b");
        assert_eq!(rule.selectors(), &[".a", ".b"]);
    }

    #[test]
    fn test_declare_all() {
        let rule = Rule::new("html").declare_all([("--col", "1rch"), ("--row", "1rlh")]);
        assert_eq!(rule.block(), "--col: 1rch;\n  --row: 1rlh;");
    }

    #[test]
    fn test_empty_block() {
        let rule = Rule::new(".empty");
        assert_eq!(rule.render(), ".empty {\n  \n}\n\n");
    }
}
