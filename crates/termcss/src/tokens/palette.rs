//! Named colors.

/// The built-in palette, in emission order.
///
/// Hex values come from a dark terminal color scheme. The two keyword entries
/// let `text-`/`bg-` classes reset a color back to its surroundings.
pub const DEFAULT_PALETTE: &[(&str, &str)] = &[
    ("bg0", "#2c2e34"),
    ("bg1", "#33353f"),
    ("bg2", "#363944"),
    ("bg3", "#3b3e48"),
    ("bg4", "#414550"),
    ("bg-blue", "#85d3f2"),
    ("bg-dim", "#222327"),
    ("bg-green", "#a7df78"),
    ("bg-red", "#ff6077"),
    ("black", "#181819"),
    ("blue", "#76cce0"),
    ("diff-blue", "#354157"),
    ("diff-green", "#394634"),
    ("diff-red", "#55393d"),
    ("diff-yellow", "#4e432f"),
    ("fg", "#e2e2e3"),
    ("green", "#9ed072"),
    ("grey", "#7f8490"),
    ("grey-dim", "#595f6f"),
    ("orange", "#f39660"),
    ("purple", "#b39df3"),
    ("red", "#fc5d7c"),
    ("yellow", "#e7c664"),
    ("transparent", "transparent"),
    ("inherit", "inherit"),
];

/// A palette color: a token name and its raw CSS value.
///
/// Each entry becomes one `--{name}` custom property, a `text-{name}` class and
/// a `bg-{name}` class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: String,
    pub value: String,
}

impl PaletteEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Custom property name, e.g. `--red`.
    pub fn property(&self) -> String {
        format!("--{}", self.name)
    }

    /// Reference to the custom property, e.g. `var(--red)`.
    pub fn var(&self) -> String {
        format!("var(--{})", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_property_and_var() {
        let entry = PaletteEntry::new("bg-red", "#ff6077");
        assert_eq!(entry.property(), "--bg-red");
        assert_eq!(entry.var(), "var(--bg-red)");
    }

    #[test]
    fn test_default_palette_names_unique() {
        let mut names: Vec<_> = DEFAULT_PALETTE.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DEFAULT_PALETTE.len());
    }
}
