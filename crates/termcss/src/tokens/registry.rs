//! The token registry.

use super::error::TokenError;
use super::palette::{PaletteEntry, DEFAULT_PALETTE};
use super::taxonomy::GridUnit;

/// Custom property definitions for the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Root font size, `--base-size`.
    pub base_size: String,
    /// Width of one column, `--col`.
    pub col: String,
    /// Height of one row, `--row`.
    pub row: String,
}

impl Grid {
    /// The CSS length defining one cell of `unit`.
    pub fn definition(&self, unit: GridUnit) -> &str {
        match unit {
            GridUnit::Col => &self.col,
            GridUnit::Row => &self.row,
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            base_size: "13px".to_string(),
            col: "1rch".to_string(),
            row: "1rlh".to_string(),
        }
    }
}

/// A named border radius, applied per corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadiusPreset {
    pub name: String,
    pub value: String,
}

impl RadiusPreset {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Border stroke, colors, styles and radii.
///
/// The stroke width is fixed and is the only length in the stylesheet that is
/// not a grid multiple. Bordered elements compensate for it with half-cell
/// margin and padding, see [`BorderTokens::half`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderTokens {
    /// Stroke width in pixels.
    pub width_px: u32,
    /// Color used by the stroke classes before any color override.
    pub color: String,
    /// Line styles that get their own override classes.
    pub styles: Vec<String>,
    pub radii: Vec<RadiusPreset>,
}

impl BorderTokens {
    /// The stroke width as a CSS length.
    pub fn width(&self) -> String {
        if self.width_px == 0 {
            "0".to_string()
        } else {
            format!("{}px", self.width_px)
        }
    }

    /// Margin and padding a bordered side needs so that
    /// `margin + border + padding` spans exactly one cell of `unit`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use termcss::tokens::{GridUnit, Tokens};
    ///
    /// let border = Tokens::builtin().border().clone();
    /// assert_eq!(border.half(GridUnit::Row), "calc((var(--row) - 2px) / 2)");
    /// ```
    pub fn half(&self, unit: GridUnit) -> String {
        if self.width_px == 0 {
            "0".to_string()
        } else {
            format!("calc(({} - {}px) / 2)", unit.var(), self.width_px)
        }
    }

    /// Negative margin that pulls a bordered side onto its neighbour's
    /// border, so two adjacent strokes render as one.
    pub fn merge_offset(&self, unit: GridUnit) -> String {
        format!("calc(({} + {}px) / -2)", unit.var(), self.width_px)
    }
}

impl Default for BorderTokens {
    fn default() -> Self {
        Self {
            width_px: 2,
            color: "var(--grey)".to_string(),
            styles: vec!["solid".to_string(), "dashed".to_string()],
            radii: vec![RadiusPreset::new("square", "0"), RadiusPreset::new("round", "4px")],
        }
    }
}

/// The full set of design tokens a stylesheet is generated from.
///
/// [`Tokens::builtin`] returns the registry the shipped stylesheet uses. For
/// tests and embedding, [`Tokens::new`] starts from an empty palette and empty
/// scales and the builder methods fill them in.
///
/// # Example
///
/// ```rust
/// use termcss::Tokens;
///
/// let tokens = Tokens::new()
///     .color("red", "#fc5d7c")
///     .padding([0, 1, 2])
///     .margin([-1, 0, 1]);
///
/// assert!(tokens.validate().is_ok());
/// assert_eq!(tokens.palette().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tokens {
    pub(crate) palette: Vec<PaletteEntry>,
    pub(crate) grid: Grid,
    pub(crate) padding: Vec<i32>,
    pub(crate) margin: Vec<i32>,
    pub(crate) sizes: Vec<i32>,
    pub(crate) offsets: Vec<i32>,
    pub(crate) type_scale: Vec<f64>,
    pub(crate) border: BorderTokens,
}

impl Tokens {
    /// Creates a registry with the default grid and border, and nothing else.
    pub fn new() -> Self {
        Self {
            palette: Vec::new(),
            grid: Grid::default(),
            padding: Vec::new(),
            margin: Vec::new(),
            sizes: Vec::new(),
            offsets: Vec::new(),
            type_scale: Vec::new(),
            border: BorderTokens::default(),
        }
    }

    /// The registry the shipped stylesheet is generated from.
    pub fn builtin() -> Self {
        let tokens = DEFAULT_PALETTE
            .iter()
            .fold(Self::new(), |tokens, &(name, value)| tokens.color(name, value));

        tokens
            .padding([0, 1, 2, 3, 4])
            .margin([-2, -1, 0, 1, 2, 3, 4])
            .sizes([0, 1, 2, 4, 8, 16, 32, 64])
            .offsets([0, 1, 2, 4])
            .type_scale([0.5, 1.0, 2.0, 3.0])
    }

    /// Appends a palette color, returning the updated registry for chaining.
    pub fn color(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.palette.push(PaletteEntry::new(name, value));
        self
    }

    pub fn grid(mut self, grid: Grid) -> Self {
        self.grid = grid;
        self
    }

    /// Sets the padding magnitudes.
    pub fn padding(mut self, steps: impl IntoIterator<Item = i32>) -> Self {
        self.padding = steps.into_iter().collect();
        self
    }

    /// Sets the margin magnitudes. Negative steps produce `-m…` classes.
    pub fn margin(mut self, steps: impl IntoIterator<Item = i32>) -> Self {
        self.margin = steps.into_iter().collect();
        self
    }

    /// Sets the width/height steps.
    pub fn sizes(mut self, steps: impl IntoIterator<Item = i32>) -> Self {
        self.sizes = steps.into_iter().collect();
        self
    }

    /// Sets the top/bottom/left/right offset steps.
    pub fn offsets(mut self, steps: impl IntoIterator<Item = i32>) -> Self {
        self.offsets = steps.into_iter().collect();
        self
    }

    /// Sets the type scale, as multiples of the base font size.
    pub fn type_scale(mut self, steps: impl IntoIterator<Item = f64>) -> Self {
        self.type_scale = steps.into_iter().collect();
        self
    }

    pub fn border_tokens(mut self, border: BorderTokens) -> Self {
        self.border = border;
        self
    }

    pub fn palette(&self) -> &[PaletteEntry] {
        &self.palette
    }

    pub fn grid_definition(&self) -> &Grid {
        &self.grid
    }

    pub fn padding_scale(&self) -> &[i32] {
        &self.padding
    }

    pub fn margin_scale(&self) -> &[i32] {
        &self.margin
    }

    pub fn size_scale(&self) -> &[i32] {
        &self.sizes
    }

    pub fn offset_scale(&self) -> &[i32] {
        &self.offsets
    }

    pub fn type_steps(&self) -> &[f64] {
        &self.type_scale
    }

    pub fn border(&self) -> &BorderTokens {
        &self.border
    }

    /// Checks that palette names are unique and non-empty, that no scale
    /// repeats a step, and that only margin goes negative.
    ///
    /// Generation does not call this; an invalid registry still expands, it
    /// just produces duplicate or meaningless classes.
    pub fn validate(&self) -> Result<(), TokenError> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.palette.len());
        for entry in &self.palette {
            if entry.name.is_empty() {
                return Err(TokenError::EmptyName {
                    value: entry.value.clone(),
                });
            }
            if seen.contains(&entry.name.as_str()) {
                return Err(TokenError::DuplicateColor {
                    name: entry.name.clone(),
                });
            }
            seen.push(&entry.name);
        }

        check_scale("padding", &self.padding, false)?;
        check_scale("margin", &self.margin, true)?;
        check_scale("size", &self.sizes, false)?;
        check_scale("offset", &self.offsets, false)?;

        for (i, step) in self.type_scale.iter().enumerate() {
            if !(*step > 0.0 && step.is_finite()) {
                return Err(TokenError::InvalidTypeStep {
                    step: step.to_string(),
                });
            }
            if self.type_scale[..i].contains(step) {
                return Err(TokenError::DuplicateStep {
                    scale: "type",
                    step: step.to_string(),
                });
            }
        }

        Ok(())
    }
}

impl Default for Tokens {
    fn default() -> Self {
        Self::builtin()
    }
}

fn check_scale(scale: &'static str, steps: &[i32], allow_negative: bool) -> Result<(), TokenError> {
    for (i, step) in steps.iter().enumerate() {
        if *step < 0 && !allow_negative {
            return Err(TokenError::NegativeStep {
                scale,
                step: step.to_string(),
            });
        }
        if steps[..i].contains(step) {
            return Err(TokenError::DuplicateStep {
                scale,
                step: step.to_string(),
            });
        }
    }
    Ok(())
}
