//! Load ratings and the fixed-width load bar derived from them.
//!
//! A load rating is an integer in `0..=5` attached to every catalog item. It
//! has no operational meaning; it only picks a display tier and fills a
//! five-cell bar.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of cells in a load bar
pub const LOAD_BAR_WIDTH: u8 = 5;

/// Highest valid load rating
pub const MAX_LOAD: u8 = LOAD_BAR_WIDTH;

/// Glyph for a filled cell
pub const FILLED_CELL: char = '█';

/// Glyph for an empty cell
pub const EMPTY_CELL: char = '░';

/// Validated load rating in `0..=5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct LoadRating(u8);

impl LoadRating {
    /// Build a rating from a literal.
    ///
    /// Panics when `load > 5`. In a `const` or `static` initializer the panic
    /// happens during compilation, which is how the built-in catalog rejects
    /// a bad literal. Other callers go through [`LoadRating::new`].
    pub(crate) const fn checked(load: u8) -> Self {
        assert!(load <= MAX_LOAD, "load rating must be within 0..=5");
        Self(load)
    }

    /// Build a rating, rejecting values outside `0..=5`
    pub fn new(load: i64) -> Result<Self> {
        if (0..=i64::from(MAX_LOAD)).contains(&load) {
            Ok(Self(load as u8))
        } else {
            Err(Error::LoadOutOfRange { load })
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Bar for this rating. Total, since the rating is already validated.
    pub fn bar(self) -> LoadBar {
        let filled = self.0;
        LoadBar {
            filled,
            empty: LOAD_BAR_WIDTH - filled,
            tier: LoadTier::for_load(filled),
        }
    }
}

impl TryFrom<i64> for LoadRating {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<LoadRating> for u8 {
    fn from(rating: LoadRating) -> Self {
        rating.0
    }
}

impl fmt::Display for LoadRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_LOAD)
    }
}

/// Visual emphasis tier of a load bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadTier {
    /// load <= 2
    Low,
    /// load == 3
    Medium,
    /// load >= 4
    High,
}

impl LoadTier {
    fn for_load(load: u8) -> Self {
        match load {
            4.. => LoadTier::High,
            3 => LoadTier::Medium,
            _ => LoadTier::Low,
        }
    }
}

/// Derived load indicator: `filled + empty == 5`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadBar {
    pub filled: u8,
    pub empty: u8,
    pub tier: LoadTier,
}

impl LoadBar {
    /// The cells without brackets, e.g. `███░░`
    pub fn cells(&self) -> String {
        let mut cells = String::with_capacity(usize::from(LOAD_BAR_WIDTH) * 3);
        cells.extend(std::iter::repeat(FILLED_CELL).take(usize::from(self.filled)));
        cells.extend(std::iter::repeat(EMPTY_CELL).take(usize::from(self.empty)));
        cells
    }
}

impl fmt::Display for LoadBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.cells())
    }
}

/// Compute the load bar for a raw load value.
///
/// Total over `0..=5`; anything else is a catalog data defect and is rejected
/// with [`Error::LoadOutOfRange`].
pub fn render_load(load: i64) -> Result<LoadBar> {
    LoadRating::new(load).map(LoadRating::bar)
}
