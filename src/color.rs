//! Color module.
//! Binary piece/square color plus an optional variant used by colorizers.
//! Checkerboard parity lives here too, as a pure function of cell indices.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Not;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn negative(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Color of the square at `(file, rank)`. a1 is dark.
    pub fn of_square(file: usize, rank: usize) -> Self {
        if (file + rank) % 2 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        self.negative()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(text: &str) -> Result<Self> {
        match text {
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            _ => bail!("incorrect color: {}", text),
        }
    }
}

/// A color that may be unset. Unset means "don't colorize".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OptionalColor(Option<Color>);

impl OptionalColor {
    pub const NONE: OptionalColor = OptionalColor(None);

    pub fn new(color: Color) -> Self {
        OptionalColor(Some(color))
    }

    pub fn is_set(self) -> bool {
        self.0.is_some()
    }

    pub fn value(self) -> Option<Color> {
        self.0
    }

    pub fn negative(self) -> Self {
        OptionalColor(self.0.map(Color::negative))
    }
}

impl From<Color> for OptionalColor {
    fn from(color: Color) -> Self {
        OptionalColor::new(color)
    }
}
