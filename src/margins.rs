//! Margins module.
//! Four nesting scopes of padding: piece, legend rank, legend file, board.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HorizontalMargins {
    pub left: usize,
    pub right: usize,
}

impl HorizontalMargins {
    pub fn total(&self) -> usize {
        self.left + self.right
    }
}

/// Counted in blank lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerticalMargins {
    pub top: usize,
    pub bottom: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieceMargins {
    pub horizontal: HorizontalMargins,
    pub vertical: VerticalMargins,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendMargins {
    pub file: VerticalMargins,
    pub rank: HorizontalMargins,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub piece: PieceMargins,
    pub legend: LegendMargins,
    pub board: VerticalMargins,
}

impl Margins {
    /// Spacious layout for terminals. A colorful board gets square cells
    /// padded on every side so the background colors form blocks.
    pub fn wide(colorful_board: bool) -> Self {
        let piece = if colorful_board {
            PieceMargins {
                horizontal: HorizontalMargins { left: 1, right: 1 },
                vertical: VerticalMargins { top: 1, bottom: 1 },
            }
        } else {
            PieceMargins {
                horizontal: HorizontalMargins { left: 1, right: 0 },
                vertical: VerticalMargins { top: 0, bottom: 1 },
            }
        };

        Margins {
            piece,
            legend: LegendMargins {
                file: VerticalMargins { top: 1, bottom: 0 },
                rank: HorizontalMargins { left: 0, right: 1 },
            },
            board: VerticalMargins { top: 1, bottom: 1 },
        }
    }
}
