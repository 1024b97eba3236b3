//! Config module.
//! Display settings (glyph mode, colors, wide layout, orientation) as set from CLI flags
//! or loaded from a JSON file via serde.
//! Assembles the `RenderConfig` the renderer consumes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::color::Color;
use crate::colorizer::{AnsiColorizer, ColorCodes, Colorizer, NoColor};
use crate::glyph::{AsciiEncoder, ColoredPieces, GlyphEncoder, SymbolEncoder};
use crate::margins::Margins;
use crate::render::RenderConfig;

pub const DEFAULT_PIECE_COLORS: ColorCodes = ColorCodes { black: 34, white: 31 }; // blue, red
pub const DEFAULT_SQUARE_COLORS: ColorCodes = ColorCodes { black: 40, white: 47 }; // black, white backgrounds

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Unicode chess symbols instead of letters
    pub unicode: bool,
    pub colorful_pieces: bool,
    pub piece_colors: ColorCodes,
    pub colorful_board: bool,
    pub square_colors: ColorCodes,
    pub wide: bool,
    /// Side printed at the top of the board
    pub top_color: Color,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            unicode: true,
            colorful_pieces: true,
            piece_colors: DEFAULT_PIECE_COLORS,
            colorful_board: true,
            square_colors: DEFAULT_SQUARE_COLORS,
            wide: true,
            top_color: Color::Black,
        }
    }
}

impl DisplaySettings {
    /// Loads settings from a JSON file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read display settings: {}", path.display()))?;
        let settings: DisplaySettings = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse display settings: {}", path.display()))?;

        debug!(path = %path.display(), ?settings, "loaded display settings");
        Ok(settings)
    }

    pub fn placeholder(&self) -> &'static str {
        if self.colorful_board {
            " "
        } else if self.unicode {
            "\u{00b7}"
        } else {
            "."
        }
    }

    pub fn margins(&self) -> Margins {
        if self.wide {
            Margins::wide(self.colorful_board)
        } else {
            Margins::default()
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        let mut encoder: Box<dyn GlyphEncoder> = if self.unicode {
            Box::new(SymbolEncoder)
        } else {
            Box::new(AsciiEncoder)
        };
        if self.colorful_pieces {
            let colorizer = Box::new(AnsiColorizer::new(self.piece_colors));
            encoder = Box::new(ColoredPieces::new(encoder, colorizer));
        }

        let colorizer: Box<dyn Colorizer> = if self.colorful_board {
            Box::new(AnsiColorizer::new(self.square_colors))
        } else {
            Box::new(NoColor)
        };

        debug!(
            unicode = self.unicode,
            colorful_pieces = self.colorful_pieces,
            colorful_board = self.colorful_board,
            wide = self.wide,
            top_color = %self.top_color,
            "assembled render config"
        );
        RenderConfig::new(encoder, self.placeholder(), self.margins(), colorizer, self.top_color)
    }
}
