//! Text rendering of chess boards for terminals: rank/file legends, nested margins,
//! checkerboard colors and either side on top.

pub mod color;
pub mod colorizer;
pub mod config;
pub mod glyph;
pub mod grid;
pub mod margins;
pub mod render;

pub use color::{Color, OptionalColor};
pub use colorizer::{AnsiColorizer, ColorCodes, Colorizer, NoColor};
pub use config::DisplaySettings;
pub use glyph::{AsciiEncoder, ColoredPieces, GlyphEncoder, SymbolEncoder};
pub use grid::{Grid, Piece, PieceBoard, PieceKind, Position, Size};
pub use margins::{HorizontalMargins, LegendMargins, Margins, PieceMargins, VerticalMargins};
pub use render::{render, RenderConfig};
