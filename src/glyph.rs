//! Glyph module.
//! Maps a piece to a fixed-width text token. ASCII letters or Unicode symbols.

use crate::color::{Color, OptionalColor};
use crate::colorizer::Colorizer;
use crate::grid::{Piece, PieceKind};

pub trait GlyphEncoder: Send + Sync {
    fn encode(&self, piece: Piece) -> String;

    /// Display width shared by every glyph, measured on a white king.
    fn width(&self) -> usize {
        self.encode(Piece::new(PieceKind::King, Color::White)).chars().count()
    }
}

/// Standard single-letter notation, uppercase for White.
#[derive(Clone, Copy, Debug, Default)]
pub struct AsciiEncoder;

impl GlyphEncoder for AsciiEncoder {
    fn encode(&self, piece: Piece) -> String {
        let letter = match piece.kind {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        };
        match piece.color {
            Color::White => letter.to_ascii_uppercase().to_string(),
            Color::Black => letter.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SymbolEncoder;

impl GlyphEncoder for SymbolEncoder {
    fn encode(&self, piece: Piece) -> String {
        let symbol = match (piece.kind, piece.color) {
            (PieceKind::King, Color::White) => '\u{2654}',
            (PieceKind::Queen, Color::White) => '\u{2655}',
            (PieceKind::Rook, Color::White) => '\u{2656}',
            (PieceKind::Bishop, Color::White) => '\u{2657}',
            (PieceKind::Knight, Color::White) => '\u{2658}',
            (PieceKind::Pawn, Color::White) => '\u{2659}',
            (PieceKind::King, Color::Black) => '\u{265A}',
            (PieceKind::Queen, Color::Black) => '\u{265B}',
            (PieceKind::Rook, Color::Black) => '\u{265C}',
            (PieceKind::Bishop, Color::Black) => '\u{265D}',
            (PieceKind::Knight, Color::Black) => '\u{265E}',
            (PieceKind::Pawn, Color::Black) => '\u{265F}',
        };
        symbol.to_string()
    }
}

/// Colors every glyph by its piece's own color.
pub struct ColoredPieces<E> {
    inner: E,
    colorizer: Box<dyn Colorizer>,
}

impl<E: GlyphEncoder> ColoredPieces<E> {
    pub fn new(inner: E, colorizer: Box<dyn Colorizer>) -> Self {
        ColoredPieces { inner, colorizer }
    }
}

impl<E: GlyphEncoder> GlyphEncoder for ColoredPieces<E> {
    fn encode(&self, piece: Piece) -> String {
        let text = self.inner.encode(piece);
        self.colorizer.colorize(&text, OptionalColor::new(piece.color))
    }

    // escape codes take no columns
    fn width(&self) -> usize {
        self.inner.width()
    }
}

impl GlyphEncoder for Box<dyn GlyphEncoder> {
    fn encode(&self, piece: Piece) -> String {
        (**self).encode(piece)
    }

    fn width(&self) -> usize {
        (**self).width()
    }
}
