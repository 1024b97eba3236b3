//! Grid module.
//! Read-only board abstraction the renderer consumes.
//! Ships an owned arbitrary-size board and an adapter for `shakmaty::Board`.

use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }
}

/// Zero-based cell address; rank 0 is the lowest rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub file: usize,
    pub rank: usize,
}

impl Position {
    pub fn new(file: usize, rank: usize) -> Self {
        Position { file, rank }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

pub trait Grid {
    fn size(&self) -> Size;

    /// `None` for an empty cell. Callers only ask for positions inside `size()`.
    fn piece(&self, position: Position) -> Option<Piece>;
}

/// Owned board of any size, e.g. Gardner's 5x5 minichess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceBoard {
    size: Size,
    cells: Vec<Option<Piece>>,
}

impl PieceBoard {
    pub fn new(size: Size) -> Self {
        PieceBoard {
            size,
            cells: vec![None; size.width * size.height],
        }
    }

    pub fn set(&mut self, position: Position, piece: Option<Piece>) {
        let index = self.index(position);
        self.cells[index] = piece;
    }

    pub fn with_piece(mut self, position: Position, piece: Piece) -> Self {
        self.set(position, Some(piece));
        self
    }

    fn index(&self, position: Position) -> usize {
        assert!(
            position.file < self.size.width && position.rank < self.size.height,
            "position {:?} outside of {:?}",
            position,
            self.size
        );
        position.rank * self.size.width + position.file
    }
}

impl Grid for PieceBoard {
    fn size(&self) -> Size {
        self.size
    }

    fn piece(&self, position: Position) -> Option<Piece> {
        self.cells[self.index(position)]
    }
}

impl From<shakmaty::Piece> for Piece {
    fn from(piece: shakmaty::Piece) -> Self {
        let kind = match piece.role {
            shakmaty::Role::King => PieceKind::King,
            shakmaty::Role::Queen => PieceKind::Queen,
            shakmaty::Role::Rook => PieceKind::Rook,
            shakmaty::Role::Bishop => PieceKind::Bishop,
            shakmaty::Role::Knight => PieceKind::Knight,
            shakmaty::Role::Pawn => PieceKind::Pawn,
        };
        Piece::new(kind, piece.color.into())
    }
}

impl From<shakmaty::Color> for Color {
    fn from(color: shakmaty::Color) -> Self {
        match color {
            shakmaty::Color::Black => Color::Black,
            shakmaty::Color::White => Color::White,
        }
    }
}

impl Grid for shakmaty::Board {
    fn size(&self) -> Size {
        Size { width: 8, height: 8 }
    }

    fn piece(&self, position: Position) -> Option<Piece> {
        let square = shakmaty::Square::from_coords(
            shakmaty::File::new(position.file as u32),
            shakmaty::Rank::new(position.rank as u32),
        );
        self.piece_at(square).map(Piece::from)
    }
}
