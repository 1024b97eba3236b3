//! Render module.
//! Turns a grid plus a `RenderConfig` into the printable board block:
//! rank labels, cells, file legend, margins, checkerboard colors, orientation.
//! Pure: no I/O, no retained state between calls.

use crate::color::{Color, OptionalColor};
use crate::colorizer::Colorizer;
use crate::glyph::GlyphEncoder;
use crate::grid::{Grid, Position};
use crate::margins::{HorizontalMargins, Margins, VerticalMargins};

pub struct RenderConfig {
    encoder: Box<dyn GlyphEncoder>,
    placeholder: String,
    margins: Margins,
    colorizer: Box<dyn Colorizer>,
    top_color: Color,
    glyph_width: usize,
}

impl RenderConfig {
    /// Glyph width is measured once on the encoder.
    pub fn new(
        encoder: Box<dyn GlyphEncoder>,
        placeholder: impl Into<String>,
        margins: Margins,
        colorizer: Box<dyn Colorizer>,
        top_color: Color,
    ) -> Self {
        let glyph_width = encoder.width();
        RenderConfig {
            encoder,
            placeholder: placeholder.into(),
            margins,
            colorizer,
            top_color,
            glyph_width,
        }
    }

    pub fn with_glyph_width(mut self, glyph_width: usize) -> Self {
        self.glyph_width = glyph_width;
        self
    }

    pub fn margins(&self) -> &Margins {
        &self.margins
    }

    pub fn top_color(&self) -> Color {
        self.top_color
    }

    pub fn glyph_width(&self) -> usize {
        self.glyph_width
    }

    pub fn render<G: Grid + ?Sized>(&self, grid: &G) -> String {
        render(grid, self)
    }
}

pub fn render<G: Grid + ?Sized>(grid: &G, config: &RenderConfig) -> String {
    Renderer::new(grid, config).render()
}

struct Renderer<'a, G: ?Sized> {
    grid: &'a G,
    config: &'a RenderConfig,
    label_width: usize,
}

impl<'a, G: Grid + ?Sized> Renderer<'a, G> {
    fn new(grid: &'a G, config: &'a RenderConfig) -> Self {
        let label_width = grid.size().height.to_string().len();
        Renderer {
            grid,
            config,
            label_width,
        }
    }

    fn render(&self) -> String {
        let margins = &self.config.margins;
        let height = self.grid.size().height;

        let mut groups: Vec<Vec<String>> = (0..height)
            .map(|rank| {
                let row = self.rank_row(rank);
                self.wrap_with_empty_lines(row, margins.piece.vertical, Some(rank))
            })
            .collect();
        if self.config.top_color == Color::Black {
            groups.reverse();
        }

        let mut lines: Vec<String> = groups.into_iter().flatten().collect();
        lines.extend(self.wrap_with_empty_lines(self.legend_row(), margins.legend.file, None));

        let lines = self.wrap_with_empty_lines_all(lines, margins.board);
        lines.join("\n")
    }

    fn rank_row(&self, rank: usize) -> String {
        let margins = &self.config.margins;
        let label = format!("{:>width$}", rank + 1, width = self.label_width);

        let mut row = self.wrap_with_spaces(&label, margins.legend.rank, OptionalColor::NONE);
        for file in 0..self.grid.size().width {
            let glyph = match self.grid.piece(Position::new(file, rank)) {
                Some(piece) => self.config.encoder.encode(piece),
                None => self.config.placeholder.clone(),
            };
            let color = OptionalColor::new(Color::of_square(file, rank));
            row += &self.wrap_with_spaces(&glyph, margins.piece.horizontal, color);
        }
        row
    }

    fn legend_row(&self) -> String {
        let mut row = self.spaces(self.legend_width(), OptionalColor::NONE);
        for file in 0..self.grid.size().width {
            row += &self.wrap_with_spaces(&file_label(file), self.config.margins.piece.horizontal, OptionalColor::NONE);
        }
        row
    }

    fn legend_width(&self) -> usize {
        self.config.margins.legend.rank.total() + self.label_width
    }

    fn cell_width(&self) -> usize {
        self.config.margins.piece.horizontal.total() + self.config.glyph_width
    }

    fn wrap_with_spaces(&self, text: &str, margins: HorizontalMargins, color: OptionalColor) -> String {
        let mut result = self.spaces(margins.left, color);
        result += &self.config.colorizer.colorize(text, color);
        result += &self.spaces(margins.right, color);
        result
    }

    /// Zero-length runs produce nothing, not an empty colorized segment.
    fn spaces(&self, length: usize, color: OptionalColor) -> String {
        if length == 0 {
            return String::new();
        }
        self.config.colorizer.colorize(&" ".repeat(length), color)
    }

    /// `owner` is the rank whose checker colors the blank lines carry;
    /// `None` leaves them uncolored.
    fn wrap_with_empty_lines(&self, line: String, margins: VerticalMargins, owner: Option<usize>) -> Vec<String> {
        let mut lines = Vec::with_capacity(margins.top + 1 + margins.bottom);
        lines.extend((0..margins.top).map(|_| self.empty_line(owner)));
        lines.push(line);
        lines.extend((0..margins.bottom).map(|_| self.empty_line(owner)));
        lines
    }

    fn wrap_with_empty_lines_all(&self, body: Vec<String>, margins: VerticalMargins) -> Vec<String> {
        let mut lines = Vec::with_capacity(margins.top + body.len() + margins.bottom);
        lines.extend((0..margins.top).map(|_| self.empty_line(None)));
        lines.extend(body);
        lines.extend((0..margins.bottom).map(|_| self.empty_line(None)));
        lines
    }

    fn empty_line(&self, owner: Option<usize>) -> String {
        let mut line = self.spaces(self.legend_width(), OptionalColor::NONE);
        for file in 0..self.grid.size().width {
            let color = match owner {
                Some(rank) => OptionalColor::new(Color::of_square(file, rank)),
                None => OptionalColor::NONE,
            };
            line += &self.spaces(self.cell_width(), color);
        }
        line
    }
}

/// `a`..`z`, then `aa`, `ab`, ...
fn file_label(file: usize) -> String {
    let mut label = Vec::new();
    let mut index = file + 1;
    while index > 0 {
        index -= 1;
        label.push(b'a' + (index % 26) as u8);
        index /= 26;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colorizer::NoColor;
    use crate::glyph::{AsciiEncoder, SymbolEncoder};
    use crate::grid::{Piece, PieceBoard, PieceKind, Size};
    use crate::margins::{LegendMargins, PieceMargins};

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";

    const KIWIPETE_TOP_BLACK: &str = "8rxxxkxxr\n\
                                      7pxppqpbx\n\
                                      6bnxxpnpx\n\
                                      5xxxPNxxx\n\
                                      4xpxxPxxx\n\
                                      3xxNxxQxp\n\
                                      2PPPBBPPP\n\
                                      1RxxxKxxR\n \
                                      abcdefgh";

    fn kiwipete() -> shakmaty::Board {
        shakmaty::Board::from_ascii_board_fen(KIWIPETE.as_bytes()).unwrap()
    }

    fn marker(text: &str, color: OptionalColor) -> String {
        let mark = match color.value() {
            Some(Color::Black) => 'b',
            Some(Color::White) => 'w',
            None => 'n',
        };
        format!("({}{})", mark, text)
    }

    fn config(margins: Margins, top_color: Color) -> RenderConfig {
        RenderConfig::new(Box::new(AsciiEncoder), "x", margins, Box::new(NoColor), top_color)
    }

    fn marked_config(margins: Margins) -> RenderConfig {
        RenderConfig::new(Box::new(AsciiEncoder), "x", margins, Box::new(marker), Color::Black)
    }

    fn blank(width: usize) -> String {
        " ".repeat(width)
    }

    #[test]
    fn test_kiwipete_black_on_top() {
        let text = render(&kiwipete(), &config(Margins::default(), Color::Black));
        assert_eq!(text, KIWIPETE_TOP_BLACK);
    }

    #[test]
    fn test_kiwipete_white_on_top() {
        let text = render(&kiwipete(), &config(Margins::default(), Color::White));
        assert_eq!(
            text,
            "1RxxxKxxR\n\
             2PPPBBPPP\n\
             3xxNxxQxp\n\
             4xpxxPxxx\n\
             5xxxPNxxx\n\
             6bnxxpnpx\n\
             7pxppqpbx\n\
             8rxxxkxxr\n \
             abcdefgh"
        );
    }

    #[test]
    fn test_start_position_both_orientations() {
        let board = shakmaty::Board::from_ascii_board_fen(b"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").unwrap();
        let expected = [
            "8rnbqkbnr",
            "7pppppppp",
            "6xxxxxxxx",
            "5xxxxxxxx",
            "4xxxxxxxx",
            "3xxxxxxxx",
            "2PPPPPPPP",
            "1RNBQKBNR",
        ];

        let text = render(&board, &config(Margins::default(), Color::Black));
        assert_eq!(text, format!("{}\n abcdefgh", expected.join("\n")));

        let reversed: Vec<&str> = expected.iter().rev().copied().collect();
        let text = render(&board, &config(Margins::default(), Color::White));
        assert_eq!(text, format!("{}\n abcdefgh", reversed.join("\n")));
    }

    #[test]
    fn test_orientation_reverses_rows_only() {
        let board = kiwipete();
        let black = render(&board, &config(Margins::default(), Color::Black));
        let white = render(&board, &config(Margins::default(), Color::White));

        let mut black_rows: Vec<&str> = black.lines().collect();
        let mut white_rows: Vec<&str> = white.lines().collect();
        assert_eq!(black_rows.pop(), white_rows.pop());
        black_rows.reverse();
        assert_eq!(black_rows, white_rows);
    }

    #[test]
    fn test_render_is_idempotent() {
        let board = kiwipete();
        let config = marked_config(Margins::wide(true));
        assert_eq!(config.render(&board), config.render(&board));
    }

    #[test]
    fn test_zero_margins_line_shape() {
        let board = PieceBoard::new(Size { width: 5, height: 5 })
            .with_piece(Position::new(4, 0), Piece::new(PieceKind::King, Color::White));
        let text = render(&board, &config(Margins::default(), Color::Black));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[..5].iter().all(|line| line.chars().count() == 1 + 5));
        assert_eq!(lines[4], "1xxxxK");
        assert_eq!(lines[5], " abcde");
    }

    #[test]
    fn test_piece_horizontal_margins() {
        let margins = Margins {
            piece: PieceMargins {
                horizontal: HorizontalMargins { left: 1, right: 2 },
                ..Default::default()
            },
            ..Default::default()
        };
        let text = render(&kiwipete(), &config(margins, Color::Black));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8 r   x   x   x   k   x   x   r  ");
        assert_eq!(lines[7], "1 R   x   x   x   K   x   x   R  ");
        assert_eq!(lines[8], "  a   b   c   d   e   f   g   h  ");
    }

    #[test]
    fn test_piece_vertical_margins() {
        let margins = Margins {
            piece: PieceMargins {
                vertical: VerticalMargins { top: 1, bottom: 2 },
                ..Default::default()
            },
            ..Default::default()
        };
        let text = render(&kiwipete(), &config(margins, Color::Black));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 8 * 4 + 1);
        let rows: Vec<&str> = KIWIPETE_TOP_BLACK.lines().collect();
        for (index, row) in rows[..8].iter().enumerate() {
            let group = &lines[index * 4..index * 4 + 4];
            assert_eq!(group[0], blank(9));
            assert_eq!(group[1], *row);
            assert_eq!(group[2], blank(9));
            assert_eq!(group[3], blank(9));
        }
        assert_eq!(lines[32], " abcdefgh");
    }

    #[test]
    fn test_legend_margins() {
        let margins = Margins {
            legend: LegendMargins {
                file: VerticalMargins { top: 1, bottom: 2 },
                rank: HorizontalMargins { left: 1, right: 2 },
            },
            ..Default::default()
        };
        let text = render(&kiwipete(), &config(margins, Color::Black));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], " 8  rxxxkxxr");
        assert_eq!(lines[7], " 1  RxxxKxxR");
        assert_eq!(lines[8], blank(12));
        assert_eq!(lines[9], "    abcdefgh");
        assert_eq!(&lines[10..], &[blank(12), blank(12)]);
    }

    #[test]
    fn test_board_margins() {
        let margins = Margins {
            board: VerticalMargins { top: 1, bottom: 2 },
            ..Default::default()
        };
        let text = render(&kiwipete(), &config(margins, Color::Black));
        let expected = format!("{}\n{}\n{}\n{}", blank(9), KIWIPETE_TOP_BLACK, blank(9), blank(9));
        assert_eq!(text, expected);
    }

    #[test]
    fn test_margin_composability() {
        let board = kiwipete();
        let base = render(&board, &config(Margins::default(), Color::Black));

        let mut margins = Margins::default();
        margins.board.top = 3;
        let padded = render(&board, &config(margins, Color::Black));
        let padded_lines: Vec<&str> = padded.lines().collect();
        assert!(padded_lines[..3].iter().all(|line| *line == blank(9)));
        assert_eq!(padded_lines[3..].join("\n"), base);

        let mut margins = Margins::default();
        margins.legend.rank.left = 2;
        let shifted = render(&board, &config(margins, Color::Black));
        for (shifted, base) in shifted.lines().zip(base.lines()) {
            assert_eq!(shifted, format!("  {}", base));
        }
    }

    #[test]
    fn test_checkerboard_colors() {
        let text = render(&kiwipete(), &marked_config(Margins::default()));
        assert_eq!(
            text,
            "(n8)(wr)(bx)(wx)(bx)(wk)(bx)(wx)(br)\n\
             (n7)(bp)(wx)(bp)(wp)(bq)(wp)(bb)(wx)\n\
             (n6)(wb)(bn)(wx)(bx)(wp)(bn)(wp)(bx)\n\
             (n5)(bx)(wx)(bx)(wP)(bN)(wx)(bx)(wx)\n\
             (n4)(wx)(bp)(wx)(bx)(wP)(bx)(wx)(bx)\n\
             (n3)(bx)(wx)(bN)(wx)(bx)(wQ)(bx)(wp)\n\
             (n2)(wP)(bP)(wP)(bB)(wB)(bP)(wP)(bP)\n\
             (n1)(bR)(wx)(bx)(wx)(bK)(wx)(bx)(wR)\n\
             (n )(na)(nb)(nc)(nd)(ne)(nf)(ng)(nh)"
        );
    }

    #[test]
    fn test_colored_horizontal_margins() {
        let margins = Margins {
            piece: PieceMargins {
                horizontal: HorizontalMargins { left: 1, right: 1 },
                ..Default::default()
            },
            legend: LegendMargins {
                rank: HorizontalMargins { left: 1, right: 1 },
                ..Default::default()
            },
            ..Default::default()
        };
        let text = render(&kiwipete(), &marked_config(margins));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "(n )(n8)(n )(w )(wr)(w )(b )(bx)(b )(w )(wx)(w )(b )(bx)(b )\
             (w )(wk)(w )(b )(bx)(b )(w )(wx)(w )(b )(br)(b )"
        );
        assert_eq!(
            lines[8],
            "(n   )(n )(na)(n )(n )(nb)(n )(n )(nc)(n )(n )(nd)(n )\
             (n )(ne)(n )(n )(nf)(n )(n )(ng)(n )(n )(nh)(n )"
        );
    }

    #[test]
    fn test_colored_vertical_margins_follow_row_parity() {
        let margins = Margins {
            piece: PieceMargins {
                vertical: VerticalMargins { top: 1, bottom: 1 },
                ..Default::default()
            },
            legend: LegendMargins {
                file: VerticalMargins { top: 1, bottom: 1 },
                ..Default::default()
            },
            ..Default::default()
        };
        let text = render(&kiwipete(), &marked_config(margins));
        let lines: Vec<&str> = text.lines().collect();

        let even = "(n )(b )(w )(b )(w )(b )(w )(b )(w )";
        let odd = "(n )(w )(b )(w )(b )(w )(b )(w )(b )";
        let plain = "(n )(n )(n )(n )(n )(n )(n )(n )(n )";

        assert_eq!(lines.len(), 8 * 3 + 3);
        assert_eq!(lines[0], odd);
        assert_eq!(lines[1], "(n8)(wr)(bx)(wx)(bx)(wk)(bx)(wx)(br)");
        assert_eq!(lines[2], odd);
        assert_eq!(lines[3], even);
        assert_eq!(lines[4], "(n7)(bp)(wx)(bp)(wp)(bq)(wp)(bb)(wx)");
        assert_eq!(lines[23], even);
        assert_eq!(lines[24], plain);
        assert_eq!(lines[25], "(n )(na)(nb)(nc)(nd)(ne)(nf)(ng)(nh)");
        assert_eq!(lines[26], plain);
    }

    #[test]
    fn test_colored_blank_lines_span_full_cells() {
        let margins = Margins {
            piece: PieceMargins {
                horizontal: HorizontalMargins { left: 1, right: 1 },
                vertical: VerticalMargins { top: 1, bottom: 0 },
            },
            legend: LegendMargins {
                rank: HorizontalMargins { left: 1, right: 1 },
                ..Default::default()
            },
            ..Default::default()
        };
        let text = render(&kiwipete(), &marked_config(margins));
        let first = text.lines().next().unwrap();
        assert_eq!(
            first,
            "(n   )(w   )(b   )(w   )(b   )(w   )(b   )(w   )(b   )"
        );
    }

    #[test]
    fn test_symbols_with_explicit_glyph_width() {
        let board = PieceBoard::new(Size { width: 2, height: 1 })
            .with_piece(Position::new(0, 0), Piece::new(PieceKind::Rook, Color::Black));
        let margins = Margins {
            piece: PieceMargins {
                vertical: VerticalMargins { top: 1, bottom: 0 },
                ..Default::default()
            },
            ..Default::default()
        };
        let config = RenderConfig::new(Box::new(SymbolEncoder), "·", margins, Box::new(NoColor), Color::Black)
            .with_glyph_width(2);

        assert_eq!(config.glyph_width(), 2);
        assert_eq!(render(&board, &config), "     \n1♜·\n ab");
    }

    #[test]
    fn test_tall_board_aligns_rank_labels() {
        let board = PieceBoard::new(Size { width: 2, height: 10 });
        let text = render(&board, &config(Margins::default(), Color::Black));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "10xx");
        assert_eq!(lines[9], " 1xx");
        assert_eq!(lines[10], "  ab");
    }

    #[test]
    fn test_empty_board() {
        let board = PieceBoard::new(Size { width: 0, height: 0 });
        assert_eq!(render(&board, &config(Margins::default(), Color::Black)), " ");
    }

    #[test]
    fn test_file_labels_past_z() {
        assert_eq!(file_label(0), "a");
        assert_eq!(file_label(25), "z");
        assert_eq!(file_label(26), "aa");
        assert_eq!(file_label(27), "ab");
    }
}
