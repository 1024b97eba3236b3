//! Colorizer module.
//! Wraps text with a color marker; unset colors pass text through.
//! ANSI codes come from an explicit `ColorCodes` value, not from globals.

use crate::color::{Color, OptionalColor};
use serde::{Deserialize, Serialize};

pub trait Colorizer: Send + Sync {
    fn colorize(&self, text: &str, color: OptionalColor) -> String;
}

impl<F> Colorizer for F
where
    F: Fn(&str, OptionalColor) -> String + Send + Sync,
{
    fn colorize(&self, text: &str, color: OptionalColor) -> String {
        self(text, color)
    }
}

/// The disabled colorizer.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoColor;

impl Colorizer for NoColor {
    fn colorize(&self, text: &str, _color: OptionalColor) -> String {
        text.to_string()
    }
}

/// SGR parameters for each color, e.g. 40/47 for square backgrounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCodes {
    pub black: u8,
    pub white: u8,
}

impl ColorCodes {
    pub fn code(&self, color: Color) -> u8 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AnsiColorizer {
    codes: ColorCodes,
}

impl AnsiColorizer {
    pub fn new(codes: ColorCodes) -> Self {
        AnsiColorizer { codes }
    }
}

fn set_tty_mode(mode: u8) -> String {
    format!("\x1b[{}m", mode)
}

impl Colorizer for AnsiColorizer {
    fn colorize(&self, text: &str, color: OptionalColor) -> String {
        match color.value() {
            Some(color) => format!("{}{}{}", set_tty_mode(self.codes.code(color)), text, set_tty_mode(0)),
            None => text.to_string(),
        }
    }
}
