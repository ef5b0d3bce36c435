//! CSS Color values and parsing
//!
//! [CSS Color Level 3](https://www.w3.org/TR/css-color-3/)

use core::fmt;

use serde::Serialize;

use crate::tokenizer::{Token, TokenStream};

/// [§ 4 Color units](https://www.w3.org/TR/css-color-3/#colorunits)
/// sRGB color represented as RGBA components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorValue {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// "the alpha channel" (0-255, 255 = fully opaque)
    pub a: u8,
}

/// [§ 4.1 Basic color keywords](https://www.w3.org/TR/css-color-3/#html4)
/// plus the commonly used part of the extended (X11) table.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("silver", [192, 192, 192]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("white", [255, 255, 255]),
    ("maroon", [128, 0, 0]),
    ("red", [255, 0, 0]),
    ("purple", [128, 0, 128]),
    ("fuchsia", [255, 0, 255]),
    ("magenta", [255, 0, 255]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("olive", [128, 128, 0]),
    ("yellow", [255, 255, 0]),
    ("navy", [0, 0, 128]),
    ("blue", [0, 0, 255]),
    ("teal", [0, 128, 128]),
    ("aqua", [0, 255, 255]),
    ("cyan", [0, 255, 255]),
    ("orange", [255, 165, 0]),
    ("pink", [255, 192, 203]),
    ("brown", [165, 42, 42]),
    ("gold", [255, 215, 0]),
    ("indigo", [75, 0, 130]),
    ("violet", [238, 130, 238]),
    ("coral", [255, 127, 80]),
    ("salmon", [250, 128, 114]),
    ("crimson", [220, 20, 60]),
    ("tomato", [255, 99, 71]),
    ("khaki", [240, 230, 140]),
    ("beige", [245, 245, 220]),
    ("ivory", [255, 255, 240]),
    ("lavender", [230, 230, 250]),
    ("turquoise", [64, 224, 208]),
    ("tan", [210, 180, 140]),
    ("chocolate", [210, 105, 30]),
    ("lightgray", [211, 211, 211]),
    ("lightgrey", [211, 211, 211]),
    ("darkgray", [169, 169, 169]),
    ("darkgrey", [169, 169, 169]),
    ("dimgray", [105, 105, 105]),
    ("lightblue", [173, 216, 230]),
    ("skyblue", [135, 206, 235]),
    ("steelblue", [70, 130, 180]),
    ("royalblue", [65, 105, 225]),
    ("darkblue", [0, 0, 139]),
    ("darkred", [139, 0, 0]),
    ("darkgreen", [0, 100, 0]),
    ("lightgreen", [144, 238, 144]),
    ("forestgreen", [34, 139, 34]),
    ("seagreen", [46, 139, 87]),
    ("orchid", [218, 112, 214]),
    ("plum", [221, 160, 221]),
    ("whitesmoke", [245, 245, 245]),
    ("gainsboro", [220, 220, 220]),
    ("aliceblue", [240, 248, 255]),
    ("slategray", [112, 128, 144]),
    ("rebeccapurple", [102, 51, 153]),
];

impl ColorValue {
    /// Black (#000000)
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// [§ 4.2.3 'transparent' color keyword](https://www.w3.org/TR/css-color-3/#transparent)
    /// "a shorthand for transparent black, rgba(0,0,0,0)"
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// An opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// [§ 4.2.1 RGB color values](https://www.w3.org/TR/css-color-3/#rgb-color)
    /// "The format of an RGB value in hexadecimal notation is a '#' immediately
    /// followed by either three or six hexadecimal characters."
    ///
    /// The four- and eight-digit alpha forms from Color Level 4 are accepted too.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
        let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            // "The three-digit RGB notation (#rgb) is converted into six-digit
            // form (#rrggbb) by replicating digits, not by adding zeros."
            3 => Some(Self::rgb(digit(0)?, digit(1)?, digit(2)?)),
            4 => Some(Self {
                r: digit(0)?,
                g: digit(1)?,
                b: digit(2)?,
                a: digit(3)?,
            }),
            6 => Some(Self::rgb(pair(0)?, pair(2)?, pair(4)?)),
            8 => Some(Self {
                r: pair(0)?,
                g: pair(2)?,
                b: pair(4)?,
                a: pair(6)?,
            }),
            _ => None,
        }
    }

    /// [§ 4.3 Extended color keywords](https://www.w3.org/TR/css-color-3/#svg-color)
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("transparent") {
            return Some(Self::TRANSPARENT);
        }
        NAMED_COLORS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, [r, g, b])| Self::rgb(*r, *g, *b))
    }
}

/// Serializes as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// Parse a `<color>` from the front of `stream`.
///
/// Consumes the color tokens on success. On failure the stream may have been
/// advanced past part of a malformed `rgb()` function; callers reject the
/// whole declaration in that case.
pub fn parse_color(stream: &mut TokenStream<'_>) -> Option<ColorValue> {
    let color = match stream.peek()? {
        Token::Hash(hex) => ColorValue::from_hex(hex)?,
        Token::Ident(name) => ColorValue::from_named(name)?,
        Token::Function(name)
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            stream.advance();
            return parse_rgb_function(stream);
        }
        _ => return None,
    };
    stream.advance();
    Some(color)
}

/// [§ 4.2.1](https://www.w3.org/TR/css-color-3/#rgb-color)
/// "The format of an RGB value in the functional notation is 'rgb(' followed by
/// a comma-separated list of three numerical values (either three integer
/// values or three percentage values) followed by ')'."
///
/// "Values outside the device gamut should be clipped"
fn parse_rgb_function(stream: &mut TokenStream<'_>) -> Option<ColorValue> {
    let mut channels = [0u8; 3];
    let mut percentages = None;
    for (i, channel) in channels.iter_mut().enumerate() {
        if i > 0 && !stream.eat_delim(',') {
            return None;
        }
        let (value, is_percentage) = match stream.next()? {
            Token::Number(n) => (*n, false),
            Token::Percentage(p) => (p * 255.0 / 100.0, true),
            _ => return None,
        };
        // "either three integer values or three percentage values"
        if *percentages.get_or_insert(is_percentage) != is_percentage {
            return None;
        }
        *channel = clamp_channel(value);
    }
    let mut alpha = 255;
    if stream.eat_delim(',') {
        alpha = match stream.next()? {
            Token::Number(n) => clamp_channel(n * 255.0),
            Token::Percentage(p) => clamp_channel(p * 255.0 / 100.0),
            _ => return None,
        };
    }
    if !stream.eat_delim(')') {
        return None;
    }
    let [r, g, b] = channels;
    Some(ColorValue { r, g, b, a: alpha })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::CSSTokenizer;

    fn color(text: &str) -> Option<ColorValue> {
        let tokens = CSSTokenizer::tokenize(text);
        let mut stream = TokenStream::new(&tokens);
        parse_color(&mut stream).filter(|_| stream.is_exhausted())
    }

    #[test]
    fn hex_forms() {
        assert_eq!(color("#f00"), Some(ColorValue::rgb(255, 0, 0)));
        assert_eq!(color("#00ff0080").map(|c| c.a), Some(0x80));
        assert_eq!(color("#12345"), None);
        assert_eq!(color("#ggg"), None);
    }

    #[test]
    fn functional_notation_clips() {
        assert_eq!(color("rgb(300, 0, -5)"), Some(ColorValue::rgb(255, 0, 0)));
        assert_eq!(color("rgb(100%, 50%, 0%)"), Some(ColorValue::rgb(255, 128, 0)));
        assert_eq!(color("rgba(0, 0, 0, 0.5)").map(|c| c.a), Some(128));
        assert_eq!(color("rgb(100%, 0, 0)"), None);
        assert_eq!(color("rgb(1, 2)"), None);
    }

    #[test]
    fn named_colors_ignore_case() {
        assert_eq!(color("Navy"), Some(ColorValue::rgb(0, 0, 128)));
        assert_eq!(color("transparent"), Some(ColorValue::TRANSPARENT));
        assert_eq!(color("notacolor"), None);
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(ColorValue::rgb(255, 0, 16).to_string(), "#ff0010");
        assert_eq!(ColorValue::TRANSPARENT.to_string(), "#00000000");
    }
}
