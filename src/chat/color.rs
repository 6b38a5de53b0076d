//! Chat color codes and translation
//!
//! The host server renders colors from section-sign escapes (`§4`).
//! Config files use the friendlier `&` marker, which is translated just
//! before a message is handed to the host.

use std::fmt;

/// The escape character the host server understands
pub const COLOR_CHAR: char = '§';

/// A chat color or formatting code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    Magic,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Reset,
}

impl ChatColor {
    /// The single-character code for this color
    pub fn code(&self) -> char {
        match self {
            Self::Black => '0',
            Self::DarkBlue => '1',
            Self::DarkGreen => '2',
            Self::DarkAqua => '3',
            Self::DarkRed => '4',
            Self::DarkPurple => '5',
            Self::Gold => '6',
            Self::Gray => '7',
            Self::DarkGray => '8',
            Self::Blue => '9',
            Self::Green => 'a',
            Self::Aqua => 'b',
            Self::Red => 'c',
            Self::LightPurple => 'd',
            Self::Yellow => 'e',
            Self::White => 'f',
            Self::Magic => 'k',
            Self::Bold => 'l',
            Self::Strikethrough => 'm',
            Self::Underline => 'n',
            Self::Italic => 'o',
            Self::Reset => 'r',
        }
    }

    /// Look up a color by its code character, case-insensitively
    pub fn by_char(code: char) -> Option<Self> {
        let color = match code.to_ascii_lowercase() {
            '0' => Self::Black,
            '1' => Self::DarkBlue,
            '2' => Self::DarkGreen,
            '3' => Self::DarkAqua,
            '4' => Self::DarkRed,
            '5' => Self::DarkPurple,
            '6' => Self::Gold,
            '7' => Self::Gray,
            '8' => Self::DarkGray,
            '9' => Self::Blue,
            'a' => Self::Green,
            'b' => Self::Aqua,
            'c' => Self::Red,
            'd' => Self::LightPurple,
            'e' => Self::Yellow,
            'f' => Self::White,
            'k' => Self::Magic,
            'l' => Self::Bold,
            'm' => Self::Strikethrough,
            'n' => Self::Underline,
            'o' => Self::Italic,
            'r' => Self::Reset,
            _ => return None,
        };
        Some(color)
    }
}

impl fmt::Display for ChatColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", COLOR_CHAR, self.code())
    }
}

/// Translate marker-prefixed color codes into the host's escape form.
///
/// A marker character directly followed by a valid code character becomes
/// the section-sign escape with the code lowercased. Everything else passes
/// through untouched.
pub fn translate_color_codes(marker: char, input: &str) -> String {
    let mut chars: Vec<char> = input.chars().collect();
    if chars.len() < 2 {
        return input.to_string();
    }
    for i in 0..chars.len() - 1 {
        if chars[i] == marker && ChatColor::by_char(chars[i + 1]).is_some() {
            chars[i] = COLOR_CHAR;
            chars[i + 1] = chars[i + 1].to_ascii_lowercase();
        }
    }
    chars.into_iter().collect()
}

/// Remove all color escapes from a message, leaving the plain text
pub fn strip_color_codes(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c == COLOR_CHAR {
            chars.next();
        } else {
            output.push(c);
        }
    }
    output
}
