use crate::model::style::{Color, StyleRule};

/// Error type for config parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown color {token:?}")]
    UnknownColor { token: String },
}

impl ConfigError {
    /// The text that could not be understood
    pub fn token(&self) -> &str {
        match self {
            ConfigError::UnknownColor { token } => token,
        }
    }
}

const BASIC_COLORS: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

/// Parse a style spec like `bold bright white on rgb013`.
///
/// `bold`, `underline` and `inverse` are flags wherever they appear. The
/// remaining words before `on` name the foreground, the words after it the
/// background. `inverse` swaps the two after they are resolved, including
/// swapping a colour into an empty slot.
pub fn parse_style(spec: &str) -> Result<StyleRule, ConfigError> {
    let mut rule = StyleRule::default();
    let mut inverse = false;
    let mut seen_on = false;
    let mut fg_words: Vec<&str> = Vec::new();
    let mut bg_words: Vec<&str> = Vec::new();

    for word in spec.split_whitespace() {
        match word {
            "bold" => rule.bold = Some(true),
            "underline" => rule.underline = Some(true),
            "inverse" => inverse = true,
            "on" if !seen_on => seen_on = true,
            _ if seen_on => bg_words.push(word),
            _ => fg_words.push(word),
        }
    }

    if !fg_words.is_empty() {
        rule.fg = Some(parse_color(&fg_words.join(" "))?);
    }
    if !bg_words.is_empty() {
        rule.bg = Some(parse_color(&bg_words.join(" "))?);
    }
    if inverse {
        std::mem::swap(&mut rule.fg, &mut rule.bg);
    }

    tracing::trace!(spec, ?rule, "parsed style");
    Ok(rule)
}

/// Resolve one colour name to its palette index.
///
/// Accepted forms: `[bright ]<basic>`, `color0`-`color255`, `rgbRGB` with
/// each digit 0-5, and `gray0`-`gray23`.
pub fn parse_color(token: &str) -> Result<Color, ConfigError> {
    let unknown = || ConfigError::UnknownColor {
        token: token.to_string(),
    };

    let (bright, name) = match token.strip_prefix("bright ") {
        Some(rest) => (true, rest.trim_start()),
        None => (false, token),
    };

    if let Some(index) = BASIC_COLORS.iter().position(|c| *c == name) {
        let index = index as u8;
        return Ok(Color(if bright { index + 8 } else { index }));
    }

    if let Some(number) = name.strip_prefix("color") {
        return decimal(number)
            .and_then(|n| u8::try_from(n).ok())
            .map(Color)
            .ok_or_else(unknown);
    }

    if let Some(digits) = name.strip_prefix("rgb") {
        let cube: Vec<u8> = digits.bytes().map(|b| b.wrapping_sub(b'0')).collect();
        return match cube.as_slice() {
            [r, g, b] if *r <= 5 && *g <= 5 && *b <= 5 => Ok(Color(16 + r * 36 + g * 6 + b)),
            _ => Err(unknown()),
        };
    }

    if let Some(level) = name.strip_prefix("gray") {
        return decimal(level)
            .filter(|n| *n <= 23)
            .map(|n| Color(232 + n as u8))
            .ok_or_else(unknown);
    }

    Err(unknown())
}

/// A non-empty run of ASCII digits
fn decimal(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
