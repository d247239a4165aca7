use serde::{Deserialize, Serialize};

/// A colour in the 256-entry terminal palette.
///
/// 0-7 are the basic colours, 8-15 their bright variants, 16-231 the 6x6x6
/// cube and 232-255 the gray ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u8);

impl Color {
    pub fn index(self) -> u8 {
        self.0
    }
}

/// Display style attached to a `color.<key>` rule.
///
/// Every field is optional: `None` means "not specified by this rule", which
/// is different from an explicit value and lets [`StyleRule::overlay`] keep
/// whatever a lower-precedence rule contributed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
}

impl StyleRule {
    pub fn fg(index: u8) -> Self {
        StyleRule {
            fg: Some(Color(index)),
            ..StyleRule::default()
        }
    }

    pub fn bg(index: u8) -> Self {
        StyleRule {
            bg: Some(Color(index)),
            ..StyleRule::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == StyleRule::default()
    }

    /// Lay `top` over `self`: fields set on `top` win, unset ones fall through.
    pub fn overlay(&self, top: &StyleRule) -> StyleRule {
        StyleRule {
            fg: top.fg.or(self.fg),
            bg: top.bg.or(self.bg),
            bold: top.bold.or(self.bold),
            underline: top.underline.or(self.underline),
        }
    }
}
