use ratatui::style::{Color, Modifier, Style};

use crate::model::style::StyleRule;

/// Translate a resolved rule into a ratatui style.
///
/// Unset fields are left untouched so the result can be patched over a base
/// style; an explicit `false` removes the modifier.
pub fn to_ratatui_style(rule: &StyleRule) -> Style {
    let mut style = Style::default();
    if let Some(fg) = rule.fg {
        style = style.fg(Color::Indexed(fg.index()));
    }
    if let Some(bg) = rule.bg {
        style = style.bg(Color::Indexed(bg.index()));
    }
    style = apply_flag(style, rule.bold, Modifier::BOLD);
    style = apply_flag(style, rule.underline, Modifier::UNDERLINED);
    style
}

fn apply_flag(style: Style, flag: Option<bool>, modifier: Modifier) -> Style {
    match flag {
        Some(true) => style.add_modifier(modifier),
        Some(false) => style.remove_modifier(modifier),
        None => style,
    }
}

/// Header row style for report tables
pub fn header_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}
