use std::collections::BTreeSet;

use crate::model::config::Config;
use crate::model::style::StyleRule;
use crate::model::virtual_tag::VirtualTag;

/// Combine the `color.*` rules that apply to a task into one style.
///
/// Only precedence entries that are both a virtual tag the task carries and
/// a key with a configured rule take part. They are applied from the lowest
/// precedence (last declared) to the highest (first declared), each one
/// overriding only the fields it sets.
pub fn resolve_style(tags: &BTreeSet<VirtualTag>, config: &Config) -> StyleRule {
    config
        .precedence
        .iter()
        .rev()
        .filter_map(|key| {
            let tag = VirtualTag::from_key(key)?;
            if !tags.contains(&tag) {
                return None;
            }
            config.colors.get(key)
        })
        .fold(StyleRule::default(), |acc, rule| acc.overlay(rule))
}
