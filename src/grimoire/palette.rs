//! Domain colors.
//!
//! Every known domain maps to a fixed color; anything else gets the neutral
//! [`DEFAULT_COLOR`]. Lookups are exact, case-sensitive string matches.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const DEFAULT_COLOR: &str = "#888";

const DOMAIN_COLORS: &[(&str, &str)] = &[
    ("Arcano", "#835493"),
    ("Spada", "#b63f37"),
    ("Ossa", "#d6e2e9"),
    ("Codex", "#2b5e99"),
    ("Grazia", "#c94e8e"),
    ("Mezzanotte", "#3f4344"),
    ("Saggio", "#1b7d48"),
    ("Splendore", "#eacb27"),
    ("Valore", "#d97326"),
];

static PALETTE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| DOMAIN_COLORS.iter().copied().collect());

/// Hex color for a domain.
pub fn domain_color(domain: &str) -> &'static str {
    PALETTE.get(domain).copied().unwrap_or(DEFAULT_COLOR)
}

/// RGB triple for a domain, for truecolor terminals.
pub fn domain_rgb(domain: &str) -> (u8, u8, u8) {
    // The table only holds well-formed colors.
    hex_to_rgb(domain_color(domain)).unwrap_or((0x88, 0x88, 0x88))
}

/// Parses `#rgb` or `#rrggbb`.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(expanded.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_domains_have_fixed_colors() {
        assert_eq!(domain_color("Arcano"), "#835493");
        assert_eq!(domain_color("Valore"), "#d97326");
    }

    #[test]
    fn unknown_domain_falls_back_to_neutral() {
        assert_eq!(domain_color("Sconosciuto"), DEFAULT_COLOR);
        assert_eq!(domain_color("arcano"), DEFAULT_COLOR);
        assert_eq!(domain_color(""), DEFAULT_COLOR);
    }

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(hex_to_rgb("#b63f37"), Some((0xb6, 0x3f, 0x37)));
        assert_eq!(hex_to_rgb("#888"), Some((0x88, 0x88, 0x88)));
        assert_eq!(hex_to_rgb("888888"), None);
        assert_eq!(hex_to_rgb("#12345"), None);
        assert_eq!(hex_to_rgb("#zzzzzz"), None);
    }

    #[test]
    fn rgb_for_unknown_domain_is_grey() {
        assert_eq!(domain_rgb("???"), (0x88, 0x88, 0x88));
        assert_eq!(domain_rgb("Codex"), (0x2b, 0x5e, 0x99));
    }
}
