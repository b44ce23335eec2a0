//! Constructs introduced by `{`: monospace, anchors and colored text.

use std::sync::LazyLock;

use regex::Regex;

static MONOSPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\{\{([^}]+)\}\}").unwrap());
static ANCHOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\{anchor:([^}]+)\}").unwrap());
static COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{color:([^}]+)\}(.*?)\{color\}").unwrap());
static RGBA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rgba\((\d+),\s*(\d+),\s*(\d+)").unwrap());

/// `{{code}}`. The content is a raw zone.
pub struct Monospace;

impl Monospace {
    pub const OPEN: &'static str = "{{";

    pub fn pattern() -> &'static Regex {
        &MONOSPACE
    }
}

/// `{anchor:name}`
pub struct Anchor;

impl Anchor {
    pub const OPEN: &'static str = "{anchor";

    pub fn pattern() -> &'static Regex {
        &ANCHOR
    }
}

/// `{color:value}text{color}`
pub struct Color;

impl Color {
    pub const OPEN: &'static str = "{color";

    pub fn pattern() -> &'static Regex {
        &COLOR
    }

    /// Converts an `rgba(r, g, b, a)` value to `#rrggbb`, dropping alpha.
    /// Any other value is returned unchanged.
    pub fn normalize(value: &str) -> String {
        if !value.starts_with("rgba") {
            return value.to_string();
        }
        let Some(caps) = RGBA.captures(value) else {
            return value.to_string();
        };
        let mut hex = String::from("#");
        for idx in 1..=3 {
            let Ok(channel) = caps[idx].parse::<u32>() else {
                return value.to_string();
            };
            hex.push_str(&format!("{channel:02x}"));
        }
        hex
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("red", "red")]
    #[case("#0077ff", "#0077ff")]
    #[case("rgba(255, 127, 63, 0.3)", "#ff7f3f")]
    #[case("rgba(0,0,0,1)", "#000000")]
    #[case("rgba(oops)", "rgba(oops)")]
    fn normalizes_colors(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Color::normalize(input), expected);
    }

    #[test]
    fn color_pattern_captures_value_and_body() {
        let caps = Color::pattern().captures("{color:red}hi{color} tail").unwrap();
        assert_eq!(&caps[1], "red");
        assert_eq!(&caps[2], "hi");
    }

    #[test]
    fn monospace_needs_double_braces() {
        assert!(Monospace::pattern().is_match("{{x}}"));
        assert!(!Monospace::pattern().is_match("{{}}"));
        assert!(!Monospace::pattern().is_match("{x}"));
    }
}
