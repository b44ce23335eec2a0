use std::sync::LazyLock;

use regex::Regex;

static STATUS_ICON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(([x/!iyn ?+\-])\)").unwrap());

/// A one-character status token in parentheses, e.g. `(/)` or `(!)`.
pub struct StatusIcon;

impl StatusIcon {
    const EMOJI: &'static [(&'static str, &'static str)] = &[
        ("(/)", "✅"),
        ("(x)", "❌"),
        ("(!)", "⚠️"),
        ("(i)", "ℹ️"),
        ("(y)", "👍"),
        ("(n)", "👎"),
        ("( )", "⚪"),
        ("(?)", "❓"),
        ("(+)", "➕"),
        ("(-)", "➖"),
    ];

    pub fn pattern() -> &'static Regex {
        &STATUS_ICON
    }

    /// The emoji for an icon token, if it is one of the known tokens.
    pub fn emoji(icon: &str) -> Option<&'static str> {
        Self::EMOJI
            .iter()
            .find(|(token, _)| *token == icon)
            .map(|(_, emoji)| *emoji)
    }
}
