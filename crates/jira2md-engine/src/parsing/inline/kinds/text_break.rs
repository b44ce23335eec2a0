use std::sync::LazyLock;

use regex::Regex;

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\\\\").unwrap());

/// Line breaks (`\\`) and typographic dashes (`---`, `--`).
pub struct TextBreak;

impl TextBreak {
    pub const EM_DASH_MARKUP: &'static str = "---";
    pub const EN_DASH_MARKUP: &'static str = "--";
    pub const EM_DASH: &'static str = "\u{2014}";
    pub const EN_DASH: &'static str = "\u{2013}";
    /// A dash run followed by this is an arrow and stays literal.
    pub const ARROW_HEAD: char = '>';

    pub fn line_break() -> &'static Regex {
        &LINE_BREAK
    }

    /// The text a dash run turns into, given the character that follows it.
    pub fn dash_text(markup: &'static str, next: Option<char>) -> &'static str {
        if next == Some(Self::ARROW_HEAD) {
            return markup;
        }
        if markup == Self::EM_DASH_MARKUP {
            Self::EM_DASH
        } else {
            Self::EN_DASH
        }
    }
}
