use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::inline::Inline;

static STRONG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*([^* \n\r][^*]*?[^* \n\r]|\S)\*").unwrap());
static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^_([^_ \n\r][^_]*?[^_ \n\r]|\S)_").unwrap());
static STRIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-([^- \n\r][^-]*?[^- \n\r]|\S)-").unwrap());
static INSERTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+([^+ \n\r][^+]*?[^+ \n\r]|\S)\+").unwrap());
static SUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\^([^\^]+)\^").unwrap());
static SUB: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^~([^~]+)~").unwrap());
static CITATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\?\?([^?]+)\?\?").unwrap());

/// A text effect written as content between a pair of identical delimiters.
///
/// Strong, emphasis, strike and inserted forbid whitespace directly inside the
/// delimiters, so stray symbols like `a * b * c` stay literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEffect {
    Strong,
    Emphasis,
    Strike,
    Inserted,
    Sup,
    Sub,
    Citation,
}

impl TextEffect {
    /// The delimiter that opens and closes the effect.
    pub fn delimiter(self) -> &'static str {
        match self {
            TextEffect::Strong => "*",
            TextEffect::Emphasis => "_",
            TextEffect::Strike => "-",
            TextEffect::Inserted => "+",
            TextEffect::Sup => "^",
            TextEffect::Sub => "~",
            TextEffect::Citation => "??",
        }
    }

    /// The effect introduced by `c`, if any. Citation needs a second `?`,
    /// which its pattern checks.
    pub fn for_char(c: char) -> Option<Self> {
        match c {
            '*' => Some(TextEffect::Strong),
            '_' => Some(TextEffect::Emphasis),
            '-' => Some(TextEffect::Strike),
            '+' => Some(TextEffect::Inserted),
            '^' => Some(TextEffect::Sup),
            '~' => Some(TextEffect::Sub),
            '?' => Some(TextEffect::Citation),
            _ => None,
        }
    }

    /// Pattern capturing the inner content in group 1.
    pub fn pattern(self) -> &'static Regex {
        match self {
            TextEffect::Strong => &STRONG,
            TextEffect::Emphasis => &EMPHASIS,
            TextEffect::Strike => &STRIKE,
            TextEffect::Inserted => &INSERTED,
            TextEffect::Sup => &SUP,
            TextEffect::Sub => &SUB,
            TextEffect::Citation => &CITATION,
        }
    }

    /// Extra context a strike must satisfy: no whitespace right after the
    /// opening `-` and no word character right after the closing one.
    ///
    /// `matched` is the full match and `after` the text following it.
    pub fn accepts(self, matched: &str, after: &str) -> bool {
        if self != TextEffect::Strike {
            return true;
        }
        let opens_on_space = matched[1..].starts_with(char::is_whitespace);
        let closes_in_word = after
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_');
        !opens_on_space && !closes_in_word
    }

    /// Wraps parsed children in the matching inline node.
    pub fn wrap(self, children: Vec<Inline>) -> Inline {
        match self {
            TextEffect::Strong => Inline::Strong { children },
            TextEffect::Emphasis => Inline::Emphasis { children },
            TextEffect::Strike => Inline::Strike { children },
            TextEffect::Inserted => Inline::Underline { children },
            TextEffect::Sup => Inline::Sup { children },
            TextEffect::Sub => Inline::Sub { children },
            TextEffect::Citation => Inline::InlineQuote { children },
        }
    }
}
