//! Constructs introduced by `[`: mentions, checkboxes and links.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::inline::{Inline, parse_inline};

static MENTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[~([^\]]+)\]").unwrap());
static CHECKBOX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[([ xX])\]").unwrap());
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([^\]|]*)(?:\|([^\]]*))?\]").unwrap());
static DOMAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9][-a-zA-Z0-9.]*\.[a-zA-Z]{2,}").unwrap());

/// `[~id]`
pub struct Mention;

impl Mention {
    pub const OPEN: &'static str = "[~";
    /// Prefix of opaque account ids, hidden when rendering (case-insensitive).
    pub const ACCOUNT_PREFIX: &'static str = "accountid:";

    pub fn pattern() -> &'static Regex {
        &MENTION
    }

    /// The id as displayed, without any account prefix.
    pub fn display_id(id: &str) -> &str {
        match id.get(..Self::ACCOUNT_PREFIX.len()) {
            Some(head) if head.eq_ignore_ascii_case(Self::ACCOUNT_PREFIX) => {
                &id[Self::ACCOUNT_PREFIX.len()..]
            }
            _ => id,
        }
    }
}

/// `[ ]`, `[x]`, `[X]`
pub struct Checkbox;

impl Checkbox {
    pub fn pattern() -> &'static Regex {
        &CHECKBOX
    }

    pub fn is_checked(mark: &str) -> bool {
        mark.eq_ignore_ascii_case("x")
    }
}

/// `[target]` or `[alias|target]`
pub struct Link;

impl Link {
    pub const MAILTO: &'static str = "mailto:";
    pub const ANCHOR: char = '#';
    pub const ATTACHMENT: char = '^';

    pub fn pattern() -> &'static Regex {
        &LINK
    }

    /// Resolves a bracketed token into a link.
    ///
    /// `raw` is the whole bracketed token; it comes back as literal text when
    /// the target cannot be classified.
    pub fn resolve(raw: &str, label: &str, target: Option<&str>) -> Inline {
        let label = label.trim();
        let target = target.map(str::trim).unwrap_or_default();

        if !target.is_empty() {
            let url = match target.strip_prefix(Self::MAILTO) {
                Some(address) => format!("{}{}", Self::MAILTO, address.trim()),
                None => target.to_string(),
            };
            return Inline::Link {
                text: Some(parse_inline(label)),
                url,
            };
        }

        if label.starts_with(Self::ANCHOR) {
            return Inline::Link {
                text: Some(vec![Inline::text(label)]),
                url: label.to_string(),
            };
        }
        if let Some(file) = label.strip_prefix(Self::ATTACHMENT) {
            return Inline::Link {
                text: Some(vec![Inline::text(file)]),
                url: file.to_string(),
            };
        }
        if let Some(address) = label.strip_prefix(Self::MAILTO) {
            return Inline::Link {
                text: None,
                url: address.trim().to_string(),
            };
        }
        if Self::is_literal_url(label) {
            return Inline::Link {
                text: None,
                url: label.to_string(),
            };
        }
        if DOMAIN.is_match(label) {
            return Inline::Link {
                text: None,
                url: format!("https://{label}"),
            };
        }
        Inline::text(raw)
    }

    fn is_literal_url(s: &str) -> bool {
        s.starts_with("http") || s.starts_with("ftp") || s.starts_with("file:")
    }
}
