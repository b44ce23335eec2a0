use serde::{Deserialize, Serialize};

/// A parsed inline node.
///
/// `Text` is the only variant carrying escapable content. `CodeSpan` is a raw
/// zone: its code is never re-parsed and never escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Inline {
    /// Literal text.
    Text { value: String },
    /// `*strong*`
    Strong { children: Vec<Inline> },
    /// `-strike-`
    Strike { children: Vec<Inline> },
    /// `+inserted+`
    Underline { children: Vec<Inline> },
    /// `_emphasis_`
    Emphasis { children: Vec<Inline> },
    /// `^sup^`
    Sup { children: Vec<Inline> },
    /// `~sub~`
    Sub { children: Vec<Inline> },
    /// `??citation??`
    InlineQuote { children: Vec<Inline> },
    /// `{color:red}text{color}`
    ColorSpan { color: String, children: Vec<Inline> },
    /// `{{code}}`
    CodeSpan { code: String },
    /// A resolved link. `text: None` renders as an autolink.
    Link {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<Vec<Inline>>,
        url: String,
    },
    /// `{anchor:name}`
    Anchor { name: String },
    /// `!src|params!`
    Image(Image),
    /// `[~id]`. The id is stored verbatim, prefixes included.
    Mention { id: String },
    /// `[ ]`, `[x]`
    Checkbox { checked: bool },
    /// `(/)`, `(x)`, ... The icon is the full parenthesised token.
    StatusIcon { icon: String },
}

/// An embedded image and its optional display attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hspace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vspace: Option<String>,
    #[serde(default)]
    pub thumbnail: bool,
}

impl Inline {
    pub fn text(value: impl Into<String>) -> Self {
        Inline::Text {
            value: value.into(),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Inline::Text { .. })
    }
}

/// Merges every run of adjacent `Text` nodes into a single node.
///
/// Applying this to an already coalesced sequence returns it unchanged.
pub fn coalesce_text(nodes: Vec<Inline>) -> Vec<Inline> {
    let mut out: Vec<Inline> = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let Inline::Text { value } = &node {
            if let Some(Inline::Text { value: last }) = out.last_mut() {
                last.push_str(value);
                continue;
            }
        }
        out.push(node);
    }
    out
}
