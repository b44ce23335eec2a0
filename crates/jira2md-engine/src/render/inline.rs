use crate::parsing::inline::{
    Image, Inline,
    kinds::{Color, Link, Mention, StatusIcon},
};

use super::escape::escape_text;

/// Characters that may directly follow a mention without a separating space.
const MENTION_TRAILERS: [char; 6] = ['.', ',', ':', '!', '?', ']'];

/// Renders an inline sequence.
///
/// A mention is padded with one space on each side when it touches text or
/// another mention, except before trailing punctuation.
pub fn render_inlines(nodes: &[Inline]) -> String {
    let mut out = String::new();

    for (idx, node) in nodes.iter().enumerate() {
        if !matches!(node, Inline::Mention { .. }) {
            out.push_str(&render_inline(node));
            continue;
        }

        let prev = idx.checked_sub(1).and_then(|i| nodes.get(i));
        if let Some(Inline::Text { value }) = prev {
            if !value.ends_with(' ') {
                out.push(' ');
            }
        }

        out.push_str(&render_inline(node));

        match nodes.get(idx + 1) {
            Some(Inline::Text { value })
                if !value.starts_with(' ') && !value.starts_with(MENTION_TRAILERS) =>
            {
                out.push(' ');
            }
            Some(Inline::Mention { .. }) => out.push(' '),
            _ => {}
        }
    }

    out
}

pub fn render_inline(node: &Inline) -> String {
    match node {
        Inline::Text { value } => escape_text(value),
        Inline::Strong { children } => format!("**{}**", render_inlines(children)),
        Inline::Strike { children } => format!("~~{}~~", render_inlines(children)),
        Inline::Emphasis { children } => format!("_{}_", render_inlines(children)),
        Inline::Underline { children } => wrap_tag("u", children),
        Inline::InlineQuote { children } => wrap_tag("q", children),
        Inline::Sup { children } => wrap_tag("sup", children),
        Inline::Sub { children } => wrap_tag("sub", children),
        Inline::ColorSpan { color, children } => format!(
            r#"<font color="{}">{}</font>"#,
            Color::normalize(color),
            render_inlines(children)
        ),
        Inline::CodeSpan { code } => format!("`{code}`"),
        Inline::Link { text, url } => render_link(text.as_deref(), url),
        Inline::Anchor { name } => format!(r#"<a name="{name}"></a>"#),
        Inline::Image(image) => render_image(image),
        Inline::Mention { id } => format!("@{}", Mention::display_id(id)),
        Inline::Checkbox { checked: true } => "[x]".to_string(),
        Inline::Checkbox { checked: false } => "[ ]".to_string(),
        Inline::StatusIcon { icon } => StatusIcon::emoji(icon)
            .unwrap_or(icon.as_str())
            .to_string(),
    }
}

fn wrap_tag(tag: &str, children: &[Inline]) -> String {
    format!("<{tag}>{}</{tag}>", render_inlines(children))
}

/// Without display text a link is an autolink. A mailto link whose text is
/// just its address collapses to the same form.
fn render_link(text: Option<&[Inline]>, url: &str) -> String {
    let address = url.strip_prefix(Link::MAILTO);
    let Some(text) = text else {
        return format!("<{}>", address.unwrap_or(url));
    };

    let rendered = render_inlines(text);
    if address == Some(rendered.as_str()) {
        format!("<{rendered}>")
    } else {
        format!("[{rendered}]({url})")
    }
}

fn render_image(image: &Image) -> String {
    let alt = image.alt.as_deref().unwrap_or_default();
    let mut out = format!("![{alt}]({})", image.src);

    let dims: Vec<String> = [("width", &image.width), ("height", &image.height)]
        .into_iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| format!("{key}={v}")))
        .collect();
    if !dims.is_empty() {
        out.push_str(&format!("{{{}}}", dims.join(" ")));
    }
    out
}
