/// Escapes literal text so Markdown reads it back verbatim.
///
/// Emphasis, link and code punctuation get a backslash. Angle brackets become
/// entities, except where they form an arrow with `-` or `=` (`->`, `=>`,
/// `<-`, `<=`).
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev = None;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' | '*' | '_' | '[' | ']' | '~' | '^' | '`' => {
                out.push('\\');
                out.push(c);
            }
            '<' if !chars.peek().is_some_and(|n| is_arrow_shaft(*n)) => out.push_str("&lt;"),
            '>' if !prev.is_some_and(is_arrow_shaft) => out.push_str("&gt;"),
            c => out.push(c),
        }
        prev = Some(c);
    }

    out
}

fn is_arrow_shaft(c: char) -> bool {
    c == '-' || c == '='
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("plain text", "plain text")]
    #[case("Text with [link-like]", r"Text with \[link-like\]")]
    #[case("a*b_c", r"a\*b\_c")]
    #[case(r"back\slash", r"back\\slash")]
    #[case("~^`", r"\~\^\`")]
    #[case("<div>", "&lt;div&gt;")]
    #[case("a -> b", "a -> b")]
    #[case("a --> b", "a --> b")]
    #[case("a => b", "a => b")]
    #[case("a <- b <= c", "a <- b <= c")]
    #[case("1 < 2 > 0", "1 &lt; 2 &gt; 0")]
    #[case("—", "—")]
    fn escapes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_text(input), expected);
    }
}
