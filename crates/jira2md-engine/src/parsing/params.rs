use std::collections::BTreeMap;

/// Attributes parsed from a `|`-delimited parameter string.
///
/// `{code:java|title=Main.java}` yields default `java` and `title = Main.java`.
/// A bare token is only the default when it comes first; later bare tokens
/// are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    default: Option<String>,
    pairs: BTreeMap<String, String>,
}

impl Parameters {
    pub const SEPARATOR: char = '|';
    pub const ASSIGN: char = '=';

    pub fn parse(s: &str) -> Self {
        let mut params = Self::default();
        if s.is_empty() {
            return params;
        }

        for (idx, part) in s.split(Self::SEPARATOR).enumerate() {
            if let Some((key, value)) = part.split_once(Self::ASSIGN) {
                params
                    .pairs
                    .insert(key.trim().to_string(), value.trim().to_string());
            } else if idx == 0 {
                params.default = Some(part.trim().to_string());
            }
        }
        params
    }

    /// The leading bare token, e.g. the language of a code block.
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.get(key).map(String::as_str)
    }

    /// Like [`Parameters::get`], but treats an empty value as absent.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn empty_string_has_nothing() {
        let p = Parameters::parse("");
        assert_eq!(p, Parameters::default());
        assert_eq!(p.default_value(), None);
    }

    #[test]
    fn leading_bare_token_is_default() {
        let p = Parameters::parse("C++|title=test.cpp");
        assert_eq!(p.default_value(), Some("C++"));
        assert_eq!(p.get("title"), Some("test.cpp"));
    }

    #[test]
    fn later_bare_tokens_are_ignored() {
        let p = Parameters::parse("width=10|thumbnail");
        assert_eq!(p.default_value(), None);
        assert!(!p.contains_key("thumbnail"));
    }

    #[test]
    fn value_keeps_everything_after_first_equals() {
        let p = Parameters::parse("title= a=b ");
        assert_eq!(p.get("title"), Some("a=b"));
    }

    #[rstest]
    #[case("borderStyle=dashed|borderColor=#ccc|title=My Title", "title", Some("My Title"))]
    #[case("borderStyle=dashed|title=", "title", None)]
    #[case(" width = 100 ", "width", Some("100"))]
    fn non_empty_lookup(#[case] input: &str, #[case] key: &str, #[case] expected: Option<&str>) {
        assert_eq!(Parameters::parse(input).non_empty(key), expected);
    }
}
