use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::{inline::Image, params::Parameters};

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!([^!| \t]+)(?:\|([^!]+))?!").unwrap());

/// `!src!` or `!src|width=100,height=200!`
pub struct ImageRef;

impl ImageRef {
    pub const DELIMITER: char = '!';
    pub const THUMBNAIL: &'static str = "thumbnail";

    pub fn pattern() -> &'static Regex {
        &IMAGE
    }

    /// Builds an image from its source and optional attribute list.
    ///
    /// Commas in the attribute list are an alternate separator.
    pub fn build(src: &str, attrs: Option<&str>) -> Image {
        let mut image = Image {
            src: src.to_string(),
            alt: Some(src.to_string()),
            ..Image::default()
        };

        let Some(attrs) = attrs else {
            return image;
        };
        let params = Parameters::parse(&attrs.replace(',', "|"));
        let owned = |key: &str| params.non_empty(key).map(str::to_string);
        image.width = owned("width");
        image.height = owned("height");
        image.align = owned("align");
        image.hspace = owned("hspace");
        image.vspace = owned("vspace");
        image.thumbnail = params.contains_key(Self::THUMBNAIL) || attrs.contains(Self::THUMBNAIL);
        image
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn plain_image_uses_src_as_alt() {
        let img = ImageRef::build("a.png", None);
        assert_eq!(img.alt.as_deref(), Some("a.png"));
        assert!(!img.thumbnail);
    }

    #[test]
    fn comma_separated_dimensions() {
        let img = ImageRef::build("a.png", Some("width=100,height=200"));
        assert_eq!(img.width.as_deref(), Some("100"));
        assert_eq!(img.height.as_deref(), Some("200"));
    }

    #[test]
    fn bare_thumbnail_flag() {
        let img = ImageRef::build("a.png", Some("thumbnail"));
        assert!(img.thumbnail);
        assert_eq!(img.width, None);
    }

    #[test]
    fn layout_attributes() {
        let img = ImageRef::build("a.png", Some("align=right|hspace=4|vspace=2"));
        assert_eq!(img.align.as_deref(), Some("right"));
        assert_eq!(img.hspace.as_deref(), Some("4"));
        assert_eq!(img.vspace.as_deref(), Some("2"));
    }

    #[test]
    fn pattern_rejects_whitespace_in_src() {
        assert!(ImageRef::pattern().is_match("!a.png|thumbnail!"));
        assert!(!ImageRef::pattern().is_match("! a.png!"));
        assert!(!ImageRef::pattern().is_match("!!"));
    }
}
