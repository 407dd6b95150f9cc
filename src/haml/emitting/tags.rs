//! Tag construction
//!
//! Resolves a classified tag line into a renderable tag: shorthand run to
//! name/id/classes, attribute block to map entries, marker and tag name to
//! the self-close decision.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::haml::emitting::attributes::AttributeMap;
use crate::haml::emitting::php;
use crate::haml::lexing::line_classification::{TagLine, TagMarker};

/// One `%name`, `#id`, or `.class` token inside a shorthand run.
static SHORTHAND_OP: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)([%#.])([a-z0-9]+)").unwrap());

/// One `key = value` pair inside an attribute block. Values are
/// single-quoted, double-quoted, or a bare run of non-whitespace; a quoted
/// value may contain the opposite quote character unescaped.
static ATTRIBUTE_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)([a-z][a-z-]*)\s*=\s*('[^']*'|"[^"]*"|[^\s]+)"#).unwrap());

/// Tags that self-close without an explicit `/`. Deliberately narrower
/// than the usual HTML void-element list: `img` and `input` are absent.
pub static AUTOCLOSE_TAGS: &[&str] = &["br", "hr", "meta", "link"];

/// A fully resolved tag, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: String,
    pub attributes: AttributeMap,
    pub autoclose: bool,
    /// Inline content; already wrapped in an echo directive when the line
    /// used the `=` marker
    pub content: String,
}

impl Tag {
    /// Opening tag with attributes, no content: `<div id="x">`.
    pub fn open(&self) -> String {
        format!("<{}{}>", self.name, self.attributes.render())
    }

    /// Matching closing tag: `</div>`.
    pub fn closer(&self) -> String {
        format!("</{}>", self.name)
    }

    /// Whole tag on one line: `<div id="x">content</div>`, or
    /// `<div id="x" />` when self-closed (content is dropped).
    pub fn render_inline(&self) -> String {
        if self.autoclose {
            format!("<{}{} />", self.name, self.attributes.render())
        } else {
            format!(
                "<{}{}>{}</{}>",
                self.name,
                self.attributes.render(),
                self.content,
                self.name
            )
        }
    }
}

/// Resolve a classified tag line into a [`Tag`].
pub fn build_tag(line: &TagLine) -> Tag {
    let mut attributes = AttributeMap::new();
    let mut classes: Vec<&str> = Vec::new();
    let mut name: Option<&str> = None;

    for caps in SHORTHAND_OP.captures_iter(&line.shorthand) {
        let value = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        match &caps[1] {
            "%" => name = Some(value),
            "#" => attributes.set("id", format!("\"{}\"", value)),
            "." => classes.push(value),
            _ => {}
        }
    }

    let name = name.unwrap_or("div").to_string();

    if !classes.is_empty() {
        attributes.set("class", format!("\"{}\"", classes.join(" ")));
    }

    let autoclose = matches!(line.marker, Some(TagMarker::SelfClose))
        || AUTOCLOSE_TAGS.contains(&name.as_str());

    let content = if matches!(line.marker, Some(TagMarker::Echo)) {
        php::echo_directive(&line.content)
    } else {
        line.content.clone()
    };

    if let Some(block) = &line.attributes {
        for caps in ATTRIBUTE_PAIR.captures_iter(block) {
            attributes.set(&caps[1], quote_value(&caps[2]));
        }
    }

    Tag {
        name,
        attributes,
        autoclose,
        content,
    }
}

/// Pre-quote an attribute value: quoted values pass through verbatim,
/// bare values are wrapped in double quotes.
fn quote_value(raw: &str) -> String {
    if raw.starts_with('\'') || raw.starts_with('"') {
        raw.to_string()
    } else {
        format!("\"{}\"", raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haml::lexing::line_classification::{classify, LineKind};

    /// Helper: classify a line and build its tag
    fn tag_for(line: &str) -> Tag {
        match classify(line) {
            LineKind::Tag(tag_line) => build_tag(&tag_line),
            other => panic!("expected a tag line, got {:?}", other),
        }
    }

    #[test]
    fn test_default_tag_is_div() {
        let tag = tag_for("#content");
        assert_eq!(tag.name, "div");
        assert_eq!(tag.render_inline(), "<div id=\"content\"></div>");
    }

    #[test]
    fn test_last_tag_name_wins() {
        // The line grammar never captures a second `%name` in one run, but
        // the resolution rule is still last-wins over the scanned ops.
        let tag = build_tag(&TagLine {
            shorthand: "%div%span".to_string(),
            marker: None,
            attributes: None,
            content: String::new(),
        });
        assert_eq!(tag.name, "span");
    }

    #[test]
    fn test_classes_join_with_single_space() {
        let tag = tag_for(".red.blue");
        assert_eq!(tag.render_inline(), "<div class=\"red blue\"></div>");
    }

    #[test]
    fn test_id_precedes_class_regardless_of_shorthand_order() {
        let tag = tag_for(".red#content.blue");
        assert_eq!(
            tag.render_inline(),
            "<div id=\"content\" class=\"red blue\"></div>"
        );
    }

    #[test]
    fn test_autoclose_set_is_exact() {
        for name in ["br", "hr", "meta", "link"] {
            assert!(tag_for(&format!("%{}", name)).autoclose, "{}", name);
        }
        for name in ["img", "input", "div", "script"] {
            assert!(!tag_for(&format!("%{}", name)).autoclose, "{}", name);
        }
    }

    #[test]
    fn test_explicit_slash_forces_autoclose() {
        let tag = tag_for("%textarea/");
        assert!(tag.autoclose);
        assert_eq!(tag.render_inline(), "<textarea />");
    }

    #[test]
    fn test_echo_marker_wraps_content() {
        let tag = tag_for("%div= \"Hello World!\"");
        assert_eq!(
            tag.render_inline(),
            "<div><?php echo \"Hello World!\" ?></div>"
        );
    }

    #[test]
    fn test_attribute_block_overwrites_synthetic_id() {
        let tag = tag_for("#old {id=\"new\"}");
        assert_eq!(tag.render_inline(), "<div id=\"new\"></div>");
    }

    #[test]
    fn test_quoted_values_kept_verbatim() {
        let tag = tag_for("%div {id='con\"tent' class=\"left'column\"}");
        assert_eq!(
            tag.render_inline(),
            "<div id='con\"tent' class=\"left'column\"></div>"
        );
    }

    #[test]
    fn test_bare_values_wrapped_in_double_quotes() {
        let tag = tag_for("%div {id = content class=\"many names\" rel=external}");
        assert_eq!(
            tag.render_inline(),
            "<div id=\"content\" class=\"many names\" rel=\"external\"></div>"
        );
    }

    #[test]
    fn test_autoclose_drops_content() {
        let tag = tag_for("%br ignored text");
        assert_eq!(tag.render_inline(), "<br />");
    }
}
