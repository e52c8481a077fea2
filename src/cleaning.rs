use regex::Regex;
use scraper::Html;

lazy_static::lazy_static! {
    static ref URL_PATTERN: Regex = Regex::new(r"https?://\S+").expect("URL pattern is valid");
}

/// Text content of an HTML fragment: every text node, whitespace collapsed,
/// joined by single spaces.
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut words = Vec::new();

    for node in fragment.root_element().text() {
        words.extend(node.split_whitespace());
    }

    words.join(" ")
}

/// Remove every `http://` or `https://` run up to the next whitespace.
/// Everything else is left untouched.
pub fn strip_urls(text: &str) -> String {
    URL_PATTERN.replace_all(text, "").into_owned()
}

pub fn clean_description(html: &str) -> String {
    strip_urls(&html_to_text(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_text_drops_markup() {
        let html = "<div><h1>Title</h1><ul><li>one</li><li>two</li></ul></div>";
        assert_eq!(html_to_text(html), "Title one two");
    }

    #[test]
    fn test_html_to_text_trims_and_collapses() {
        let html = "  <p>\n  Hello   <em>big</em>\tworld  </p>  <br/> ";
        assert_eq!(html_to_text(html), "Hello big world");
    }

    #[test]
    fn test_html_to_text_decodes_entities() {
        assert_eq!(html_to_text("<p>A &amp; B &lt;C&gt;</p>"), "A & B <C>");
    }

    #[test]
    fn test_html_to_text_plain_and_empty() {
        assert_eq!(html_to_text("No Description"), "No Description");
        assert_eq!(html_to_text(""), "");
        assert_eq!(html_to_text("<div><br></div>"), "");
    }

    #[test]
    fn test_strip_urls_removes_every_match() {
        let text = "docs at https://a.example/x?y=1, mirror http://b.example and done";
        assert_eq!(strip_urls(text), "docs at  mirror  and done");
    }

    #[test]
    fn test_strip_urls_preserves_other_text() {
        let text = "  no links here, just ftp://host and http:/broken  ";
        assert_eq!(strip_urls(text), text);
    }

    #[test]
    fn test_clean_description_pipeline() {
        let html = r#"<div>Spec: <a href="https://x.example/spec">https://x.example/spec</a> ready</div>"#;
        assert_eq!(clean_description(html), "Spec:  ready");
    }
}
