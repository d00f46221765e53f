//! Description text cleaning
//!
//! Raw catalog descriptions carry storefront markup. The feed wants plain
//! text: tags stripped, HTML entities decoded, whitespace runs collapsed,
//! multi-blank-line gaps reduced to a single newline, and the result
//! trimmed. Applied in that order.

use regex::Regex;
use std::sync::OnceLock;

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("static pattern"))
}

fn entity_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"&(#x?[0-9a-fA-F]+|[a-zA-Z][a-zA-Z0-9]*);").expect("static pattern"))
}

fn tab_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\t+").expect("static pattern"))
}

fn space_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r" +").expect("static pattern"))
}

fn blank_lines_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\r?\n){2,}").expect("static pattern"))
}

/// Cleans raw description markup into feed-ready plain text
pub fn clean_html(content: &str) -> String {
    let text = tag_re().replace_all(content, "");
    let text = decode_entities(&text);
    let text = tab_run_re().replace_all(&text, " ");
    let text = space_run_re().replace_all(&text, " ");
    let text = blank_lines_re().replace_all(&text, "\n");
    text.trim().to_string()
}

/// Decodes numeric and common named HTML entities in a single pass
///
/// Unknown entities are left untouched; double-encoded input is decoded
/// exactly one level (`&amp;lt;` becomes `&lt;`).
fn decode_entities(input: &str) -> String {
    entity_re()
        .replace_all(input, |caps: &regex::Captures<'_>| {
            let body = &caps[1];
            decode_entity(body).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn decode_entity(body: &str) -> Option<String> {
    if let Some(num) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        let code = u32::from_str_radix(num, 16).ok()?;
        return char::from_u32(code).map(String::from);
    }
    if let Some(num) = body.strip_prefix('#') {
        let code = num.parse::<u32>().ok()?;
        return char::from_u32(code).map(String::from);
    }

    let decoded = match body {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => " ",
        "ndash" => "\u{2013}",
        "mdash" => "\u{2014}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "ldquo" => "\u{201C}",
        "rdquo" => "\u{201D}",
        "hellip" => "\u{2026}",
        "copy" => "\u{00A9}",
        "reg" => "\u{00AE}",
        "trade" => "\u{2122}",
        "euro" => "\u{20AC}",
        _ => return None,
    };
    Some(decoded.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags() {
        assert_eq!(clean_html("<p>Soft <b>cotton</b> tee</p>"), "Soft cotton tee");
    }

    #[test]
    fn test_decodes_entities() {
        assert_eq!(clean_html("Fish &amp; Chips &ndash; daily"), "Fish & Chips \u{2013} daily");
        assert_eq!(clean_html("&#65;&#x42;"), "AB");
        assert_eq!(clean_html("5 &lt; 10"), "5 < 10");
    }

    #[test]
    fn test_unknown_entity_left_untouched() {
        assert_eq!(clean_html("&bogus; stays"), "&bogus; stays");
    }

    #[test]
    fn test_double_encoded_decodes_one_level() {
        assert_eq!(clean_html("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(clean_html("a\t\tb   c"), "a b c");
    }

    #[test]
    fn test_collapses_blank_lines() {
        assert_eq!(clean_html("line one\n\n\nline two"), "line one\nline two");
        assert_eq!(clean_html("line one\r\n\r\nline two"), "line one\nline two");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(clean_html("  <p> padded </p>  "), "padded");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_html(""), "");
        assert_eq!(clean_html("<p></p>"), "");
    }
}
