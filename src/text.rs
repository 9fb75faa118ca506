//! String helpers for building names and URL segments.

use std::sync::OnceLock;

use deunicode::deunicode;
use regex::Regex;

/// `"user_name-list"` → `"User name list"`.
pub fn humanize(value: &str) -> String {
    upper_first(&value.replace(['_', '-'], " "))
}

/// `"user_name"` → `"UserName"`.
pub fn camelize(value: &str) -> String {
    value
        .replace(['_', '-'], " ")
        .split(' ')
        .map(upper_first)
        .collect()
}

/// `"UserName"` → `"user_name"`.
///
/// An ASCII upper-case letter preceded by an ASCII word character gets an
/// underscore; other scripts are only lower-cased.
pub fn underscore(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    let mut prev_is_word = false;
    for c in value.chars() {
        if c.is_ascii_uppercase() && prev_is_word {
            out.push('_');
        }
        out.extend(c.to_lowercase());
        prev_is_word = c.is_ascii_alphanumeric() || c == '_';
    }
    out
}

/// Turn free text into a lower-case ASCII slug joined by `separator`.
///
/// `normalize("Ação Rápida!", "-")` → `"acao-rapida"`.
pub fn normalize(value: &str, separator: &str) -> String {
    static NON_WORD: OnceLock<Regex> = OnceLock::new();
    let non_word = NON_WORD.get_or_init(|| Regex::new(r"[^\w\s]").expect("non-word pattern is valid"));

    let ascii = deunicode(&expand_umlauts(value));
    let spaced = non_word.replace_all(&ascii, " ");
    spaced
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(separator)
        .to_lowercase()
}

/// German umlauts transliterate to two letters (`ö` → `oe`), not one.
fn expand_umlauts(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            'ä' | 'Ä' => out.push_str("ae"),
            'ö' | 'Ö' => out.push_str("oe"),
            _ => out.push(c),
        }
    }
    out
}

fn upper_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("user_name-list"), "User name list");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn test_camelize() {
        assert_eq!(camelize("user_name"), "UserName");
        assert_eq!(camelize("blog-post item"), "BlogPostItem");
    }

    #[test]
    fn test_underscore() {
        assert_eq!(underscore("UserName"), "user_name");
        assert_eq!(underscore("userHTTPClient"), "user_h_t_t_p_client");
        assert_eq!(underscore("plain"), "plain");
        // Only ASCII capitals start a new word
        assert_eq!(underscore("caféÉcole"), "caféécole");
        assert_eq!(underscore("éCole"), "école");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Ação Rápida!", "-"), "acao-rapida");
        assert_eq!(normalize("  Hello,   World  ", "_"), "hello_world");
        assert_eq!(normalize("---", "-"), "");
    }

    #[test]
    fn test_normalize_umlauts() {
        assert_eq!(normalize("Köln", "-"), "koeln");
        assert_eq!(normalize("Mädchen", "-"), "maedchen");
        assert_eq!(normalize("ÖL und Äpfel", "-"), "oel-und-aepfel");
        assert_eq!(normalize("Straße", "-"), "strasse");
    }
}
