use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref URL_PATTERN: Regex =
        Regex::new(r"\b[a-z][a-z0-9+.]*://\S+").expect("URL pattern is valid");
    // Single level, closes at the first ')'.
    static ref ASIDE_PATTERN: Regex = Regex::new(r"\([^)]*\)").expect("aside pattern is valid");
    static ref DISALLOWED_PATTERN: Regex =
        Regex::new(r"[^a-z0-9\s-]").expect("character class pattern is valid");
}

/// Lowercases text and strips URLs, parenthetical asides and punctuation.
///
/// The steps run in a fixed order: case folding, URL removal, aside removal,
/// replacement of anything outside `[a-z0-9 -]` with a space, then whitespace
/// collapsing. The result contains single spaces only and no leading or
/// trailing whitespace.
///
/// Nested parentheses are not balanced: `(a (b) c)` removes `(a (b)` and the
/// stray `)` is then dropped with the rest of the punctuation. An unmatched
/// `(` is likewise treated as punctuation, so no text is lost after it.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_urls = URL_PATTERN.replace_all(&lowered, " ");
    let without_asides = ASIDE_PATTERN.replace_all(&without_urls, " ");
    let cleaned = DISALLOWED_PATTERN.replace_all(&without_asides, " ");

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_asides_urls_and_punctuation() {
        assert_eq!(
            normalize("HELLO (test) https://x.co WORLD!!"),
            "hello world"
        );
        assert_eq!(normalize("Read more at ftp://files.example.org/a.txt now"), "read more at now");
    }

    #[test]
    fn test_url_glued_to_a_word_keeps_the_word() {
        assert_eq!(normalize("Live-https://x.co/a coverage"), "live coverage");
        assert_eq!(normalize("Updates:https://x.co/a here"), "updates here");
    }

    #[test]
    fn test_keeps_hyphens_and_digits() {
        assert_eq!(normalize("All-Star game: 2024 edition"), "all-star game 2024 edition");
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n "), "");
        assert_eq!(normalize("!!! ???"), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "HELLO (test) https://x.co WORLD!!",
            "Markets rally; Fed holds rates (again) — analysts react",
            "  Spaces\tand\nnewlines  ",
            "Café owners protest",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {input}");
        }
    }

    #[test]
    fn test_non_ascii_letters_become_separators() {
        assert_eq!(normalize("Café owners"), "caf owners");
    }

    #[test]
    fn test_nested_parentheses() {
        assert_eq!(normalize("start (a (b) c) end"), "start c end");
    }

    #[test]
    fn test_unmatched_parenthesis_keeps_following_text() {
        assert_eq!(normalize("talks resume (sources say"), "talks resume sources say");
        assert_eq!(normalize("talks resume) today"), "talks resume today");
    }
}
