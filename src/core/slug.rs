use regex::Regex;
use std::sync::LazyLock;

static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"[\t !"#$%&'()*\-/<=>?@\[\\\]^_`{|},.]+"##).unwrap()
});

/// Generates an ASCII-only, lowercase, hyphen-joined slug.
///
/// The input is split on punctuation and whitespace, every word is
/// transliterated to ASCII and empty words are dropped.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut words = Vec::new();

    for word in PUNCTUATION.split(&lowered) {
        // 轉寫後可能出現大寫或空白（例如中文），再切一次
        let ascii = deunicode::deunicode(word).to_lowercase();
        words.extend(
            PUNCTUATION
                .split(&ascii)
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_string),
        );
    }

    words.join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_strips_punctuation_and_diacritics() {
        assert_eq!(slugify("Hello, World! Café"), "hello-world-cafe");
    }

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  leading and trailing  "), "leading-and-trailing");
        assert_eq!(slugify("snake_case-and-kebab"), "snake-case-and-kebab");
        assert_eq!(slugify("[ruby,"), "ruby");
        assert_eq!(slugify("Version 2.0"), "version-2-0");
    }

    #[test]
    fn test_slugify_transliterates_other_scripts() {
        let slug = slugify("Größe 北京");
        assert!(slug.starts_with("grosse-"));
        assert!(slug.is_ascii());
        assert!(!slug.contains(' '));
        assert_eq!(slug, slug.to_lowercase());
    }

    #[test]
    fn test_slugify_empty_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!! ---"), "");
    }
}
