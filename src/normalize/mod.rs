use itertools::Itertools;
use unicode_normalization::UnicodeNormalization;

/// German letters that transliterate to more than one ASCII character, so
/// they must be replaced before decomposition strips the diacritics.
const REPLACEMENTS: [(char, &str); 7] = [
    ('Ä', "Ae"),
    ('Ö', "Oe"),
    ('Ü', "Ue"),
    ('ä', "ae"),
    ('ö', "oe"),
    ('ü', "ue"),
    ('ß', "ss"),
];

/// Transliterate `text` to plain ASCII.
///
/// Umlauts and sharp s become their two-letter equivalents, everything else
/// is NFKD-decomposed and stripped of non-ASCII characters. Whitespace runs
/// collapse to single spaces.
pub fn to_ascii(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut replaced = String::with_capacity(text.len());
    for ch in text.chars() {
        match REPLACEMENTS.iter().find(|(from, _)| *from == ch) {
            Some((_, to)) => replaced.push_str(to),
            None => replaced.push(ch),
        }
    }

    let ascii: String = replaced.nfkd().filter(char::is_ascii).collect();
    ascii.split_whitespace().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transliterates_umlauts() {
        assert_eq!(to_ascii("Müller"), "Mueller");
        assert_eq!(to_ascii("Straße"), "Strasse");
        assert_eq!(to_ascii("ÄÖÜ äöü"), "AeOeUe aeoeue");
    }

    #[test]
    fn strips_accents_and_non_ascii() {
        assert_eq!(to_ascii("Café"), "Cafe");
        assert_eq!(to_ascii("100 € Miete"), "100 Miete");
    }

    #[test]
    fn ascii_input_is_unchanged() {
        assert_eq!(to_ascii("Rent payment 42"), "Rent payment 42");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(to_ascii("  a \t b\u{a0} c  "), "a b c");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(to_ascii(""), "");
    }
}
