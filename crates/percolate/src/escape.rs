///
/// Escape table
///
/// Ordered substitution table for query text and tags. The backslash
/// entry must stay first: every later replacement introduces a
/// backslash of its own, and running the backslash rule after them
/// would re-escape those.
///

pub(crate) const ESCAPE_TABLE: &[(char, &str)] = &[
    ('\\', "\\\\"),
    ('-', "\\-"),
    ('~', "\\~"),
    ('<', "\\<"),
    ('"', "\\\""),
    ('\'', "\\'"),
    ('/', "\\/"),
];

/// Apply the escape table to `text`, one global substitution per entry,
/// in table order.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for ch in text.chars() {
        match ESCAPE_TABLE.iter().find(|(from, _)| *from == ch) {
            Some((_, to)) => out.push_str(to),
            None => out.push(ch),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn backslash_is_doubled() {
        assert_eq!(escape("\\"), "\\\\");
        assert_eq!(escape("a\\b"), "a\\\\b");
    }

    #[test]
    fn table_characters_gain_one_backslash() {
        assert_eq!(escape("-"), "\\-");
        assert_eq!(escape("~"), "\\~");
        assert_eq!(escape("<"), "\\<");
        assert_eq!(escape("\""), "\\\"");
        assert_eq!(escape("'"), "\\'");
        assert_eq!(escape("/"), "\\/");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape("hello world, 42"), "hello world, 42");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn already_escaped_input_escapes_again() {
        // escape() is deliberately not idempotent: re-applying the table
        // escapes the backslash introduced by the first pass.
        assert_eq!(escape("\\-"), "\\\\\\-");
    }

    #[test]
    fn mixed_input() {
        assert_eq!(escape("a-b/c'd"), "a\\-b\\/c\\'d");
    }

    proptest! {
        // Escaping order invariant: a single pass over backslash-free
        // input never produces two consecutive backslashes, i.e. the
        // backslash rule does not run over replacements made by the
        // other entries.
        #[test]
        fn no_double_backslash_without_input_backslash(s in "[^\\\\]{0,64}") {
            prop_assert!(!escape(&s).contains("\\\\"));
        }

        #[test]
        fn output_grows_by_one_per_escaped_char(s in ".{0,64}") {
            let escaped_chars = s
                .chars()
                .filter(|c| ESCAPE_TABLE.iter().any(|(from, _)| from == c))
                .count();
            prop_assert_eq!(
                escape(&s).chars().count(),
                s.chars().count() + escaped_chars
            );
        }

        #[test]
        fn untouched_without_table_chars(s in "[a-zA-Z0-9 ,.:;!?]{0,64}") {
            prop_assert_eq!(escape(&s), s);
        }
    }
}
