//! Text normalization for BR Code string fields
//!
//! Name, city, and description values are folded to the uppercase
//! diacritic-free form the BR Code spec expects before they are length
//! limited and TLV encoded. The PIX key and txid are exempt and pass
//! through the assembler untouched.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a text field: canonical decomposition, combining marks
/// stripped, uppercased, surrounding whitespace trimmed.
///
/// Total function - any input produces an ASCII-leaning uppercase output,
/// with characters outside the decomposition range passing through
/// unchanged ("João Pé de Feijão" becomes "JOAO PE DE FEIJAO").
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_uppercase)
        .collect();
    folded.trim().to_string()
}

/// Truncate to at most `max` Unicode codepoints, without allocating.
///
/// Counting codepoints rather than UTF-16 code units keeps multi-unit
/// characters intact at the cut point.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_diacritics_and_uppercases() {
        assert_eq!(normalize("João Pé de Feijão"), "JOAO PE DE FEIJAO");
        assert_eq!(normalize("Goiânia"), "GOIANIA");
        assert_eq!(normalize("São Paulo"), "SAO PAULO");
        assert_eq!(normalize("àéîõü"), "AEIOU");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize("  Victor  Torres \t"), "VICTOR  TORRES");
    }

    #[test]
    fn test_total_over_plain_ascii() {
        assert_eq!(normalize("victor@example.com"), "VICTOR@EXAMPLE.COM");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_non_decomposable_passthrough() {
        // No canonical decomposition for these; they survive unchanged
        // apart from uppercasing.
        assert_eq!(normalize("doação ß"), "DOACAO SS");
        assert_eq!(normalize("中文"), "中文");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("Coração Valente");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_truncate_boundaries() {
        let name = "ABCDEFGHIJKLMNOPQRSTUVWXY"; // exactly 25
        assert_eq!(truncate_chars(name, 25), name);

        let long = "ABCDEFGHIJKLMNOPQRSTUVWXYZ"; // 26
        assert_eq!(truncate_chars(long, 25), name);

        assert_eq!(truncate_chars("", 25), "");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_truncate_counts_codepoints() {
        // Each codepoint counts once regardless of encoded width.
        assert_eq!(truncate_chars("ééééé", 3), "ééé");
    }
}
