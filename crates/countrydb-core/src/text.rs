// crates/countrydb-core/src/text.rs

/// Convert a string into a folded key suitable for identifier comparison.
///
/// Transliterates Unicode to ASCII with `deunicode` (`Åland` -> `Aland`),
/// lowercases, and trims surrounding whitespace.
///
/// ```rust
/// use countrydb_core::text::fold_key;
///
/// assert_eq!(fold_key(" Côte d'Ivoire "), "cote d'ivoire");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s.trim()).to_lowercase()
}

/// Equality after [`fold_key`] on both sides.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Format an integer with `,` as the thousands separator (`83491249` ->
/// `83,491,249`).
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
