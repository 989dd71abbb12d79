//! Text casing helpers.

/// Title-case a string: the first letter of every word is uppercased and the
/// rest lowercased. A word starts at any letter not preceded by a letter.
///
/// # Examples
///
/// ```
/// use medclean_transform::normalization::title_case;
///
/// assert_eq!(title_case("heart disease"), "Heart Disease");
/// assert_eq!(title_case("MALE"), "Male");
/// assert_eq!(title_case("COPD"), "Copd");
/// ```
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// Trim surrounding whitespace, then title-case.
pub fn normalize_text(value: &str) -> String {
    title_case(value.trim())
}
