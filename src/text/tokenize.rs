/// Splits text into word tokens.
///
/// A token is a maximal run of alphanumeric characters; everything else
/// (whitespace, punctuation, symbols) is a boundary. Case is preserved, so
/// callers lower-case first when they need case-insensitive terms.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_and_punctuation() {
        assert_eq!(
            tokenize("node.js, react/redux  (5 yrs)"),
            vec!["node", "js", "react", "redux", "5", "yrs"]
        );
    }

    #[test]
    fn keeps_non_ascii_letters_inside_tokens() {
        assert_eq!(tokenize("5 năm kinh nghiệm"), vec!["5", "năm", "kinh", "nghiệm"]);
    }

    #[test]
    fn empty_and_symbol_only_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" -- !! ").is_empty());
    }
}
