//! Letters-only tokenizer with stop-word filtering.
//!
//! The scanner walks the input once, byte by byte. ASCII letters are folded to
//! lowercase and accumulated; any other byte (digits, punctuation, whitespace
//! and every byte of a non-ASCII character) ends the current token. UTF-8
//! continuation bytes are always `>= 0x80`, so they can never be mistaken for
//! letters.
//!
//! ```rust
//! use docfeatures::tokenize;
//!
//! assert_eq!(tokenize("Cats, dogs, and birds."), ["cats", "dogs", "birds"]);
//! assert!(tokenize("42 -- 7!").is_empty());
//! ```

use std::collections::HashSet;

use crate::constants::STOP_WORDS;

/// Tokenizes `text` with the built-in stop-word table.
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::default().tokenize(text)
}

/// Tokenizer with an optional set of stop words layered over the built-in
/// table.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    extra_stop_words: HashSet<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Separator,
    Letters,
}

impl Tokenizer {
    /// Creates a tokenizer that also drops `words`.
    ///
    /// Words are folded to lowercase; entries containing anything but ASCII
    /// letters can never match a token and are ignored.
    pub fn with_stop_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra_stop_words = words
            .into_iter()
            .map(|word| word.as_ref().to_ascii_lowercase())
            .filter(|word| !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase()))
            .collect();
        Self { extra_stop_words }
    }

    /// Whether `word` is dropped from the token stream.
    pub fn is_stop_word(&self, word: &str) -> bool {
        STOP_WORDS.contains(word) || self.extra_stop_words.contains(word)
    }

    /// Splits `text` into lowercase `a`-`z` runs, dropping stop words.
    /// Scan order is preserved and duplicates are kept.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut state = State::Separator;

        for byte in text.bytes() {
            match (state, byte.is_ascii_alphabetic()) {
                (_, true) => {
                    current.push(char::from(byte.to_ascii_lowercase()));
                    state = State::Letters;
                }
                (State::Letters, false) => {
                    self.emit(&mut current, &mut tokens);
                    state = State::Separator;
                }
                (State::Separator, false) => {}
            }
        }
        if state == State::Letters {
            self.emit(&mut current, &mut tokens);
        }

        tokens
    }

    fn emit(&self, current: &mut String, tokens: &mut Vec<String>) {
        let token = std::mem::take(current);
        if !self.is_stop_word(&token) {
            tokens.push(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn regex_tokenize(text: &str) -> Vec<String> {
        let re = Regex::new("[a-z]+").unwrap();
        re.find_iter(&text.to_ascii_lowercase())
            .map(|m| m.as_str().to_string())
            .filter(|t| !STOP_WORDS.contains(t.as_str()))
            .collect()
    }

    #[test]
    fn test_tokenize_drops_stop_words_and_punctuation() {
        assert_eq!(tokenize("Cats, dogs, and birds."), ["cats", "dogs", "birds"]);
        assert_eq!(tokenize("The Quick Fox"), ["quick", "fox"]);
    }

    #[test]
    fn test_tokenize_keeps_order_and_duplicates() {
        assert_eq!(
            tokenize("fox FOX the fox jumps"),
            ["fox", "fox", "fox", "jumps"]
        );
    }

    #[test]
    fn test_tokenize_splits_on_digits_and_non_ascii() {
        assert_eq!(tokenize("abc123def"), ["abc", "def"]);
        assert_eq!(tokenize("caf\u{e9}s na\u{ef}ve"), ["caf", "s", "na", "ve"]);
        assert_eq!(tokenize("\u{41f}\u{440}\u{438}\u{432}\u{435}\u{442} world"), ["world"]);
        assert_eq!(tokenize("e-mail o'clock"), ["e", "mail", "o", "clock"]);
    }

    #[test]
    fn test_tokenize_without_letters_is_empty() {
        for input in ["", "   \n\t", "1234567890", "!?.,;:-_()[]{}", "3.14 + 2,718"] {
            assert!(tokenize(input).is_empty(), "input {input:?}");
        }
    }

    #[test]
    fn test_tokenize_only_stop_words_is_empty() {
        assert!(tokenize("The is and OF a to").is_empty());
    }

    #[test]
    fn test_tokens_are_lowercase_ascii_letters() {
        let text = "Mixed CASE, numbers 99, símbolos & ünïcödé -- done.";
        for token in tokenize(text) {
            assert!(!token.is_empty());
            assert!(token.bytes().all(|b| b.is_ascii_lowercase()), "{token}");
        }
    }

    #[test]
    fn test_retokenizing_joined_output_is_stable() {
        let inputs = [
            "The Quick Brown Fox jumps over the lazy dog.",
            "Cats, dogs, and birds.",
            "a to is of and the",
            "HTML5 & CSS3: the web's building-blocks",
        ];
        for input in inputs {
            let once = tokenize(input);
            assert_eq!(tokenize(&once.join(" ")), once, "input {input:?}");
        }
    }

    #[test]
    fn test_matches_regex_scan() {
        let inputs = [
            "The Quick Fox",
            "  leading and trailing  ",
            "x",
            "AbC-dEf_ghi.jkl,mno;pqr\u{e9}stu",
            "no-break\u{a0}space and tab\tseparated",
            "It is 10 o'clock; time to go!",
        ];
        for input in inputs {
            assert_eq!(tokenize(input), regex_tokenize(input), "input {input:?}");
        }
    }

    #[test]
    fn test_extra_stop_words() {
        let tokenizer = Tokenizer::with_stop_words(["Fox", "not a word", ""]);
        assert!(tokenizer.is_stop_word("fox"));
        assert!(tokenizer.is_stop_word("the"));
        assert!(!tokenizer.is_stop_word("not a word"));
        assert_eq!(tokenizer.tokenize("The quick fox"), ["quick"]);
        // The shared default table is untouched.
        assert_eq!(tokenize("The quick fox"), ["quick", "fox"]);
    }
}
