//! Property-based tests for the tokenizer.

use proptest::prelude::*;
use rustlex::{tokenize, Keyword, PrimitiveType, Token, Tokenizer};

/// Words shaped like identifiers that are in neither table.
fn plain_identifier() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,12}".prop_filter("not reserved", |word| {
        Keyword::lookup(word).is_none() && PrimitiveType::lookup(word).is_none()
    })
}

proptest! {
    #[test]
    fn test_arbitrary_input_terminates(input in any::<String>()) {
        let mut tokenizer = Tokenizer::from_str(&input);
        // every token consumes at least one character
        let limit = input.chars().count() + 1;
        let mut seen = 0;
        while !tokenizer.next_token().is_end_of_input() {
            seen += 1;
            prop_assert!(seen <= limit);
        }
        prop_assert_eq!(tokenizer.next_token(), Token::EndOfInput);
    }

    #[test]
    fn test_identifier_text_is_preserved(word in plain_identifier()) {
        prop_assert_eq!(tokenize(&word), vec![Token::Identifier(word.clone())]);
    }

    #[test]
    fn test_whitespace_only_is_end_of_input(input in "[ \t\n\r\x0B\x0C]*") {
        prop_assert_eq!(Tokenizer::from_str(&input).next_token(), Token::EndOfInput);
    }

    #[test]
    fn test_integers_parse_exactly(n in 0u32..1_000_000) {
        prop_assert_eq!(tokenize(&n.to_string()), vec![Token::Number(f64::from(n))]);
    }

    #[test]
    fn test_separated_words(words in prop::collection::vec(plain_identifier(), 1..8)) {
        let input = words.join(" /* gap */ ");
        let expected: Vec<Token> = words.into_iter().map(Token::Identifier).collect();
        prop_assert_eq!(tokenize(&input), expected);
    }

    #[test]
    fn test_reader_matches_str(input in "[ -~\n]{0,64}") {
        let from_reader: Vec<Token> = Tokenizer::from_reader(input.as_bytes()).collect();
        prop_assert_eq!(from_reader, tokenize(&input));
    }
}
