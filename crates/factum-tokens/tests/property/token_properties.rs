use factum_tokens::{extract_numbers, jaccard, split_sentences, token_set, tokenize};
use proptest::prelude::*;

proptest! {
    #[test]
    fn tokenize_is_deterministic(s in ".{0,200}") {
        prop_assert_eq!(tokenize(&s), tokenize(&s));
    }

    #[test]
    fn tokens_are_lowercase_and_nonempty(s in ".{0,200}") {
        for token in tokenize(&s) {
            prop_assert!(!token.is_empty());
            prop_assert_eq!(token.to_lowercase(), token.clone());
        }
    }

    #[test]
    fn jaccard_is_bounded_and_symmetric(a in "[a-z ]{0,60}", b in "[a-z ]{0,60}") {
        let (sa, sb) = (token_set(&a), token_set(&b));
        let ab = jaccard(&sa, &sb);
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert_eq!(ab, jaccard(&sb, &sa));
    }

    #[test]
    fn numbers_never_contain_commas(s in "[0-9, .a-z%]{0,80}") {
        for n in extract_numbers(&s) {
            prop_assert!(!n.contains(','));
            prop_assert!(n.starts_with(|c: char| c.is_ascii_digit()));
        }
    }

    #[test]
    fn sentences_preserve_all_tokens(s in "[a-z .!?]{0,120}") {
        let joined = split_sentences(&s).join(" ");
        prop_assert_eq!(tokenize(&joined), tokenize(&s));
    }
}
