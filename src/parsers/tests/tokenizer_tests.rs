use crate::parsers::text::{frequency_rank, is_stop_word, terms_above, tokenize};

#[cfg(test)]
mod tokenize_tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn test_lowercases_and_keeps_order() {
        assert_eq!(tokenize("Rust Crawler SEO"), vec!["rust", "crawler", "seo"]);
    }

    #[test]
    fn test_drops_single_characters() {
        assert_eq!(tokenize("x y z rust"), vec!["rust"]);
    }

    #[test]
    fn test_drops_stop_words() {
        // "the", "and", "about" and "example" are all stop words
        assert_eq!(
            tokenize("The example about crawling and parsing"),
            vec!["crawling", "parsing"]
        );
        assert!(is_stop_word("the"));
        assert!(!is_stop_word("crawler"));
    }

    #[test]
    fn test_splits_on_punctuation() {
        assert_eq!(
            tokenize("baseball-cards/baseball_cards.html"),
            vec!["baseball", "cards", "baseball_cards", "html"]
        );
    }

    #[test]
    fn test_digits_are_word_characters() {
        assert_eq!(tokenize("page1 42"), vec!["page1", "42"]);
    }
}

#[cfg(test)]
mod frequency_tests {
    use super::*;

    #[test]
    fn test_empty_sequence() {
        let empty: Vec<String> = Vec::new();
        assert!(frequency_rank(&empty).is_empty());
    }

    #[test]
    fn test_sorted_by_descending_count() {
        let ranked = frequency_rank(&["seo", "rust", "rust", "crawl", "rust", "seo"]);
        assert_eq!(
            ranked,
            vec![
                ("rust".to_string(), 3),
                ("seo".to_string(), 2),
                ("crawl".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let ranked = frequency_rank(&["delta", "alpha", "charlie", "alpha", "delta", "charlie"]);
        let terms: Vec<_> = ranked.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(terms, vec!["delta", "alpha", "charlie"]);
    }

    #[test]
    fn test_terms_above_limit() {
        assert_eq!(
            terms_above("cards cards cards cards shop shop shop", 3),
            vec!["cards"]
        );
        assert!(terms_above("cards cards cards", 3).is_empty());
    }
}
