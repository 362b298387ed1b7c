use spam_lift::{StopWords, Tokenizer};

#[cfg(test)]
mod tokenizer_tests {
    use super::*;

    #[test]
    fn test_lowercases_and_drops_stop_words() {
        let stop_words = StopWords::english();
        let tokenizer = Tokenizer::new(3, &stop_words);

        let tokens = tokenizer.tokenize_to_vec("You have been SELECTED for a FREE prize");
        assert_eq!(tokens, vec!["selected", "free", "prize"]);
    }

    #[test]
    fn test_min_token_length() {
        let stop_words = StopWords::none();
        let tokenizer = Tokenizer::new(3, &stop_words);

        let tokens = tokenizer.tokenize_to_vec("ok go win cash");
        assert_eq!(tokens, vec!["win", "cash"]);
    }

    #[test]
    fn test_zero_min_token_length_still_drops_empty_tokens() {
        let stop_words = StopWords::none();
        let tokenizer = Tokenizer::new(0, &stop_words);

        let tokens = tokenizer.tokenize_to_vec("a,,b  c");
        assert_eq!(tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_strips_punctuation_and_keeps_digits() {
        let stop_words = StopWords::none();
        let tokenizer = Tokenizer::new(3, &stop_words);

        let tokens = tokenizer.tokenize_to_vec("Call 09061701461!!! (now), £900?");
        assert_eq!(tokens, vec!["call", "09061701461", "now", "900"]);
    }

    #[test]
    fn test_apostrophes_join_contractions() {
        let stop_words = StopWords::none();
        let tokenizer = Tokenizer::new(3, &stop_words);

        let tokens = tokenizer.tokenize_to_vec("I'll text you, don\u{2019}t worry");
        assert_eq!(tokens, vec!["ill", "text", "you", "dont", "worry"]);
    }

    #[test]
    fn test_contracted_stop_words_are_removed() {
        let stop_words = StopWords::english();
        let tokenizer = Tokenizer::new(3, &stop_words);

        let tokens = tokenizer.tokenize_to_vec("Don't wait, it's your last chance");
        assert_eq!(tokens, vec!["wait", "last", "chance"]);
    }

    #[test]
    fn test_tokenize_distinct_keeps_first_occurrences() {
        let stop_words = StopWords::none();
        let tokenizer = Tokenizer::new(3, &stop_words);

        let tokens = tokenizer.tokenize_distinct("free FREE cash free prize cash");
        assert_eq!(tokens, vec!["free", "cash", "prize"]);
    }

    #[test]
    fn test_tokenize_is_repeatable() {
        let stop_words = StopWords::english();
        let tokenizer = Tokenizer::new(3, &stop_words);
        let text = "URGENT! Claim your mobile bonus today";

        assert_eq!(tokenizer.tokenize_to_vec(text), tokenizer.tokenize_to_vec(text));
    }

    #[test]
    fn test_empty_text() {
        let stop_words = StopWords::english();
        let tokenizer = Tokenizer::new(3, &stop_words);

        assert!(tokenizer.tokenize_to_vec("").is_empty());
        assert!(tokenizer.tokenize_to_vec("  !!! ?? ").is_empty());
    }

    #[test]
    fn test_custom_stop_words_are_normalized() {
        let stop_words = StopWords::new("custom", ["Call", "TXT!"]);
        let tokenizer = Tokenizer::new(3, &stop_words);

        assert_eq!(stop_words.version(), "custom");
        assert_eq!(stop_words.len(), 2);
        assert_eq!(tokenizer.tokenize_to_vec("call txt reply"), vec!["reply"]);
    }
}
