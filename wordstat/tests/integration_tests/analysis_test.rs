// tests/integration_tests/analysis_test.rs
use super::common::SAMPLE_TEXT;
use wordstat::{DEFAULT_TOP_WORDS_COUNT, TextAnalyzer, analyze};

#[test]
fn test_sample_text_statistics() {
    let (stats, word_count) = analyze(SAMPLE_TEXT);

    assert_eq!(stats.total_words, 12);
    assert_eq!(stats.unique_words, 11);
    assert!((stats.average_sentence_length - 6.0).abs() < 0.1);
    assert_eq!(stats.most_common_words.len(), DEFAULT_TOP_WORDS_COUNT);
    assert_eq!(word_count.get("a"), 2);
}

#[test]
fn test_most_common_matches_table() {
    let text = "the cat sat on the mat. the dog sat too! a cat? a dog.";
    let (stats, word_count) = analyze(text);

    assert_eq!(
        stats.most_common_words.first(),
        Some(&(String::from("the"), 3))
    );
    for (word, count) in &stats.most_common_words {
        assert_eq!(word_count.get(word), *count, "Count for {word} must match the table");
    }
    assert!(
        stats
            .most_common_words
            .windows(2)
            .all(|pair| pair[0].1 >= pair[1].1),
        "Most common words are sorted by descending count"
    );
    assert_eq!(stats.total_words, word_count.total());
    assert_eq!(stats.unique_words, word_count.len());
}

#[test]
fn test_ties_follow_first_appearance() {
    let analyzer = TextAnalyzer::new(3);
    let (stats, _) = analyzer.analyze("pear apple pear apple plum fig fig");

    let words: Vec<&str> = stats
        .most_common_words
        .iter()
        .map(|(word, _)| word.as_str())
        .collect();
    assert_eq!(words, vec!["pear", "apple", "fig"]);
}

#[test]
fn test_markdown_syntax_is_not_counted() {
    let (stats, word_count) = analyze("# Heading\n\n* **bold** item\n> quoted `code`.");

    assert_eq!(stats.total_words, 5);
    assert!(!word_count.contains("#"));
    assert_eq!(word_count.get("bold"), 1);
}
