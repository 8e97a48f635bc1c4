// src/utils.rs
use crate::models::TextStats;

pub fn print_stats(stats: &TextStats) {
    println!("Total words: {}", stats.total_words);
    println!("Unique words: {}", stats.unique_words);
    println!("Average sentence length: {:.2}", stats.average_sentence_length);
    println!("Most common words:");
    for (word, count) in &stats.most_common_words {
        println!("{count:8}  {word}");
    }
}
