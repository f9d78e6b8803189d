pub mod is_stop_word;
pub mod word_frequency;

pub use is_stop_word::is_stop_word;
pub use word_frequency::word_frequencies;
