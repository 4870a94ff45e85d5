pub mod csv;

// Re-export commonly used functions
pub use self::csv::{read_scored_csv, ScoredData};
