pub mod engine;
pub mod search_result;

pub use engine::{SearchEngine, MAX_RESULTS};
pub use search_result::SearchResult;
