use serde::Serialize;

use crate::inverted_index::DocID;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub keywords: [String; 2],
    pub documents: Vec<DocID>,
}

impl SearchResult {
    pub const fn new(keywords: [String; 2], documents: Vec<DocID>) -> Self {
        Self {
            keywords,
            documents,
        }
    }
}
