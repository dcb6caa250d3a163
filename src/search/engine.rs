use std::cmp::Ordering;

use crate::inverted_index::{DocID, MasterIndex, Occurrence};

use super::search_result::SearchResult;

/// Default number of documents returned by a search.
pub const MAX_RESULTS: usize = 5;

pub struct SearchEngine {
    index: MasterIndex,
    limit: usize,
}

impl SearchEngine {
    pub const fn new(index: MasterIndex) -> Self {
        Self {
            index,
            limit: MAX_RESULTS,
        }
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub const fn index(&self) -> &MasterIndex {
        &self.index
    }

    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Documents containing `first` or `second`, highest frequency first.
    ///
    /// Each document appears once. On equal frequencies the document found
    /// through `first` ranks ahead of the one found through `second`. Unknown
    /// keywords contribute nothing, so the result may be empty.
    pub fn top_search(&self, first: &str, second: &str) -> Vec<DocID> {
        let first = self.index.get(first).unwrap_or_default();
        let second = self.index.get(second).unwrap_or_default();

        let mut documents = Vec::with_capacity(self.limit);
        let (mut i, mut j) = (0, 0);

        while documents.len() < self.limit {
            match (first.get(i), second.get(j)) {
                (Some(a), Some(b)) => match a.frequency.cmp(&b.frequency) {
                    Ordering::Greater => {
                        self.emit(&mut documents, a);
                        i += 1;
                    }
                    Ordering::Less => {
                        self.emit(&mut documents, b);
                        j += 1;
                    }
                    Ordering::Equal => {
                        self.emit(&mut documents, a);
                        self.emit(&mut documents, b);
                        i += 1;
                        j += 1;
                    }
                },
                (Some(a), None) => {
                    self.emit(&mut documents, a);
                    i += 1;
                }
                (None, Some(b)) => {
                    self.emit(&mut documents, b);
                    j += 1;
                }
                (None, None) => break,
            }
        }

        documents
    }

    pub fn search(&self, first: &str, second: &str) -> SearchResult {
        SearchResult::new(
            [first.to_string(), second.to_string()],
            self.top_search(first, second),
        )
    }

    fn emit(&self, documents: &mut Vec<DocID>, occurrence: &Occurrence) {
        if documents.len() < self.limit && !documents.contains(&occurrence.doc_id) {
            documents.push(occurrence.doc_id.clone());
        }
    }
}
