use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

pub type DocID = String;
pub type Frequency = u32;

/// How often a keyword appears in one document.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Occurrence {
    pub doc_id: DocID,
    pub frequency: Frequency,
}

impl Occurrence {
    pub fn new(doc_id: impl Into<DocID>, frequency: Frequency) -> Self {
        Self {
            doc_id: doc_id.into(),
            frequency,
        }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.doc_id, self.frequency)
    }
}

/// Keyword occurrences of a single document, one entry per keyword.
pub type DocMap = HashMap<String, Occurrence>;
