pub mod doc_map;
pub mod master_index;
pub mod occurrence_list;

pub use doc_map::{DocID, DocMap, Frequency, Occurrence};
pub use master_index::{InvertedIndex, MasterIndex};
pub use occurrence_list::{insert_last_occurrence, Probes};
