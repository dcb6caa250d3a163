use std::{
    collections::{hash_map, HashMap, HashSet},
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use super::{
    doc_map::{DocID, DocMap, Occurrence},
    occurrence_list::{insert_last_occurrence, Probes},
};
use crate::{
    error::{Error, Result},
    indexer::load_keywords_from_document,
    tokenizer::{NoiseWords, Tokenizer},
};

pub type InvertedIndex = HashMap<String, Vec<Occurrence>>;

/// Keyword to occurrences across the corpus, each list in descending
/// frequency order.
#[derive(Debug, Default)]
pub struct MasterIndex {
    keywords: InvertedIndex,
    documents: HashSet<DocID>,
}

impl MasterIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes every document named in `documents_path`, skipping the words
    /// listed in `noise_words_path`.
    pub fn build(documents_path: &Path, noise_words_path: &Path) -> Result<Self> {
        let tokenizer = Tokenizer::new(NoiseWords::load(noise_words_path)?);
        let documents = load_document_list(documents_path)?;

        tracing::info!(
            documents = documents.len(),
            noise_words = tokenizer.noise_words().len(),
            "Indexing corpus"
        );

        let mut index = Self::new();

        for document in &documents {
            if index.contains_document(document) {
                tracing::warn!(document = %document, "Skipping document listed more than once");
                continue;
            }

            let doc_map = load_keywords_from_document(Path::new(document), &tokenizer)?;
            tracing::debug!(document = %document, keywords = doc_map.len(), "Scanned document");

            index.merge(document, doc_map);
        }

        tracing::info!(
            documents = index.documents.len(),
            keywords = index.len(),
            "Indexed corpus"
        );

        Ok(index)
    }

    /// Merges the keywords of one document into the index.
    ///
    /// Documents must be merged in corpus order: among equal frequencies,
    /// earlier documents rank first.
    pub fn merge(&mut self, doc_id: &str, doc_map: DocMap) {
        self.documents.insert(doc_id.to_string());

        for (keyword, occurrence) in doc_map {
            if let Some(probes) = self.insert(keyword.clone(), occurrence) {
                tracing::trace!(keyword = %keyword, ?probes, "Inserted occurrence");
            }
        }
    }

    /// Adds `occurrence` to the list of `keyword`, keeping it sorted.
    pub fn insert(&mut self, keyword: String, occurrence: Occurrence) -> Option<Probes> {
        match self.keywords.entry(keyword) {
            hash_map::Entry::Vacant(entry) => {
                entry.insert(vec![occurrence]);
                None
            }
            hash_map::Entry::Occupied(mut entry) => {
                let occurrences = entry.get_mut();
                occurrences.push(occurrence);
                insert_last_occurrence(occurrences)
            }
        }
    }

    pub fn get(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.keywords.get(keyword).map(Vec::as_slice)
    }

    pub fn contains_document(&self, doc_id: &str) -> bool {
        self.documents.contains(doc_id)
    }

    pub fn keywords(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.keywords
            .iter()
            .map(|(keyword, occurrences)| (keyword.as_str(), occurrences.as_slice()))
    }

    pub fn num_documents(&self) -> usize {
        self.documents.len()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Reads one document path per line, ignoring blank lines.
fn load_document_list(path: &Path) -> Result<Vec<DocID>> {
    let file = File::open(path).map_err(|source| Error::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut documents = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let document = line.trim();

        if !document.is_empty() {
            documents.push(document.to_string());
        }
    }

    Ok(documents)
}
