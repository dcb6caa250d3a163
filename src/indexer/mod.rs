use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    error::{Error, Result},
    inverted_index::{DocMap, Occurrence},
    tokenizer::Tokenizer,
};

/// Counts the keywords of the document at `path`.
///
/// The path, as given, becomes the document identifier.
pub fn load_keywords_from_document(path: &Path, tokenizer: &Tokenizer) -> Result<DocMap> {
    let file = File::open(path).map_err(|source| Error::DocumentNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let doc_id = path.display().to_string();
    let mut doc_map = DocMap::new();

    for line in BufReader::new(file).lines() {
        update_word_count(line?.split_whitespace(), &doc_id, tokenizer, &mut doc_map);
    }

    Ok(doc_map)
}

/// Counts keywords from a stream of raw tokens belonging to `doc_id`.
pub fn scan_tokens<'a>(
    tokens: impl IntoIterator<Item = &'a str>,
    doc_id: &str,
    tokenizer: &Tokenizer,
) -> DocMap {
    let mut doc_map = DocMap::new();
    update_word_count(tokens, doc_id, tokenizer, &mut doc_map);
    doc_map
}

fn update_word_count<'a>(
    tokens: impl IntoIterator<Item = &'a str>,
    doc_id: &str,
    tokenizer: &Tokenizer,
    doc_map: &mut DocMap,
) {
    for keyword in tokens
        .into_iter()
        .filter_map(|token| tokenizer.keyword(token))
    {
        doc_map
            .entry(keyword)
            .and_modify(|occurrence| occurrence.frequency += 1)
            .or_insert_with(|| Occurrence::new(doc_id, 1));
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::tokenizer::NoiseWords;

    fn tokenizer() -> Tokenizer {
        Tokenizer::new(["a", "the", "of"].into_iter().collect())
    }

    #[test]
    fn counts_keywords() {
        let doc_map = scan_tokens(
            "The squirrel saw a squirrel. Squirrel! the end of it, end"
                .split_whitespace(),
            "doc",
            &tokenizer(),
        );

        assert_eq!(doc_map.len(), 4);
        assert_eq!(doc_map["squirrel"], Occurrence::new("doc", 3));
        assert_eq!(doc_map["end"], Occurrence::new("doc", 2));
        assert_eq!(doc_map["saw"], Occurrence::new("doc", 1));
        assert_eq!(doc_map["it"], Occurrence::new("doc", 1));
    }

    #[test]
    fn rejected_tokens_are_skipped() {
        let doc_map = scan_tokens(
            ["wo.rd", "!!!", "123", "x-ray"],
            "doc",
            &Tokenizer::new(NoiseWords::new()),
        );

        assert!(doc_map.is_empty());
    }

    #[test]
    fn load_document() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("doc.txt");
        fs::write(&path, "Deer deer!\n\n  the DEER, forest\n").expect("Failed to write document");

        let doc_map = load_keywords_from_document(&path, &tokenizer()).expect("Failed to load document");
        let doc_id = path.display().to_string();

        assert_eq!(doc_map.len(), 2);
        assert_eq!(doc_map["deer"], Occurrence::new(doc_id.clone(), 3));
        assert_eq!(doc_map["forest"], Occurrence::new(doc_id, 1));
    }

    #[test]
    fn missing_document() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let result = load_keywords_from_document(&dir.path().join("missing.txt"), &tokenizer());

        assert!(matches!(result, Err(Error::DocumentNotFound { .. })));
    }
}
