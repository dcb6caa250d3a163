use std::{
    collections::HashSet,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::{Error, Result};

/// Characters that may trail a keyword and get stripped from it.
pub const TRAILING_PUNCTUATION: [char; 6] = ['.', ',', '?', ':', ';', '!'];

/// Words that are never indexed. Stored lower-cased.
#[derive(Debug, Default, Clone)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads whitespace-separated noise words from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::SourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let mut words = HashSet::new();
        for line in BufReader::new(file).lines() {
            words.extend(line?.split_whitespace().map(str::to_lowercase));
        }

        Ok(Self { words })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for NoiseWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }
}

/// Turns raw whitespace-delimited tokens into keywords.
pub struct Tokenizer {
    noise_words: NoiseWords,
}

impl Tokenizer {
    pub const fn new(noise_words: NoiseWords) -> Self {
        Self { noise_words }
    }

    pub const fn noise_words(&self) -> &NoiseWords {
        &self.noise_words
    }

    /// Returns the keyword for `token`, or `None` if the token is rejected.
    ///
    /// Everything after the first non-letter has to be trailing punctuation,
    /// so `"word?!"` yields `word` while `"wo.rd"` and `"word.5"` are rejected.
    pub fn keyword(&self, token: &str) -> Option<String> {
        let mut lowered = token.to_lowercase();

        let cut = lowered
            .find(|c: char| !c.is_alphabetic())
            .unwrap_or(lowered.len());

        if !lowered[cut..]
            .chars()
            .all(|c| TRAILING_PUNCTUATION.contains(&c))
        {
            return None;
        }

        lowered.truncate(cut);

        if lowered.is_empty() || self.noise_words.contains(&lowered) {
            return None;
        }

        Some(lowered)
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .filter_map(|token| self.keyword(token))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn tokenizer() -> Tokenizer {
        Tokenizer::new(["the", "and", "A"].into_iter().collect())
    }

    #[test]
    fn strips_trailing_punctuation() {
        let tokenizer = tokenizer();

        assert_eq!(tokenizer.keyword("word!!"), Some("word".to_string()));
        assert_eq!(tokenizer.keyword("word?!?!"), Some("word".to_string()));
        assert_eq!(tokenizer.keyword("Word.,:;"), Some("word".to_string()));
        assert_eq!(tokenizer.keyword("Distance."), Some("distance".to_string()));
    }

    #[test]
    fn rejects_interior_punctuation() {
        let tokenizer = tokenizer();

        assert_eq!(tokenizer.keyword("wo.rd"), None);
        assert_eq!(tokenizer.keyword("word.a"), None);
        assert_eq!(tokenizer.keyword("word!!x!"), None);
    }

    #[test]
    fn rejects_non_letters() {
        let tokenizer = tokenizer();

        assert_eq!(tokenizer.keyword("!!!"), None);
        assert_eq!(tokenizer.keyword("42"), None);
        assert_eq!(tokenizer.keyword("word's"), None);
        assert_eq!(tokenizer.keyword("e-mail"), None);
        assert_eq!(tokenizer.keyword("word.5"), None);
        assert_eq!(tokenizer.keyword("(word)"), None);
    }

    #[test]
    fn rejects_noise_words() {
        let tokenizer = tokenizer();

        assert_eq!(tokenizer.keyword("The"), None);
        assert_eq!(tokenizer.keyword("and!"), None);
        assert_eq!(tokenizer.keyword("a"), None);
        assert_eq!(tokenizer.keyword("then"), Some("then".to_string()));
    }

    #[test]
    fn keyword_is_idempotent() {
        let tokenizer = tokenizer();

        for token in ["Word!!", "squirrel", "ÉCOLE?", "deer;"] {
            let keyword = tokenizer.keyword(token).expect("Failed to get keyword");
            assert_eq!(tokenizer.keyword(&keyword), Some(keyword.clone()));
        }
    }

    #[test]
    fn tokenize_keeps_document_order() {
        let tokenizer = tokenizer();

        assert_eq!(
            tokenizer.tokenize("The deer, and the squirrel. 3 wo.rd deer!"),
            vec!["deer", "squirrel", "deer"]
        );
    }

    #[test]
    fn load_noise_words() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "the\nAND\n\n  of  ").expect("Failed to write noise words");

        let noise_words = NoiseWords::load(file.path()).expect("Failed to load noise words");

        assert_eq!(noise_words.len(), 3);
        assert!(noise_words.contains("and"));
        assert!(noise_words.contains("of"));
    }

    #[test]
    fn missing_noise_words() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let result = NoiseWords::load(&dir.path().join("missing.txt"));

        assert!(matches!(result, Err(Error::SourceNotFound { .. })));
    }
}
