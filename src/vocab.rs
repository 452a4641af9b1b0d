use std::collections::{BTreeSet,HashMap};
use std::fs::File;
use std::io::{BufRead,BufReader,BufWriter,Read,Write};
use std::path::Path;
use tracing::debug;

use crate::error::*;
use crate::types::*;

///Map integers (indices correspond to WordId) to words
pub type VocabDecoder = Vec<String>;

///Maps words to integers
pub type VocabEncoder = HashMap<String, WordId>;

///An ordered sequence of distinct words, the position of each word is its identifier.
///Immutable once constructed.
#[derive(Clone,Debug,Default,PartialEq)]
pub struct Vocabulary {
    decoder: VocabDecoder,
    encoder: VocabEncoder,
}

impl Vocabulary {
    ///Build a vocabulary from words that are already normalised and deduplicated.
    ///A word that occurs twice is rejected rather than silently overwritten, as is a word
    ///containing a line break, which could not be written back one word per line.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let decoder: VocabDecoder = words.into_iter().map(|w| w.into()).collect();
        if decoder.len() > WordId::MAX as usize {
            return Err(LadderError::VocabularyTooLarge(decoder.len()));
        }
        let mut encoder: VocabEncoder = HashMap::with_capacity(decoder.len());
        for (id, word) in decoder.iter().enumerate() {
            if word.contains(&['\n', '\r'][..]) {
                return Err(LadderError::InvalidWord {
                    word: word.clone(),
                    id: id as WordId,
                });
            }
            if let Some(first) = encoder.insert(word.clone(), id as WordId) {
                return Err(LadderError::DuplicateWord {
                    word: word.clone(),
                    first,
                    second: id as WordId,
                });
            }
        }
        Ok(Self { decoder, encoder })
    }

    ///Build a vocabulary from a raw word list: entries are trimmed and lower-cased, empty entries
    ///are dropped, duplicates are removed and the result is sorted.
    pub fn from_unnormalised<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalised: BTreeSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self::new(normalised)
    }

    pub fn identifier_of(&self, word: &str) -> Option<WordId> {
        self.encoder.get(word).copied()
    }

    ///Resolves an identifier
    pub fn word(&self, id: WordId) -> Option<&str> {
        self.decoder.get(id as usize).map(|w| w.as_str())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.encoder.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.decoder.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoder.is_empty()
    }

    ///Iterate over all words in identifier order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.decoder.iter().map(|w| w.as_str())
    }

    pub fn words(&self) -> &[String] {
        &self.decoder
    }

    ///Read a vocabulary, one word per line, line N being the word with identifier N.
    ///Lines are taken verbatim (no normalisation).
    pub fn read<R: Read>(reader: R) -> Result<Self> {
        let mut words = Vec::new();
        for line in BufReader::new(reader).lines() {
            words.push(line?);
        }
        Self::new(words)
    }

    ///Read a raw word list (one entry per line) and normalise it, see `from_unnormalised()`
    pub fn read_unnormalised<R: Read>(reader: R) -> Result<Self> {
        let mut lines = Vec::new();
        for line in BufReader::new(reader).lines() {
            lines.push(line?);
        }
        Self::from_unnormalised(lines)
    }

    pub fn read_file(filename: impl AsRef<Path>, normalise: bool) -> Result<Self> {
        let filename = filename.as_ref();
        debug!("Reading vocabulary from {}...", filename.display());
        let f = File::open(filename)?;
        let vocabulary = if normalise {
            Self::read_unnormalised(f)?
        } else {
            Self::read(f)?
        };
        debug!(" - Read vocabulary of size {}", vocabulary.len());
        Ok(vocabulary)
    }

    ///Write the vocabulary, one word per line, in identifier order
    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = BufWriter::new(writer);
        for word in self.decoder.iter() {
            writer.write_all(word.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }
}
