use std::path::Path;
use tracing::{info,warn};

pub mod types;
pub mod error;
pub mod vocab;
pub mod iterators;
pub mod neighbours;
pub mod graph;
pub mod codec;
pub mod search;


pub use crate::types::*;
pub use crate::error::*;
pub use crate::vocab::*;
pub use crate::iterators::*;
pub use crate::neighbours::*;
pub use crate::graph::*;
pub use crate::codec::*;
pub use crate::search::*;


///A vocabulary together with its word graph: every word is connected to the words that are
///exactly one insertion, deletion or substitution away
#[derive(Clone,Debug,PartialEq)]
pub struct WordGraph {
    pub vocabulary: Vocabulary,

    ///Indices of the outer vector correspond to WordId
    pub adjacency: Adjacency,
}

impl WordGraph {
    ///Combine an existing vocabulary and adjacency structure, they must be of equal size
    pub fn new(vocabulary: Vocabulary, adjacency: Adjacency) -> Result<WordGraph> {
        if vocabulary.len() != adjacency.len() {
            return Err(LadderError::corrupt(format!("vocabulary has {} words but graph has {} nodes", vocabulary.len(), adjacency.len())));
        }
        Ok(WordGraph { vocabulary, adjacency })
    }

    ///Compute the graph for a vocabulary
    pub fn build(vocabulary: Vocabulary, params: &BuildParameters) -> Result<WordGraph> {
        let adjacency = build_adjacency(&vocabulary, params);
        if params.verify {
            info!("Verifying symmetry...");
            check_symmetry(&adjacency)?;
        }
        Ok(WordGraph { vocabulary, adjacency })
    }

    ///Load a previously saved graph from a directory
    pub fn load(dir: impl AsRef<Path>) -> Result<WordGraph> {
        let (vocabulary, adjacency) = load_graph(dir)?;
        Ok(WordGraph { vocabulary, adjacency })
    }

    pub fn save(&self, dir: impl AsRef<Path>) -> Result<()> {
        save_graph(dir, &self.vocabulary, &self.adjacency)
    }

    ///Does the directory hold both files of a saved graph?
    pub fn exists(dir: impl AsRef<Path>) -> bool {
        let dir = dir.as_ref();
        dir.join(GRAPH_FILE).is_file() && dir.join(WORDS_FILE).is_file()
    }

    ///Load the graph from the directory if a valid one was saved there before, otherwise
    ///obtain the vocabulary, build the graph and save it in the directory.
    ///A corrupt saved graph is rebuilt, other errors are propagated.
    pub fn load_or_build<F>(dir: impl AsRef<Path>, vocabulary: F, params: &BuildParameters) -> Result<WordGraph>
    where
        F: FnOnce() -> Result<Vocabulary>,
    {
        let dir = dir.as_ref();
        if Self::exists(dir) {
            match Self::load(dir) {
                Ok(graph) => return Ok(graph),
                Err(LadderError::CorruptGraph { reason }) => {
                    warn!("Saved graph in {} is unusable ({}), rebuilding", dir.display(), reason);
                },
                Err(e) => return Err(e)
            }
        }
        let graph = Self::build(vocabulary()?, params)?;
        graph.save(dir)?;
        Ok(graph)
    }

    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    ///Resolves a word to its identifier, failing for words not in the vocabulary
    pub fn id(&self, word: &str) -> Result<WordId> {
        self.vocabulary.identifier_of(word).ok_or_else(|| LadderError::UnknownWord(word.to_string()))
    }

    ///The neighbours of a word in the graph
    pub fn neighbours_of(&self, word: &str) -> Result<Vec<&str>> {
        let id = self.id(word)?;
        Ok(self.decode(&self.adjacency[id as usize]))
    }

    ///All vocabulary words one edit away from an arbitrary string, which does not need to be in
    ///the vocabulary itself
    pub fn suggest(&self, input: &str) -> Vec<&str> {
        self.decode(&input.neighbours(&self.vocabulary))
    }

    ///Find a shortest word ladder from `start` to `end`; `Ok(None)` if there is none
    pub fn find_ladder(&self, start: &str, end: &str) -> Result<Option<Vec<&str>>> {
        let start_id = self.id(start)?;
        let end_id = self.id(end)?;
        Ok(shortest_path(&self.adjacency, start_id, end_id).map(|path| self.decode(&path)))
    }

    pub fn stats(&self) -> GraphStats {
        stats(&self.adjacency)
    }

    fn decode(&self, ids: &[WordId]) -> Vec<&str> {
        ids.iter().filter_map(|id| self.vocabulary.word(*id)).collect()
    }
}
