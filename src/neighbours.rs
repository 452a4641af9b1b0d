use crate::types::*;
use crate::vocab::*;
use crate::iterators::*;

///Trait for objects whose one-edit neighbourhood can be enumerated (string-like)
pub trait Neighbourhood {
    fn edit_candidates(&self) -> EditCandidates;
    fn neighbours(&self, vocabulary: &Vocabulary) -> Vec<WordId>;
}

impl Neighbourhood for str {
    ///All strings one deletion, substitution or insertion away, see `EditCandidates`
    fn edit_candidates(&self) -> EditCandidates {
        EditCandidates::new(self)
    }

    ///Identifiers of all vocabulary words exactly one edit away from this string,
    ///sorted ascending and without duplicates. The string itself need not be in the vocabulary
    ///and is never part of the result.
    fn neighbours(&self, vocabulary: &Vocabulary) -> Vec<WordId> {
        let mut found: Vec<WordId> = self.edit_candidates()
            .filter_map(|candidate| vocabulary.identifier_of(&candidate))
            .collect();
        //a candidate may be produced through more than one edit
        found.sort_unstable();
        found.dedup();
        found
    }
}

///Identifiers of all vocabulary words exactly one edit away from `word`
pub fn neighbours(word: &str, vocabulary: &Vocabulary) -> Vec<WordId> {
    word.neighbours(vocabulary)
}
