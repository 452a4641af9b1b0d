use std::ops::Deref;

use crate::types::*;

///////////////////////////////////////////////////////////////////////////////////////

#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum EditOperation {
    Deletion,
    Substitution,
    Insertion,
}

#[derive(Clone,Debug,PartialEq,Eq)]
pub struct EditCandidate {
    pub text: String,
    pub operation: EditOperation,
    ///Character position (not byte offset) at which the edit was applied
    pub position: usize,
}

impl Deref for EditCandidate {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.text
    }
}

/// Returns all strings that are formed by a single
/// deletion, substitution or insertion (in that order)
/// applied to a word. Only the letters a-z are ever
/// deleted, substituted or inserted; any other character
/// stays in place, so every edit has an inverse edit.
///
/// Positions are counted in characters so multi-byte characters
/// are never split. The same string may be yielded more
/// than once (e.g. deleting either 'o' of "book"), the
/// iterator does not deduplicate.
///
/// For a word of n lowercase letters this yields
/// n deletions, 25*n substitutions and 26*(n+1) insertions.
pub struct EditCandidates {
    chars: Vec<char>,
    operation: EditOperation,
    position: usize,
    letter: usize,
}

impl EditCandidates {
    pub fn new(word: &str) -> EditCandidates {
        EditCandidates {
            chars: word.chars().collect(),
            operation: EditOperation::Deletion,
            position: 0,
            letter: 0,
        }
    }

    fn delete(&self, position: usize) -> String {
        self.chars[..position].iter().chain(self.chars[position+1..].iter()).collect()
    }

    fn substitute(&self, position: usize, c: char) -> String {
        self.chars[..position].iter().chain(std::iter::once(&c)).chain(self.chars[position+1..].iter()).collect()
    }

    fn insert(&self, position: usize, c: char) -> String {
        self.chars[..position].iter().chain(std::iter::once(&c)).chain(self.chars[position..].iter()).collect()
    }

    ///Can the character at this position be deleted or substituted?
    fn editable(&self, position: usize) -> bool {
        match self.chars.get(position) {
            Some(c) => LETTERS.contains(c),
            None => false
        }
    }

    ///Number of substitutions at the given position, from the given letter onward
    fn substitutions_at(&self, position: usize, from_letter: usize) -> usize {
        if self.editable(position) {
            LETTERS.len() - from_letter.min(LETTERS.len()) - if from_letter <= self.letter_index(position) { 1 } else { 0 }
        } else {
            0
        }
    }

    fn letter_index(&self, position: usize) -> usize {
        LETTERS.iter().position(|c| *c == self.chars[position]).unwrap_or(LETTERS.len())
    }

    fn remaining(&self) -> usize {
        let len = self.chars.len();
        let insertions_total = LETTERS.len() * (len + 1);
        match self.operation {
            EditOperation::Deletion => {
                let deletions = (self.position..len).filter(|p| self.editable(*p)).count();
                let substitutions: usize = (0..len).map(|p| self.substitutions_at(p, 0)).sum();
                deletions + substitutions + insertions_total
            },
            EditOperation::Substitution => {
                let substitutions: usize = (self.position..len).map(|p| {
                    if p == self.position {
                        self.substitutions_at(p, self.letter)
                    } else {
                        self.substitutions_at(p, 0)
                    }
                }).sum();
                substitutions + insertions_total
            },
            EditOperation::Insertion => {
                if self.position > len {
                    0
                } else {
                    (LETTERS.len() - self.letter) + LETTERS.len() * (len - self.position)
                }
            }
        }
    }
}

impl Iterator for EditCandidates {
    type Item = EditCandidate;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.chars.len();
        loop {
            match self.operation {
                EditOperation::Deletion => {
                    if self.position < len {
                        let position = self.position;
                        self.position += 1;
                        if self.editable(position) {
                            return Some(EditCandidate {
                                text: self.delete(position),
                                operation: EditOperation::Deletion,
                                position,
                            });
                        }
                        continue;
                    }
                    self.operation = EditOperation::Substitution;
                    self.position = 0;
                    self.letter = 0;
                },
                EditOperation::Substitution => {
                    if self.position >= len {
                        self.operation = EditOperation::Insertion;
                        self.position = 0;
                        self.letter = 0;
                    } else if self.letter >= LETTERS.len() || !self.editable(self.position) {
                        self.position += 1;
                        self.letter = 0;
                    } else {
                        let c = LETTERS[self.letter];
                        self.letter += 1;
                        if c != self.chars[self.position] {
                            return Some(EditCandidate {
                                text: self.substitute(self.position, c),
                                operation: EditOperation::Substitution,
                                position: self.position,
                            });
                        }
                    }
                },
                EditOperation::Insertion => {
                    if self.position > len {
                        return None;
                    } else if self.letter >= LETTERS.len() {
                        self.position += 1;
                        self.letter = 0;
                    } else {
                        let c = LETTERS[self.letter];
                        self.letter += 1;
                        return Some(EditCandidate {
                            text: self.insert(self.position, c),
                            operation: EditOperation::Insertion,
                            position: self.position,
                        });
                    }
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for EditCandidates {}
