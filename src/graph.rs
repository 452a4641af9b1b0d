use rayon::prelude::*;
use std::time::SystemTime;
use tracing::{debug,info};

use crate::error::*;
use crate::neighbours::*;
use crate::types::*;
use crate::vocab::*;

///Compute the neighbours of every word in the vocabulary.
///
///The result holds an entry for every identifier (empty for isolated words), each sorted
///ascending, so the output is identical for every run regardless of the number of threads.
///In parallel mode every worker produces the entries for its own share of identifiers,
///which are collected in identifier order; nothing is shared mutably.
pub fn build_adjacency(vocabulary: &Vocabulary, params: &BuildParameters) -> Adjacency {
    let begintime = SystemTime::now();
    info!("Computing neighbours for {} words ({})...", vocabulary.len(), if params.single_thread { "single thread" } else { "parallel" });

    let adjacency: Adjacency = if params.single_thread {
        vocabulary.words().iter().map(|word| word.neighbours(vocabulary)).collect()
    } else {
        vocabulary.words().par_iter().map(|word| word.neighbours(vocabulary)).collect()
    };

    let stats = stats(&adjacency);
    let duration = SystemTime::now().duration_since(begintime).map(|d| d.as_millis()).unwrap_or(0);
    info!(" - Found {} edges, {} isolated words (in {} ms)", stats.edges, stats.isolated, duration);
    if let Some((id, degree)) = stats.max_degree {
        debug!(" - Most connected word: {} ({} neighbours)", vocabulary.word(id).unwrap_or("?"), degree);
    }
    adjacency
}

///Verify that every edge has its reverse edge and that no word is its own neighbour.
///Returns the first offending directed edge.
pub fn check_symmetry(adjacency: &Adjacency) -> Result<()> {
    for (from, neighbours) in adjacency.iter().enumerate() {
        let from = from as WordId;
        for &to in neighbours.iter() {
            let reverse = to != from && match adjacency.get(to as usize) {
                Some(back) => back.contains(&from),
                None => false
            };
            if !reverse {
                return Err(LadderError::AsymmetricEdge { from, to });
            }
        }
    }
    Ok(())
}

pub fn stats(adjacency: &Adjacency) -> GraphStats {
    let mut stats = GraphStats {
        nodes: adjacency.len(),
        ..Default::default()
    };
    let mut directed = 0;
    for (id, neighbours) in adjacency.iter().enumerate() {
        directed += neighbours.len();
        if neighbours.is_empty() {
            stats.isolated += 1;
        }
        if !neighbours.is_empty() && stats.max_degree.map_or(true, |(_, degree)| neighbours.len() > degree) {
            stats.max_degree = Some((id as WordId, neighbours.len()));
        }
    }
    stats.edges = directed / 2;
    stats
}
