use std::collections::VecDeque;
use tracing::debug;

use crate::types::*;

///Find a shortest path from `start` to `end` by breadth-first search.
///
///Returns the identifiers on the path including both endpoints, `Some(vec![start])` when
///`start == end`, and `None` if `end` is unreachable (or either identifier is not in the graph).
///Neighbours are explored in their stored order, so among several shortest paths the one
///through the lowest identifiers is found first.
pub fn shortest_path(adjacency: &Adjacency, start: WordId, end: WordId) -> Option<Vec<WordId>> {
    let size = adjacency.len();
    if start as usize >= size || end as usize >= size {
        return None;
    }
    if start == end {
        return Some(vec!(start));
    }

    let mut visited: Vec<bool> = vec![false; size];
    let mut parent: Vec<Option<WordId>> = vec![None; size];
    let mut queue: VecDeque<WordId> = VecDeque::new();

    //nodes are marked when enqueued, so each is enqueued at most once
    visited[start as usize] = true;
    queue.push_back(start);

    let mut expanded = 0;
    while let Some(current) = queue.pop_front() {
        if current == end {
            let path = reconstruct(&parent, start, end);
            debug!("(found path of {} steps after expanding {} nodes)", path.len() - 1, expanded);
            return Some(path);
        }
        expanded += 1;
        for &neighbour in adjacency[current as usize].iter() {
            if let Some(seen) = visited.get_mut(neighbour as usize) {
                if !*seen {
                    *seen = true;
                    parent[neighbour as usize] = Some(current);
                    queue.push_back(neighbour);
                }
            }
        }
    }
    debug!("(no path after expanding {} nodes)", expanded);
    None
}

fn reconstruct(parent: &[Option<WordId>], start: WordId, end: WordId) -> Vec<WordId> {
    let mut path = vec!(end);
    let mut at = end;
    while at != start {
        match parent[at as usize] {
            Some(previous) => {
                path.push(previous);
                at = previous;
            },
            None => break
        }
    }
    path.reverse();
    path
}
