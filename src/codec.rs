//! The binary graph format, little-endian throughout:
//!
//! ```text
//! u32                  node count N
//! N times:
//!   u32                neighbour count k
//!   k times u32        neighbour identifier
//! ```
//!
//! No padding, no checksum. The graph is only meaningful together with its vocabulary file
//! (one word per line, line i holding the word with identifier i).

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::fs::{self,File};
use std::io::{self,BufReader,BufWriter,Read,Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug,info};

use crate::error::*;
use crate::types::*;
use crate::vocab::*;

///Upper bound on speculative preallocation, counts read from the input are not trusted
const MAX_PREALLOCATE: usize = 1 << 16;

fn read_u32<R: Read>(reader: &mut R, what: &str) -> Result<u32> {
    reader.read_u32::<LittleEndian>().map_err(|e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            LadderError::corrupt(format!("unexpected end of input while reading {}", what))
        } else {
            LadderError::Io(e)
        }
    })
}

fn at_end<R: Read>(reader: &mut R) -> Result<bool> {
    let mut buffer = [0u8; 1];
    loop {
        match reader.read(&mut buffer) {
            Ok(0) => return Ok(true),
            Ok(_) => return Ok(false),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into())
        }
    }
}

///Serialise an adjacency structure
pub fn write_adjacency<W: Write>(mut writer: W, adjacency: &Adjacency) -> Result<()> {
    if adjacency.len() > WordId::MAX as usize {
        return Err(LadderError::VocabularyTooLarge(adjacency.len()));
    }
    writer.write_u32::<LittleEndian>(adjacency.len() as u32)?;
    for neighbours in adjacency.iter() {
        writer.write_u32::<LittleEndian>(neighbours.len() as u32)?;
        for neighbour in neighbours.iter() {
            writer.write_u32::<LittleEndian>(*neighbour)?;
        }
    }
    writer.flush()?;
    Ok(())
}

///Deserialise an adjacency structure, the reader must hold exactly one graph.
///Truncated input, neighbour counts or identifiers beyond the node count and trailing bytes
///are all reported as `CorruptGraph`.
pub fn read_adjacency<R: Read>(mut reader: R) -> Result<Adjacency> {
    let nodes = read_u32(&mut reader, "node count")?;
    let mut adjacency: Adjacency = Vec::with_capacity((nodes as usize).min(MAX_PREALLOCATE));
    for node in 0..nodes {
        let count = read_u32(&mut reader, "neighbour count")?;
        if count > nodes {
            return Err(LadderError::corrupt(format!("node {} claims {} neighbours in a graph of {} nodes", node, count, nodes)));
        }
        let mut neighbours = Vec::with_capacity((count as usize).min(MAX_PREALLOCATE));
        for _ in 0..count {
            let neighbour = read_u32(&mut reader, "neighbour identifier")?;
            if neighbour >= nodes {
                return Err(LadderError::corrupt(format!("node {} has neighbour {} outside of [0, {})", node, neighbour, nodes)));
            }
            neighbours.push(neighbour);
        }
        adjacency.push(neighbours);
    }
    if !at_end(&mut reader)? {
        return Err(LadderError::corrupt(format!("trailing data after {} nodes", nodes)));
    }
    Ok(adjacency)
}

///Write to a temporary file next to the destination and move it into place once complete,
///so the destination either holds the previous content or the complete new content.
///If `write` fails the temporary file is removed and the destination is left untouched.
pub fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write(&mut writer)?;
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn save_adjacency(filename: impl AsRef<Path>, adjacency: &Adjacency) -> Result<()> {
    let filename = filename.as_ref();
    debug!("Writing graph of {} nodes to {}...", adjacency.len(), filename.display());
    write_atomically(filename, |writer| write_adjacency(writer, adjacency))
}

pub fn load_adjacency(filename: impl AsRef<Path>) -> Result<Adjacency> {
    let filename = filename.as_ref();
    debug!("Reading graph from {}...", filename.display());
    let f = File::open(filename)?;
    read_adjacency(BufReader::new(f))
}

pub fn save_vocabulary(filename: impl AsRef<Path>, vocabulary: &Vocabulary) -> Result<()> {
    let filename = filename.as_ref();
    debug!("Writing vocabulary of {} words to {}...", vocabulary.len(), filename.display());
    write_atomically(filename, |writer| vocabulary.write(writer))
}

///Remove the graph file of a saved pair, if any, so the directory no longer holds a pair
///that `load_graph` accepts
pub fn discard_graph(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    match fs::remove_file(dir.join(GRAPH_FILE)) {
        Ok(()) => {
            debug!("Discarded previous graph in {}", dir.display());
            sync_dir(dir)
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into())
    }
}

#[cfg(unix)]
fn sync_dir(dir: &Path) -> Result<()> {
    File::open(dir)?.sync_all()?;
    Ok(())
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> Result<()> {
    Ok(())
}

///Save the vocabulary and graph as a pair (`WORDS_FILE` and `GRAPH_FILE`) in the given
///directory, which is created if needed.
///
///Each file is replaced atomically. The previous graph file is discarded before the new
///vocabulary is written and the new graph file comes last, so a save that is interrupted
///halfway leaves a directory without a graph file rather than a new vocabulary next to an
///old graph.
pub fn save_graph(dir: impl AsRef<Path>, vocabulary: &Vocabulary, adjacency: &Adjacency) -> Result<()> {
    let dir = dir.as_ref();
    if vocabulary.len() != adjacency.len() {
        return Err(LadderError::corrupt(format!("vocabulary has {} words but graph has {} nodes", vocabulary.len(), adjacency.len())));
    }
    fs::create_dir_all(dir)?;
    discard_graph(dir)?;
    save_vocabulary(dir.join(WORDS_FILE), vocabulary)?;
    save_adjacency(dir.join(GRAPH_FILE), adjacency)?;
    info!("Saved graph of {} words to {}", vocabulary.len(), dir.display());
    Ok(())
}

///Load a vocabulary and graph pair from the given directory.
///A vocabulary file that is not valid UTF-8, repeats a word or otherwise does not form a
///vocabulary makes the pair corrupt.
pub fn load_graph(dir: impl AsRef<Path>) -> Result<(Vocabulary, Adjacency)> {
    let dir = dir.as_ref();
    let vocabulary = match Vocabulary::read_file(dir.join(WORDS_FILE), false) {
        Ok(vocabulary) => vocabulary,
        Err(LadderError::Io(e)) if e.kind() == io::ErrorKind::InvalidData => {
            return Err(LadderError::corrupt(format!("unreadable vocabulary: {}", e)));
        },
        Err(e @ (LadderError::DuplicateWord { .. } | LadderError::InvalidWord { .. } | LadderError::VocabularyTooLarge(_))) => {
            return Err(LadderError::corrupt(e.to_string()));
        },
        Err(e) => return Err(e)
    };
    let adjacency = load_adjacency(dir.join(GRAPH_FILE))?;
    if vocabulary.len() != adjacency.len() {
        return Err(LadderError::corrupt(format!("vocabulary has {} words but graph has {} nodes", vocabulary.len(), adjacency.len())));
    }
    info!("Loaded graph of {} words from {}", vocabulary.len(), dir.display());
    Ok((vocabulary, adjacency))
}
