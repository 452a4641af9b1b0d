///Each word gets assigned an ID integer, its position in the vocabulary, carries no further meaning
pub type WordId = u32;

///Maps every WordId (index of the outer vector) to the WordIds of its neighbours,
///sorted ascending
pub type Adjacency = Vec<Vec<WordId>>;

///The letters that may be inserted or substituted
pub const LETTERS: &[char] = &['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z'];

///Name of the binary adjacency file inside a graph directory
pub const GRAPH_FILE: &str = "graph.bin";

///Name of the companion vocabulary file inside a graph directory
pub const WORDS_FILE: &str = "words.txt";

#[derive(Clone,Debug,PartialEq)]
pub struct BuildParameters {
    /// Use only a single-thread instead of leveraging multiple cores (lowers resource use and
    /// performance). The output is identical either way.
    pub single_thread: bool,

    /// Verify that the resulting graph is symmetric (and free of self-loops) after building it,
    /// failing the build otherwise
    pub verify: bool,
}

impl Default for BuildParameters {
    fn default() -> Self {
        Self {
            single_thread: false,
            verify: false,
        }
    }
}

impl BuildParameters {
    pub fn with_single_thread(mut self) -> Self {
        self.single_thread = true;
        self
    }
    pub fn with_verify(mut self) -> Self {
        self.verify = true;
        self
    }
}

///Summary statistics over an adjacency structure
#[derive(Clone,Debug,PartialEq,Eq,Default)]
pub struct GraphStats {
    pub nodes: usize,

    ///Number of undirected edges (each symmetric pair counts once)
    pub edges: usize,

    ///Nodes without any neighbours
    pub isolated: usize,

    ///The node with the most neighbours, and its degree
    pub max_degree: Option<(WordId, usize)>,
}
