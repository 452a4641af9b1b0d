extern crate clap;

use clap::{Arg, App, SubCommand, ArgMatches};
use serde::Serialize;
use std::io::{self, BufRead, BufReader};
use std::process::exit;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wordladder::*;

const DEFAULT_GRAPH_DIR: &str = "data";

#[derive(Serialize)]
struct LadderOutput<'a> {
    start: &'a str,
    end: &'a str,
    steps: Option<usize>,
    path: Option<Vec<&'a str>>,
}

#[derive(Serialize)]
struct NeighboursOutput<'a> {
    input: &'a str,
    known: bool,
    neighbours: Vec<&'a str>,
}

fn output_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value).map_err(io::Error::from)?);
    Ok(())
}

fn output_ladder(start: &str, end: &str, path: Option<Vec<&str>>, json: bool) -> Result<()> {
    if json {
        return output_json(&LadderOutput {
            start,
            end,
            steps: path.as_ref().map(|p| p.len() - 1),
            path,
        });
    }
    match path {
        Some(path) => {
            println!("Path from {} to {}:", start, end);
            println!("{}", path.join(" -> "));
        },
        None => {
            println!("No path found between {} and {}.", start, end);
        }
    }
    Ok(())
}

fn output_neighbours(graph: &WordGraph, input: &str, json: bool) -> Result<()> {
    let neighbours = graph.suggest(input);
    if json {
        output_json(&NeighboursOutput {
            input,
            known: graph.vocabulary.contains(input),
            neighbours,
        })
    } else {
        print!("{}", input);
        for neighbour in neighbours {
            print!("\t{}", neighbour);
        }
        println!();
        Ok(())
    }
}

fn graph_dir_argument<'a,'b>() -> Arg<'a,'b> {
    Arg::with_name("graph-dir")
        .long("graph-dir")
        .short("g")
        .help("Directory holding the graph (graph.bin) and its vocabulary (words.txt)")
        .takes_value(true)
        .default_value(DEFAULT_GRAPH_DIR)
}

fn json_argument<'a,'b>() -> Arg<'a,'b> {
    Arg::with_name("json")
        .long("json")
        .short("j")
        .help("Output json instead of plain text")
        .required(false)
}

fn build(args: &ArgMatches) -> Result<()> {
    let vocabulary_file = args.value_of("vocabulary").unwrap_or_default().to_string();
    let output_dir = args.value_of("output-dir").unwrap_or(DEFAULT_GRAPH_DIR);
    let normalise = args.is_present("normalize");
    let mut params = BuildParameters::default();
    if args.is_present("single-thread") {
        params = params.with_single_thread();
    }
    if args.is_present("verify") {
        params = params.with_verify();
    }

    let read_vocabulary = || {
        info!("Loading vocabulary from {}...", vocabulary_file);
        Vocabulary::read_file(&vocabulary_file, normalise)
    };
    let graph = if args.is_present("force") {
        let graph = WordGraph::build(read_vocabulary()?, &params)?;
        graph.save(output_dir)?;
        graph
    } else {
        WordGraph::load_or_build(output_dir, read_vocabulary, &params)?
    };
    let stats = graph.stats();
    eprintln!("Graph in {}: {} words, {} edges", output_dir, stats.nodes, stats.edges);
    Ok(())
}

fn find(args: &ArgMatches) -> Result<()> {
    let graph = WordGraph::load(args.value_of("graph-dir").unwrap_or(DEFAULT_GRAPH_DIR))?;
    let start = args.value_of("start").unwrap_or_default();
    let end = args.value_of("end").unwrap_or_default();
    let path = graph.find_ladder(start, end)?;
    output_ladder(start, end, path, args.is_present("json"))
}

fn neighbours(args: &ArgMatches) -> Result<()> {
    let graph = WordGraph::load(args.value_of("graph-dir").unwrap_or(DEFAULT_GRAPH_DIR))?;
    let json = args.is_present("json");
    match args.values_of("words") {
        Some(words) => {
            for word in words {
                output_neighbours(&graph, word, json)?;
            }
        },
        None => {
            eprintln!("(accepting standard input; enter words, one per line)");
            for line in BufReader::new(io::stdin()).lines() {
                let line = line?;
                let word = line.trim();
                if !word.is_empty() {
                    output_neighbours(&graph, word, json)?;
                }
            }
        }
    }
    Ok(())
}

fn stats(args: &ArgMatches) -> Result<()> {
    let graph = WordGraph::load(args.value_of("graph-dir").unwrap_or(DEFAULT_GRAPH_DIR))?;
    let stats = graph.stats();
    println!("nodes\t{}", stats.nodes);
    println!("edges\t{}", stats.edges);
    println!("isolated\t{}", stats.isolated);
    if let Some((id, degree)) = stats.max_degree {
        println!("max_degree\t{}\t{}", degree, graph.vocabulary.word(id).unwrap_or("?"));
    }
    if args.is_present("check-symmetry") {
        check_symmetry(&graph.adjacency)?;
        println!("symmetric\ttrue");
    }
    Ok(())
}

fn main() {
    let rootargs = App::new("Wordladder")
                    .version("0.1")
                    .author("Maarten van Gompel (proycon) <proycon@anaproy.nl>")
                    .about("Word ladders: find the shortest chain of single-letter edits between two words")
                    .subcommand(
                        SubCommand::with_name("build")
                            .about("Build the word graph for a vocabulary and save it (reuses a previously saved graph unless --force is given)")
                            .arg(Arg::with_name("vocabulary")
                                .long("vocabulary")
                                .short("v")
                                .help("Vocabulary file, one word per line")
                                .takes_value(true)
                                .required(true))
                            .arg(Arg::with_name("normalize")
                                .long("normalize")
                                .short("n")
                                .help("Normalize the vocabulary first: trim, lowercase, remove duplicates and sort")
                                .required(false))
                            .arg(Arg::with_name("output-dir")
                                .long("output-dir")
                                .short("o")
                                .help("Directory to write graph.bin and words.txt to")
                                .takes_value(true)
                                .default_value(DEFAULT_GRAPH_DIR))
                            .arg(Arg::with_name("single-thread")
                                .long("single-thread")
                                .help("Use only a single thread to build the graph")
                                .required(false))
                            .arg(Arg::with_name("verify")
                                .long("verify")
                                .help("Verify the graph is symmetric after building it")
                                .required(false))
                            .arg(Arg::with_name("force")
                                .long("force")
                                .short("f")
                                .help("Rebuild even if a saved graph exists")
                                .required(false))
                    )
                    .subcommand(
                        SubCommand::with_name("find")
                            .about("Find the shortest word ladder between two words")
                            .arg(graph_dir_argument())
                            .arg(json_argument())
                            .arg(Arg::with_name("start")
                                .help("Start word")
                                .takes_value(true)
                                .required(true)
                                .index(1))
                            .arg(Arg::with_name("end")
                                .help("End word")
                                .takes_value(true)
                                .required(true)
                                .index(2))
                    )
                    .subcommand(
                        SubCommand::with_name("neighbours")
                            .about("List the vocabulary words one edit away from the input words (read from standard input if none are given)")
                            .arg(graph_dir_argument())
                            .arg(json_argument())
                            .arg(Arg::with_name("words")
                                .help("Input words")
                                .takes_value(true)
                                .multiple(true)
                                .required(false))
                    )
                    .subcommand(
                        SubCommand::with_name("stats")
                            .about("Show statistics of a saved graph")
                            .arg(graph_dir_argument())
                            .arg(Arg::with_name("check-symmetry")
                                .long("check-symmetry")
                                .help("Verify that every edge has its reverse edge")
                                .required(false))
                    )
                    .arg(Arg::with_name("debug")
                        .long("debug")
                        .short("D")
                        .help("Debug")
                        .required(false))
                    .get_matches();

    let filter = if rootargs.is_present("debug") {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let result = match rootargs.subcommand() {
        ("build", Some(args)) => build(args),
        ("find", Some(args)) => find(args),
        ("neighbours", Some(args)) => neighbours(args),
        ("stats", Some(args)) => stats(args),
        _ => {
            eprintln!("{}", rootargs.usage());
            exit(2);
        }
    };

    if let Err(e) = result {
        eprintln!("ERROR: {}", e);
        exit(1);
    }
}
