//! wordgraph - explore the word-adjacency graph of a text file
//!
//! Results go to stdout, logs to stderr (`RUST_LOG=debug` for detail).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;
use std::io::BufRead;
use std::path::PathBuf;
use std::thread;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wordgraph::report;
use wordgraph::{
    CancellationToken, PageRankResult, WalkTermination, WordGraphConfig, WordGraphError,
    WordGraphSession,
};

#[derive(Parser, Debug)]
#[command(name = "wordgraph")]
#[command(
    version,
    about = "Build a directed word graph from a text file and query it",
    after_help = "\
Examples:
  wordgraph -i story.txt show                   Print every edge
  wordgraph -i story.txt bridge new life        Bridge words from new to life
  wordgraph -i story.txt path to life           All shortest paths
  wordgraph -i story.txt pagerank --damping 0.9
  wordgraph -i story.txt --seed 7 walk          Reproducible random walk"
)]
struct Cli {
    /// Text file to build the graph from
    #[arg(long, short = 'i')]
    input: PathBuf,

    /// JSON config file (damping, max_iterations, ...)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Seed for bridge selection and random walks
    #[arg(long)]
    seed: Option<u64>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the adjacency listing
    Show,

    /// Export the graph in Graphviz DOT format
    Dot {
        #[arg(long, short = 'o', default_value = "graph.dot")]
        output: PathBuf,
    },

    /// Query bridge words from WORD1 to WORD2
    Bridge { word1: String, word2: String },

    /// Insert bridge words into new text
    Expand {
        /// Text to expand (several arguments are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Shortest paths from FROM to TO, or to every reachable word
    ///
    /// Press Enter to stop a long search.
    Path { from: String, to: Option<String> },

    /// Rank words with PageRank
    Pagerank {
        /// Damping factor in [0, 1)
        #[arg(long, short = 'd')]
        damping: Option<f64>,
    },

    /// Take a random walk and write it to a file
    ///
    /// Press Enter to stop the walk early.
    Walk {
        #[arg(long, short = 'o', default_value = "walk_output.txt")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => WordGraphConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => WordGraphConfig::default(),
    };
    let precision = config.score_precision;

    let mut session = WordGraphSession::with_config(config).context("invalid configuration")?;
    session
        .build_from_file(&cli.input)
        .with_context(|| format!("failed to build graph from {}", cli.input.display()))?;

    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    match cli.command {
        Command::Show => {
            let graph = session.graph()?;
            if cli.json {
                let edges: Vec<_> = graph
                    .edges()
                    .map(|(s, t, w)| {
                        json!({"source": graph.word(s), "target": graph.word(t), "weight": w})
                    })
                    .collect();
                print_json(&json!({"nodes": graph.words(), "edges": edges}))?;
            } else {
                print!("{}", session.adjacency_listing()?);
            }
        }

        Command::Dot { output } => {
            session
                .export_dot(&output)
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!("Graph written to {}", output.display());
        }

        Command::Bridge { word1, word2 } => {
            let outcome = session.query_bridge_words(&word1, &word2)?;
            if cli.json {
                print_json(&outcome)?;
            } else {
                println!("{}", outcome);
            }
        }

        Command::Expand { text } => {
            let expanded = session.expand_text(&text.join(" "), &mut rng)?;
            if cli.json {
                print_json(&json!({ "text": expanded }))?;
            } else {
                println!("{}", expanded);
            }
        }

        Command::Path { from, to } => {
            let cancel = spawn_enter_listener();
            let result = match &to {
                Some(to) => session.shortest_paths(&from, to, &cancel).map(|paths| {
                    (
                        serde_json::to_value(&paths),
                        report::render_paths(&from, to, &paths),
                    )
                }),
                None => session.all_shortest_paths(&from, &cancel).map(|all| {
                    (
                        serde_json::to_value(&all),
                        report::render_all_paths(&from, &all),
                    )
                }),
            };
            if cancel.is_cancelled() {
                warn!("search cancelled, results may be partial");
            }

            match result {
                Ok((value, text)) => {
                    if cli.json {
                        print_json(&value?)?;
                    } else {
                        print!("{}", text);
                    }
                }
                Err(err @ WordGraphError::UnknownWord(_)) => {
                    println!("{}", report::render_error(&err));
                }
                Err(err) => return Err(err).context("shortest path query failed"),
            }
        }

        Command::Pagerank { damping } => {
            let result = session.page_rank(damping).context("PageRank failed")?;
            print_pagerank(&session, &result, precision, cli.json)?;
        }

        Command::Walk { output } => {
            let cancel = spawn_enter_listener();
            let trace = session.random_walk(&mut rng, &cancel)?;
            let graph = session.graph()?;
            trace
                .write_to(graph, &output)
                .with_context(|| format!("failed to write {}", output.display()))?;

            if cli.json {
                print_json(&json!({
                    "words": trace.words(graph),
                    "termination": trace.termination(),
                    "output": output.display().to_string(),
                }))?;
            } else {
                println!("{}", trace.to_line(graph));
                if trace.termination() == WalkTermination::Cancelled {
                    println!("Walk stopped by user.");
                }
                println!("Walk written to {}", output.display());
            }
        }
    }

    Ok(())
}

fn print_pagerank(
    session: &WordGraphSession,
    result: &PageRankResult,
    precision: usize,
    as_json: bool,
) -> Result<()> {
    let ranked = result.ranked(session.graph()?);
    if as_json {
        print_json(&json!({
            "converged": result.converged,
            "iterations": result.iterations,
            "scores": ranked,
        }))
    } else {
        print!("{}", report::render_pagerank(&ranked, precision));
        Ok(())
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Cancel the returned token when the user presses Enter
///
/// The listener thread is detached; it blocks on stdin until a line
/// arrives or the process exits.
fn spawn_enter_listener() -> CancellationToken {
    let cancel = CancellationToken::new();
    let token = cancel.clone();
    thread::spawn(move || {
        let mut line = String::new();
        if let Ok(n) = std::io::stdin().lock().read_line(&mut line) {
            if n > 0 {
                debug!("enter pressed, cancelling");
                token.cancel();
            }
        }
    });
    cancel
}
