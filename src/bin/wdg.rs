//! CLI entry point for the `wdg` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use weighted_digraph::cli::commands;
use weighted_digraph::GraphError;

#[derive(Parser)]
#[command(
    name = "wdg",
    about = "Directed weighted graph tool: edit JSON graphs, find shortest paths and SCCs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new empty graph file
    Create {
        /// Path to the JSON graph file to create
        file: PathBuf,
    },
    /// Display information about a graph file
    Info {
        /// Path to the JSON graph file
        file: PathBuf,
    },
    /// Add a node
    AddNode {
        /// Path to the JSON graph file
        file: PathBuf,
        /// Node ID
        id: i64,
        /// Position as x,y,z
        #[arg(long)]
        pos: Option<String>,
    },
    /// Add an edge, or change the weight of an existing one
    AddEdge {
        /// Path to the JSON graph file
        file: PathBuf,
        /// Source node ID
        src: i64,
        /// Destination node ID
        dest: i64,
        /// Non-negative edge weight
        weight: f64,
    },
    /// Remove a node and every edge touching it
    RemoveNode {
        /// Path to the JSON graph file
        file: PathBuf,
        /// Node ID
        id: i64,
    },
    /// Remove an edge
    RemoveEdge {
        /// Path to the JSON graph file
        file: PathBuf,
        /// Source node ID
        src: i64,
        /// Destination node ID
        dest: i64,
    },
    /// Find the lightest path between two nodes
    Path {
        /// Path to the JSON graph file
        file: PathBuf,
        /// Source node ID
        src: i64,
        /// Destination node ID
        dest: i64,
    },
    /// List strongly connected components
    Scc {
        /// Path to the JSON graph file
        file: PathBuf,
        /// Only show the component containing this node
        #[arg(long)]
        node: Option<i64>,
    },
    /// Render the graph as SVG
    Plot {
        /// Path to the JSON graph file
        file: PathBuf,
        /// Output SVG path
        out: PathBuf,
    },
    /// Detailed statistics about the graph
    Stats {
        /// Path to the JSON graph file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Create { file } => commands::cmd_create(&file),
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::AddNode { file, id, pos } => {
            let pos = match pos.as_deref().map(commands::parse_position).transpose() {
                Ok(pos) => pos,
                Err(e) => {
                    eprintln!("Invalid position: {}", e);
                    process::exit(3);
                }
            };
            commands::cmd_add_node(&file, id, pos, json)
        }
        Commands::AddEdge {
            file,
            src,
            dest,
            weight,
        } => commands::cmd_add_edge(&file, src, dest, weight, json),
        Commands::RemoveNode { file, id } => commands::cmd_remove_node(&file, id, json),
        Commands::RemoveEdge { file, src, dest } => {
            commands::cmd_remove_edge(&file, src, dest, json)
        }
        Commands::Path { file, src, dest } => commands::cmd_path(&file, src, dest, json),
        Commands::Scc { file, node } => commands::cmd_scc(&file, node, json),
        Commands::Plot { file, out } => commands::cmd_plot(&file, &out),
        Commands::Stats { file } => commands::cmd_stats(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) | GraphError::MalformedPosition(_) => 2,
            GraphError::NodeNotFound(_) | GraphError::EdgeNotFound { .. } => 4,
            GraphError::EdgeRejected { .. } => 5,
        };
        process::exit(code);
    }
}
