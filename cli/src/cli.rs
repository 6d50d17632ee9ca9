//! Command-line arguments for `maxflow`
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use clap::Parser;
use std::path::PathBuf;

/// Source name used when none is given on the command line
pub const DEFAULT_SOURCE: &str = "source";

/// Sink name used when none is given on the command line
pub const DEFAULT_SINK: &str = "sink";

#[derive(Debug, Parser)]
#[command(
    name = "maxflow",
    about = "Compute the maximum flow of an edge-list network with Edmonds-Karp",
    version
)]
pub struct Cli {
    /// Edge-list file, one `<nodeA> <nodeB> <capacity>` per line
    pub graph_file: PathBuf,

    /// Source node name
    #[arg(requires = "sink")]
    pub source: Option<String>,

    /// Sink node name
    pub sink: Option<String>,

    /// Print the result as JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn endpoints(&self) -> (&str, &str) {
        match (&self.source, &self.sink) {
            (Some(source), Some(sink)) => (source.as_str(), sink.as_str()),
            _ => (DEFAULT_SOURCE, DEFAULT_SINK),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let cli = Cli::try_parse_from(["maxflow", "graph.txt"]).unwrap();
        assert_eq!(cli.graph_file, PathBuf::from("graph.txt"));
        assert_eq!(cli.endpoints(), ("source", "sink"));
        assert!(!cli.json);
    }

    #[test]
    fn test_explicit_endpoints() {
        let cli = Cli::try_parse_from(["maxflow", "graph.txt", "A", "D", "--json"]).unwrap();
        assert_eq!(cli.endpoints(), ("A", "D"));
        assert!(cli.json);
    }

    #[test]
    fn test_usage_errors() {
        assert!(Cli::try_parse_from(["maxflow"]).is_err());
        assert!(Cli::try_parse_from(["maxflow", "graph.txt", "A"]).is_err());
        assert!(Cli::try_parse_from(["maxflow", "graph.txt", "A", "D", "E"]).is_err());
    }
}
