//! `maxflow`: read an edge list, solve it, print the report
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

mod cli;

use clap::Parser;
use edmonds_core::report::render_report;
use edmonds_core::{load_network, MaxFlowSolver};
use log::info;

use cli::Cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (source, sink) = cli.endpoints();
    info!("Loading {} (source={}, sink={})", cli.graph_file.display(), source, sink);

    let mut network = load_network(&cli.graph_file, source, sink)?;
    let initial = network.clone();
    let result = MaxFlowSolver::new().solve(&mut network);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_report(&initial, &network, &result));
    }
    Ok(())
}
