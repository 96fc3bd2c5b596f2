mod cli;
mod visualization;

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use log::{info, LevelFilter};

use machine_separators::disconnect_machines;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let instance = cli.command.instance();
    info!(
        "{} edges, machines {:?}",
        instance.edges.len(),
        instance.machines
    );

    let graph = instance.graph().context("invalid edge list")?;
    let disconnection = disconnect_machines(&instance.edges, &instance.machines)
        .context("invalid machine list")?;

    let mut remaining = graph.clone();
    for edge in &disconnection.cut_edges {
        info!("cut {}", edge);
        remaining.disconnect(edge.u, edge.v)?;
    }
    let components = remaining.components().into_iter().unique().count();
    info!(
        "minimum disconnect cost {}, {} components remain",
        disconnection.cost, components
    );

    if !cli.headless {
        visualization::draw_graph(&graph, &instance.machines, &disconnection)?;
    }
    Ok(())
}
