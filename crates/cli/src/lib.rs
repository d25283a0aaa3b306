use anyhow::{Context, Result};
use clap::Parser;
use provmap_graph::{write_graph, GraphBuilder, JsonRowSource, RowSource, VersionedDir};
use std::path::PathBuf;

use crate::flags::OffsetFlag;

mod flags;

#[derive(Parser)]
#[command(name = "provmap")]
#[command(about = "Export provenance tables as a force-graph JSON document", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON file holding the entity rows.
    #[arg(long)]
    entities: PathBuf,

    /// JSON file holding the activity rows.
    #[arg(long)]
    activities: PathBuf,

    /// Directory the graph document is written into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Requested file name; a taken name bumps to <stem>_1, <stem>_2, ...
    #[arg(long, default_value = "d3.json")]
    name: String,

    /// Activity node id offset mode.
    #[arg(long, value_enum, default_value_t = OffsetFlag::EntityCount)]
    offset: OffsetFlag,
}

pub fn main_entry() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let source = JsonRowSource::new(&cli.entities, &cli.activities);
    let entities = source
        .entity_rows()
        .with_context(|| format!("reading entity rows from {}", cli.entities.display()))?;
    let activities = source
        .activity_rows()
        .with_context(|| format!("reading activity rows from {}", cli.activities.display()))?;

    let graph = GraphBuilder::with_offset(cli.offset.as_domain())
        .build(&entities, &activities)
        .context("building provenance graph")?;

    let sink = VersionedDir::new(&cli.out_dir);
    let path = write_graph(&graph, &sink, &cli.name)
        .with_context(|| format!("writing graph into {}", cli.out_dir.display()))?;

    println!("{}", path.display());
    Ok(())
}
