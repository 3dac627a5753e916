use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kincalc_core::{
    format_chain, graph_snapshot, resolve_detailed, ForceLayout, LayoutConfig, Point,
    ResolutionSource,
};

const DEFAULT_LOG_FILTER: &str = "kincalc=warn,kincalc_core=warn";

#[derive(Parser)]
#[command(name = "kincalc")]
#[command(about = "Chinese kinship title calculator", long_about = None)]
struct Cli {
    /// Log filter, takes precedence over RUST_LOG (e.g. "kincalc_core=debug")
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the title of one or more relation chains
    Resolve {
        /// Chains such as "妻的父" or "丈夫的母"
        #[arg(required = true)]
        chains: Vec<String>,

        /// Also show the formatted chain and which strategy answered
        #[arg(long)]
        explain: bool,

        /// Print results as JSON
        #[arg(long, conflicts_with = "explain")]
        json: bool,
    },

    /// Print the display form of a chain
    Format {
        chain: String,
    },

    /// Print the kinship graph
    Graph {
        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute a force-directed layout of the graph and print it as JSON
    Layout {
        #[arg(long, default_value = "800")]
        width: f64,

        #[arg(long, default_value = "600")]
        height: f64,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long)]
        iterations: Option<usize>,

        #[arg(long)]
        damping: Option<f64>,

        #[arg(long)]
        padding: Option<f64>,
    },
}

#[derive(Serialize)]
struct ResolveReport<'a> {
    chain: &'a str,
    formatted: String,
    title: String,
    source: ResolutionSource,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries results; logs go to stderr
    let filter = match &cli.log_level {
        Some(level) => level.clone(),
        None => std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Resolve {
            ref chains,
            explain,
            json,
        } => {
            debug!("Resolving {} chains", chains.len());
            let reports: Vec<_> = chains
                .iter()
                .map(|chain| {
                    let resolution = resolve_detailed(chain);
                    ResolveReport {
                        chain: chain.as_str(),
                        formatted: format_chain(chain),
                        title: resolution.title,
                        source: resolution.source,
                    }
                })
                .collect();

            if json {
                let out = serde_json::to_string_pretty(&reports)
                    .context("Failed to serialize resolutions")?;
                println!("{}", out);
            } else if explain {
                for report in &reports {
                    println!("{}", report.chain);
                    println!("  Chain:  {}", report.formatted);
                    println!("  Title:  {}", report.title);
                    println!("  Source: {}", report.source.as_str());
                }
            } else {
                for report in &reports {
                    println!("{}", report.title);
                }
            }
        }

        Commands::Format { ref chain } => {
            println!("{}", format_chain(chain));
        }

        Commands::Graph { json } => {
            let snapshot = graph_snapshot();

            if json {
                let out = serde_json::to_string_pretty(&snapshot)
                    .context("Failed to serialize graph snapshot")?;
                println!("{}", out);
            } else {
                println!("Nodes ({}):", snapshot.nodes.len());
                for node in &snapshot.nodes {
                    println!(
                        "  {:<8} {:<8} {:>3}",
                        node.title,
                        node.gender.as_str(),
                        node.generation
                    );
                }
                println!();
                println!("Edges ({}):", snapshot.edges.len());
                for edge in &snapshot.edges {
                    println!("  {} -{}-> {}", edge.from, edge.relation, edge.to);
                }
            }
        }

        Commands::Layout {
            width,
            height,
            seed,
            iterations,
            damping,
            padding,
        } => {
            let mut builder = LayoutConfig::builder();
            if let Some(seed) = seed {
                builder = builder.seed(seed);
            }
            if let Some(iterations) = iterations {
                builder = builder.iterations(iterations);
            }
            if let Some(damping) = damping {
                builder = builder.damping(damping);
            }
            if let Some(padding) = padding {
                builder = builder.padding(padding);
            }

            let config = builder.build();
            debug!("Layout config: {:?}", config);
            let layout = ForceLayout::new(config).context("Invalid layout parameters")?;
            let positions = layout
                .compute_snapshot(&graph_snapshot(), width, height)
                .with_context(|| format!("Failed to lay out graph on {}x{}", width, height))?;

            // sorted for stable output
            let sorted: BTreeMap<String, Point> = positions.into_iter().collect();
            let out = serde_json::to_string_pretty(&sorted).context("Failed to serialize layout")?;
            println!("{}", out);
        }
    }

    Ok(())
}
