use anyhow::{Context, Result};
use canopy::{layout_report, preorder_iterative, preorder_recursive, Tree};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// How many preorder ids to print before truncating
const PREORDER_PREVIEW: usize = 100;

#[derive(Parser, Debug)]
#[command(name = "canopy", about = "Balanced binary tree builder, traversal, and layout")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the balanced tree over 1..=n and report node count and height.
    Stats {
        /// Number of nodes (at most 1,000,000).
        n: usize,
    },
    /// Print the preorder traversal, truncated to the first 100 ids.
    Preorder {
        /// Number of nodes (at most 1,000,000).
        n: usize,
        /// Traversal algorithm to run.
        #[arg(long, value_enum, default_value_t = Algorithm::Iterative)]
        algorithm: Algorithm,
    },
    /// Lay out a tree for drawing (at most 127 nodes).
    Layout {
        /// Number of nodes.
        n: usize,
        /// Vertical gap between tree levels.
        #[arg(long, default_value_t = 0.5)]
        gap: f64,
        /// Emit the layout report as JSON instead of plain text.
        #[cfg(feature = "visualize")]
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Algorithm {
    /// Explicit-stack traversal.
    Iterative,
    /// Structural recursion.
    Recursive,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { n } => run_stats(n)?,
        Commands::Preorder { n, algorithm } => run_preorder(n, algorithm)?,
        #[cfg(feature = "visualize")]
        Commands::Layout { n, gap, json } => run_layout(n, gap, json)?,
        #[cfg(not(feature = "visualize"))]
        Commands::Layout { n, gap } => run_layout(n, gap, false)?,
    }

    Ok(())
}

fn build_tree(n: usize) -> Result<Tree> {
    let tree = Tree::try_balanced(n).with_context(|| format!("cannot build tree for n={n}"))?;
    debug!(nodes = tree.len(), height = tree.height(), "built tree");
    Ok(tree)
}

fn run_stats(n: usize) -> Result<()> {
    let tree = build_tree(n)?;
    println!("nodes: {}", tree.len());
    println!("height: {}", tree.height());
    Ok(())
}

fn run_preorder(n: usize, algorithm: Algorithm) -> Result<()> {
    let tree = build_tree(n)?;
    let sequence = match algorithm {
        Algorithm::Iterative => preorder_iterative(tree.root()),
        Algorithm::Recursive => preorder_recursive(tree.root()),
    };

    let preview: Vec<String> = sequence
        .iter()
        .take(PREORDER_PREVIEW)
        .map(u64::to_string)
        .collect();
    let truncated = if sequence.len() > PREORDER_PREVIEW {
        ", ..."
    } else {
        ""
    };
    println!("preorder: [{}{truncated}]", preview.join(", "));
    println!("visited: {}", sequence.len());
    Ok(())
}

fn run_layout(n: usize, gap: f64, json: bool) -> Result<()> {
    let tree = build_tree(n)?;
    let report = layout_report(&tree, gap).context("layout failed")?;

    #[cfg(feature = "visualize")]
    if json {
        let rendered =
            serde_json::to_string_pretty(&report).context("failed to serialize layout report")?;
        println!("{rendered}");
        return Ok(());
    }
    let _ = json;

    println!(
        "tier: marker_size={} font_size={}",
        report.tier.marker_size, report.tier.font_size
    );
    let mut ids: Vec<u64> = report.positions.keys().copied().collect();
    ids.sort_unstable();
    for id in ids {
        let point = report.positions[&id];
        println!("node {id}: ({:.3}, {:.3})", point.x, point.y);
    }
    for (parent, child) in &report.edges {
        println!("edge: {parent} -> {child}");
    }
    Ok(())
}
