//! Convexity CLI
//!
//! Builds the requested shapes into a scene, checks the selection and prints
//! one verdict per shape.
//!
//! ```text
//! $ convexity cube dented-cube --explain
//! cube is Convex Hull
//! dented-cube is not Convex Hull
//!   edge 12 folds inward (obtuse, offset 0.343210)
//! ```

mod shapes;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use config::constants::CONVEXITY_EPSILON;
use convexity::{check_selection, find_concave_edge, CheckConfig, EdgeFailure, Scene, Verdict};
use serde::Serialize;

use shapes::Shape;

/// Report whether meshes are convex hulls.
#[derive(Debug, Parser)]
#[command(name = "convexity")]
#[command(about = "Report whether meshes are convex hulls", long_about = None)]
#[command(version)]
struct Cli {
    /// Shapes to check
    #[arg(value_name = "SHAPE", value_enum)]
    shapes: Vec<Shape>,

    /// Check every shape in the catalogue
    #[arg(long, conflicts_with = "shapes")]
    all: bool,

    /// Tolerance for planar folds and the obtuse sidedness test
    #[arg(long, default_value_t = CONVEXITY_EPSILON)]
    epsilon: f64,

    /// Scan each mesh's edges in parallel
    #[arg(long)]
    parallel_edges: bool,

    /// Print the first failing edge of each non-convex mesh
    #[arg(long)]
    explain: bool,

    /// Emit a JSON array instead of text
    #[arg(long)]
    json: bool,
}

/// One line of output.
#[derive(Debug, Serialize)]
struct Report {
    #[serde(flatten)]
    verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<EdgeFailure>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let reports = run(&cli)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&reports).context("serializing verdicts")?;
        println!("{json}");
    } else {
        for report in &reports {
            println!("{}", report.verdict);
            if let Some(failure) = &report.failure {
                println!("  {failure}");
            }
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<Vec<Report>> {
    let config = CheckConfig::new(cli.epsilon)
        .context("invalid --epsilon")?
        .with_parallel_edges(cli.parallel_edges);

    let selected: Vec<Shape> = if cli.all {
        Shape::value_variants().to_vec()
    } else {
        cli.shapes.clone()
    };

    let mut scene = Scene::new();
    let mut handles = Vec::with_capacity(selected.len());
    for shape in selected {
        let mesh = shape
            .build()
            .with_context(|| format!("building {}", shape.name()))?;
        handles.push(scene.add(shape.name(), mesh));
    }

    let verdicts = check_selection(&scene, &handles, &config).context("checking selection")?;

    let reports = verdicts
        .into_iter()
        .zip(&handles)
        .map(|(verdict, &handle)| {
            let failure = match (cli.explain && !verdict.convex, scene.get(handle)) {
                (true, Some((_, mesh))) => find_concave_edge(mesh, config.epsilon),
                _ => None,
            };
            Report { verdict, failure }
        })
        .collect();
    Ok(reports)
}
