// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter},
    path::PathBuf,
};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use trisect::{
    OctreeConfig, Scene,
    io::{read_obj, read_triangles, write_indices, write_triangles},
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Find intersecting triangles in a triangle soup")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    #[command(flatten)]
    detect: DetectArgs,
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a random scene in the text format to stdout
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of triangles
    count: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Side of the cube holding the scene
    #[arg(long, default_value_t = 100.0)]
    extent: f64,
    /// Side of the cube holding each triangle
    #[arg(long, default_value_t = 5.0)]
    size: f64,
}

#[derive(Args, Debug)]
struct DetectArgs {
    /// Input file; stdin when omitted
    input: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    #[arg(long, value_enum, default_value_t = Mode::Octree)]
    mode: Mode,
    #[arg(long)]
    residual_ratio: Option<f64>,
    #[arg(long)]
    min_split_items: Option<usize>,
    #[arg(long)]
    max_depth: Option<usize>,
    /// Print query counters to stderr
    #[arg(long)]
    stats: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Triangle count followed by 9 coordinates per triangle
    Text,
    /// Wavefront OBJ
    Obj,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    Octree,
    Brute,
    /// Run both and fail if they disagree
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Some(Command::Generate(args)) => generate(&args),
        None => detect(&cli.detect),
    }
}

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn generate(args: &GenerateArgs) -> Result<()> {
    if !(args.extent > 0.0 && args.size >= 0.0) {
        bail!("extent must be positive and size non-negative");
    }
    let mut rng = StdRng::seed_from_u64(args.seed);
    let scene = Scene::<f64>::random(&mut rng, args.count, args.extent, args.size);
    info!(count = args.count, seed = args.seed, "generated scene");
    write_triangles(BufWriter::new(io::stdout().lock()), scene.triangles())
        .context("failed to write scene")
}

fn config(args: &DetectArgs) -> Result<OctreeConfig> {
    let mut config = OctreeConfig::default();
    if let Some(ratio) = args.residual_ratio {
        config = config.with_residual_ratio(ratio);
    }
    if let Some(items) = args.min_split_items {
        config = config.with_min_split_items(items);
    }
    if let Some(depth) = args.max_depth {
        config = config.with_max_depth(depth);
    }
    config.validate().context("invalid octree settings")?;
    Ok(config)
}

fn load(args: &DetectArgs) -> Result<Scene<f64>> {
    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let triangles = match args.format {
        Format::Text => read_triangles(reader),
        Format::Obj => read_obj(reader),
    }
    .context("failed to parse input")?;
    Ok(Scene::new(triangles))
}

fn detect(args: &DetectArgs) -> Result<()> {
    let config = config(args)?;
    let scene = load(args)?;
    info!(triangles = scene.len(), mode = ?args.mode, "scene loaded");

    let report = match args.mode {
        Mode::Octree => scene.find_intersections(config)?,
        Mode::Brute => scene.brute_force(),
        Mode::Check => {
            let octree = scene.find_intersections(config)?;
            let brute = scene.brute_force();
            if octree.pairs != brute.pairs {
                let missing = brute.pairs.difference(&octree.pairs).count();
                let extra = octree.pairs.difference(&brute.pairs).count();
                bail!("octree and brute force disagree: {missing} missing, {extra} extra");
            }
            if args.stats {
                eprintln!(
                    "brute force: {} pair tests, {} hits",
                    brute.stats.pair_tests, brute.stats.hits
                );
            }
            octree
        }
    };

    if !report.rejected.is_empty() {
        warn!(count = report.rejected.len(), "invalid triangles were excluded");
    }
    if args.stats {
        eprintln!(
            "{} pairs, {} pair tests, {} nodes visited",
            report.pairs.len(),
            report.stats.pair_tests,
            report.stats.nodes_visited
        );
    }

    write_indices(BufWriter::new(io::stdout().lock()), report.indices())
        .context("failed to write results")
}
