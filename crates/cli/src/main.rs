mod provenance;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use polynest::generate::{random_polygons, Preset, RandomCfg};
use polynest::geom::Polygon;
use polynest::inclusion::{solve_with_method, InclusionMapping, SolveCfg};
use polynest::pip::Method;
use polynest::polyfile::{drop_ghost, load_polygons, save_polygons};
use polynest::simplify::simplify_all;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "polynest", version)]
#[command(about = "Find which polygon encloses which in .poly files")]
struct Cmd {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the inclusion mapping of each input file
    Solve(SolveArgs),
    /// Time every predicate on each file's own vertices
    Bench {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Douglas–Peucker tolerance applied before timing
        #[arg(long, default_value_t = polynest::DEFAULT_TOLERANCE)]
        tolerance: f64,
    },
    /// Write a preset or random .poly file
    Generate(GenerateArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug)]
struct SolveArgs {
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Point-in-polygon predicate: ray, winding or cross
    #[arg(long, default_value_t = Method::Cross)]
    method: Method,
    /// Douglas–Peucker tolerance
    #[arg(long, default_value_t = polynest::DEFAULT_TOLERANCE)]
    tolerance: f64,
    /// Skip simplification
    #[arg(long)]
    no_simplify: bool,
    /// Keep the leading placeholder polygon the reader produces
    #[arg(long)]
    keep_ghost: bool,
    /// Spread the outer loop over all cores
    #[arg(long)]
    parallel: bool,
    /// Abort a file's solve after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,
    /// Print one JSON object per file instead of the bare mapping
    #[arg(long)]
    json: bool,
    /// Also write all reports as JSON (plus a provenance sidecar) to this path
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Clone, Debug)]
struct GenerateArgs {
    /// Named scenario: single, multiple, empty, complex or large
    #[arg(long, conflicts_with = "random")]
    preset: Option<Preset>,
    /// Draw random polygons instead of a preset
    #[arg(long)]
    random: bool,
    #[arg(long, default_value_t = 4000)]
    n: usize,
    #[arg(long, default_value_t = 50)]
    m: usize,
    #[arg(long, default_value_t = -100_000_000, allow_negative_numbers = true)]
    min: i64,
    #[arg(long, default_value_t = 100_000_000, allow_negative_numbers = true)]
    max: i64,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long)]
    out: PathBuf,
}

/// One solved input, as printed with `--json` and written by `--out`.
#[derive(Serialize, Debug)]
struct SolveReport {
    file: String,
    method: String,
    tolerance: Option<f64>,
    polygons: usize,
    points: usize,
    mapping: Vec<Option<usize>>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Solve(args) => solve(&args),
        Action::Bench { files, tolerance } => bench(&files, tolerance),
        Action::Generate(args) => generate(&args),
        Action::Report => report(),
    }
}

fn solve(args: &SolveArgs) -> Result<()> {
    let mut reports = Vec::with_capacity(args.files.len());
    for file in &args.files {
        let (mapping, report) = solve_file(file, args)?;
        if args.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{mapping}");
        }
        reports.push(report);
    }
    if let Some(out) = &args.out {
        write_reports(out, args, &reports)?;
    }
    Ok(())
}

/// Load, simplify and solve one file.
fn solve_file(file: &Path, args: &SolveArgs) -> Result<(InclusionMapping, SolveReport)> {
    let mut polys = load_input(file, args.keep_ghost)?;
    let tolerance = (!args.no_simplify).then_some(args.tolerance);
    if let Some(tol) = tolerance {
        let removed = simplify_all(&mut polys, tol)
            .with_context(|| format!("simplifying {}", file.display()))?;
        tracing::debug!(file = %file.display(), removed, "simplified input");
    }
    let cfg = SolveCfg {
        parallel: args.parallel,
        timeout: args.timeout_ms.map(Duration::from_millis),
        cancel: None,
    };
    let start = Instant::now();
    let mapping = solve_with_method(&polys, args.method, &cfg)
        .with_context(|| format!("solving {}", file.display()))?;
    tracing::info!(
        file = %file.display(),
        method = %args.method,
        polygons = polys.len(),
        elapsed = ?start.elapsed(),
        "solved"
    );
    let report = SolveReport {
        file: file.display().to_string(),
        method: args.method.to_string(),
        tolerance,
        polygons: polys.len(),
        points: polys.iter().map(Polygon::len).sum(),
        mapping: mapping.as_slice().to_vec(),
    };
    Ok((mapping, report))
}

fn load_input(file: &Path, keep_ghost: bool) -> Result<Vec<Polygon>> {
    let polys = load_polygons(file).with_context(|| format!("reading {}", file.display()))?;
    Ok(if keep_ghost { polys } else { drop_ghost(polys) })
}

fn write_reports(out: &Path, args: &SolveArgs, reports: &[SolveReport]) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(reports)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let params = serde_json::json!({
        "method": args.method.to_string(),
        "tolerance": (!args.no_simplify).then_some(args.tolerance),
        "keep_ghost": args.keep_ghost,
        "parallel": args.parallel,
        "timeout_ms": args.timeout_ms,
    });
    let inputs = args.files.iter().map(|f| f.display().to_string());
    provenance::write_sidecar(out, provenance::Payload::new(params).with_inputs(inputs))?;
    tracing::info!(out = %out.display(), "reports written");
    Ok(())
}

/// Time each predicate on every vertex of every polygon against its own polygon.
fn bench_polygons(polys: &[Polygon]) -> Vec<(Method, Duration)> {
    Method::ALL
        .iter()
        .map(|&m| {
            let start = Instant::now();
            let mut hits = 0usize;
            for poly in polys {
                for p in &poly.pts {
                    hits += usize::from(m.inside(*p, poly));
                }
            }
            let elapsed = start.elapsed();
            tracing::debug!(method = %m, hits, "bench pass");
            (m, elapsed)
        })
        .collect()
}

fn bench(files: &[PathBuf], tolerance: f64) -> Result<()> {
    for file in files {
        let mut polys = load_input(file, false)?;
        simplify_all(&mut polys, tolerance)
            .with_context(|| format!("simplifying {}", file.display()))?;
        println!("Benchmark results for file: {}", file.display());
        for (m, elapsed) in bench_polygons(&polys) {
            println!("{m}: {:.6} seconds", elapsed.as_secs_f64());
        }
    }
    Ok(())
}

fn generate(args: &GenerateArgs) -> Result<()> {
    let polys = match (args.preset, args.random) {
        (Some(preset), _) => preset.polygons(),
        (None, true) => {
            let cfg = RandomCfg {
                polygons: args.n,
                points: args.m,
                min: args.min,
                max: args.max,
            };
            random_polygons(&cfg, args.seed)?
        }
        (None, false) => bail!("pass --preset NAME or --random"),
    };
    save_polygons(&args.out, &polys).with_context(|| format!("writing {}", args.out.display()))?;
    tracing::info!(out = %args.out.display(), polygons = polys.len(), "generated");
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&provenance::header())?);
    Ok(())
}
