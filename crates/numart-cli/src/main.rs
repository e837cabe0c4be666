use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::info;
use numart::{
    AxisMapping, Constant, DigitComponents, DigitGrid, RenderConfig, dat, digit_grid,
    extract_all_digits, render, save_png,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "numart")]
#[command(about = "Digit-cluster art from the decimal expansions of pi, phi and e")]
struct Cli {
    /// Log pass statistics to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute digits of a constant and save them as a `.dat` grid
    #[command(name = "digits")]
    Digits(DigitsArgs),
    /// Dump the clusters and edges of every digit as JSON
    #[command(name = "components")]
    Components(ComponentsArgs),
    /// Render a `.dat` grid to PNG
    #[command(name = "render")]
    Render(RenderArgs),
}

#[derive(Args, Debug, Clone)]
struct DigitsArgs {
    /// pi, phi or e
    constant: Constant,
    #[arg(long)]
    rows: usize,
    #[arg(long)]
    cols: usize,
    /// Output directory
    #[arg(long, default_value = "data")]
    out: PathBuf,
}

#[derive(Args, Debug, Clone)]
struct ComponentsArgs {
    #[arg(long, required = true)]
    input: PathBuf,
    /// Output JSON path (default: cc_<rows>_by_<cols>.json)
    #[arg(long)]
    out: Option<PathBuf>,
    /// Leave edges out of the dump
    #[arg(long, default_value_t = false)]
    no_edges: bool,
}

#[derive(Args, Debug, Clone)]
struct RenderArgs {
    #[arg(long, required = true)]
    input: PathBuf,
    /// Output PNG path (default: images/<input stem>[_edges].png)
    #[arg(long)]
    out: Option<PathBuf>,
    /// Draw strokes between adjacent cells of the same cluster
    #[arg(long, default_value_t = false)]
    edges: bool,
    #[arg(long, default_value_t = 8)]
    cell_px: u32,
    #[arg(long, default_value_t = 1)]
    dot_radius: u32,
    #[arg(long, default_value_t = 8)]
    margin: u32,
    #[arg(long, default_value_t = 1)]
    edge_thickness: u32,
    /// Put rows along x and columns along y
    #[arg(long, default_value_t = false)]
    flip: bool,
    /// Draw row 0 at the bottom of the image
    #[arg(long, default_value_t = false)]
    origin_lower: bool,
}

#[derive(Debug, Serialize)]
struct ComponentsDto {
    rows: usize,
    cols: usize,
    digits: Vec<DigitDto>,
}

#[derive(Debug, Serialize)]
struct DigitDto {
    digit: u8,
    count: usize,
    components: Vec<ComponentDto>,
}

#[derive(Debug, Serialize)]
struct ComponentDto {
    label: u32,
    size: usize,
    cells: Vec<[usize; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    edges: Option<Vec<[[usize; 2]; 2]>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.verbose { "debug" } else { "warn" });

    match cli.cmd {
        Command::Digits(args) => run_digits(args),
        Command::Components(args) => run_components(args),
        Command::Render(args) => run_render(args),
    }
}

fn init_logging(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Fails only when a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_digits(args: DigitsArgs) -> Result<()> {
    if args.rows == 0 || args.cols == 0 {
        bail!("rows and cols must be positive, got {}x{}.", args.rows, args.cols);
    }

    let grid = digit_grid(args.constant, args.rows, args.cols)
        .with_context(|| format!("computing {} digits", args.constant))?;

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;
    let path = args.out.join(format!(
        "{}_{}_by_{}.dat",
        args.constant, args.rows, args.cols
    ));
    write_dat(&path, &grid)?;

    info!("wrote {}", path.display());
    println!("{}", path.display());
    Ok(())
}

fn run_components(args: ComponentsArgs) -> Result<()> {
    let grid = load_dat(&args.input)?;
    let clusters = extract_all_digits(&grid);

    let digits = clusters
        .iter()
        .map(|d| digit_dto(d, !args.no_edges))
        .collect();
    let out = args.out.unwrap_or_else(|| {
        PathBuf::from(format!("cc_{}_by_{}.json", grid.rows(), grid.cols()))
    });
    write_json(
        &out,
        &ComponentsDto {
            rows: grid.rows(),
            cols: grid.cols(),
            digits,
        },
    )?;

    info!("wrote {}", out.display());
    println!("{}", out.display());
    Ok(())
}

fn run_render(args: RenderArgs) -> Result<()> {
    let grid = load_dat(&args.input)?;
    let cfg = RenderConfig {
        cell_px: args.cell_px,
        dot_radius: args.dot_radius,
        margin_px: args.margin,
        axis: if args.flip {
            AxisMapping::RowX
        } else {
            AxisMapping::ColX
        },
        flip_vertical: args.origin_lower,
        draw_edges: args.edges,
        edge_thickness: args.edge_thickness,
        ..RenderConfig::default()
    };
    if cfg.cell_px == 0 {
        bail!("--cell-px must be positive.");
    }

    let clusters = if cfg.draw_edges {
        extract_all_digits(&grid)
    } else {
        Vec::new()
    };
    let img = render(&grid, &clusters, &cfg)
        .with_context(|| format!("rendering {}", args.input.display()))?;

    let out = match args.out {
        Some(p) => p,
        None => default_image_path(&args.input, args.edges)?,
    };
    save_png(&img, &out)?;

    info!("wrote {}x{} image to {}", img.width(), img.height(), out.display());
    println!("{}", out.display());
    Ok(())
}

fn digit_dto(d: &DigitComponents, with_edges: bool) -> DigitDto {
    let components = d
        .iter()
        .map(|(label, cells)| ComponentDto {
            label,
            size: cells.len(),
            cells: cells.iter().map(|c| [c.row, c.col]).collect(),
            edges: with_edges.then(|| {
                numart::build_edges(cells)
                    .iter()
                    .map(|e| [[e.a.row, e.a.col], [e.b.row, e.b.col]])
                    .collect()
            }),
        })
        .collect();

    DigitDto {
        digit: d.digit.value(),
        count: d.count,
        components,
    }
}

fn default_image_path(input: &Path, edges: bool) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("input path has no file name: {}", input.display()))?;
    let suffix = if edges { "_edges" } else { "" };
    Ok(PathBuf::from("images").join(format!("{stem}{suffix}.png")))
}

fn load_dat(path: &Path) -> Result<DigitGrid> {
    ensure_file_exists(path, "input")?;
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    dat::parse_digit_grid(&text).with_context(|| format!("parsing digit grid {}", path.display()))
}

fn write_dat(path: &Path, grid: &DigitGrid) -> Result<()> {
    fs::write(path, dat::format_digit_grid(grid))
        .with_context(|| format!("writing {}", path.display()))
}

fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(path, bytes).with_context(|| format!("writing json {}", path.display()))
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} file does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} path is not a file: {}", what, path.display());
    }
    Ok(())
}
