use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "brickscale", version)]
struct Cli {
    /// Log at debug level.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Downscale an image and write the hex matrix (and optionally a PNG preview).
    Resample(ResampleArgs),
    /// Run a JSON job file end to end.
    Run(RunArgs),
    /// Invoke the tiling optimizer on an existing hex matrix.
    Tile(TileArgs),
    /// Render tiler placements to a PNG.
    Visualize(VisualizeArgs),
}

#[derive(Parser, Debug)]
struct ResampleArgs {
    /// Input image (any format the `image` crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Target width in pixels.
    #[arg(long)]
    width: u32,

    /// Target height in pixels.
    #[arg(long)]
    height: u32,

    /// Resampling algorithm.
    #[arg(long, value_enum, default_value_t = AlgorithmChoice::NearestNeighbor)]
    algorithm: AlgorithmChoice,

    /// Output hex matrix path.
    #[arg(long)]
    hex: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    png: Option<PathBuf>,

    /// First-line convention of the hex matrix.
    #[arg(long, value_enum, default_value_t = HeaderChoice::None)]
    header: HeaderChoice,

    /// Enable row-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Job JSON file.
    #[arg(long)]
    job: PathBuf,
}

#[derive(Parser, Debug)]
struct TileArgs {
    /// Tiler executable.
    #[arg(long)]
    exe: PathBuf,

    /// Hex matrix passed to the tiler.
    #[arg(long)]
    matrix: PathBuf,

    /// Brick catalog passed to the tiler.
    #[arg(long)]
    catalog: PathBuf,

    /// Tuning threshold passed to the tiler.
    #[arg(long, allow_negative_numbers = true)]
    threshold: i64,
}

#[derive(Parser, Debug)]
struct VisualizeArgs {
    /// Placement file produced by the tiler.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Approximate output width; each grid cell gets an integer number of pixels.
    #[arg(long, default_value_t = brickscale::DEFAULT_TARGET_WIDTH)]
    target_width: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgorithmChoice {
    NearestNeighbor,
    NearestRounded,
    Bilinear,
    Bicubic,
}

impl From<AlgorithmChoice> for brickscale::Algorithm {
    fn from(choice: AlgorithmChoice) -> Self {
        match choice {
            AlgorithmChoice::NearestNeighbor => brickscale::Algorithm::NearestNeighbor,
            AlgorithmChoice::NearestRounded => brickscale::Algorithm::NearestRounded,
            AlgorithmChoice::Bilinear => brickscale::Algorithm::Bilinear,
            AlgorithmChoice::Bicubic => brickscale::Algorithm::Bicubic,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HeaderChoice {
    None,
    Dimensions,
    RowCount,
}

impl From<HeaderChoice> for brickscale::HexHeader {
    fn from(choice: HeaderChoice) -> Self {
        match choice {
            HeaderChoice::None => brickscale::HexHeader::None,
            HeaderChoice::Dimensions => brickscale::HexHeader::Dimensions,
            HeaderChoice::RowCount => brickscale::HexHeader::RowCount,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Resample(args) => cmd_resample(args),
        Command::Run(args) => cmd_run(args),
        Command::Tile(args) => cmd_tile(args),
        Command::Visualize(args) => cmd_visualize(args),
    }
}

fn cmd_resample(args: ResampleArgs) -> anyhow::Result<()> {
    if args.hex.is_none() && args.png.is_none() {
        anyhow::bail!("nothing to write: pass --hex and/or --png");
    }

    let source = brickscale::load_image(&args.in_path)?;
    let algorithm = brickscale::Algorithm::from(args.algorithm);
    let out = brickscale::resample(
        &brickscale::ResampleRequest::new(&source, args.width, args.height, algorithm),
        &brickscale::ResampleThreading {
            parallel: args.parallel,
            threads: args.threads,
        },
    )
    .with_context(|| format!("resample '{}'", args.in_path.display()))?;

    if let Some(png) = &args.png {
        brickscale::save_png(&out, png)?;
        eprintln!("wrote {}", png.display());
    }
    if let Some(hex) = &args.hex {
        let cfg = brickscale::HexMatrixConfig::with_header(args.header.into());
        brickscale::save_hex_matrix(hex, &out, &cfg)?;
        eprintln!("wrote {}", hex.display());
    }
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let job = brickscale::ResampleJob::from_path(&args.job)?;
    let report =
        brickscale::run_job(&job).with_context(|| format!("run job '{}'", args.job.display()))?;

    eprintln!(
        "{}: {}x{} -> {}x{}, wrote {}",
        report.algorithm,
        report.source_width,
        report.source_height,
        report.width,
        report.height,
        report.hex_out.display()
    );
    if let Some(png) = &report.png_out {
        eprintln!("wrote {}", png.display());
    }
    Ok(())
}

fn cmd_tile(args: TileArgs) -> anyhow::Result<()> {
    let out = brickscale::run_tiler(&brickscale::TilerConfig {
        exe: args.exe,
        hex_matrix: args.matrix,
        catalog: args.catalog,
        threshold: args.threshold,
    })?;
    for line in out.stdout {
        println!("{line}");
    }
    Ok(())
}

fn cmd_visualize(args: VisualizeArgs) -> anyhow::Result<()> {
    let placements = brickscale::load_placements(&args.in_path)?;
    let img = brickscale::render_placements(&placements, args.target_width)?;
    brickscale::save_png(&img, &args.out)?;
    eprintln!(
        "wrote {} ({}x{}, {} bricks)",
        args.out.display(),
        img.width(),
        img.height(),
        placements.len()
    );
    Ok(())
}
