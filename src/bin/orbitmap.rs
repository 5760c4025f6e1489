use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use orbitmap::{Canvas, FieldThreading, Palette, Region, RenderJob, render_to_file};

#[derive(Parser, Debug)]
#[command(name = "orbitmap", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render an escape-time image from command-line parameters.
    Render(RenderArgs),
    /// Render an escape-time image from a job JSON file.
    Job(JobArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Output width in pixels.
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Iteration cap per pixel.
    #[arg(long, default_value_t = 400)]
    max_iter: u32,

    /// Left plane bound.
    #[arg(long, allow_negative_numbers = true, default_value_t = -2.0)]
    min_x: f64,

    /// Right plane bound.
    #[arg(long, allow_negative_numbers = true, default_value_t = 1.0)]
    max_x: f64,

    /// Lower plane bound.
    #[arg(long, allow_negative_numbers = true, default_value_t = -1.5)]
    min_y: f64,

    /// Upper plane bound.
    #[arg(long, allow_negative_numbers = true, default_value_t = 1.5)]
    max_y: f64,

    /// View center, real part (center/zoom mode).
    #[arg(
        long,
        allow_negative_numbers = true,
        conflicts_with_all = ["min_x", "max_x", "min_y", "max_y"]
    )]
    center_x: Option<f64>,

    /// View center, imaginary part (center/zoom mode).
    #[arg(
        long,
        allow_negative_numbers = true,
        conflicts_with_all = ["min_x", "max_x", "min_y", "max_y"]
    )]
    center_y: Option<f64>,

    /// Zoom factor; the view spans 5/zoom plane units horizontally,
    /// aspect-corrected against the canvas (center/zoom mode).
    #[arg(long, conflicts_with_all = ["min_x", "max_x", "min_y", "max_y"])]
    zoom: Option<f64>,

    /// Count-to-color palette.
    #[arg(long, value_enum, default_value_t = PaletteChoice::Twilight)]
    palette: PaletteChoice,

    /// Output image path (.png or .jpg).
    #[arg(long, default_value = "mandelbrot-background.jpg")]
    out: PathBuf,

    /// Partition rows across worker threads.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override worker thread count (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct JobArgs {
    /// Input job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image path (.png or .jpg).
    #[arg(long)]
    out: PathBuf,

    /// Partition rows across worker threads.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override worker thread count (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PaletteChoice {
    Twilight,
    Hsl,
    Grayscale,
}

impl From<PaletteChoice> for Palette {
    fn from(choice: PaletteChoice) -> Self {
        match choice {
            PaletteChoice::Twilight => Palette::Twilight,
            PaletteChoice::Hsl => Palette::Hsl,
            PaletteChoice::Grayscale => Palette::Grayscale,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Job(args) => cmd_job(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let canvas = Canvas::new(args.width, args.height)?;

    let center_zoom_mode =
        args.center_x.is_some() || args.center_y.is_some() || args.zoom.is_some();
    let region = if center_zoom_mode {
        Region::from_center_zoom(
            args.center_x.unwrap_or(-0.745),
            args.center_y.unwrap_or(0.186),
            args.zoom.unwrap_or(2.0),
            canvas,
        )?
    } else {
        Region::new(args.min_x, args.max_x, args.min_y, args.max_y)?
    };

    let job = RenderJob {
        canvas,
        region,
        max_iter: args.max_iter,
        palette: args.palette.into(),
    };
    run_job(&job, args.parallel, args.threads, &args.out)
}

fn cmd_job(args: JobArgs) -> anyhow::Result<()> {
    let job = RenderJob::from_path(&args.in_path)?;
    run_job(&job, args.parallel, args.threads, &args.out)
}

fn run_job(
    job: &RenderJob,
    parallel: bool,
    threads: Option<usize>,
    out: &Path,
) -> anyhow::Result<()> {
    let threading = FieldThreading { parallel, threads };

    eprintln!(
        "generating {}x{} escape-time field (max_iter {})",
        job.canvas.width, job.canvas.height, job.max_iter
    );
    let stats = render_to_file(job, &threading, out)?;

    eprintln!(
        "wrote {} ({} pixels, {} interior)",
        out.display(),
        stats.pixels_total,
        stats.interior
    );
    Ok(())
}
