use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(name = "annoview", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every annotation of an analysis over its image as PNGs.
    Overlay(OverlayArgs),
    /// Write one score gauge per metric as SVG (and optionally PNG).
    Gauges(GaugesArgs),
    /// Print the textual sections of an analysis.
    Report(ReportArgs),
}

#[derive(Parser, Debug)]
struct OverlayArgs {
    /// Source image (PNG, JPEG, GIF, ...).
    #[arg(long)]
    image: PathBuf,

    /// Analysis JSON (`{"data": {...}}`).
    #[arg(long)]
    analysis: PathBuf,

    /// Output directory for `annotation_<n>.png`.
    #[arg(long)]
    out: PathBuf,

    /// Bold TrueType/OpenType font for titles (defaults to `ANNOVIEW_LABEL_FONT`, then a system face).
    #[arg(long)]
    font: Option<PathBuf>,

    /// Focused annotation index (0-based).
    #[arg(long, default_value_t = 0)]
    focus: usize,
}

#[derive(Parser, Debug)]
struct GaugesArgs {
    /// Analysis JSON (`{"data": {...}}`).
    #[arg(long)]
    analysis: PathBuf,

    /// Output directory for `<metric>.svg`.
    #[arg(long)]
    out: PathBuf,

    /// Also rasterize each gauge to `<metric>.png`.
    #[arg(long, default_value_t = false)]
    png: bool,

    /// Time since mount in milliseconds (defaults to the fully revealed state).
    #[arg(long)]
    elapsed_ms: Option<u64>,
}

#[derive(Parser, Debug)]
struct ReportArgs {
    /// Analysis JSON (`{"data": {...}}`).
    #[arg(long)]
    analysis: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("annoview=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Overlay(args) => cmd_overlay(args),
        Command::Gauges(args) => cmd_gauges(args),
        Command::Report(args) => cmd_report(args),
    }
}

fn load_analysis(path: &Path) -> anyhow::Result<annoview::AnalysisResult> {
    let envelope = annoview::AnalysisEnvelope::from_path(path)
        .with_context(|| format!("load analysis '{}'", path.display()))?;
    Ok(envelope.data)
}

fn create_out_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("create output dir '{}'", dir.display()))
}

// Metric keys come from the analysis service; keep them inside the output directory.
fn file_stem(metric: &str) -> String {
    let stem: String = metric
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() { "_".to_string() } else { stem }
}

fn cmd_overlay(args: OverlayArgs) -> anyhow::Result<()> {
    let result = load_analysis(&args.analysis)?;
    let source = annoview::ImageSource::from_path(&args.image)
        .with_context(|| format!("read image '{}'", args.image.display()))?;

    let mut opts = annoview::OverlayOpts::from_env();
    if let Some(font) = args.font {
        opts.label_font = Some(font);
    }
    let mut controller = annoview::OverlayController::new(opts).context("load label font")?;

    let pass = controller.set_inputs(Some(source), Some(result), args.focus);
    let outcomes = controller.run_pass(&pass, &mut annoview::RasterDecoder);

    create_out_dir(&args.out)?;
    for (index, outcome) in &outcomes {
        let Some(surface) = controller.surface(*index) else {
            eprintln!("annotation {index}: {outcome:?}");
            continue;
        };
        let path = args.out.join(format!("annotation_{}.png", index + 1));
        surface
            .to_rgba_image()?
            .save_with_format(&path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        eprintln!("annotation {index}: {outcome:?} -> {}", path.display());
    }

    if outcomes
        .iter()
        .any(|(_, o)| *o == annoview::DrawOutcome::DecodeFailed)
    {
        anyhow::bail!("image '{}' could not be decoded", args.image.display());
    }
    Ok(())
}

fn cmd_gauges(args: GaugesArgs) -> anyhow::Result<()> {
    let result = load_analysis(&args.analysis)?;
    let gauges = annoview::gauges_for(&result, &annoview::GaugeOpts::default());

    create_out_dir(&args.out)?;
    for gauge in &gauges {
        let offset = match args.elapsed_ms {
            Some(ms) => gauge.offset_at(Duration::from_millis(ms)),
            None => gauge.target_offset(),
        };
        let svg = annoview::render_gauge_svg(gauge, offset);

        let svg_path = args.out.join(format!("{}.svg", file_stem(&gauge.metric)));
        std::fs::write(&svg_path, &svg)
            .with_context(|| format!("write svg '{}'", svg_path.display()))?;

        if args.png {
            let png_path = args.out.join(format!("{}.png", file_stem(&gauge.metric)));
            annoview::rasterize_gauge(&svg, 1.0)?
                .save_with_format(&png_path, image::ImageFormat::Png)
                .with_context(|| format!("write png '{}'", png_path.display()))?;
        }
        println!("{}: {} ({})", gauge.label, gauge.score, gauge.tier);
    }
    Ok(())
}

fn cmd_report(args: ReportArgs) -> anyhow::Result<()> {
    let result = load_analysis(&args.analysis)?;
    let opts = annoview::OverlayOpts::from_env();
    print!("{}", annoview::Report::from_result_with(&result, &opts));
    Ok(())
}
