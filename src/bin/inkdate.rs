use std::path::PathBuf;

use anyhow::Context as _;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

use inkdate::{
    Color, CompositeOptions, DateFormat, EngineConfig, GenerateOptions, HandwritingEngine,
    Placement, RenderedArtifact,
};

#[derive(Parser, Debug)]
#[command(name = "inkdate", version)]
struct Cli {
    /// Engine config JSON. Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Never probe fonts; always emit SVG markup.
    #[arg(long, global = true, default_value_t = false)]
    markup: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one handwritten date.
    Date(DateArgs),
    /// Render several seeded variations of one date.
    Variations(VariationArgs),
    /// Composite a signature image with a handwritten date.
    Composite(CompositeArgs),
    /// Print the daily seed for a date.
    Seed(SeedArgs),
    /// List handwriting styles and style transfer profiles.
    Styles(StylesArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Date as YYYY-MM-DD; today when omitted.
    #[arg(long)]
    date: Option<NaiveDate>,

    /// full | short | numeric | formal (unknown values mean full).
    #[arg(long)]
    format: Option<String>,

    /// Font family to request.
    #[arg(long)]
    font_family: Option<String>,

    /// Base font size in pixels.
    #[arg(long)]
    font_size: Option<f64>,

    /// Ink color as #RRGGBB or #RRGGBBAA.
    #[arg(long)]
    ink: Option<Color>,

    /// Background color; transparent when omitted.
    #[arg(long)]
    background: Option<Color>,

    /// Explicit seed instead of the daily one.
    #[arg(long)]
    seed: Option<u32>,

    /// Handwriting style name from the config.
    #[arg(long)]
    style: Option<String>,

    /// Style transfer profile name.
    #[arg(long)]
    profile: Option<String>,
}

impl GenerateArgs {
    fn to_options(&self) -> GenerateOptions {
        GenerateOptions {
            date: self.date,
            format: self.format.as_deref().map(DateFormat::parse_lossy),
            width: None,
            height: None,
            font_family: self.font_family.clone(),
            font_size: self.font_size,
            ink_color: self.ink,
            background_color: self.background,
            variation_seed: self.seed,
            style: self.style.clone(),
            profile: self.profile.clone(),
        }
    }
}

#[derive(Args, Debug)]
struct DateArgs {
    #[command(flatten)]
    gen_args: GenerateArgs,

    /// Surface width in pixels.
    #[arg(long)]
    width: Option<i64>,

    /// Surface height in pixels.
    #[arg(long)]
    height: Option<i64>,

    /// Output path; the extension is replaced to match the payload.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct VariationArgs {
    #[command(flatten)]
    gen_args: GenerateArgs,

    /// Number of variations (at most 10).
    #[arg(long, default_value_t = 3)]
    count: usize,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct CompositeArgs {
    #[command(flatten)]
    gen_args: GenerateArgs,

    /// Signature image (PNG, JPEG or SVG).
    #[arg(long)]
    signature: Option<PathBuf>,

    /// Output width in pixels.
    #[arg(long)]
    width: Option<i64>,

    /// Output height in pixels.
    #[arg(long)]
    height: Option<i64>,

    /// top | bottom
    #[arg(long)]
    signature_position: Option<Placement>,

    /// top | bottom
    #[arg(long)]
    date_position: Option<Placement>,

    /// Padding in pixels.
    #[arg(long)]
    padding: Option<i64>,

    /// Output path; the extension is replaced to match the payload.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct SeedArgs {
    /// Date as YYYY-MM-DD; today when omitted.
    #[arg(long)]
    date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
struct StylesArgs {
    /// Include deactivated styles.
    #[arg(long, default_value_t = false)]
    all: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let engine = || build_engine(cli.config.as_deref(), cli.markup);
    match cli.cmd {
        Command::Date(args) => cmd_date(&engine()?, args),
        Command::Variations(args) => cmd_variations(&engine()?, args),
        Command::Composite(args) => cmd_composite(&engine()?, args).await,
        Command::Seed(args) => cmd_seed(args),
        Command::Styles(args) => cmd_styles(&engine()?, args),
    }
}

fn build_engine(config: Option<&std::path::Path>, markup: bool) -> anyhow::Result<HandwritingEngine> {
    let mut config = match config {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => EngineConfig::default(),
    };
    if markup {
        config.backend = inkdate::BackendPreference::Markup;
    }
    Ok(HandwritingEngine::new(config)?)
}

fn write_artifact(artifact: &RenderedArtifact, out: &std::path::Path) -> anyhow::Result<PathBuf> {
    let path = out.with_extension(artifact.extension());
    artifact.write_to(&path)?;
    eprintln!("wrote {}", path.display());
    Ok(path)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("serialize output json")?
    );
    Ok(())
}

fn cmd_date(engine: &HandwritingEngine, args: DateArgs) -> anyhow::Result<()> {
    let mut opts = args.gen_args.to_options();
    opts.width = args.width;
    opts.height = args.height;
    let artifact = engine.generate_handwritten_date(&opts)?;
    write_artifact(&artifact, &args.out)?;
    print_json(&artifact.metadata)
}

fn cmd_variations(engine: &HandwritingEngine, args: VariationArgs) -> anyhow::Result<()> {
    let opts = args.gen_args.to_options();
    let date = opts
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let artifacts = engine.generate_date_variations(date, args.count, &opts)?;
    for (i, a) in artifacts.iter().enumerate() {
        write_artifact(a, &args.out_dir.join(format!("variation-{i}")))?;
    }
    let metadata: Vec<_> = artifacts.iter().map(|a| &a.metadata).collect();
    print_json(&metadata)
}

async fn cmd_composite(engine: &HandwritingEngine, args: CompositeArgs) -> anyhow::Result<()> {
    let date_opts = args.gen_args.to_options();
    let date = date_opts
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let opts = CompositeOptions {
        output_width: args.width,
        output_height: args.height,
        signature_position: args.signature_position,
        date_position: args.date_position,
        padding: args.padding,
        signature_height_fraction: None,
        background_color: date_opts.background_color,
        date: GenerateOptions {
            background_color: None,
            ..date_opts
        },
    };
    let artifact = engine
        .composite_signature_with_date_async(args.signature.as_deref(), date, &opts)
        .await?;
    write_artifact(&artifact, &args.out)?;
    print_json(&artifact.metadata)
}

fn cmd_seed(args: SeedArgs) -> anyhow::Result<()> {
    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    print_json(&serde_json::json!({
        "date": date.format("%Y-%m-%d").to_string(),
        "seed": inkdate::daily_seed(date),
    }))
}

fn cmd_styles(engine: &HandwritingEngine, args: StylesArgs) -> anyhow::Result<()> {
    let styles: Vec<_> = if args.all {
        engine.styles().all().collect()
    } else {
        engine.styles().active().collect()
    };
    let profiles: Vec<_> = engine
        .profiles()
        .names()
        .filter_map(|n| engine.profiles().get(n))
        .collect();
    print_json(&serde_json::json!({
        "backend": engine.backend_kind(),
        "styles": styles,
        "profiles": profiles,
    }))
}
