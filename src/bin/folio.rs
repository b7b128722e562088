use std::{
    fs::File,
    io::{BufReader, Read as _, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use folio::SceneBackend as _;

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a markdown post body into blocks.
    Post(PostArgs),
    /// Simulate the project graph and write the final frame.
    Graph(GraphArgs),
}

#[derive(Parser, Debug)]
struct PostArgs {
    /// Input markdown file, or `-` for stdin.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = PostFormat::Json)]
    format: PostFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PostFormat {
    Json,
    Markdown,
}

#[derive(Parser, Debug)]
struct GraphArgs {
    /// Projects JSON (array of items).
    #[arg(long)]
    projects: PathBuf,

    /// Output path; `.svg` or `.png`.
    #[arg(long)]
    out: PathBuf,

    #[arg(long, default_value_t = 800.0)]
    width: f64,

    #[arg(long, default_value_t = 350.0)]
    height: f64,

    /// Frames to simulate before capturing.
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Fixed RNG seed (overrides the config).
    #[arg(long)]
    seed: Option<u64>,

    /// Graph config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured theme.
    #[arg(long, value_enum)]
    theme: Option<ThemeChoice>,

    /// Hover position `X,Y` applied before the last frame.
    #[arg(long, value_parser = parse_point)]
    hover: Option<folio::Point>,

    /// Device pixel ratio for PNG output.
    #[arg(long, default_value_t = 1.0)]
    dpr: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeChoice {
    Dark,
    Light,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Post(args) => cmd_post(args),
        Command::Graph(args) => cmd_graph(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_point(s: &str) -> Result<folio::Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y (got '{s}')"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y: {e}"))?;
    Ok(folio::Point::new(x, y))
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    let mut s = String::new();
    if path.as_os_str() == "-" {
        std::io::stdin()
            .read_to_string(&mut s)
            .context("read markdown from stdin")?;
    } else {
        s = std::fs::read_to_string(path)
            .with_context(|| format!("read markdown '{}'", path.display()))?;
    }
    Ok(s)
}

fn cmd_post(args: PostArgs) -> anyhow::Result<()> {
    let text = read_input(&args.in_path)?;
    let blocks = folio::render_post_body(Some(&text));

    let out = match args.format {
        PostFormat::Json => {
            serde_json::to_string_pretty(&blocks).context("serialize blocks to JSON")?
        }
        PostFormat::Markdown => folio::blocks_to_markdown(&blocks),
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{out}").context("write stdout")?;
    Ok(())
}

fn read_items_json(path: &Path) -> anyhow::Result<Vec<folio::Item>> {
    let f = File::open(path).with_context(|| format!("open projects '{}'", path.display()))?;
    let items: Vec<folio::Item> =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse projects JSON")?;
    Ok(items)
}

fn cmd_graph(args: GraphArgs) -> anyhow::Result<()> {
    let items = read_items_json(&args.projects)?;
    let mut config = match &args.config {
        Some(path) => folio::GraphConfig::from_path(path)?,
        None => folio::GraphConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(theme) = args.theme {
        config.theme = match theme {
            ThemeChoice::Dark => folio::Theme::Dark,
            ThemeChoice::Light => folio::Theme::Light,
        };
    }

    let viewport = folio::Viewport::new(args.width, args.height);
    let palette = folio::Palette::for_theme(config.theme);
    let dpr = config.effective_dpr(args.dpr);
    let mut view = folio::GraphView::mount(
        items,
        viewport,
        config,
        folio::ManualScheduler::default(),
    );

    if let folio::GraphLayout::Grid(cards) = view.layout() {
        let json = serde_json::to_string_pretty(&cards).context("serialize grid cards")?;
        println!("{json}");
        eprintln!("viewport below grid breakpoint; wrote grid layout to stdout");
        return Ok(());
    }

    // Hover early enough for the tooltip to finish its entry motion.
    let total = args.frames.max(1);
    let hover_at = total.saturating_sub(view.simulation().config().tooltip.enter_frames);
    let mut scene = None;
    for frame in 0..total {
        if frame == hover_at
            && let Some(p) = args.hover
        {
            view.pointer_move(p);
        }
        scene = view.on_frame();
    }
    let mut scene = scene.context("graph view produced no frame")?;
    if let Some(tooltip) = view.tooltip() {
        scene.push_tooltip(&tooltip, &palette);
    }

    let ext = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("svg") => {
            let svg = folio::SvgBackend::default().render(&scene)?;
            if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&args.out, svg)
                .with_context(|| format!("write svg '{}'", args.out.display()))?;
        }
        Some("png") => {
            let frame = folio::RasterBackend::new(dpr).render(&scene)?;
            folio::save_png(&frame, &args.out)?;
        }
        _ => anyhow::bail!(
            "unsupported output extension for '{}' (expected .svg or .png)",
            args.out.display()
        ),
    }

    view.unmount();
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
