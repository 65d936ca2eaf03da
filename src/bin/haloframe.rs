use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(name = "haloframe", version, about = "Render avatar frame designs")]
struct Cli {
    /// Editor config JSON (defaults, then this file, then HALOFRAME_* variables).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the rest frame of a design as a PNG.
    Frame(FrameArgs),
    /// Render an animated GIF of a design.
    Gif(GifArgs),
    /// Print the dominant colors of a photo.
    Palette(PaletteArgs),
    /// List the built-in frame presets.
    Presets,
    /// Publish a design with its rendered PNG to a directory store.
    Publish(PublishArgs),
}

#[derive(Args, Debug)]
struct DesignArgs {
    /// Design JSON (`frameConfig` + `textLayers`).
    #[arg(long)]
    design: PathBuf,

    /// Base photo.
    #[arg(long)]
    photo: Option<PathBuf>,

    /// Show the whole photo instead of covering the frame.
    #[arg(long)]
    fit: bool,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    design: DesignArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct GifArgs {
    #[command(flatten)]
    design: DesignArgs,

    /// Output GIF path.
    #[arg(long)]
    out: PathBuf,

    /// Capture rate (defaults to the config's).
    #[arg(long)]
    fps: Option<u32>,

    /// Clip length in seconds (defaults to the config's).
    #[arg(long)]
    secs: Option<f64>,

    /// Motion effect.
    #[arg(long, value_enum, default_value_t = MotionChoice::Pulse)]
    motion: MotionChoice,
}

#[derive(Args, Debug)]
struct PaletteArgs {
    /// Photo to sample.
    #[arg(long)]
    photo: PathBuf,

    /// Number of colors.
    #[arg(long, default_value_t = haloframe::DEFAULT_PALETTE_SIZE)]
    count: usize,
}

#[derive(Args, Debug)]
struct PublishArgs {
    #[command(flatten)]
    design: DesignArgs,

    /// Store directory.
    #[arg(long)]
    store: PathBuf,

    /// Display name.
    #[arg(long)]
    name: String,

    /// Description.
    #[arg(long, default_value = "")]
    description: String,

    /// Tag (repeatable).
    #[arg(long = "tag")]
    tags: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MotionChoice {
    None,
    Pulse,
    Spin,
    Glitch,
    Rain,
}

impl From<MotionChoice> for haloframe::MotionEffect {
    fn from(m: MotionChoice) -> Self {
        match m {
            MotionChoice::None => Self::None,
            MotionChoice::Pulse => Self::Pulse,
            MotionChoice::Spin => Self::Spin,
            MotionChoice::Glitch => Self::Glitch,
            MotionChoice::Rain => Self::Rain,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = haloframe::EditorConfig::load(cli.config.as_deref())
        .context("load editor config")?;
    match cli.cmd {
        Command::Frame(args) => cmd_frame(config, args),
        Command::Gif(args) => cmd_gif(config, args),
        Command::Palette(args) => cmd_palette(args),
        Command::Presets => cmd_presets(),
        Command::Publish(args) => cmd_publish(config, args),
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the default `warn,haloframe=info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,haloframe=info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn read_bytes(path: &Path, what: &str) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read {what} '{}'", path.display()))
}

fn write_bytes(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}

fn open_design(
    mut config: haloframe::EditorConfig,
    args: &DesignArgs,
) -> anyhow::Result<haloframe::EditorSession> {
    // Relative texture URLs in a design resolve next to it unless the config says otherwise.
    if config.asset_root == Path::new(".")
        && let Some(dir) = args.design.parent().filter(|p| !p.as_os_str().is_empty())
    {
        config.asset_root = dir.to_path_buf();
    }

    let mut session = haloframe::EditorSession::new(config)?;
    let json = std::fs::read_to_string(&args.design)
        .with_context(|| format!("read design '{}'", args.design.display()))?;
    session.load_document(&json, 0.0)?;

    if let Some(photo) = &args.photo {
        let bytes = read_bytes(photo, "photo")?;
        session
            .editor_mut()
            .load_photo(&bytes)
            .with_context(|| format!("decode photo '{}'", photo.display()))?;
        if args.fit {
            session.editor_mut().auto_fit();
        }
    }

    session.pump_textures(0.0)?;
    for notice in session.editor_mut().take_notices() {
        tracing::warn!(%notice, "design loaded with warnings");
    }
    Ok(session)
}

fn cmd_frame(config: haloframe::EditorConfig, args: FrameArgs) -> anyhow::Result<()> {
    let mut session = open_design(config, &args.design)?;
    let png = session.render_png()?;
    write_bytes(&args.out, &png)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_gif(config: haloframe::EditorConfig, args: GifArgs) -> anyhow::Result<()> {
    let mut session = open_design(config, &args.design)?;
    let mut opts = session.default_gif_opts()?;
    if let Some(fps) = args.fps {
        opts.fps = haloframe::Fps::new(fps, 1)?;
    }
    if let Some(secs) = args.secs {
        opts.duration_secs = secs;
    }
    session.set_motion(args.motion.into(), 0.0)?;

    let gif = session.export_gif(&opts, &mut |p| {
        tracing::debug!(frame = p.frame, total = p.total, "export progress");
    })?;
    write_bytes(&args.out, &gif.bytes)?;
    eprintln!(
        "wrote {} ({} frames)",
        args.out.display(),
        gif.frame_times_ms.len()
    );
    Ok(())
}

fn cmd_palette(args: PaletteArgs) -> anyhow::Result<()> {
    let bytes = read_bytes(&args.photo, "photo")?;
    let image = haloframe::decode_image(&bytes)
        .with_context(|| format!("decode photo '{}'", args.photo.display()))?;
    for color in haloframe::extract_palette(&image, args.count)? {
        println!("{color}");
    }
    Ok(())
}

fn cmd_presets() -> anyhow::Result<()> {
    for p in haloframe::presets() {
        println!("{:<16} {:<12} {}", p.id, format!("{:?}", p.shape_type), p.name);
    }
    Ok(())
}

fn cmd_publish(config: haloframe::EditorConfig, args: PublishArgs) -> anyhow::Result<()> {
    let mut session = open_design(config, &args.design)?;
    let mut store = haloframe::DirDesignStore::new(&args.store);
    let id = session.publish(&mut store, &args.name, &args.description, &args.tags)?;
    println!("{id}");
    Ok(())
}
