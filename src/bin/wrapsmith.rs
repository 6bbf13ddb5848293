use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "wrapsmith", version, about = "Vehicle wrap pattern compositor")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a design JSON to a wrap PNG.
    Render(RenderArgs),
    /// Write the panel mask derived from a template image.
    Mask(MaskArgs),
    /// List the vehicles in a catalog.
    Vehicles(VehiclesArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input design JSON. Asset paths resolve relative to its directory.
    #[arg(long)]
    design: PathBuf,

    /// Output PNG path, or an existing directory to use the suggested file name.
    #[arg(long)]
    out: PathBuf,

    /// Use nearest-neighbor sampling instead of bilinear.
    #[arg(long, default_value_t = false)]
    nearest: bool,
}

#[derive(Parser, Debug)]
struct MaskArgs {
    /// Template image.
    #[arg(long)]
    template: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct VehiclesArgs {
    /// Catalog JSON (array of `{ "id", "name" }`).
    #[arg(long)]
    catalog: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Mask(args) => cmd_mask(args),
        Command::Vehicles(args) => cmd_vehicles(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let design = wrapsmith::Design::from_path(&args.design)?;
    let assets_root = args.design.parent().unwrap_or_else(|| Path::new("."));
    let source = wrapsmith::DirAssetSource::new(assets_root);

    let sampling = if args.nearest {
        wrapsmith::Sampling::Nearest
    } else {
        wrapsmith::Sampling::Bilinear
    };
    let mut sess = wrapsmith::DesignSession::new(wrapsmith::DesignSessionOpts {
        render: wrapsmith::RenderOpts::default().with_sampling(sampling),
        ..wrapsmith::DesignSessionOpts::default()
    });
    design.apply(&mut sess, &source)?;

    let blob = sess.export().context("export design")?;
    for w in &blob.warnings {
        eprintln!("warning: {w}");
    }

    let written = if args.out.is_dir() {
        blob.write_to_dir(&args.out)?
    } else {
        blob.write_to_path(&args.out)?
    };
    eprintln!("wrote {}", written.display());
    Ok(())
}

fn cmd_mask(args: MaskArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.template)
        .with_context(|| format!("read template '{}'", args.template.display()))?;
    let template = wrapsmith::decode_raster(&bytes)?;
    let mask = wrapsmith::MaskGenerator::new().generate(&template);
    let canvas = mask.canvas();

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.out,
        &mask.to_rgba8_preview(),
        canvas.width,
        canvas.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} panel pixels)",
        args.out.display(),
        mask.covered_pixels()
    );
    Ok(())
}

fn cmd_vehicles(args: VehiclesArgs) -> anyhow::Result<()> {
    let catalog = wrapsmith::VehicleCatalog::from_path(&args.catalog)?;
    for v in catalog.iter() {
        println!("{}\t{}", v.id, v.name);
    }
    Ok(())
}
