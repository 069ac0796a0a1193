use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use cropview::{CropTransform, FfprobeResolver, MetadataResolver, VideoResource, VideoSize};

#[derive(Parser, Debug)]
#[command(name = "cropview", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the center-crop transform for a viewport and a video size.
    Crop(CropArgs),
    /// Print the native dimensions of a video file (requires `ffprobe` on PATH).
    Probe(ProbeArgs),
}

#[derive(Parser, Debug)]
struct CropArgs {
    /// Viewport size as `WIDTHxHEIGHT`.
    #[arg(long, value_parser = parse_size)]
    viewport: (u32, u32),

    /// Native video size as `WIDTHxHEIGHT`.
    #[arg(long, value_parser = parse_size)]
    video: (u32, u32),
}

#[derive(Parser, Debug)]
struct ProbeArgs {
    /// Input video file.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// `ffprobe` executable to run.
    #[arg(long, default_value = "ffprobe")]
    ffprobe: PathBuf,
}

#[derive(serde::Serialize)]
struct CropReport {
    viewport: [u32; 2],
    video: [u32; 2],
    transform: CropTransform,
    axis: cropview::CropAxis,
    affine: [f64; 6],
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Crop(args) => cmd_crop(args),
        Command::Probe(args) => cmd_probe(args),
    }
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w = w
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid width '{w}': {e}"))?;
    let h = h
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid height '{h}': {e}"))?;
    Ok((w, h))
}

fn cmd_crop(args: CropArgs) -> anyhow::Result<()> {
    let (vw, vh) = args.viewport;
    let (cw, ch) = args.video;
    let transform = cropview::compute_crop_transform(vw, vh, cw, ch)
        .with_context(|| format!("crop {vw}x{vh} viewport over {cw}x{ch} video"))?;

    let report = CropReport {
        viewport: [vw, vh],
        video: [cw, ch],
        transform,
        axis: transform.cropped_axis(),
        affine: transform.to_affine().as_coeffs(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn cmd_probe(args: ProbeArgs) -> anyhow::Result<()> {
    let resolver = FfprobeResolver::new().with_program(&args.ffprobe);
    let size: VideoSize = resolver
        .resolve_dimensions(&VideoResource::Path(args.in_path.clone()))
        .with_context(|| format!("probe '{}'", args.in_path.display()))?;
    println!("{}", serde_json::to_string_pretty(&size)?);
    Ok(())
}
