use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

mod args;

use args::Args;
use rusty_gaze::ttf::FontRenderer;
use rusty_gaze::{AppConfig, FrameRenderer, FrameTimer, PackedFrame, RasterSurface};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // 0. Load Config
    let config = AppConfig::load(&args.config)?;
    let base = args.config.parent().unwrap_or_else(|| Path::new("."));
    let renderer = FrameRenderer::from_config(&config, base)?;
    let threshold = args.threshold.unwrap_or(config.render.class_threshold);
    log::info!(
        "Renderer ready: {} labels, {} colors, threshold {}",
        renderer.labels().len(),
        renderer.palette().len(),
        threshold
    );

    // 1. Setup Surface
    let mut surface = match &args.background {
        Some(path) => {
            let bg = image::open(path)
                .with_context(|| format!("failed to open background {}", path.display()))?
                .into_rgba8();
            RasterSurface::with_background(bg)
        }
        None => RasterSurface::new(args.width, args.height),
    };
    if let Some(font) = FontRenderer::try_load(&config.render.font_family) {
        surface = surface.with_font(font);
    }

    // 2. Collect Frames
    let frames = collect_frames(&args.input)?;
    let to_dir = args.input.is_dir();
    if to_dir {
        fs::create_dir_all(&args.output)
            .with_context(|| format!("failed to create {}", args.output.display()))?;
    }

    // 3. Render
    let mut timer = FrameTimer::new();
    let mut failed = 0usize;
    for path in &frames {
        if let Some(elapsed) = timer.tick() {
            log::debug!("Time since last frame: {:.3} ms", elapsed.as_secs_f64() * 1000.0);
        }

        let frame = match PackedFrame::load(path) {
            Ok(f) => f,
            Err(e) => {
                log::warn!("Skipping {}: {:#}", path.display(), e);
                failed += 1;
                continue;
            }
        };

        let report = match renderer.render_packed(
            &mut surface,
            threshold,
            &frame.boxes,
            &frame.scores,
            &frame.classes,
            frame.ratio,
        ) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping {}: {}", path.display(), e);
                failed += 1;
                continue;
            }
        };

        let out = if to_dir { output_path(&args.output, path) } else { args.output.clone() };
        surface
            .save(&out)
            .with_context(|| format!("failed to write {}", out.display()))?;

        match report.gaze {
            Some(gaze) => log::info!(
                "{}: {} boxes, eye is looking {}",
                path.display(),
                report.boxes.len(),
                gaze.direction
            ),
            None => log::info!("{}: {} boxes, no gaze", path.display(), report.boxes.len()),
        }
    }

    check_rendered(frames.len(), failed, &args.input)
}

fn check_rendered(total: usize, failed: usize, input: &Path) -> Result<()> {
    if total == 0 {
        bail!("no frame files found in {}", input.display());
    }
    if failed == total {
        bail!("no frame could be rendered from {}", input.display());
    }
    Ok(())
}

fn collect_frames(input: &Path) -> Result<Vec<PathBuf>> {
    if !input.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }
    let mut frames = Vec::new();
    for entry in fs::read_dir(input).with_context(|| format!("failed to list {}", input.display()))? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            frames.push(path);
        }
    }
    frames.sort();
    Ok(frames)
}

fn output_path(out_dir: &Path, frame: &Path) -> PathBuf {
    let stem = frame
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string());
    out_dir.join(format!("{}.png", stem))
}
