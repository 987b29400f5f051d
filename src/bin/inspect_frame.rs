use anyhow::Result;
use rusty_gaze::surface::DrawCommand;
use rusty_gaze::{FrameRenderer, PackedFrame, RecordingSurface};
use std::path::PathBuf;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let path = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("frame.json"));
    let threshold: f32 = args.next().map(|t| t.parse()).transpose()?.unwrap_or(0.25);

    let frame = PackedFrame::load(&path)?;
    let detections = frame.detections()?;
    println!("Frame: {} ({} detections, ratio {:?})", path.display(), detections.len(), frame.ratio);

    let renderer = FrameRenderer::default();
    let mut surface = RecordingSurface::new(640, 640);
    let report = renderer.render_frame(&mut surface, threshold, &detections, frame.ratio);

    println!("{:<5} | {:<24} | {:<10}", "Op", "Rect / Origin", "Detail");
    println!("{}", "-".repeat(60));
    for cmd in surface.commands() {
        match cmd {
            DrawCommand::Clear => println!("{:<5} |", "clear"),
            DrawCommand::FillRect { rect, color } => println!(
                "{:<5} | {:>5.1},{:>5.1} {:>5.1}x{:<5.1} | {}",
                "fill", rect.x, rect.y, rect.width, rect.height, color
            ),
            DrawCommand::StrokeRect { rect, color, line_width } => println!(
                "{:<5} | {:>5.1},{:>5.1} {:>5.1}x{:<5.1} | {} w={}",
                "line", rect.x, rect.y, rect.width, rect.height, color, line_width
            ),
            DrawCommand::Text { origin, text, font, .. } => println!(
                "{:<5} | {:>5.1},{:>5.1}{:13} | \"{}\" {}px",
                "text", origin.x, origin.y, "", text, font.size_px
            ),
        }
    }

    match report.gaze {
        Some(g) => println!(
            "Gaze: {} (eye x={:.1} score={:.2}, pupil x={:.1} score={:.2})",
            g.direction, g.eye.center.x, g.eye.score, g.pupil.center.x, g.pupil.score
        ),
        None => println!("Gaze: none"),
    }
    Ok(())
}
