use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use chroma_engine::logging::{init_logging, LoggingConfig};
use chroma_ui::prelude::*;

/// Renders the gradient picker headlessly and replays a scripted gesture.
#[derive(Debug, clap::Parser)]
#[clap(author, version, about)]
struct Args {
    /// Directory for picker.png and preview.png
    #[clap(default_value = "out")]
    out_dir: PathBuf,

    /// Resolve picks analytically instead of reading back a rendered pixel
    #[clap(long)]
    analytic: bool,
}

/// Headless demo settings.
#[derive(Debug, Clone)]
struct StudioConfig {
    out_dir: PathBuf,
    viewport: Viewport,
    sampling: SamplingStrategy,
}

impl From<Args> for StudioConfig {
    fn from(args: Args) -> Self {
        Self {
            out_dir: args.out_dir,
            viewport: Viewport::new(375.0, 667.0),
            sampling: if args.analytic { SamplingStrategy::Analytic } else { SamplingStrategy::Readback },
        }
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    let config = StudioConfig::from(Args::parse());

    println!();
    println!("  ┌──────────────────────────────────────┐");
    println!("  │        CHROMA STUDIO · headless      │");
    println!("  └──────────────────────────────────────┘");
    println!();
    log::info!("config: {config:?}");

    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("failed to create {}", config.out_dir.display()))?;

    render_picker(&config)?;
    replay_gestures(&config)?;

    Ok(())
}

/// The bare picker at the size it takes inside the viewport.
fn render_picker(config: &StudioConfig) -> Result<()> {
    let frame = ColorPicker::with_reference(config.viewport.rect())
        .frame()
        .context("picker has no frame after sizing")?;
    let viewport = Viewport::new(frame.size.x, frame.size.y);

    let mut ui = UiScene::new();
    let mut root: Element = ColorPicker::new().sampling(config.sampling).into();
    ui.frame(&mut root, viewport, &UiInput::default());

    let path = config.out_dir.join("picker.png");
    ui.render(viewport)
        .context("failed to render picker")?
        .save_png(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

/// Drives the full controller with a scripted pointer stream and snapshots the result.
fn replay_gestures(config: &StudioConfig) -> Result<()> {
    let viewport = config.viewport;
    let controller = PickerController::new(viewport.rect()).sampling(config.sampling);
    let picker = controller.picker_rect();
    let preview = controller.preview_handle();
    let mut root: Element = controller.into();

    let mut ui = UiScene::new();
    let mut recognizer = GestureRecognizer::default();

    for event in scripted_pointer(picker) {
        let Some(gesture) = recognizer.handle(event) else { continue };
        let result = ui.dispatch(&mut root, viewport, &UiEvent::Gesture(gesture));
        log::info!(
            "{:?}/{:?} at ({:.0}, {:.0}) -> {} preview {}",
            gesture.kind,
            gesture.phase,
            gesture.location.x,
            gesture.location.y,
            if result.is_consumed() { "picked," } else { "ignored," },
            hex(preview.get()),
        );
    }

    ui.frame(&mut root, viewport, &UiInput::default());
    let path = config.out_dir.join("preview.png");
    ui.render(viewport)
        .context("failed to render controller")?
        .save_png(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("wrote {} (final color {})", path.display(), hex(preview.get()));
    Ok(())
}

/// A tap in the picker, then a pan across it that runs off the right edge.
fn scripted_pointer(picker: Rect) -> Vec<PointerEvent> {
    let y = picker.origin.y + picker.size.y * 0.4;
    let tap = Vec2::new(picker.origin.x + picker.size.x * 0.25, y);

    let mut events = vec![
        PointerEvent::Pressed { pos: tap },
        PointerEvent::Released { pos: tap },
        PointerEvent::Pressed { pos: Vec2::new(picker.origin.x + 8.0, y) },
    ];
    let steps = 8;
    for i in 1..=steps {
        let x = picker.origin.x + picker.size.x * 1.1 * (i as f32 / steps as f32);
        events.push(PointerEvent::Moved { pos: Vec2::new(x, y) });
    }
    events.push(PointerEvent::Released { pos: Vec2::new(picker.max().x + 10.0, y) });
    events
}

fn hex(c: ColorRgba) -> String {
    let [r, g, b, a] = c.to_rgba8();
    format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
}
