// What you SEE:
// • A near-black card covers the window.
// • Move the mouse over it: a thick trail is scratched away, revealing the backdrop.
// • Moving fast still leaves a continuous trail.
// • Resizing the window repaints a fresh card. ESC quits.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use scratch_reveal::{
    Backdrop, Canvas, Dimensions, FrameBuffer, PointerMove, ResizeSignal, ScratchConfig,
    ScratchEvent, ScratchScene, compose_over,
    draw::{Drawer, draw_crosshair},
};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "scratch-reveal", version)]
struct Cli {
    /// Initial window width.
    #[arg(long, default_value_t = 960)]
    width: usize,

    /// Initial window height.
    #[arg(long, default_value_t = 640)]
    height: usize,

    /// JSON file with scratch settings (missing keys keep their defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Image revealed under the card (default: a gradient).
    #[arg(long)]
    backdrop: Option<PathBuf>,

    /// Override the stroke radius.
    #[arg(long)]
    stroke_radius: Option<f32>,

    /// Override pixels of movement per interpolated stamp.
    #[arg(long)]
    step_divisor: Option<f32>,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).with_target(false).init();
}

fn load_config(cli: &Cli) -> anyhow::Result<ScratchConfig> {
    let mut cfg = match &cli.config {
        Some(path) => ScratchConfig::from_json_file(path)?,
        None => ScratchConfig::default(),
    };
    if let Some(r) = cli.stroke_radius {
        cfg.stroke_radius = r;
    }
    if let Some(d) = cli.step_divisor {
        cfg.step_divisor = d;
    }
    cfg.validate().context("invalid scratch settings")?;
    Ok(cfg)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let backdrop = match &cli.backdrop {
        Some(path) => Backdrop::from_image_file(path)?,
        None => Backdrop::default(),
    };

    /* --- Window + scene setup ---
       Visual: window opens with the card painted over the whole client area. */
    let mut drawer = Drawer::new("Scratch Reveal", cli.width, cli.height)?;
    let signal = ResizeSignal::new();
    let mut scene = ScratchScene::mount(&signal, drawer.size(), Canvas::new(), config);
    info!(config = ?scene.engine().config(), "scratch scene mounted");

    let mut window_size = scene.dimensions();
    let mut backdrop_px = backdrop.render(Dimensions::UNMEASURED);
    let mut screen = FrameBuffer::default();
    let mut last_mouse: Option<(f32, f32)> = None;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Resize: the window is polled and every change is emitted. */
        let size = drawer.size();
        if size != window_size {
            window_size = size;
            signal.emit(size);
        }
        scene.sync();

        let dims = scene.engine().dimensions();
        if !dims.is_ready() {
            // Unmeasured: nothing to scratch yet, the window stays black.
            drawer.idle();
            continue;
        }
        if backdrop_px.dimensions() != dims {
            debug!(width = dims.width, height = dims.height, "re-rendering backdrop");
            backdrop_px = backdrop.render(dims);
            screen = FrameBuffer::new(dims.width as usize, dims.height as usize);
        }

        /* 2) Pointer: a move only when the position changed; leaving the window ends the stroke. */
        match drawer.mouse_pos() {
            Some((x, y)) if last_mouse != Some((x, y)) => {
                let (movement_x, movement_y) =
                    last_mouse.map_or((0.0, 0.0), |(px, py)| (x - px, y - py));
                scene.handle(&ScratchEvent::PointerMove(PointerMove {
                    client_x: x,
                    client_y: y,
                    movement_x,
                    movement_y,
                }));
                last_mouse = Some((x, y));
            }
            Some(_) => {}
            None => {
                if last_mouse.take().is_some() {
                    scene.handle(&ScratchEvent::PointerLeave);
                }
            }
        }

        /* 3) Present: card over backdrop, crosshair on top. */
        compose_over(&backdrop_px, scene.engine().surface().frame(), &mut screen)?;
        if let Some((x, y)) = last_mouse {
            draw_crosshair(&mut screen, x as i32, y as i32, 12, 0x00_FF_CC_33);
        }
        drawer.present(&screen)?;
    }

    Ok(())
}
