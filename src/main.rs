use billiard_simulation::{Ball, FrameLoop, Renderer, SceneConfig, Vector2, Viewport, WorldSize};

use anyhow::{Context, Result};
use clap::Parser;

use std::path::PathBuf;

/// Headless billiard simulation. Runs a fixed number of frames and logs the
/// state of the scene as it goes. Set `RUST_LOG=info` (or `debug`) to see output.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// YAML scene file. Overrides the ball and world options below.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, default_value_t = 20)]
    balls: usize,

    #[arg(long, default_value_t = 20.0)]
    width: f64,

    #[arg(long, default_value_t = 20.0)]
    height: f64,

    /// Seed for ball placement; random when omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short, long, default_value_t = 600)]
    frames: usize,

    /// Log a summary every this many frames.
    #[arg(long, default_value_t = 60)]
    report_every: usize,

    /// Integrate on the rayon thread pool.
    #[arg(long)]
    parallel: bool,

    /// Start paused. Frames are still drawn but nothing moves.
    #[arg(long)]
    paused: bool,
}

/// Stands in for a canvas: logs energy and momentum instead of drawing.
struct LogRenderer {
    report_every: usize,
    frame: usize,
}

impl Renderer for LogRenderer {
    fn draw(&mut self, balls: &[Ball], viewport: &Viewport) {
        self.frame += 1;
        if self.report_every == 0 || self.frame % self.report_every != 0 {
            return;
        }

        let energy: f64 = balls.iter().map(Ball::kinetic_energy).sum();
        let momentum = balls.iter().fold(Vector2::zero(), |acc, b| acc + b.momentum());
        log::info!(
            "frame {:>6}: {} balls, kinetic energy {:.4}, momentum ({:.4}, {:.4})",
            self.frame,
            balls.len(),
            energy,
            momentum.x,
            momentum.y
        );

        for (i, ball) in balls.iter().enumerate() {
            log::trace!(
                "  ball {i}: screen ({:.1}, {:.1}) r {:.1}",
                viewport.world_to_screen_x(ball.position),
                viewport.world_to_screen_y(ball.position),
                viewport.radius_to_screen(ball.radius)
            );
        }
    }
}

fn load_config(args: &Args) -> Result<SceneConfig> {
    match &args.config {
        Some(path) => SceneConfig::from_path(path)
            .with_context(|| format!("failed to load scene from {}", path.display())),
        None => Ok(SceneConfig::random(
            WorldSize::new(args.width, args.height),
            args.balls,
            args.seed,
        )),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(&args)?;
    let mut scene = config.build().context("invalid scene")?;
    scene.set_use_rayon(args.parallel);
    if args.paused {
        scene.set_paused(true);
    }

    let world = scene.world_size;
    // shorter side of the virtual canvas is 800 px
    let scale = 800.0 / world.width.min(world.height);
    let viewport = Viewport::fit(
        world.width * scale,
        world.height * scale,
        world.width.min(world.height),
    );

    let renderer = LogRenderer {
        report_every: args.report_every,
        frame: 0,
    };
    let mut frame_loop = FrameLoop::new(viewport, renderer);

    log::info!(
        "running {} frames of {} balls (dt {:.5}, paused: {})",
        args.frames,
        scene.balls.len(),
        scene.dt,
        scene.paused
    );
    frame_loop.run_fixed(&mut scene, args.frames);
    log::info!(
        "done after {} steps, kinetic energy {:.4}",
        scene.frame,
        scene.kinetic_energy()
    );

    Ok(())
}
