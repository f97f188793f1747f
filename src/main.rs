//! Headless host loop: ticks a scene at a fixed frame rate and logs what a
//! renderer would draw.
//!
//! Usage: `helix-scene [CONFIG.toml] [FRAMES] [FPS]`

use std::path::Path;
use std::str::FromStr;

use helix_scene::engine::{init_scene, RenderState};
use helix_scene::error::SceneError;
use helix_scene::options::SceneConfig;
use helix_scene::util::frame_timing::FrameTiming;

const DEFAULT_FRAMES: u64 = 300;
const DEFAULT_FPS: u32 = 60;

fn load_config(arg: Option<&str>) -> Result<SceneConfig, SceneError> {
    match arg {
        Some(path) => {
            log::info!("loading scene config from {path}");
            SceneConfig::load(Path::new(path))
        }
        None => Ok(SceneConfig::default()),
    }
}

/// Positional argument `index`, or `default` when absent. A value that
/// does not parse is an error rather than a silent fallback.
fn parse_arg<T: FromStr>(
    args: &[String],
    index: usize,
    name: &str,
    default: T,
) -> Result<T, SceneError> {
    args.get(index).map_or(Ok(default), |raw| {
        raw.parse().map_err(|_| {
            SceneError::Parse(format!("{name} must be a number, got `{raw}`"))
        })
    })
}

fn log_frame(state: &RenderState) {
    log::info!(
        "frame {:>5} t={:>7.3}s camera=({:.2}, {:.2}, {:.2}) root.y={:.3} \
         digest={:016x}",
        state.frame,
        state.elapsed,
        state.camera.position.x,
        state.camera.position.y,
        state.camera.position.z,
        state.root.rotation.y,
        state.digest()
    );
}

fn run() -> Result<(), SceneError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config(args.first().map(String::as_str))?;
    let frames = parse_arg(&args, 1, "FRAMES", DEFAULT_FRAMES)?;
    let fps = parse_arg(&args, 2, "FPS", DEFAULT_FPS)?;

    let mut scene = init_scene(&config)?;
    let log_every = u64::from(fps.max(1));
    scene.set_frame_listener(move |state| {
        if state.frame % log_every == 1 {
            log_frame(state);
        }
    })?;

    let mut timing = FrameTiming::new(fps);
    for frame in 0..frames {
        // Scroll through the page once over the run.
        scene.set_scroll_progress(frame as f32 / frames.max(1) as f32)?;
        scene.tick(timing.elapsed_secs())?;
        timing.end_frame();
        std::thread::sleep(timing.until_next_frame());
    }

    let last = scene.render_state()?;
    log::info!(
        "ran {} frames in {:.2}s ({:.1} fps), {} bodies, {} particles",
        last.frame,
        last.elapsed,
        timing.fps(),
        last.bodies.len(),
        last.particles.len()
    );
    scene.dispose()
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
