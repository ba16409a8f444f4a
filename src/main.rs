//! `drift` command-line simulator: draws a config into an in-memory
//! surface and runs the wobble engine on a virtual clock.

use std::path::Path;

use drift::engine::StageBuilder;
use drift::options::Config;
use drift::shapes::Sources;
use drift::surface::{MemorySurface, Surface};
use web_time::{Duration, Instant};

/// Wobble intervals simulated when no count is given.
const DEFAULT_TICKS: u32 = 10;

/// Frames rendered per wobble interval, so tweens advance between ticks.
const FRAMES_PER_TICK: u32 = 8;

/// Frames needed to cover `ticks` wobble intervals.
fn frame_count(ticks: u32) -> u32 {
    ticks.saturating_mul(FRAMES_PER_TICK)
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(config_path) = args.next() else {
        log::error!("Usage: drift <config.toml|config.json> [ticks]");
        std::process::exit(1);
    };
    let ticks = match args.next().map(|arg| arg.parse::<u32>()) {
        None => DEFAULT_TICKS,
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::error!("bad tick count: {e}");
            std::process::exit(1);
        }
    };

    let config = match Config::load(Path::new(&config_path)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("failed to load {config_path}: {e}");
            std::process::exit(1);
        }
    };
    let interval = Duration::from_millis(config.render_config.wobble_interval_ms);

    let start = Instant::now();
    let mut stage = StageBuilder::new(config)
        .sources(Sources::builtin())
        .on_drawn(|| log::info!("illustrations drawn"))
        .build(MemorySurface::new(), start);
    for skipped in stage.skipped() {
        log::warn!("skipped: {skipped}");
    }

    // Virtual clock: no sleeping, just step time forward.
    let step = interval / FRAMES_PER_TICK;
    let mut now = start;
    let mut started = 0;
    for _ in 0..frame_count(ticks) {
        now += step;
        started += stage.frame(now, true).started;
    }
    log::info!(
        "{ticks} intervals simulated, {started} tweens started, {} still running",
        stage.tweens_in_flight()
    );

    let surface = stage.surface();
    for element in stage.registry().elements() {
        let transform = surface.transform(element.node);
        log::info!(
            "{:<16} translation ({:8.2}, {:8.2})  bbox {:?}",
            element.name.as_deref().unwrap_or("<unnamed>"),
            transform.translation.x,
            transform.translation.y,
            surface.bbox(element.node)
        );
    }
}
