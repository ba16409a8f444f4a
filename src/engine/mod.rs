//! The [`Stage`]: draws a configured set of illustrations and keeps them
//! moving.
//!
//! A stage is built once from a [`Config`]. Construction draws the
//! background and every illustration, fires the optional completion
//! callback, and arms the wobble timer when `renderConfig.wobble` is set.
//! The host then calls [`Stage::frame`] from its own loop, passing the
//! current time and whether its display is active.

mod construction;

use rand::rngs::StdRng;
use rand::SeedableRng;
use web_time::{Duration, Instant};

use crate::animation::WobbleEngine;
use crate::error::DriftError;
use crate::options::Config;
use crate::scene::ElementRegistry;
use crate::shapes::Sources;
use crate::surface::{NodeId, Surface};
use crate::util::tick_timer::TickTimer;

/// What one [`Stage::frame`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Whether a wobble tick ran.
    pub ticked: bool,
    /// Tweens started by that tick.
    pub started: usize,
    /// Tweens that reached their target.
    pub completed: usize,
}

/// Configures and draws a [`Stage`].
pub struct StageBuilder {
    config: Config,
    sources: Option<Sources>,
    rng: Option<StdRng>,
    on_drawn: Option<Box<dyn FnOnce()>>,
}

impl StageBuilder {
    /// Start configuring a stage for `config`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            sources: None,
            rng: None,
            on_drawn: None,
        }
    }

    /// Constructor registries for non-raw entries. Without them only raw
    /// entries are drawn.
    #[must_use]
    pub fn sources(mut self, sources: Sources) -> Self {
        self.sources = Some(sources);
        self
    }

    /// Seed the placement and wobble RNG for reproducible runs.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = Some(StdRng::seed_from_u64(seed));
        self
    }

    /// Called once, after every illustration is drawn and before the
    /// wobble timer starts.
    #[must_use]
    pub fn on_drawn(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_drawn = Some(Box::new(callback));
        self
    }

    /// Draw everything onto `surface`. `start` anchors the wobble timer.
    pub fn build<S: Surface>(self, mut surface: S, start: Instant) -> Stage<S> {
        let Self {
            config,
            sources,
            rng,
            on_drawn,
        } = self;
        let mut rng = rng.unwrap_or_else(StdRng::from_os_rng);
        let verbose = config.debug.verbose;

        let drawn =
            construction::draw_all(&mut surface, &config, sources.as_ref(), &mut rng);
        if verbose {
            log::info!(
                "stage drawn: {} elements, {} skipped",
                drawn.registry.len(),
                drawn.skipped.len()
            );
        }

        if let Some(callback) = on_drawn {
            callback();
        }

        let render = &config.render_config;
        let wobble = render.wobble.then(|| {
            let engine = WobbleEngine::new(
                config.canvas.clone(),
                &config.illu_config,
                &render.default_object_settings.animation,
                verbose,
            );
            let interval = Duration::from_millis(render.wobble_interval_ms);
            if verbose {
                log::info!("wobble armed every {interval:?}");
            }
            (engine, TickTimer::new(interval, start))
        });

        Stage {
            config,
            surface,
            registry: drawn.registry,
            wobble,
            rng,
            background: drawn.background,
            illustrations: drawn.illustrations,
            skipped: drawn.skipped,
        }
    }
}

/// Drawn illustrations plus the machinery that animates them.
pub struct Stage<S: Surface> {
    config: Config,
    surface: S,
    registry: ElementRegistry,
    /// Present only when wobble is enabled.
    wobble: Option<(WobbleEngine, TickTimer)>,
    rng: StdRng,
    background: Option<NodeId>,
    illustrations: NodeId,
    skipped: Vec<DriftError>,
}

impl<S: Surface> Stage<S> {
    /// Draw a stage with an OS-seeded RNG and no completion callback.
    pub fn new(config: Config, surface: S, sources: Sources, start: Instant) -> Self {
        StageBuilder::new(config).sources(sources).build(surface, start)
    }

    /// Advance in-flight tweens to `now`, then run a wobble tick if one is
    /// due and the host is `active`. Ticks that fall due while inactive are
    /// dropped.
    pub fn frame(&mut self, now: Instant, active: bool) -> FrameStats {
        let Some((engine, timer)) = self.wobble.as_mut() else {
            return FrameStats::default();
        };
        let completed = engine.advance(&mut self.surface, &mut self.registry, now);
        let ticked = timer.poll(now, active);
        let started = if ticked {
            engine.tick(&mut self.surface, &mut self.registry, now, &mut self.rng)
        } else {
            0
        };
        FrameStats {
            ticked,
            started,
            completed,
        }
    }

    /// Run a wobble tick right away, bypassing the timer. Returns the
    /// number of tweens started, zero when wobble is disabled.
    pub fn wobble_tick(&mut self, now: Instant) -> usize {
        match self.wobble.as_mut() {
            Some((engine, _)) => {
                engine.tick(&mut self.surface, &mut self.registry, now, &mut self.rng)
            }
            None => 0,
        }
    }

    /// Whether the wobble timer is armed.
    #[must_use]
    pub fn is_wobbling(&self) -> bool {
        self.wobble.is_some()
    }

    /// Tweens currently running.
    #[must_use]
    pub fn tweens_in_flight(&self) -> usize {
        self.wobble.as_ref().map_or(0, |(engine, _)| engine.in_flight())
    }

    /// The configuration the stage was built from.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Drawn elements and their animation state.
    #[must_use]
    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    /// The surface everything is drawn on.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Background rect, when one was drawn.
    #[must_use]
    pub fn background(&self) -> Option<NodeId> {
        self.background
    }

    /// Group holding every drawn illustration.
    #[must_use]
    pub fn illustrations(&self) -> NodeId {
        self.illustrations
    }

    /// Why entries were not drawn, in draw order.
    #[must_use]
    pub fn skipped(&self) -> &[DriftError] {
        &self.skipped
    }

    /// Hand back the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
