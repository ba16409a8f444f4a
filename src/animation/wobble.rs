//! The wobble engine: per-tick idle motion for every registered element.

use rand::Rng;
use rustc_hash::FxHashMap;
use web_time::Instant;

use super::delta::calculate_anim;
use super::overflow::reset_if_overflowed;
use super::runner::Tween;
use crate::options::{find_entry, AnimSettings, CanvasOptions, IllustrationEntry};
use crate::scene::{AnimState, AnimTarget, ElementRegistry};
use crate::surface::Surface;

/// Drives idle motion for the elements of an [`ElementRegistry`].
///
/// Animation settings are resolved once, keyed by logical element name.
/// Each target (an element, or each atom of a composite element) moves
/// between [`AnimState::Idle`] and [`AnimState::Animating`]; a tween is
/// only ever started from `Idle`, so no target runs two tweens at once.
#[derive(Debug, Clone)]
pub struct WobbleEngine {
    canvas: CanvasOptions,
    /// `None` marks an entry whose animation is disabled.
    animations: FxHashMap<String, Option<AnimSettings>>,
    tweens: Vec<Tween>,
    verbose: bool,
}

impl WobbleEngine {
    /// Resolve the animation settings of every named entry over
    /// `defaults`. When names collide the first entry wins.
    #[must_use]
    pub fn new(
        canvas: CanvasOptions,
        entries: &[IllustrationEntry],
        defaults: &AnimSettings,
        verbose: bool,
    ) -> Self {
        let mut animations: FxHashMap<String, Option<AnimSettings>> =
            FxHashMap::default();
        // Each name resolves once, from the first entry carrying it.
        for name in entries.iter().filter_map(|e| e.name.as_deref()) {
            if animations.contains_key(name) {
                continue;
            }
            let settings = find_entry(entries, name)
                .map_or(Ok(None), |entry| entry.resolve_animation(defaults))
                .unwrap_or_else(|e| {
                    if verbose {
                        log::warn!("'{name}': bad animation settings ({e}), disabled");
                    }
                    None
                });
            let _ = animations.insert(name.to_owned(), settings);
        }
        Self {
            canvas,
            animations,
            tweens: Vec::new(),
            verbose,
        }
    }

    /// Animation settings linked to `name`. The outer `None` means no entry
    /// has that name, the inner one that its animation is disabled.
    #[must_use]
    pub fn settings_for(&self, name: &str) -> Option<Option<&AnimSettings>> {
        self.animations.get(name).map(Option::as_ref)
    }

    /// Number of tweens in flight.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.tweens.len()
    }

    /// Run one wobble tick. Returns how many tweens were started.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        surface: &mut dyn Surface,
        registry: &mut ElementRegistry,
        now: Instant,
        rng: &mut R,
    ) -> usize {
        let mut started = 0;
        for element in 0..registry.len() {
            let Some(name) = registry.get(element).and_then(|e| e.name.as_deref())
            else {
                continue;
            };
            let settings = match self.animations.get(name) {
                Some(Some(settings)) => settings,
                Some(None) => continue,
                None => {
                    if self.verbose {
                        log::warn!("no config entry for drawn element '{name}'");
                    }
                    continue;
                }
            };

            for target in registry.targets(element) {
                if registry.state(target) != Some(AnimState::Idle) {
                    continue;
                }
                let Some(node) = registry.node(target) else {
                    continue;
                };
                if settings.re_enter
                    && reset_if_overflowed(
                        surface,
                        node,
                        &self.canvas,
                        settings.negative_buffer_space,
                    )
                {
                    continue;
                }
                let Some(delta) = calculate_anim(settings, rng) else {
                    continue;
                };
                if !registry.set_state(target, AnimState::Animating) {
                    continue;
                }
                let from = surface.transform(node);
                self.tweens.push(Tween::new(
                    target,
                    node,
                    (from, delta.apply(from)),
                    delta.duration,
                    settings.easing_curve,
                    now,
                ));
                started += 1;
            }
        }
        if self.verbose && started > 0 {
            log::debug!("wobble tick started {started} tweens");
        }
        started
    }

    /// Move every tween to `now`. Finished tweens land exactly on their
    /// target and return their target to `Idle`. Returns how many
    /// finished.
    pub fn advance(
        &mut self,
        surface: &mut dyn Surface,
        registry: &mut ElementRegistry,
        now: Instant,
    ) -> usize {
        let before = self.tweens.len();
        self.tweens.retain(|tween| {
            if tween.is_complete(now) {
                surface.set_transform(tween.node, tween.destination());
                let _ = registry.set_state(tween.target, AnimState::Idle);
                false
            } else {
                surface.set_transform(tween.node, tween.sample(now));
                true
            }
        });
        before - self.tweens.len()
    }

    /// Whether `target` has a tween in flight.
    #[must_use]
    pub fn is_tweening(&self, target: AnimTarget) -> bool {
        self.tweens.iter().any(|t| t.target == target)
    }
}

#[cfg(test)]
mod tests {
    use glam::{Affine2, Vec2};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;
    use web_time::Duration;

    use super::*;
    use crate::scene::DrawnElement;
    use crate::surface::{MemorySurface, NodeId, Paint};

    fn always_moving() -> AnimSettings {
        AnimSettings {
            restlessness: 2.0,
            ..AnimSettings::default()
        }
    }

    fn entries(value: serde_json::Value) -> Vec<IllustrationEntry> {
        serde_json::from_value(value).unwrap()
    }

    fn square(surface: &mut MemorySurface, x: f32, y: f32) -> NodeId {
        let node = surface
            .path("M0 0 h10 v10 h-10 z", &Paint::Color("#000".to_owned()))
            .unwrap();
        surface.set_transform(node, Affine2::from_translation(Vec2::new(x, y)));
        node
    }

    fn element(node: NodeId, name: &str) -> DrawnElement {
        DrawnElement::new(node, Some(name.to_owned()))
    }

    #[test]
    fn never_restarts_an_animating_target() {
        let mut surface = MemorySurface::new();
        let mut registry = ElementRegistry::new();
        let node = square(&mut surface, 500.0, 300.0);
        let _ = registry.register(element(node, "a"));
        let mut engine = WobbleEngine::new(
            CanvasOptions::default(),
            &entries(json!([{ "type": "raw", "name": "a" }])),
            &always_moving(),
            false,
        );
        let mut rng = StdRng::seed_from_u64(7);
        let start = Instant::now();

        assert_eq!(engine.tick(&mut surface, &mut registry, start, &mut rng), 1);
        for i in 1..20 {
            let now = start + Duration::from_millis(i);
            assert_eq!(engine.tick(&mut surface, &mut registry, now, &mut rng), 0);
            assert_eq!(engine.in_flight(), 1);
        }
        assert_eq!(registry.animating_count(), 1);
    }

    #[test]
    fn finished_tween_returns_to_idle() {
        let mut surface = MemorySurface::new();
        let mut registry = ElementRegistry::new();
        let node = square(&mut surface, 500.0, 300.0);
        let index = registry.register(element(node, "a"));
        let target = AnimTarget { element: index, atom: None };
        let mut engine = WobbleEngine::new(
            CanvasOptions::default(),
            &entries(json!([{ "type": "raw", "name": "a" }])),
            &always_moving(),
            false,
        );
        let mut rng = StdRng::seed_from_u64(3);
        let start = Instant::now();
        assert_eq!(engine.tick(&mut surface, &mut registry, start, &mut rng), 1);
        assert!(engine.is_tweening(target));

        // speedFactor 7 caps a tween at 4.9s.
        let later = start + Duration::from_secs(5);
        assert_eq!(engine.advance(&mut surface, &mut registry, later), 1);
        assert_eq!(registry.state(target), Some(AnimState::Idle));
        assert_eq!(engine.in_flight(), 0);
        assert_eq!(engine.tick(&mut surface, &mut registry, later, &mut rng), 1);
    }

    #[test]
    fn disabled_animation_stays_idle() {
        let mut surface = MemorySurface::new();
        let mut registry = ElementRegistry::new();
        let node = square(&mut surface, 500.0, 300.0);
        let index = registry.register(element(node, "still"));
        let mut engine = WobbleEngine::new(
            CanvasOptions::default(),
            &entries(json!([{ "type": "raw", "name": "still", "animation": false }])),
            &always_moving(),
            false,
        );
        assert_eq!(engine.settings_for("still"), Some(None));
        let mut rng = StdRng::seed_from_u64(1);
        let start = Instant::now();
        for i in 0..100 {
            let now = start + Duration::from_secs(i);
            let _ = engine.advance(&mut surface, &mut registry, now);
            assert_eq!(engine.tick(&mut surface, &mut registry, now, &mut rng), 0);
            let target = AnimTarget { element: index, atom: None };
            assert_eq!(registry.state(target), Some(AnimState::Idle));
        }
        assert_eq!(surface.transform(node).translation, Vec2::new(500.0, 300.0));
    }

    #[test]
    fn unknown_names_are_skipped_not_dropped() {
        let mut surface = MemorySurface::new();
        let mut registry = ElementRegistry::new();
        let node = square(&mut surface, 0.0, 0.0);
        let _ = registry.register(element(node, "orphan"));
        let mut engine = WobbleEngine::new(
            CanvasOptions::default(),
            &[],
            &always_moving(),
            false,
        );
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(engine.tick(&mut surface, &mut registry, Instant::now(), &mut rng), 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn atoms_animate_independently() {
        let mut surface = MemorySurface::new();
        let mut registry = ElementRegistry::new();
        let a = square(&mut surface, 0.0, 0.0);
        let b = square(&mut surface, 20.0, 0.0);
        let group = surface.group(&[a, b]);
        surface.set_transform(group, Affine2::from_translation(Vec2::new(400.0, 400.0)));
        let index = registry.register(DrawnElement::with_atoms(
            group,
            Some("pair".to_owned()),
            [a, b],
        ));
        let mut engine = WobbleEngine::new(
            CanvasOptions::default(),
            &entries(json!([{ "type": "cluster", "name": "pair" }])),
            &always_moving(),
            false,
        );
        let mut rng = StdRng::seed_from_u64(11);
        let start = Instant::now();
        assert_eq!(engine.tick(&mut surface, &mut registry, start, &mut rng), 2);
        assert!(engine.is_tweening(AnimTarget { element: index, atom: Some(0) }));
        assert!(engine.is_tweening(AnimTarget { element: index, atom: Some(1) }));
        // The group itself never animates.
        let whole = AnimTarget { element: index, atom: None };
        assert_eq!(registry.state(whole), Some(AnimState::Idle));
        assert_eq!(surface.transform(group).translation, Vec2::new(400.0, 400.0));
    }

    #[test]
    fn overflowed_element_is_reset_instead_of_animated() {
        let mut surface = MemorySurface::new();
        let mut registry = ElementRegistry::new();
        let node = square(&mut surface, 1500.0, 300.0);
        let _ = registry.register(element(node, "runaway"));
        let defaults = AnimSettings {
            re_enter: true,
            ..always_moving()
        };
        let mut engine = WobbleEngine::new(
            CanvasOptions::default(),
            &entries(json!([{ "type": "raw", "name": "runaway" }])),
            &defaults,
            false,
        );
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(engine.tick(&mut surface, &mut registry, Instant::now(), &mut rng), 0);
        assert_eq!(surface.transform(node).translation, Vec2::new(-20.0, 0.0));
    }

    #[test]
    fn first_entry_wins_on_name_collision() {
        let engine = WobbleEngine::new(
            CanvasOptions::default(),
            &entries(json!([
                { "type": "raw", "name": "dup", "animation": { "intensity": 3 } },
                { "type": "raw", "name": "dup", "animation": false }
            ])),
            &AnimSettings::default(),
            false,
        );
        let settings = engine.settings_for("dup").flatten().unwrap();
        assert_eq!(settings.intensity, 3.0);
    }

    /// One tick over the same four elements registered in `order`,
    /// reported sorted by name as (name, state, translation).
    fn tick_in_order(order: &[&str]) -> Vec<(String, AnimState, Vec2)> {
        let config = entries(json!([
            { "type": "raw", "name": "moving" },
            { "type": "raw", "name": "still", "animation": { "restlessness": 0 } },
            { "type": "raw", "name": "runaway", "animation": { "reEnter": true } },
            { "type": "raw", "name": "off", "animation": false }
        ]));
        let mut surface = MemorySurface::new();
        let mut registry = ElementRegistry::new();
        for &name in order {
            let x = if name == "runaway" { 1500.0 } else { 400.0 };
            let node = square(&mut surface, x, 300.0);
            let _ = registry.register(element(node, name));
        }
        let mut engine =
            WobbleEngine::new(CanvasOptions::default(), &config, &always_moving(), false);
        let mut rng = StdRng::seed_from_u64(21);
        let _ = engine.tick(&mut surface, &mut registry, Instant::now(), &mut rng);

        let mut outcome: Vec<_> = registry
            .elements()
            .iter()
            .map(|e| {
                (
                    e.name.clone().unwrap_or_default(),
                    e.state,
                    surface.transform(e.node).translation,
                )
            })
            .collect();
        outcome.sort_by(|a, b| a.0.cmp(&b.0));
        outcome
    }

    #[test]
    fn outcome_does_not_depend_on_registry_order() {
        let forward = tick_in_order(&["moving", "still", "runaway", "off"]);
        let backward = tick_in_order(&["off", "runaway", "still", "moving"]);
        let shuffled = tick_in_order(&["still", "off", "moving", "runaway"]);
        assert_eq!(forward, backward);
        assert_eq!(forward, shuffled);

        let outcome = |name: &str| {
            forward
                .iter()
                .find(|o| o.0 == name)
                .map(|o| (o.1, o.2))
                .unwrap()
        };
        assert_eq!(outcome("moving").0, AnimState::Animating);
        assert_eq!(outcome("still"), (AnimState::Idle, Vec2::new(400.0, 300.0)));
        assert_eq!(outcome("off"), (AnimState::Idle, Vec2::new(400.0, 300.0)));
        assert_eq!(outcome("runaway"), (AnimState::Idle, Vec2::new(-20.0, 0.0)));
    }
}
