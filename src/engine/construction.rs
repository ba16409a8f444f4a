//! Free functions that draw the configured illustrations.

use rand::Rng;

use crate::error::DriftError;
use crate::options::{Config, IllustrationEntry, ObjectSettings};
use crate::scene::{DrawnElement, ElementRegistry, PlacementGenerator};
use crate::shapes::{build_raw, ElementSettings, Sources};
use crate::surface::{BBox, NodeId, Paint, Surface};

/// Everything the drawing pass produced.
pub(super) struct Drawn {
    pub registry: ElementRegistry,
    pub background: Option<NodeId>,
    pub illustrations: NodeId,
    pub skipped: Vec<DriftError>,
}

/// Draw the full-canvas background rect, if one is configured.
pub(super) fn draw_background(
    surface: &mut dyn Surface,
    config: &Config,
) -> Result<Option<NodeId>, DriftError> {
    let Some(fill) = config.render_config.background.fill() else {
        return Ok(None);
    };
    if config.debug.verbose {
        log::debug!("drawing background [{fill}]");
    }
    let paint = Paint::resolve(surface, fill)?;
    let bounds = BBox::new(0.0, 0.0, config.canvas.width, config.canvas.height);
    Ok(Some(surface.rect(bounds, &paint)))
}

/// Resolve placement, fill and scale for one entry. Animation settings
/// are resolved by name in the wobble engine.
///
/// The placement is drawn first so every entry consumes the same amount of
/// randomness whether or not it ends up drawn.
pub(super) fn resolve_settings<R: Rng + ?Sized>(
    surface: &mut dyn Surface,
    entry: &IllustrationEntry,
    defaults: &ObjectSettings,
    placement: &PlacementGenerator,
    rng: &mut R,
) -> Result<ElementSettings, DriftError> {
    let placement = placement.resolve_random(entry.position.as_ref(), rng);
    // An empty fill counts as unset.
    let fill = entry
        .background
        .as_deref()
        .filter(|fill| !fill.is_empty())
        .unwrap_or(&defaults.background);
    Ok(ElementSettings {
        placement,
        fill: Paint::resolve(surface, fill)?,
        em: entry.em.unwrap_or(defaults.em),
    })
}

/// Draw one entry and wrap it as a registry element.
pub(super) fn draw_entry(
    surface: &mut dyn Surface,
    entry: &IllustrationEntry,
    settings: &ElementSettings,
    sources: Option<&Sources>,
) -> Result<DrawnElement, DriftError> {
    let name = entry.name.clone();
    let Some(kind) = entry.kind.as_deref() else {
        return Err(missing("type", entry));
    };

    if entry.is_raw() {
        let path = entry.path.as_deref().ok_or_else(|| missing("path", entry))?;
        if name.is_none() {
            return Err(missing("name", entry));
        }
        let node = build_raw(surface, path, settings)?;
        return Ok(DrawnElement::new(node, name));
    }

    let sources = sources.ok_or_else(|| {
        DriftError::MissingCollaborator(format!("no sources for type '{kind}'"))
    })?;
    let constructor = sources
        .shapes
        .get(kind)
        .ok_or_else(|| DriftError::UnknownShape(kind.to_owned()))?;
    let shape = constructor.build(
        surface,
        settings,
        name.as_deref().unwrap_or_default(),
        &sources.atoms,
    )?;
    Ok(if shape.has_atoms {
        DrawnElement::with_atoms(shape.node, name, surface.children(shape.node))
    } else {
        DrawnElement::new(shape.node, name)
    })
}

fn missing(field: &'static str, entry: &IllustrationEntry) -> DriftError {
    DriftError::MissingField {
        field,
        name: entry.name.clone().unwrap_or_default(),
    }
}

/// Draw the background and every entry, last to first, then gather the
/// drawn elements into one group. Failed entries are skipped.
pub(super) fn draw_all<R: Rng + ?Sized>(
    surface: &mut dyn Surface,
    config: &Config,
    sources: Option<&Sources>,
    rng: &mut R,
) -> Drawn {
    let verbose = config.debug.verbose;
    let mut skipped = Vec::new();

    let background = draw_background(surface, config).unwrap_or_else(|e| {
        if verbose {
            log::warn!("background not drawn: {e}");
        }
        skipped.push(e);
        None
    });

    let defaults = &config.render_config.default_object_settings;
    let placement = PlacementGenerator::for_canvas(&config.canvas);
    let mut registry = ElementRegistry::new();
    let mut nodes = Vec::with_capacity(config.illu_config.len());

    for entry in config.illu_config.iter().rev() {
        let drawn = resolve_settings(surface, entry, defaults, &placement, rng)
            .and_then(|settings| draw_entry(surface, entry, &settings, sources));
        match drawn {
            Ok(element) => {
                if verbose {
                    match element.name.as_deref() {
                        Some(name) => log::debug!(
                            "drew '{name}' ({} atoms)",
                            element.atoms.len()
                        ),
                        None => log::debug!("drew an unnamed element, it will not animate"),
                    }
                }
                nodes.push(element.node);
                let _ = registry.register(element);
            }
            Err(e) => {
                if verbose {
                    log::warn!("skipping illustration: {e}");
                }
                skipped.push(e);
            }
        }
    }

    let illustrations = surface.group(&nodes);
    Drawn {
        registry,
        background,
        illustrations,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    use super::*;
    use crate::surface::MemorySurface;

    fn entry(value: serde_json::Value) -> IllustrationEntry {
        serde_json::from_value(value).unwrap()
    }

    fn settings(surface: &mut MemorySurface, e: &IllustrationEntry) -> ElementSettings {
        let placement = PlacementGenerator::new(1000.0, 750.0, 100.0);
        resolve_settings(
            surface,
            e,
            &ObjectSettings::default(),
            &placement,
            &mut StdRng::seed_from_u64(0),
        )
        .unwrap()
    }

    #[test]
    fn entry_values_override_object_defaults() {
        let mut surface = MemorySurface::new();
        let e = entry(json!({
            "type": "raw", "name": "a", "path": "M0 0h1v1z",
            "position": { "x": 1, "y": 2, "r": 3 },
            "background": "#f00", "em": 2.5
        }));
        let s = settings(&mut surface, &e);
        assert_eq!((s.placement.x, s.placement.y, s.placement.r), (1.0, 2.0, 3.0));
        assert_eq!(s.fill, Paint::Color("#f00".to_owned()));
        assert_eq!(s.em, 2.5);
    }

    #[test]
    fn gradient_fill_goes_through_the_surface() {
        let mut surface = MemorySurface::new();
        let e = entry(json!({ "type": "raw", "name": "a", "background": "l(0, 0, 1, 1)#fff-#000" }));
        let s = settings(&mut surface, &e);
        assert_eq!(s.fill, Paint::Gradient(0));
    }

    #[test]
    fn empty_background_falls_back_to_default_fill() {
        let mut surface = MemorySurface::new();
        let e = entry(json!({ "type": "raw", "name": "a", "background": "" }));
        let s = settings(&mut surface, &e);
        assert_eq!(s.fill, Paint::Color("#000".to_owned()));
    }

    #[test]
    fn raw_entries_need_path_and_name() {
        let mut surface = MemorySurface::new();
        for (value, field) in [
            (json!({ "type": "raw", "name": "a" }), "path"),
            (json!({ "type": "raw", "path": "M0 0h1v1z" }), "name"),
            (json!({ "name": "a", "path": "M0 0h1v1z" }), "type"),
        ] {
            let e = entry(value);
            let s = settings(&mut surface, &e);
            let err = draw_entry(&mut surface, &e, &s, None).unwrap_err();
            assert!(
                matches!(err, DriftError::MissingField { field: f, .. } if f == field),
                "{err}"
            );
        }
    }

    #[test]
    fn named_types_need_sources() {
        let mut surface = MemorySurface::new();
        let e = entry(json!({ "type": "cluster", "name": "c" }));
        let s = settings(&mut surface, &e);
        assert!(matches!(
            draw_entry(&mut surface, &e, &s, None),
            Err(DriftError::MissingCollaborator(_))
        ));
        let sources = Sources::builtin();
        let e = entry(json!({ "type": "blob", "name": "b" }));
        assert!(matches!(
            draw_entry(&mut surface, &e, &s, Some(&sources)),
            Err(DriftError::UnknownShape(kind)) if kind == "blob"
        ));
    }

    #[test]
    fn composite_shapes_register_their_atoms() {
        let mut surface = MemorySurface::new();
        let e = entry(json!({ "type": "cluster", "name": "c" }));
        let s = settings(&mut surface, &e);
        let element =
            draw_entry(&mut surface, &e, &s, Some(&Sources::builtin())).unwrap();
        assert!(element.has_atoms);
        assert_eq!(element.atoms.len(), 5);
    }
}
