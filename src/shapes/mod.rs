//! Typed constructor registries for named illustration types.
//!
//! A config entry whose `type` is not `raw` is drawn by the
//! [`ShapeConstructor`] registered under that name. Composite shapes build
//! their sub-elements through the companion [`AtomRegistry`]. Both
//! registries are supplied by the host as [`Sources`] at setup time.

mod builtin;

use std::fmt;

use glam::{Affine2, Vec2};
use rustc_hash::FxHashMap;

pub use builtin::{Cluster, PolygonAtom};

use crate::error::DriftError;
use crate::scene::Placement;
use crate::surface::{NodeId, Paint, Surface};

/// Fully resolved settings for one element (or atom).
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSettings {
    /// Position and rotation.
    pub placement: Placement,
    /// Fill.
    pub fill: Paint,
    /// Scale unit.
    pub em: f32,
}

impl ElementSettings {
    /// Settings for a sub-element, placed relative to its parent.
    #[must_use]
    pub fn for_atom(fill: Paint, em: f32, x: f32, y: f32, r: f32) -> Self {
        Self {
            placement: Placement { x, y, r },
            fill,
            em,
        }
    }

    /// Initial transform: translate, rotate (degrees), then scale by `em`.
    #[must_use]
    pub fn transform(&self) -> Affine2 {
        let Placement { x, y, r } = self.placement;
        Affine2::from_translation(Vec2::new(x, y))
            * Affine2::from_angle(r.to_radians())
            * Affine2::from_scale(Vec2::splat(self.em))
    }
}

/// Result of a shape constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawnShape {
    /// Root node of the shape.
    pub node: NodeId,
    /// Whether the root's children animate independently.
    pub has_atoms: bool,
}

/// Builds a full illustration.
pub trait ShapeConstructor {
    /// Draw the shape on `surface`.
    fn build(
        &self,
        surface: &mut dyn Surface,
        settings: &ElementSettings,
        name: &str,
        atoms: &AtomRegistry,
    ) -> Result<DrawnShape, DriftError>;
}

impl<F> ShapeConstructor for F
where
    F: Fn(
        &mut dyn Surface,
        &ElementSettings,
        &str,
        &AtomRegistry,
    ) -> Result<DrawnShape, DriftError>,
{
    fn build(
        &self,
        surface: &mut dyn Surface,
        settings: &ElementSettings,
        name: &str,
        atoms: &AtomRegistry,
    ) -> Result<DrawnShape, DriftError> {
        self(surface, settings, name, atoms)
    }
}

/// Builds one sub-element of a composite illustration.
pub trait AtomConstructor {
    /// Draw the atom on `surface`.
    fn build(
        &self,
        surface: &mut dyn Surface,
        settings: &ElementSettings,
    ) -> Result<NodeId, DriftError>;
}

impl<F> AtomConstructor for F
where
    F: Fn(&mut dyn Surface, &ElementSettings) -> Result<NodeId, DriftError>,
{
    fn build(
        &self,
        surface: &mut dyn Surface,
        settings: &ElementSettings,
    ) -> Result<NodeId, DriftError> {
        self(surface, settings)
    }
}

/// Name-keyed constructor table.
pub struct ConstructorRegistry<C: ?Sized> {
    constructors: FxHashMap<String, Box<C>>,
}

/// Registry of full-illustration constructors.
pub type ShapeRegistry = ConstructorRegistry<dyn ShapeConstructor>;
/// Registry of sub-element constructors.
pub type AtomRegistry = ConstructorRegistry<dyn AtomConstructor>;

impl<C: ?Sized> ConstructorRegistry<C> {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            constructors: FxHashMap::default(),
        }
    }

    /// Register a constructor, replacing any previous one of that name.
    pub fn register(&mut self, name: impl Into<String>, constructor: Box<C>) {
        let _ = self.constructors.insert(name.into(), constructor);
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, constructor: Box<C>) -> Self {
        self.register(name, constructor);
        self
    }

    /// Constructor registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&C> {
        self.constructors.get(name).map(Box::as_ref)
    }

    /// Number of registered constructors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> =
            self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<C: ?Sized> Default for ConstructorRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> fmt::Debug for ConstructorRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// Host-supplied constructor registries.
#[derive(Debug, Default)]
pub struct Sources {
    /// Full-illustration constructors, keyed by entry `type`.
    pub shapes: ShapeRegistry,
    /// Sub-element constructors used by composite shapes.
    pub atoms: AtomRegistry,
}

impl Sources {
    /// The built-in demo shapes: atom `polygon` and composite `cluster`.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            shapes: ShapeRegistry::new()
                .with("cluster", Box::new(Cluster::default())),
            atoms: AtomRegistry::new()
                .with("polygon", Box::new(PolygonAtom::default())),
        }
    }
}

/// Draw a raw illustration: a single path wrapped in a group carrying the
/// element transform. Returns the group.
pub fn build_raw(
    surface: &mut dyn Surface,
    path: &str,
    settings: &ElementSettings,
) -> Result<NodeId, DriftError> {
    let body = surface.path(path, &settings.fill)?;
    let group = surface.group(&[body]);
    surface.set_transform(group, settings.transform());
    Ok(group)
}
