//! The vector-graphics surface illustrations are drawn on.
//!
//! Drift never rasterizes anything itself. It constructs shapes, queries
//! bounding boxes and reads/writes affine transforms through [`Surface`];
//! the host backs it with a real renderer (an SVG DOM, a canvas, a scene
//! graph). [`MemorySurface`] is a headless implementation that keeps the
//! node tree in memory.

mod memory;
pub mod path;

use glam::{Affine2, Vec2};
pub use memory::MemorySurface;

use crate::error::DriftError;

/// Handle to a node created by a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Wrap a surface-assigned index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Surface-assigned index.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// Fill of a shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paint {
    /// Literal `#` color string.
    Color(String),
    /// Gradient registered on the surface.
    Gradient(u32),
}

impl Paint {
    /// Resolve a fill string: strings starting with `#` are literal colors,
    /// anything else is a gradient spec handed to the surface.
    pub fn resolve(
        surface: &mut dyn Surface,
        fill: &str,
    ) -> Result<Self, DriftError> {
        if fill.starts_with('#') {
            Ok(Self::Color(fill.to_owned()))
        } else {
            surface.gradient(fill)
        }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BBox {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl BBox {
    /// Box from its top-left corner and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Smallest box containing every point, `None` for no points.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) =
            points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        let size = max - min;
        Some(Self::new(min.x, min.y, size.x, size.y))
    }

    /// Right edge.
    #[must_use]
    pub fn x2(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge.
    #[must_use]
    pub fn y2(&self) -> f32 {
        self.y + self.h
    }

    /// The four corners, clockwise from top-left.
    #[must_use]
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.x2(), self.y),
            Vec2::new(self.x2(), self.y2()),
            Vec2::new(self.x, self.y2()),
        ]
    }

    /// Bounding box of this box after `transform`.
    #[must_use]
    pub fn transformed(&self, transform: &Affine2) -> Self {
        Self::from_points(
            self.corners().map(|c| transform.transform_point2(c)),
        )
        .unwrap_or_default()
    }

    /// Smallest box containing both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::from_points(self.corners().into_iter().chain(other.corners()))
            .unwrap_or_default()
    }
}

/// A 2D vector-graphics surface.
///
/// Bounding boxes are reported in the coordinate space of the node's
/// parent, i.e. with the node's own transform applied.
pub trait Surface {
    /// Create a shape from SVG path data.
    fn path(&mut self, data: &str, fill: &Paint) -> Result<NodeId, DriftError>;

    /// Create a rectangle.
    fn rect(&mut self, bounds: BBox, fill: &Paint) -> NodeId;

    /// Group existing nodes under a new parent.
    fn group(&mut self, children: &[NodeId]) -> NodeId;

    /// Register a gradient from its spec string.
    fn gradient(&mut self, spec: &str) -> Result<Paint, DriftError>;

    /// Direct children of a node, in insertion order.
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Bounding box of a node in its parent's space.
    fn bbox(&self, node: NodeId) -> BBox;

    /// Current local transform of a node.
    fn transform(&self, node: NodeId) -> Affine2;

    /// Replace the local transform of a node.
    fn set_transform(&mut self, node: NodeId, transform: Affine2);
}
