use glam::Affine2;

use super::path::path_bbox;
use super::{BBox, NodeId, Paint, Surface};
use crate::error::DriftError;

#[derive(Debug, Clone)]
enum NodeKind {
    Shape { bounds: BBox, fill: Paint },
    Group { children: Vec<NodeId> },
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    transform: Affine2,
    parent: Option<NodeId>,
}

/// Headless [`Surface`] holding the node tree in memory.
///
/// Used for tests, benchmarks and the command-line simulator. Shapes keep
/// the bounding box of their path data; groups report the union of their
/// children.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    nodes: Vec<Node>,
    gradients: Vec<String>,
}

impl MemorySurface {
    /// Empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes created so far.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Fill of a shape node, `None` for groups or unknown nodes.
    #[must_use]
    pub fn fill(&self, node: NodeId) -> Option<&Paint> {
        match &self.node(node)?.kind {
            NodeKind::Shape { fill, .. } => Some(fill),
            NodeKind::Group { .. } => None,
        }
    }

    /// Spec string of a registered gradient.
    #[must_use]
    pub fn gradient_spec(&self, id: u32) -> Option<&str> {
        self.gradients.get(id as usize).map(String::as_str)
    }

    /// Parent group of a node.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.parent
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index() as usize)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index() as usize)
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            transform: Affine2::IDENTITY,
            parent: None,
        });
        id
    }

    /// Bounding box of a node's content, before its own transform.
    fn content_bbox(&self, id: NodeId) -> BBox {
        match self.node(id).map(|n| &n.kind) {
            Some(NodeKind::Shape { bounds, .. }) => *bounds,
            Some(NodeKind::Group { children }) => children
                .iter()
                .map(|&child| self.bbox(child))
                .reduce(|acc, b| acc.union(&b))
                .unwrap_or_default(),
            None => BBox::default(),
        }
    }

    fn detach(&mut self, child: NodeId) {
        let Some(old_parent) = self.node(child).and_then(|n| n.parent) else {
            return;
        };
        if let Some(Node {
            kind: NodeKind::Group { children },
            ..
        }) = self.node_mut(old_parent)
        {
            children.retain(|&c| c != child);
        }
    }
}

impl Surface for MemorySurface {
    fn path(&mut self, data: &str, fill: &Paint) -> Result<NodeId, DriftError> {
        let bounds = path_bbox(data)?.unwrap_or_default();
        Ok(self.push(NodeKind::Shape {
            bounds,
            fill: fill.clone(),
        }))
    }

    fn rect(&mut self, bounds: BBox, fill: &Paint) -> NodeId {
        self.push(NodeKind::Shape {
            bounds,
            fill: fill.clone(),
        })
    }

    fn group(&mut self, children: &[NodeId]) -> NodeId {
        for &child in children {
            self.detach(child);
        }
        let group = self.push(NodeKind::Group {
            children: children.to_vec(),
        });
        for &child in children {
            if let Some(node) = self.node_mut(child) {
                node.parent = Some(group);
            }
        }
        group
    }

    fn gradient(&mut self, spec: &str) -> Result<Paint, DriftError> {
        let kind = spec.trim_start().get(..2).unwrap_or_default();
        if !matches!(kind, "l(" | "L(" | "r(" | "R(") {
            return Err(DriftError::Surface(format!(
                "unrecognized gradient spec '{spec}'"
            )));
        }
        let id = self.gradients.len() as u32;
        self.gradients.push(spec.to_owned());
        Ok(Paint::Gradient(id))
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        match self.node(node).map(|n| &n.kind) {
            Some(NodeKind::Group { children }) => children.clone(),
            _ => Vec::new(),
        }
    }

    fn bbox(&self, node: NodeId) -> BBox {
        let transform = self
            .node(node)
            .map_or(Affine2::IDENTITY, |n| n.transform);
        self.content_bbox(node).transformed(&transform)
    }

    fn transform(&self, node: NodeId) -> Affine2 {
        self.node(node).map_or(Affine2::IDENTITY, |n| n.transform)
    }

    fn set_transform(&mut self, node: NodeId, transform: Affine2) {
        if let Some(n) = self.node_mut(node) {
            n.transform = transform;
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    fn black() -> Paint {
        Paint::Color("#000".to_owned())
    }

    #[test]
    fn shape_bbox_follows_its_transform() {
        let mut surface = MemorySurface::new();
        let node = surface.path("M0 0 h10 v10 h-10 z", &black()).unwrap();
        assert_eq!(surface.bbox(node), BBox::new(0.0, 0.0, 10.0, 10.0));

        surface.set_transform(
            node,
            Affine2::from_scale_angle_translation(
                Vec2::splat(2.0),
                0.0,
                Vec2::new(5.0, -5.0),
            ),
        );
        assert_eq!(surface.bbox(node), BBox::new(5.0, -5.0, 20.0, 20.0));
    }

    #[test]
    fn group_bbox_is_union_of_children() {
        let mut surface = MemorySurface::new();
        let a = surface.path("M0 0 h10 v10 z", &black()).unwrap();
        let b = surface.path("M20 20 h5 v5 z", &black()).unwrap();
        let g = surface.group(&[a, b]);
        assert_eq!(surface.children(g), vec![a, b]);
        assert_eq!(surface.bbox(g), BBox::new(0.0, 0.0, 25.0, 25.0));

        surface.set_transform(g, Affine2::from_translation(Vec2::new(100.0, 0.0)));
        assert_eq!(surface.bbox(g).x, 100.0);
        // Children stay in the group's space.
        assert_eq!(surface.bbox(a).x, 0.0);
    }

    #[test]
    fn regrouping_moves_nodes() {
        let mut surface = MemorySurface::new();
        let a = surface.path("M0 0 h1 v1 z", &black()).unwrap();
        let first = surface.group(&[a]);
        let second = surface.group(&[a]);
        assert!(surface.children(first).is_empty());
        assert_eq!(surface.children(second), vec![a]);
        assert_eq!(surface.parent(a), Some(second));
    }

    #[test]
    fn gradients_are_registered() {
        let mut surface = MemorySurface::new();
        let paint = surface.gradient("r(0.5, 0.5, 0.5)#fff-#000").unwrap();
        let Paint::Gradient(id) = paint else {
            panic!("expected gradient, got {paint:?}");
        };
        assert_eq!(surface.gradient_spec(id), Some("r(0.5, 0.5, 0.5)#fff-#000"));
        assert!(surface.gradient("sunset").is_err());
    }

    #[test]
    fn bad_path_data_is_rejected() {
        let mut surface = MemorySurface::new();
        assert!(surface.path("M0 0 Q1", &black()).is_err());
        assert_eq!(surface.node_count(), 0);
    }
}
