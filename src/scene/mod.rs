//! Drawn elements and where they go.
//!
//! [`ElementRegistry`] owns every drawn illustration for the lifetime of
//! the stage, together with its typed animation state. Elements are never
//! removed.

mod entity;
pub mod placement;

pub use entity::{AnimState, Atom, DrawnElement};
pub use placement::{Placement, PlacementGenerator};

use crate::surface::NodeId;

/// Addresses an element, or one of its atoms when `atom` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimTarget {
    /// Index of the element in the registry.
    pub element: usize,
    /// Index of the atom within the element.
    pub atom: Option<usize>,
}

/// Registry of drawn elements, in draw order.
#[derive(Debug, Clone, Default)]
pub struct ElementRegistry {
    elements: Vec<DrawnElement>,
}

impl ElementRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element, returning its index. Every state is reset to
    /// [`AnimState::Idle`].
    pub fn register(&mut self, mut element: DrawnElement) -> usize {
        element.state = AnimState::Idle;
        for atom in &mut element.atoms {
            atom.state = AnimState::Idle;
        }
        self.elements.push(element);
        self.elements.len() - 1
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DrawnElement> {
        self.elements.get(index)
    }

    /// All elements in registration order.
    #[must_use]
    pub fn elements(&self) -> &[DrawnElement] {
        &self.elements
    }

    /// Animation targets of an element: its atoms when it has them,
    /// otherwise the element itself.
    #[must_use]
    pub fn targets(&self, element: usize) -> Vec<AnimTarget> {
        match self.elements.get(element) {
            Some(e) if e.has_atoms => (0..e.atoms.len())
                .map(|atom| AnimTarget {
                    element,
                    atom: Some(atom),
                })
                .collect(),
            Some(_) => vec![AnimTarget {
                element,
                atom: None,
            }],
            None => Vec::new(),
        }
    }

    /// Surface node behind a target.
    #[must_use]
    pub fn node(&self, target: AnimTarget) -> Option<NodeId> {
        let element = self.elements.get(target.element)?;
        match target.atom {
            Some(atom) => element.atoms.get(atom).map(|a| a.node),
            None => Some(element.node),
        }
    }

    /// Animation state of a target.
    #[must_use]
    pub fn state(&self, target: AnimTarget) -> Option<AnimState> {
        let element = self.elements.get(target.element)?;
        match target.atom {
            Some(atom) => element.atoms.get(atom).map(|a| a.state),
            None => Some(element.state),
        }
    }

    /// Set the animation state of a target. Returns false for unknown
    /// targets.
    pub fn set_state(&mut self, target: AnimTarget, state: AnimState) -> bool {
        let Some(element) = self.elements.get_mut(target.element) else {
            return false;
        };
        let slot = match target.atom {
            Some(atom) => match element.atoms.get_mut(atom) {
                Some(a) => &mut a.state,
                None => return false,
            },
            None => &mut element.state,
        };
        *slot = state;
        true
    }

    /// Number of targets currently animating.
    #[must_use]
    pub fn animating_count(&self) -> usize {
        self.elements
            .iter()
            .map(|e| {
                usize::from(e.state == AnimState::Animating)
                    + e.atoms
                        .iter()
                        .filter(|a| a.state == AnimState::Animating)
                        .count()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ElementRegistry {
        let mut registry = ElementRegistry::new();
        let _ = registry.register(DrawnElement::new(
            NodeId::new(0),
            Some("solo".to_owned()),
        ));
        let _ = registry.register(DrawnElement::with_atoms(
            NodeId::new(1),
            Some("pair".to_owned()),
            [NodeId::new(2), NodeId::new(3)],
        ));
        registry
    }

    #[test]
    fn targets_are_atoms_for_composites() {
        let registry = registry();
        assert_eq!(
            registry.targets(0),
            vec![AnimTarget { element: 0, atom: None }]
        );
        let atoms = registry.targets(1);
        assert_eq!(atoms.len(), 2);
        assert_eq!(registry.node(atoms[1]), Some(NodeId::new(3)));
        assert!(registry.targets(5).is_empty());
    }

    #[test]
    fn states_are_tracked_per_target() {
        let mut registry = registry();
        let atom = AnimTarget { element: 1, atom: Some(0) };
        assert_eq!(registry.state(atom), Some(AnimState::Idle));
        assert!(registry.set_state(atom, AnimState::Animating));
        assert_eq!(registry.state(atom), Some(AnimState::Animating));
        assert_eq!(
            registry.state(AnimTarget { element: 1, atom: Some(1) }),
            Some(AnimState::Idle)
        );
        assert_eq!(registry.animating_count(), 1);
        assert!(!registry.set_state(
            AnimTarget { element: 1, atom: Some(9) },
            AnimState::Idle
        ));
    }

    #[test]
    fn register_resets_state() {
        let mut registry = ElementRegistry::new();
        let mut element = DrawnElement::new(NodeId::new(0), None);
        element.state = AnimState::Animating;
        let index = registry.register(element);
        assert_eq!(registry.get(index).map(|e| e.state), Some(AnimState::Idle));
        assert_eq!(registry.len(), 1);
    }
}
