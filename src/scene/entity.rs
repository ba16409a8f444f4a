use crate::surface::NodeId;

/// Animation state of an element or sub-element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimState {
    /// No tween in flight; eligible for the next wobble.
    #[default]
    Idle,
    /// A tween is in flight; wobbles skip it until the tween completes.
    Animating,
}

/// A sub-element of a composite illustration. Animates independently of
/// its siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    /// Surface node.
    pub node: NodeId,
    /// Animation state.
    pub state: AnimState,
}

/// A drawn illustration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawnElement {
    /// Surface node (the element's group).
    pub node: NodeId,
    /// Logical name linking back to its config entry.
    pub name: Option<String>,
    /// Whether wobbles target the sub-elements instead of the element.
    pub has_atoms: bool,
    /// Sub-elements, populated when `has_atoms` is set.
    pub atoms: Vec<Atom>,
    /// Animation state of the element itself.
    pub state: AnimState,
}

impl DrawnElement {
    /// Element without sub-elements.
    #[must_use]
    pub fn new(node: NodeId, name: Option<String>) -> Self {
        Self {
            node,
            name,
            has_atoms: false,
            atoms: Vec::new(),
            state: AnimState::Idle,
        }
    }

    /// Composite element whose `atoms` animate independently.
    #[must_use]
    pub fn with_atoms(
        node: NodeId,
        name: Option<String>,
        atoms: impl IntoIterator<Item = NodeId>,
    ) -> Self {
        Self {
            node,
            name,
            has_atoms: true,
            atoms: atoms
                .into_iter()
                .map(|node| Atom {
                    node,
                    state: AnimState::Idle,
                })
                .collect(),
            state: AnimState::Idle,
        }
    }
}
