//! Edge wrap-around for elements that drift off the canvas.

use glam::{Affine2, Vec2};

use crate::options::CanvasOptions;
use crate::surface::{BBox, NodeId, Surface};

/// Which buffered canvas edges a bounding box has crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Overflow {
    /// Fully past the left edge.
    pub left: bool,
    /// Fully past the right edge.
    pub right: bool,
    /// Fully past the top edge.
    pub top: bool,
    /// Fully past the bottom edge.
    pub bottom: bool,
}

impl Overflow {
    /// Whether any edge was crossed.
    #[must_use]
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// Compare `bbox` against the canvas grown by `buffer` plus the box's own
/// size on every side.
#[must_use]
pub fn check_overflow(bbox: &BBox, canvas: &CanvasOptions, buffer: f32) -> Overflow {
    Overflow {
        right: bbox.x > canvas.width + buffer + bbox.w,
        bottom: bbox.y > canvas.height + buffer + bbox.h,
        left: bbox.x < -(buffer + bbox.w),
        top: bbox.y2() < -(buffer + bbox.h),
    }
}

/// Teleport `node` to the opposite edge if it has overflowed. The
/// translation is replaced outright: crossed axes jump to the far edge and
/// the other axis goes back to 0. Rotation and scale are kept. Returns
/// whether a reset happened.
pub fn reset_if_overflowed(
    surface: &mut dyn Surface,
    node: NodeId,
    canvas: &CanvasOptions,
    buffer: f32,
) -> bool {
    let bbox = surface.bbox(node);
    let overflow = check_overflow(&bbox, canvas, buffer);
    if !overflow.any() {
        return false;
    }

    let current = surface.transform(node);
    let mut translation = Vec2::ZERO;
    if overflow.left {
        translation.x = canvas.width + bbox.w;
    }
    if overflow.right {
        translation.x = -2.0 * bbox.w;
    }
    if overflow.top {
        translation.y = canvas.height;
    }
    if overflow.bottom {
        translation.y = -2.0 * bbox.h;
    }

    surface.set_transform(
        node,
        Affine2 {
            matrix2: current.matrix2,
            translation,
        },
    );
    true
}
