//! Random and partially specified element placement.

use rand::Rng;

use crate::options::{CanvasOptions, PartialPlacement};

/// Position and rotation (degrees) of an element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
    /// Rotation in degrees.
    pub r: f32,
}

/// Draws placements inside the canvas, shifted up/left by the buffer so
/// elements can start partly off-canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementGenerator {
    width: f32,
    height: f32,
    buffer: f32,
}

impl PlacementGenerator {
    /// Generator for a canvas of the given size and buffer.
    #[must_use]
    pub fn new(width: f32, height: f32, buffer: f32) -> Self {
        Self {
            width,
            height,
            buffer,
        }
    }

    /// Generator for the configured canvas.
    #[must_use]
    pub fn for_canvas(canvas: &CanvasOptions) -> Self {
        Self::new(canvas.width, canvas.height, canvas.negative_buffer_space)
    }

    /// Uniform placement in whole units: `x ∈ [-buffer, width - buffer)`,
    /// `y ∈ [-buffer, height - buffer)`, `r ∈ [0, 360)`.
    pub fn random_placement<R: Rng + ?Sized>(&self, rng: &mut R) -> Placement {
        let x = whole_below(self.width, rng) - self.buffer;
        let y = whole_below(self.height, rng) - self.buffer;
        let r = whole_below(360.0, rng);
        Placement { x, y, r }
    }

    /// Fill the missing fields of `partial` from `fallback`. Every missing
    /// field comes from the same fallback triple.
    #[must_use]
    pub fn resolve_placement(
        partial: Option<&PartialPlacement>,
        fallback: Placement,
    ) -> Placement {
        let Some(partial) = partial else {
            return fallback;
        };
        Placement {
            x: partial.x.unwrap_or(fallback.x),
            y: partial.y.unwrap_or(fallback.y),
            r: partial.r.unwrap_or(fallback.r),
        }
    }

    /// Resolve `partial` against one fresh random placement. The random
    /// triple is drawn even when `partial` is complete, so every entry
    /// consumes the same amount of randomness.
    pub fn resolve_random<R: Rng + ?Sized>(
        &self,
        partial: Option<&PartialPlacement>,
        rng: &mut R,
    ) -> Placement {
        let fallback = self.random_placement(rng);
        Self::resolve_placement(partial, fallback)
    }
}

/// Uniform whole number in `[0, limit)`. Float rounding on huge limits
/// could otherwise land on `limit` itself.
fn whole_below<R: Rng + ?Sized>(limit: f32, rng: &mut R) -> f32 {
    (rng.random::<f32>() * limit)
        .floor()
        .min(limit.ceil() - 1.0)
        .max(0.0)
}
