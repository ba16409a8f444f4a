//! Bounding boxes from SVG path data.

use kurbo::{BezPath, Shape as _};

use super::BBox;
use crate::error::DriftError;

/// Parse SVG path data.
pub fn parse_path(data: &str) -> Result<BezPath, DriftError> {
    BezPath::from_svg(data)
        .map_err(|e| DriftError::Surface(format!("bad path data '{data}': {e}")))
}

/// Tight bounding box of the path's geometry, `None` when it draws
/// nothing.
pub fn path_bbox(data: &str) -> Result<Option<BBox>, DriftError> {
    let path = parse_path(data)?;
    if path.segments().next().is_none() {
        return Ok(None);
    }
    let rect = path.bounding_box();
    Ok(Some(BBox::new(
        rect.x0 as f32,
        rect.y0 as f32,
        rect.width() as f32,
        rect.height() as f32,
    )))
}
