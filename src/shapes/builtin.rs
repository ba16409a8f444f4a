use std::f32::consts::TAU;

use super::{AtomRegistry, DrawnShape, ElementSettings};
use super::{AtomConstructor, ShapeConstructor};
use crate::error::DriftError;
use crate::surface::{NodeId, Surface};

/// Regular polygon centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonAtom {
    /// Number of corners (at least 3).
    pub sides: u32,
    /// Distance from center to corner, before `em` scaling.
    pub radius: f32,
}

impl Default for PolygonAtom {
    fn default() -> Self {
        Self {
            sides: 6,
            radius: 10.0,
        }
    }
}

impl PolygonAtom {
    /// SVG path data for the outline.
    #[must_use]
    pub fn path_data(&self) -> String {
        let sides = self.sides.max(3);
        let corners: Vec<String> = (0..sides)
            .map(|i| {
                let angle = TAU * i as f32 / sides as f32;
                let x = self.radius * angle.cos();
                let y = self.radius * angle.sin();
                format!("{x:.3},{y:.3}")
            })
            .collect();
        format!("M{} Z", corners.join(" L"))
    }
}

impl AtomConstructor for PolygonAtom {
    fn build(
        &self,
        surface: &mut dyn Surface,
        settings: &ElementSettings,
    ) -> Result<NodeId, DriftError> {
        let node = surface.path(&self.path_data(), &settings.fill)?;
        surface.set_transform(node, settings.transform());
        Ok(node)
    }
}

/// Ring of independently wobbling atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// Atom type used for every member.
    pub atom: String,
    /// Number of members.
    pub count: usize,
    /// Ring radius.
    pub spread: f32,
}

impl Default for Cluster {
    fn default() -> Self {
        Self {
            atom: "polygon".to_owned(),
            count: 5,
            spread: 30.0,
        }
    }
}

impl ShapeConstructor for Cluster {
    fn build(
        &self,
        surface: &mut dyn Surface,
        settings: &ElementSettings,
        name: &str,
        atoms: &AtomRegistry,
    ) -> Result<DrawnShape, DriftError> {
        let constructor = atoms.get(&self.atom).ok_or_else(|| {
            DriftError::UnknownShape(format!("{} (atom of '{name}')", self.atom))
        })?;

        let members = (0..self.count)
            .map(|i| {
                let angle = TAU * i as f32 / self.count as f32;
                let member = ElementSettings::for_atom(
                    settings.fill.clone(),
                    1.0,
                    self.spread * angle.cos(),
                    self.spread * angle.sin(),
                    angle.to_degrees(),
                );
                constructor.build(surface, &member)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let node = surface.group(&members);
        surface.set_transform(node, settings.transform());
        Ok(DrawnShape {
            node,
            has_atoms: true,
        })
    }
}
