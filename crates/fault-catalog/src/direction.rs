//! Measurement Direction Filtering

use serde::{Deserialize, Serialize};

/// User-selected measurement axis (closed set, matching the input form)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Along the shaft
    Axial,
    /// Perpendicular to the shaft
    Radial,
    /// Sensed in both axes
    AxialAndRadial,
}

impl Direction {
    /// Lowercased label as it appears in the source tables (French)
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Axial => "axiale",
            Direction::Radial => "radiale",
            Direction::AxialAndRadial => "axiale et radiale",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction text of a catalog entry, normalized for comparison.
///
/// The source tables write free text ("Radiale", "axial et radiale", ...);
/// the substring "et" ("and") marks an entry as applicable to any
/// measurement direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionSpec {
    text: String,
}

impl DirectionSpec {
    /// Build from the raw table cell
    pub fn new(raw: &str) -> Self {
        Self {
            text: raw.trim().to_lowercase(),
        }
    }

    /// The normalized direction text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the "and/both" marker makes this entry direction-agnostic
    pub fn any_direction(&self) -> bool {
        self.text.contains("et")
    }

    /// Direction filter: the selected label is a substring of the entry
    /// text, or the entry carries the any-direction marker.
    pub fn matches(&self, selected: Direction) -> bool {
        self.text.contains(selected.label()) || self.any_direction()
    }
}
