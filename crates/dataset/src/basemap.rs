//! Embedded base-map linework.
//!
//! Simplified boundary lines drawn faintly beneath the rail corridors. Each
//! line carries a class tag; waterway lines are present in the data but are
//! never rendered (the map hides them by policy).

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasemapClass {
    /// Ocean and lake shorelines.
    Coastline,
    /// National borders.
    Admin,
    /// State boundaries.
    State,
    /// Rivers. Hidden at render time.
    Waterway,
}

impl BasemapClass {
    /// Waterway linework is carried in the dataset but not drawn.
    pub fn visible(self) -> bool {
        !matches!(self, BasemapClass::Waterway)
    }
}

/// One base-map polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct BasemapLine {
    pub class: BasemapClass,
    pub coordinates: Vec<[f64; 2]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_waterways_are_hidden() {
        assert!(BasemapClass::Coastline.visible());
        assert!(BasemapClass::Admin.visible());
        assert!(BasemapClass::State.visible());
        assert!(!BasemapClass::Waterway.visible());
    }
}
