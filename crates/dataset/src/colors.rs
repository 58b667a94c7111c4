//! Thermal-spectrum color classification.
//!
//! Routes are colored by design speed in three tiers. Boundary speeds (150,
//! 200) classify into the faster tier.

use crate::route::ProjectStatus;

/// Three-tier speed classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeedClass {
    /// >= 200 mph — electric cyan.
    Mach1,
    /// >= 150 mph — solar amber.
    Mach2,
    /// < 150 mph — industrial rust.
    Mach3,
}

impl SpeedClass {
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            SpeedClass::Mach1 => [0, 240, 255],
            SpeedClass::Mach2 => [255, 193, 7],
            SpeedClass::Mach3 => [255, 87, 34],
        }
    }
}

pub fn speed_class(mph: f64) -> SpeedClass {
    if mph >= 200.0 {
        SpeedClass::Mach1
    } else if mph >= 150.0 {
        SpeedClass::Mach2
    } else {
        SpeedClass::Mach3
    }
}

pub fn color_by_speed(mph: f64) -> [u8; 3] {
    speed_class(mph).rgb()
}

/// Badge color for a lifecycle status.
pub const fn status_color(status: ProjectStatus) -> [u8; 3] {
    match status {
        ProjectStatus::Construction => [16, 185, 129],
        ProjectStatus::Planning => [245, 158, 11],
        ProjectStatus::Completed => [5, 150, 105],
        ProjectStatus::Halted => [239, 68, 68],
        ProjectStatus::Studying => [107, 114, 128],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_classify_into_the_faster_tier() {
        assert_eq!(speed_class(200.0), SpeedClass::Mach1);
        assert_eq!(speed_class(199.9), SpeedClass::Mach2);
        assert_eq!(speed_class(150.0), SpeedClass::Mach2);
        assert_eq!(speed_class(149.9), SpeedClass::Mach3);
        assert_eq!(speed_class(0.0), SpeedClass::Mach3);
        assert_eq!(speed_class(250.0), SpeedClass::Mach1);
    }

    #[test]
    fn class_colors() {
        assert_eq!(color_by_speed(220.0), [0, 240, 255]);
        assert_eq!(color_by_speed(186.0), [255, 193, 7]);
        assert_eq!(color_by_speed(110.0), [255, 87, 34]);
    }
}
