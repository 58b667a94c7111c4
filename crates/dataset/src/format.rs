//! Display formatting for route metrics.

use crate::route::RailRoute;

/// Formats minutes as "Xh Ym", dropping zero components: 0 → "0m",
/// 60 → "1h", 90 → "1h 30m".
pub fn format_travel_time(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours == 0 {
        return format!("{mins}m");
    }
    if mins > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{hours}h")
    }
}

/// Formats a count with a one-decimal K/M/B suffix; values under 1000 pass
/// through unchanged.
pub fn format_large_number(n: u64) -> String {
    if n >= 1_000_000_000 {
        format!("{:.1}B", n as f64 / 1e9)
    } else if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1e6)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1e3)
    } else {
        n.to_string()
    }
}

/// Cost per mile in billions. Undefined for non-positive lengths, so a bad
/// record shows as missing instead of NaN/Infinity.
pub fn cost_per_mile(route: &RailRoute) -> Option<f64> {
    if route.length_miles > 0.0 {
        Some(route.cost_est_billions / route.length_miles)
    } else {
        None
    }
}

/// Percentage of drive time saved by taking the train, when both estimates
/// are present.
pub fn time_savings_pct(route: &RailRoute) -> Option<f64> {
    let rail = route.travel_time_minutes? as f64;
    let drive = route.drive_time_minutes? as f64;
    if drive <= 0.0 {
        return None;
    }
    Some((drive - rail) / drive * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{ProjectStatus, RailRoute};

    #[test]
    fn travel_time_formats() {
        assert_eq!(format_travel_time(0), "0m");
        assert_eq!(format_travel_time(45), "45m");
        assert_eq!(format_travel_time(60), "1h");
        assert_eq!(format_travel_time(90), "1h 30m");
        assert_eq!(format_travel_time(125), "2h 5m");
    }

    #[test]
    fn large_number_suffixes() {
        assert_eq!(format_large_number(999), "999");
        assert_eq!(format_large_number(1_500), "1.5K");
        assert_eq!(format_large_number(2_300_000), "2.3M");
        assert_eq!(format_large_number(1_200_000_000), "1.2B");
        assert_eq!(format_large_number(0), "0");
    }

    #[test]
    fn cost_per_mile_guards_zero_length() {
        let mut route = route_with_length(494.0);
        route.cost_est_billions = 106.0;
        let per_mile = cost_per_mile(&route).unwrap();
        assert!((per_mile - 106.0 / 494.0).abs() < 1e-12);

        let degenerate = route_with_length(0.0);
        assert_eq!(cost_per_mile(&degenerate), None);
    }

    #[test]
    fn time_savings_needs_both_estimates() {
        let mut route = route_with_length(100.0);
        assert_eq!(time_savings_pct(&route), None);

        route.travel_time_minutes = Some(90);
        route.drive_time_minutes = Some(180);
        assert_eq!(time_savings_pct(&route), Some(50.0));
    }

    fn route_with_length(length_miles: f64) -> RailRoute {
        RailRoute {
            id: "t".into(),
            name: "T".into(),
            segments: vec![],
            design_speed_mph: 200.0,
            cost_est_billions: 1.0,
            status: ProjectStatus::Planning,
            completion_year_tgt: None,
            length_miles,
            travel_time_minutes: None,
            drive_time_minutes: None,
            flight_time_minutes: None,
            jobs_created: None,
            annual_ridership_est: None,
            description: String::new(),
        }
    }
}
