//! Tunable cost and timing constants.

use serde::Deserialize;
use thiserror::Error;

/// Error raised when the cost constants cannot describe a usable model.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A speed constant is zero, negative, or non-finite.
    #[error("{name} must be a positive finite speed, got {value}")]
    InvalidSpeed { name: &'static str, value: f64 },
    /// The rest-stop interval is zero, negative, or non-finite.
    #[error("rest_distance_km must be positive and finite, got {0}")]
    InvalidRestDistance(f64),
    /// A per-km rate or fixed time is negative or non-finite.
    #[error("{name} must be non-negative and finite, got {value}")]
    InvalidRate { name: &'static str, value: f64 },
}

/// Physical and monetary constants of the transport network.
///
/// The defaults describe a nationwide road network driven at 50 km/h with a
/// one-hour rest stop per started 300 km, and point-to-point flights at
/// 800 km/h with a two-hour fixed handling overhead. Monetary rates are per
/// kilometer in a single canonical currency unit.
///
/// # Examples
///
/// ```
/// use multiroute::cost::CostConstants;
///
/// let c = CostConstants::default();
/// assert_eq!(c.road_speed_kmh, 50.0);
/// assert_eq!(c.air_speed_kmh, 800.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CostConstants {
    /// Average road travel speed in km/h.
    pub road_speed_kmh: f64,
    /// Average flight speed in km/h.
    pub air_speed_kmh: f64,
    /// Monetary cost per road kilometer.
    pub road_cost_per_km: f64,
    /// Monetary cost per flown kilometer.
    pub air_cost_per_km: f64,
    /// Fixed handling time added to every flight, in hours.
    pub storage_time_hours: f64,
    /// Rest stop duration in hours, charged per full rest interval driven.
    pub rest_time_hours: f64,
    /// Road distance between mandatory rest stops, in km.
    pub rest_distance_km: f64,
}

impl Default for CostConstants {
    fn default() -> Self {
        Self {
            road_speed_kmh: 50.0,
            air_speed_kmh: 800.0,
            road_cost_per_km: 100.0,
            air_cost_per_km: 300.0,
            storage_time_hours: 2.0,
            rest_time_hours: 1.0,
            rest_distance_km: 300.0,
        }
    }
}

impl CostConstants {
    /// Checks that every constant describes a usable model.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let speeds = [
            ("road_speed_kmh", self.road_speed_kmh),
            ("air_speed_kmh", self.air_speed_kmh),
        ];
        for (name, value) in speeds {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidSpeed { name, value });
            }
        }
        if !self.rest_distance_km.is_finite() || self.rest_distance_km <= 0.0 {
            return Err(ConfigError::InvalidRestDistance(self.rest_distance_km));
        }
        let rates = [
            ("road_cost_per_km", self.road_cost_per_km),
            ("air_cost_per_km", self.air_cost_per_km),
            ("storage_time_hours", self.storage_time_hours),
            ("rest_time_hours", self.rest_time_hours),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidRate { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(CostConstants::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        let c = CostConstants {
            road_speed_kmh: 0.0,
            ..CostConstants::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::InvalidSpeed { name: "road_speed_kmh", .. })
        ));
    }

    #[test]
    fn test_rejects_nan_air_speed() {
        let c = CostConstants {
            air_speed_kmh: f64::NAN,
            ..CostConstants::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_rest_distance() {
        let c = CostConstants {
            rest_distance_km: 0.0,
            ..CostConstants::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::InvalidRestDistance(0.0)));
    }

    #[test]
    fn test_rejects_negative_rate() {
        let c = CostConstants {
            air_cost_per_km: -1.0,
            ..CostConstants::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::InvalidRate { name: "air_cost_per_km", .. })
        ));
    }
}
