use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("bus velocity must be a positive number, got {0}")]
    InvalidVelocity(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingSettings {
    pub bus_wait_time: u32, // minutes
    pub bus_velocity: f64,  // km/h
}

impl RoutingSettings {
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> Self {
        RoutingSettings {
            bus_wait_time,
            bus_velocity,
        }
    }

    pub fn metres_per_minute(&self) -> f64 {
        self.bus_velocity * 1000.0 / 60.0
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.bus_velocity.is_finite() && self.bus_velocity > 0.0 {
            Ok(())
        } else {
            Err(SettingsError::InvalidVelocity(self.bus_velocity))
        }
    }
}
