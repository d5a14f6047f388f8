use thiserror::Error;

/// Device coordinates, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Why the device position could not be read. Permission denial is its own
/// variant so callers can point the user at a remediation path instead of
/// treating it like a transient failure.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("failed to acquire position: {0}")]
    Unavailable(String),
}

/// Seam for the platform positioning service. The real implementation lives
/// in the embedding application; tests and the demo driver supply stubs.
pub trait LocationProvider {
    fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Provider that always returns a fixed position. Useful for demos and for
/// exercising the locate-me flow without device services.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocationProvider {
    pub position: Coordinates,
}

impl LocationProvider for FixedLocationProvider {
    fn current_position(&self) -> Result<Coordinates, LocationError> {
        Ok(self.position)
    }
}
