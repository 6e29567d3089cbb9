use async_trait::async_trait;
use tracing::warn;

// ============================================================================
// Reverse Geocoding Boundary
// ============================================================================
//
// The delivery address is advisory text. A failed lookup never reaches the
// user as an error; it degrades to the raw coordinates.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("Reverse geocode lookup failed: {0}")]
    Lookup(String),
}

/// Turns device coordinates into a short free-text address.
#[async_trait]
pub trait ReverseGeocoder {
    async fn reverse(&self, lat: f64, lng: f64) -> Result<String, GeocodeError>;
}

/// Fallback address: the raw coordinates rounded to 4 decimal places.
pub fn coordinate_fallback(lat: f64, lng: f64) -> String {
    format!("{lat:.4}, {lng:.4}")
}

/// Resolve an address, degrading silently to the coordinate fallback on any
/// lookup failure.
pub async fn resolve_address<G>(geocoder: &G, lat: f64, lng: f64) -> String
where
    G: ReverseGeocoder + Sync,
{
    match geocoder.reverse(lat, lng).await {
        Ok(address) => address,
        Err(e) => {
            warn!("Reverse geocode failed, falling back to coordinates: {e}");
            coordinate_fallback(lat, lng)
        }
    }
}

/// Fixed-answer geocoder for the demo binary and tests.
pub struct StaticGeocoder {
    address: Option<String>,
}

impl StaticGeocoder {
    pub fn returning(address: &str) -> Self {
        Self {
            address: Some(address.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self { address: None }
    }
}

#[async_trait]
impl ReverseGeocoder for StaticGeocoder {
    async fn reverse(&self, _lat: f64, _lng: f64) -> Result<String, GeocodeError> {
        self.address
            .clone()
            .ok_or_else(|| GeocodeError::Lookup("no provider configured".to_string()))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
