// crates/worldmap-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading data for the map.
///
/// Only the boundary dataset fetch can fail at runtime; everything else in
/// the widget degrades to a fallback instead of erroring. Callers of
/// [`crate::loader::OverlayLoader::install`] log and swallow these.
#[derive(Debug, Error)]
pub enum MapError {
    /// The request never produced a response (DNS, CORS, connection reset...).
    #[error("network error while fetching {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The server answered with a non-success status.
    #[error("unexpected HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    /// Static catalog or configuration JSON could not be parsed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The boundary dataset is not valid GeoJSON.
    #[error("invalid GeoJSON: {0}")]
    GeoJson(#[from] Box<geojson::Error>),

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// The dataset slot is single-assignment.
    #[error("country dataset is already loaded")]
    AlreadyLoaded,
}

impl MapError {
    /// `true` for everything that means "the boundary dataset did not arrive".
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            MapError::Fetch { .. }
                | MapError::Status { .. }
                | MapError::GeoJson(_)
                | MapError::InvalidData(_)
        )
    }
}

impl From<geojson::Error> for MapError {
    fn from(e: geojson::Error) -> Self {
        MapError::GeoJson(Box::new(e))
    }
}

pub type Result<T> = std::result::Result<T, MapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_network_failures_are_fetch_errors() {
        let status = MapError::Status {
            url: "https://example.org/countries.geo.json".into(),
            status: 404,
        };
        assert!(status.is_fetch_error());
        assert_eq!(
            status.to_string(),
            "unexpected HTTP status 404 from https://example.org/countries.geo.json"
        );

        let net = MapError::Fetch {
            url: "https://example.org".into(),
            reason: "connection refused".into(),
        };
        assert!(net.is_fetch_error());
        assert!(!MapError::AlreadyLoaded.is_fetch_error());
    }
}
