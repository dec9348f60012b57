// crates/worldmap-core/src/loader/http.rs
#![cfg(feature = "fetch")]

use crate::error::{MapError, Result};
use crate::traits::FeatureSource;

/// Plain GET over HTTP(S). On `wasm32` reqwest rides on `window.fetch`.
///
/// No retries and no timeout: a hung request simply never completes.
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl FeatureSource for HttpSource {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let network = |e: reqwest::Error| MapError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(MapError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Answer one request on a local port with `response`; returns its URL.
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut request = [0u8; 2048];
                let _ = stream.read(&mut request);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/countries.geo.json")
    }

    #[tokio::test]
    async fn returns_the_body_on_success() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{}",
        );
        let body = HttpSource::new().fetch_text(&url).await.unwrap();
        assert_eq!(body, "{}");
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let url = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        let err = HttpSource::new().fetch_text(&url).await.unwrap_err();
        assert!(err.is_fetch_error());
        assert!(matches!(err, MapError::Status { status: 503, .. }), "{err}");
    }

    #[tokio::test]
    async fn refused_connection_is_a_network_error() {
        let url = "http://127.0.0.1:1/countries.geo.json";
        let err = HttpSource::new().fetch_text(url).await.unwrap_err();
        assert!(err.is_fetch_error());
        match err {
            MapError::Fetch { url: failed, .. } => assert_eq!(failed, url),
            other => panic!("expected a network error, got {other}"),
        }
    }
}
