//! HTTP children provider for the notes service.

use notetree_core::page::{ChildrenResponse, DataEnvelope};
use notetree_core::provider::{ChildrenProvider, FetchError, FetchResult};

/// [`ChildrenProvider`] backed by the notes service's JSON API.
///
/// Children live at `GET {base_url}/api/notes/{page_id}/children`, the
/// body is a `{ "Data": ... }` envelope. Requests carry no body, no query
/// parameters, and no explicit authentication header; the client's cookie
/// jar forwards the ambient session cookie.
#[derive(Debug, Clone)]
pub struct HttpChildrenProvider {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpChildrenProvider {
    /// Create a provider for the service at `base_url` (no trailing
    /// slash).
    pub fn new(base_url: impl Into<String>) -> FetchResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        Ok(Self::with_client(base_url, client))
    }

    /// Create a provider reusing an already configured client.
    #[must_use]
    pub fn with_client(base_url: impl Into<String>, client: reqwest::blocking::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// The service base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn children_url(&self, page_id: &str) -> String {
        format!("{}/api/notes/{}/children", self.base_url, page_id)
    }
}

impl ChildrenProvider for HttpChildrenProvider {
    fn fetch_children(&self, page_id: &str) -> FetchResult<ChildrenResponse> {
        let response = self
            .client
            .get(self.children_url(page_id))
            .send()
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let envelope: DataEnvelope = response
            .json()
            .map_err(|err| FetchError::Decode(err.to_string()))?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notetree_core::page::PageRef;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Serve one canned HTTP response on a fresh localhost port and
    /// return the base URL to reach it.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            // Read until the end of the request headers.
            let mut request = Vec::new();
            let mut chunk = [0u8; 512];
            loop {
                match stream.read(&mut chunk) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        request.extend_from_slice(&chunk[..n]);
                        if request.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                }
            }
            let reply = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(reply.as_bytes());
        });
        format!("http://{addr}")
    }

    #[test]
    fn decodes_a_successful_reply() {
        let base = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"Data": {"Children": [{"ID": "3", "Name": "C"}], "CurrentPage": {"ID": "5", "Name": "Parent", "PrevID": "2"}}}"#,
        );
        let provider = HttpChildrenProvider::new(base).unwrap();
        let response = provider.fetch_children("5").unwrap();
        assert_eq!(response.children, vec![PageRef::new("3", "C")]);
        assert_eq!(response.current_page.prev_id, "2");
    }

    #[test]
    fn non_success_status_maps_to_status_error() {
        let base = serve_once("HTTP/1.1 404 Not Found", r#"{"error": "PageID not found"}"#);
        let provider = HttpChildrenProvider::new(base).unwrap();
        assert_eq!(
            provider.fetch_children("999"),
            Err(FetchError::Status(404))
        );
    }

    #[test]
    fn undecodable_body_maps_to_decode_error() {
        let base = serve_once("HTTP/1.1 200 OK", "<html>not json</html>");
        let provider = HttpChildrenProvider::new(base).unwrap();
        assert!(matches!(
            provider.fetch_children("5"),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn missing_current_page_maps_to_decode_error() {
        let base = serve_once("HTTP/1.1 200 OK", r#"{"Data": {"Children": []}}"#);
        let provider = HttpChildrenProvider::new(base).unwrap();
        assert!(matches!(
            provider.fetch_children("5"),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn unreachable_endpoint_maps_to_transport_error() {
        // Grab a free port, then close the listener before connecting.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let provider = HttpChildrenProvider::new(format!("http://{addr}")).unwrap();
        assert!(matches!(
            provider.fetch_children("5"),
            Err(FetchError::Transport(_))
        ));
    }

    #[test]
    fn children_url_shape() {
        let provider = HttpChildrenProvider::new("http://notes.local").unwrap();
        assert_eq!(
            provider.children_url("42"),
            "http://notes.local/api/notes/42/children"
        );
    }
}
