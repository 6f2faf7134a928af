//! The HTTP client talking to the MWDB REST API.

use dioxus_logger::tracing;
use reqwest::Method;
use reqwest::RequestBuilder;
use reqwest::Response;
use reqwest::Url;

use crate::error::ApiError;
use crate::error::ErrorBody;
use crate::object::ObjectId;
use crate::object::ObjectSummary;
use crate::prefs::client_prefs::ClientPrefs;

/// A handle to the MWDB API. Cheap to clone, all clones share one connection pool.
#[derive(Clone, Debug)]
pub struct MwdbClient {
    http: reqwest::Client,
    base: Url,
    prefs: ClientPrefs,
}

// Component props must be PartialEq. Two clients are interchangeable
// exactly when they were built from the same prefs.
impl PartialEq for MwdbClient {
    fn eq(&self, other: &Self) -> bool {
        self.prefs == other.prefs
    }
}

impl MwdbClient {
    pub fn new(prefs: ClientPrefs) -> Result<Self, ApiError> {
        let base = Url::parse(prefs.api_url())
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", prefs.api_url())))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(prefs.api_url().to_string()));
        }

        let http = reqwest::Client::builder().build()?;

        Ok(Self { http, base, prefs })
    }

    pub fn prefs(&self) -> &ClientPrefs {
        &self.prefs
    }

    /// Fetches the details of a single object.
    pub async fn get_object(&self, id: &ObjectId) -> Result<ObjectSummary, ApiError> {
        let response = self
            .send(Method::GET, &["object", id.as_str()])
            .await?;
        Ok(response.json::<ObjectSummary>().await?)
    }

    /// Builds the url of an endpoint below the API base.
    ///
    /// Every segment is percent-encoded on its own, so an id can never
    /// reach into a neighbouring path segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidUrl(self.base.to_string()))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// Sends a request without body and returns the response if its status is a success.
    pub(crate) async fn send(&self, method: Method, segments: &[&str]) -> Result<Response, ApiError> {
        let url = self.endpoint(segments)?;
        tracing::debug!("{method} {url}");

        let request = self.authorize(self.http.request(method, url));
        let response = request.send().await?;
        check_status(response).await
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.prefs.api_key() {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }
}

/// Turns a non-success response into [`ApiError::Rejected`].
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().clone();
    // a body we cannot read still leaves us with the status line
    let body = response.text().await.unwrap_or_default();
    let message = ErrorBody::message_from(&body)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());

    tracing::warn!("{url} answered {status}: {message}");
    Err(ApiError::rejected(status.as_u16(), message))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::io::AsyncWriteExt;
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Accepts one connection, answers it with `response` and hands back the request head.
    pub(crate) async fn serve_once(response: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&head).into_owned()
        });

        (format!("http://{addr}/api/"), handle)
    }

    pub(crate) fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    fn client(url: &str) -> MwdbClient {
        MwdbClient::new(ClientPrefs::new(url, None)).unwrap()
    }

    #[test]
    fn endpoint_ignores_trailing_slash_of_base() {
        for base in ["http://mwdb.local/api", "http://mwdb.local/api/"] {
            let url = client(base).endpoint(&["object", "42", "favorite"]).unwrap();
            assert_eq!(url.as_str(), "http://mwdb.local/api/object/42/favorite");
        }
    }

    #[test]
    fn endpoint_keeps_ids_inside_their_segment() {
        let url = client("http://mwdb.local/api/")
            .endpoint(&["object", "../admin", "favorite"])
            .unwrap();
        assert_eq!(url.as_str(), "http://mwdb.local/api/object/..%2Fadmin/favorite");
    }

    #[test]
    fn rejects_unusable_urls() {
        assert!(matches!(
            MwdbClient::new(ClientPrefs::new("not a url", None)),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(matches!(
            MwdbClient::new(ClientPrefs::new("mailto:someone@example.com", None)),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn clients_compare_by_prefs() {
        let a = client("http://mwdb.local/api/");
        assert_eq!(a, a.clone());
        assert_ne!(a, client("http://other.local/api/"));
    }

    #[tokio::test]
    async fn get_object_sends_key_and_decodes_body() {
        let body = r#"{"id": "42", "type": "file", "upload_time": "2021-03-04T10:11:12Z", "favorite": true}"#;
        let (url, server) = serve_once(http_response("200 OK", body)).await;
        let client = MwdbClient::new(ClientPrefs::new(url, Some("secret".to_string()))).unwrap();

        let object = client.get_object(&ObjectId::from("42")).await.unwrap();

        assert_eq!(object.id, ObjectId::from("42"));
        assert!(object.favorite);

        let head = server.await.unwrap().to_lowercase();
        assert!(head.starts_with("get /api/object/42 http/1.1"));
        assert!(head.contains("authorization: bearer secret"));
    }

    #[tokio::test]
    async fn error_status_uses_server_message() {
        let (url, server) = serve_once(http_response(
            "404 NOT FOUND",
            r#"{"message": "Object not found or you don't have access to it."}"#,
        ))
        .await;

        let err = client(&url).get_object(&ObjectId::from("42")).await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().starts_with("Object not found"));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn error_status_without_body_uses_reason() {
        let (url, server) = serve_once(http_response("503 Service Unavailable", "")).await;

        let err = client(&url).get_object(&ObjectId::from("42")).await.unwrap_err();

        assert!(matches!(
            err,
            ApiError::Rejected { status: 503, ref message } if message == "Service Unavailable"
        ));
        server.await.unwrap();
    }
}
