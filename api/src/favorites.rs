//! Marking objects as favorites of the current user.

use reqwest::Method;

use crate::client::MwdbClient;
use crate::error::ApiError;
use crate::object::ObjectId;

/// A trait for any service that can mark and unmark favorite objects.
///
/// Both requests express an intent: adding a favorite twice, or removing
/// one that is not there, leaves the server in the requested state.
#[allow(async_fn_in_trait)]
pub trait FavoriteApi {
    /// Marks the object as a favorite of the current user.
    async fn add_object_favorite(&self, id: &ObjectId) -> Result<(), ApiError>;

    /// Removes the object from the current user's favorites.
    async fn remove_object_favorite(&self, id: &ObjectId) -> Result<(), ApiError>;
}

impl FavoriteApi for MwdbClient {
    async fn add_object_favorite(&self, id: &ObjectId) -> Result<(), ApiError> {
        self.send(Method::PUT, &["object", id.as_str(), "favorite"])
            .await
            .map(drop)
    }

    async fn remove_object_favorite(&self, id: &ObjectId) -> Result<(), ApiError> {
        self.send(Method::DELETE, &["object", id.as_str(), "favorite"])
            .await
            .map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::http_response;
    use crate::client::tests::serve_once;
    use crate::prefs::client_prefs::ClientPrefs;

    #[tokio::test]
    async fn add_favorite_is_a_put() {
        let (url, server) = serve_once(http_response("200 OK", "{}")).await;
        let client = MwdbClient::new(ClientPrefs::new(url, None)).unwrap();

        client.add_object_favorite(&ObjectId::from("42")).await.unwrap();

        let head = server.await.unwrap();
        assert!(head.starts_with("PUT /api/object/42/favorite HTTP/1.1"));
    }

    #[tokio::test]
    async fn remove_favorite_is_a_delete() {
        let (url, server) = serve_once(http_response("200 OK", "{}")).await;
        let client = MwdbClient::new(ClientPrefs::new(url, None)).unwrap();

        client.remove_object_favorite(&ObjectId::from("42")).await.unwrap();

        let head = server.await.unwrap();
        assert!(head.starts_with("DELETE /api/object/42/favorite HTTP/1.1"));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        // nothing listens on the discard port in the test environment
        let client = MwdbClient::new(ClientPrefs::new("http://127.0.0.1:9/api/", None)).unwrap();

        let err = client
            .add_object_favorite(&ObjectId::from("42"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.status(), None);
    }
}
