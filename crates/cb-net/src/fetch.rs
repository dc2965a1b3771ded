//! Fire-and-forget comments fetch
//!
//! The fetch action creator: issue the GET, return a handle immediately,
//! deliver the resolution to a continuation. Translation from raw records
//! to board comments happens here, so the continuation only sees display
//! strings.

use std::sync::Arc;

use cb_core::Comment;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::error::NetError;
use crate::gateway::CommentsGateway;
use crate::record::CommentRecord;

/// Handle to an in-flight comments fetch
pub struct FetchHandle {
    task: JoinHandle<()>,
}

impl FetchHandle {
    /// Abort the fetch. The continuation will not run.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Whether the fetch task has completed or been cancelled
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the fetch to settle. Used by drivers that need the
    /// resolution flushed deterministically before inspecting state.
    pub async fn wait(self) {
        if let Err(err) = self.task.await {
            if !err.is_cancelled() {
                warn!(error = %err, "fetch task failed");
            }
        }
    }
}

/// Issue a GET to the comments endpoint without blocking the caller.
///
/// The continuation receives the translated comments (or the error) once
/// the request settles; it runs on the fetch task, so it must be `Send`.
/// Cancelling the returned handle prevents the continuation from running.
pub fn fetch_comments<F>(gateway: Arc<dyn CommentsGateway>, on_resolve: F) -> FetchHandle
where
    F: FnOnce(Result<Vec<Comment>, NetError>) + Send + 'static,
{
    let task = tokio::spawn(async move {
        let outcome = gateway.fetch_comments().await.map(|records| {
            records
                .into_iter()
                .map(CommentRecord::into_comment)
                .collect()
        });
        on_resolve(outcome);
    });
    FetchHandle { task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    use crate::gateway::HttpCommentsGateway;

    fn stubbed_gateway(server: &MockServer) -> Arc<dyn CommentsGateway> {
        Arc::new(HttpCommentsGateway::new(server.url("/comments")).unwrap())
    }

    #[tokio::test]
    async fn test_resolution_delivers_translated_comments() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/comments");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([
                    { "name": "Fetched #1" },
                    { "name": "Fetched #2" }
                ]));
        });

        let (tx, rx) = flume::unbounded();
        let handle = fetch_comments(stubbed_gateway(&server), move |outcome| {
            let _ = tx.send(outcome);
        });
        handle.wait().await;

        let outcome = rx.try_recv().unwrap();
        assert_eq!(
            outcome.unwrap(),
            vec!["Fetched #1".to_string(), "Fetched #2".to_string()]
        );
    }

    #[tokio::test]
    async fn test_failure_reaches_the_continuation() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/comments");
            then.status(503);
        });

        let (tx, rx) = flume::unbounded();
        let handle = fetch_comments(stubbed_gateway(&server), move |outcome| {
            let _ = tx.send(outcome);
        });
        handle.wait().await;

        let outcome = rx.try_recv().unwrap();
        assert!(matches!(outcome, Err(NetError::Status(_))));
    }

    #[tokio::test]
    async fn test_cancel_prevents_the_continuation() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/comments");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([]))
                .delay(Duration::from_secs(5));
        });

        let (tx, rx) = flume::unbounded();
        let handle = fetch_comments(stubbed_gateway(&server), move |outcome| {
            let _ = tx.send(outcome);
        });
        handle.cancel();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(rx.try_recv().is_err());
    }
}
