use futures::future::{AbortHandle, Abortable, Aborted};
use tracing::debug;

use crate::api::{ApiError, SuggestionSource};

#[derive(Debug, thiserror::Error)]
pub enum CompleteError {
    /// The request was aborted because a newer one was issued.
    #[error("completion request superseded by a newer one")]
    Superseded,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Autocomplete session for a single input field: at most one suggestion
/// request is outstanding at a time. Issuing a new request aborts the
/// previous one, which then resolves to [`CompleteError::Superseded`].
/// No queueing, no retry.
pub struct CompletionSession<S> {
    source: S,
    inflight: Option<AbortHandle>,
}

impl<S: SuggestionSource + Clone> CompletionSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            inflight: None,
        }
    }

    /// Start a suggestion request for `term`, aborting any prior in-flight
    /// request of this session. The returned future resolves to the
    /// suggestions, or `Superseded` if another `request` call overtook it.
    pub fn request(
        &mut self,
        term: &str,
    ) -> impl Future<Output = Result<Vec<String>, CompleteError>> + use<S> {
        if let Some(prev) = self.inflight.take() {
            debug!("aborting superseded completion request");
            prev.abort();
        }

        let (handle, registration) = AbortHandle::new_pair();
        self.inflight = Some(handle);

        let source = self.source.clone();
        let term = term.to_string();
        let fut = Abortable::new(async move { source.complete(&term).await }, registration);

        async move {
            match fut.await {
                Ok(result) => Ok(result?),
                Err(Aborted) => Err(CompleteError::Superseded),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct MockSource {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl MockSource {
        fn new() -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn captured_terms(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl SuggestionSource for MockSource {
        async fn complete(&self, term: &str) -> Result<Vec<String>, ApiError> {
            self.calls.lock().unwrap().push(term.to_string());
            Ok(vec![format!("{term}t"), format!("{term}st")])
        }
    }

    #[derive(Clone)]
    struct FailingSource;

    impl SuggestionSource for FailingSource {
        async fn complete(&self, _term: &str) -> Result<Vec<String>, ApiError> {
            Err(ApiError::Api {
                code: 500,
                message: "boom".into(),
            })
        }
    }

    #[tokio::test]
    async fn single_request_resolves_to_suggestions() {
        let mut session = CompletionSession::new(MockSource::new());
        let suggestions = session.request("ru").await.unwrap();
        assert_eq!(suggestions, vec!["rut", "rust"]);
    }

    #[tokio::test]
    async fn newer_request_supersedes_older() {
        let source = MockSource::new();
        let mut session = CompletionSession::new(source.clone());

        let first = session.request("r");
        let second = session.request("ru");

        assert!(matches!(first.await, Err(CompleteError::Superseded)));
        assert_eq!(second.await.unwrap(), vec!["rut", "rust"]);

        // The aborted request never reached the source.
        assert_eq!(source.captured_terms(), vec!["ru"]);
    }

    #[tokio::test]
    async fn completed_request_does_not_poison_the_next() {
        let mut session = CompletionSession::new(MockSource::new());
        assert!(session.request("a").await.is_ok());
        assert!(session.request("ab").await.is_ok());
    }

    #[tokio::test]
    async fn source_errors_pass_through() {
        let mut session = CompletionSession::new(FailingSource);
        match session.request("x").await {
            Err(CompleteError::Api(ApiError::Api { code: 500, .. })) => {}
            other => panic!("expected Api(500), got: {other:?}"),
        }
    }
}
