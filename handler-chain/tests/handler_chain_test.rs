//! Integration tests for [`handler_chain::HandlerChain`].
//!
//! Covers: priority order, short-circuit on the first `Stop`, `Continue` when every handler
//! declines, and error propagation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use handler_chain::HandlerChain;
use wishbot_core::{DbotError, Handler, HandlerResponse, Message};

/// Records its label into a shared log and returns a fixed response.
struct RecordingHandler {
    label: &'static str,
    response: HandlerResponse,
    log: Arc<Mutex<Vec<&'static str>>>,
}

#[async_trait::async_trait]
impl Handler for RecordingHandler {
    async fn handle(&self, _message: &Message) -> wishbot_core::Result<HandlerResponse> {
        self.log.lock().unwrap().push(self.label);
        Ok(self.response)
    }
}

fn recording(
    label: &'static str,
    response: HandlerResponse,
    log: &Arc<Mutex<Vec<&'static str>>>,
) -> Arc<dyn Handler> {
    Arc::new(RecordingHandler {
        label,
        response,
        log: log.clone(),
    })
}

/// **Test: Handlers run in registration order; the first Stop ends the chain.**
#[tokio::test]
async fn test_first_stop_wins() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(recording("a", HandlerResponse::Continue, &log))
        .add_handler(recording("b", HandlerResponse::Stop, &log))
        .add_handler(recording("c", HandlerResponse::Stop, &log));

    let result = chain.handle(&Message::text(1, "hi")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(*log.lock().unwrap(), vec!["a", "b"]);
}

/// **Test: Every handler declines; chain reports Continue after running all of them.**
#[tokio::test]
async fn test_all_decline_returns_continue() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(recording("a", HandlerResponse::Continue, &log))
        .add_handler(recording("b", HandlerResponse::Continue, &log));

    let result = chain.handle(&Message::text(1, "hi")).await.unwrap();

    assert_eq!(result, HandlerResponse::Continue);
    assert_eq!(*log.lock().unwrap(), vec!["a", "b"]);
}

/// **Test: Handler names resolve to the concrete types behind `dyn Handler`, in priority order.**
#[tokio::test]
async fn test_handler_names_name_concrete_types() {
    struct Other;

    #[async_trait::async_trait]
    impl Handler for Other {
        async fn handle(&self, _message: &Message) -> wishbot_core::Result<HandlerResponse> {
            Ok(HandlerResponse::Continue)
        }
    }

    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(recording("a", HandlerResponse::Continue, &log))
        .add_handler(Arc::new(Other));

    assert_eq!(chain.handler_names(), vec!["RecordingHandler", "Other"]);

    let boxed: Arc<dyn Handler> = Arc::new(Other);
    assert!(boxed.name().ends_with("Other"));
    assert!(!boxed.name().contains("dyn "));
}

/// **Test: Empty chain declines.**
#[tokio::test]
async fn test_empty_chain_returns_continue() {
    let chain = HandlerChain::new();
    let result = chain.handle(&Message::text(1, "hi")).await.unwrap();
    assert_eq!(result, HandlerResponse::Continue);
}

/// **Test: A failing handler aborts the chain; later handlers never run.**
#[tokio::test]
async fn test_error_aborts_chain() {
    struct FailingHandler;

    #[async_trait::async_trait]
    impl Handler for FailingHandler {
        async fn handle(&self, _message: &Message) -> wishbot_core::Result<HandlerResponse> {
            Err(DbotError::Bot("send failed".to_string()))
        }
    }

    struct CountingHandler(Arc<AtomicUsize>);

    #[async_trait::async_trait]
    impl Handler for CountingHandler {
        async fn handle(&self, _message: &Message) -> wishbot_core::Result<HandlerResponse> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(HandlerResponse::Stop)
        }
    }

    let count = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(FailingHandler))
        .add_handler(Arc::new(CountingHandler(count.clone())));

    let result = chain.handle(&Message::text(1, "hi")).await;

    assert!(matches!(result, Err(DbotError::Bot(_))));
    assert_eq!(count.load(Ordering::SeqCst), 0);
}
