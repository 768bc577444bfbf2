//! Integration tests for end-to-end request dispatch.

use courier::prelude::*;
use std::any::TypeId;
use std::sync::atomic::{AtomicUsize, Ordering};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

#[derive(Debug, PartialEq)]
struct Ping {
    message: String,
}

impl Request for Ping {
    type Response = Pong;
}

#[derive(Debug, PartialEq)]
struct Pong {
    message: String,
}

struct PingHandler;

#[async_trait]
impl RequestHandler<Ping> for PingHandler {
    async fn handle(&self, request: Ping) -> Result<Pong, HandlerError> {
        Ok(Pong {
            message: format!("{} Pong", request.message),
        })
    }
}

#[derive(Debug)]
struct Jing {
    #[allow(dead_code)]
    message: String,
}

impl Request for Jing {
    type Response = ();
}

struct JingHandler;

#[async_trait]
impl RequestHandler<Jing> for JingHandler {
    async fn handle(&self, _request: Jing) -> Result<(), HandlerError> {
        // empty handle
        Ok(())
    }
}

struct Unhandled;

impl Request for Unhandled {
    type Response = String;
}

struct Failing;

impl Request for Failing {
    type Response = String;
}

struct FailingHandler;

#[async_trait]
impl RequestHandler<Failing> for FailingHandler {
    async fn handle(&self, _request: Failing) -> Result<String, HandlerError> {
        Err("boom".into())
    }
}

fn mediator_with_handlers() -> Mediator {
    let mut registry = Registry::new();
    registry.register::<Ping, _>(PingHandler);
    registry.register::<Jing, _>(JingHandler);
    registry.register::<Failing, _>(FailingHandler);

    Mediator::builder()
        .container(Arc::new(registry))
        .declare::<Ping>()
        .declare::<Jing>()
        .build()
        .expect("mediator should build")
}

#[tokio::test]
async fn ping_round_trips_through_its_handler() {
    init_tracing();
    let mediator = mediator_with_handlers();

    let pong = mediator
        .send(Ping {
            message: "Ping".to_string(),
        })
        .await
        .expect("send should succeed");

    assert_eq!(
        pong,
        Pong {
            message: "Ping Pong".to_string(),
        }
    );
}

#[tokio::test]
async fn void_request_completes_without_a_value() {
    init_tracing();
    let mediator = mediator_with_handlers();

    mediator
        .send(Jing {
            message: "Jing".to_string(),
        })
        .await
        .expect("void send should succeed");
}

#[tokio::test]
async fn missing_handler_is_an_error_not_a_silent_no_op() {
    init_tracing();
    let mediator = mediator_with_handlers();

    let err = mediator.send(Unhandled).await.unwrap_err();
    assert!(matches!(err, DispatchError::HandlerNotFound { .. }));
}

#[tokio::test]
async fn handler_failure_passes_through_verbatim() {
    init_tracing();
    let mediator = mediator_with_handlers();

    let err = mediator.send(Failing).await.unwrap_err();
    assert!(matches!(err, DispatchError::Handler(_)));
    assert_eq!(err.to_string(), "boom");
}

#[tokio::test]
async fn erased_dispatch_round_trips() {
    init_tracing();
    let mediator = mediator_with_handlers();

    let response = mediator
        .send_erased(Box::new(Ping {
            message: "Ping".to_string(),
        }))
        .await
        .expect("erased send should succeed");

    let pong = response.downcast::<Pong>().expect("response should be Pong");
    assert_eq!(pong.message, "Ping Pong");
}

#[tokio::test]
async fn erased_void_dispatch_yields_unit() {
    init_tracing();
    let mediator = mediator_with_handlers();

    let response = mediator
        .send_erased(Box::new(Jing {
            message: "Jing".to_string(),
        }))
        .await
        .expect("erased void send should succeed");

    assert!(response.downcast::<()>().is_ok());
}

#[tokio::test]
async fn erased_classification_reports_declared_kinds() {
    init_tracing();
    let mediator = mediator_with_handlers();

    assert_eq!(mediator.kind_of(TypeId::of::<Jing>()), Some(RequestKind::Void));
    assert_eq!(
        mediator.kind_of(TypeId::of::<Ping>()),
        Some(RequestKind::Response {
            response: TypeKey::of::<Pong>(),
        })
    );
}

/// Stub resolver counting lookups, to prove classification failures never
/// reach resolution.
#[derive(Default)]
struct CountingResolver {
    calls: AtomicUsize,
}

impl SingleResolver for CountingResolver {
    fn resolve_one(&self, _contract: ContractKey) -> Option<Instance> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        None
    }
}

impl MultiResolver for CountingResolver {
    fn resolve_all(&self, _contract: ContractKey) -> Vec<Instance> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Vec::new()
    }
}

/// Stub resolver that violates the instance convention: the erased value is
/// not the `Arc`'d contract trait object.
struct WrongShapeResolver;

impl SingleResolver for WrongShapeResolver {
    fn resolve_one(&self, _contract: ContractKey) -> Option<Instance> {
        Some(Arc::new(42_u32))
    }
}

impl MultiResolver for WrongShapeResolver {
    fn resolve_all(&self, _contract: ContractKey) -> Vec<Instance> {
        vec![Arc::new(42_u32)]
    }
}

#[tokio::test]
async fn wrong_shaped_instance_is_a_contract_violation() {
    init_tracing();
    let mediator = Mediator::builder()
        .container(Arc::new(WrongShapeResolver))
        .build()
        .expect("mediator should build");

    let err = mediator
        .send(Ping {
            message: "Ping".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, DispatchError::ContractViolation { .. }));
}

#[tokio::test]
async fn new_wires_resolvers_for_the_typed_path() {
    init_tracing();
    let mut registry = Registry::new();
    registry.register::<Ping, _>(PingHandler);
    let registry = Arc::new(registry);

    let mediator = Mediator::new(registry.clone(), registry);

    let pong = mediator
        .send(Ping {
            message: "Ping".to_string(),
        })
        .await
        .expect("typed send should succeed");
    assert_eq!(pong.message, "Ping Pong");

    // Without declarations the erased path rejects everything.
    let err = mediator
        .send_erased(Box::new(Ping {
            message: "Ping".to_string(),
        }))
        .await
        .unwrap_err();
    assert!(matches!(err, DispatchError::UnknownRequestType(_)));
}

struct NotARequest;

#[tokio::test]
async fn undeclared_erased_type_fails_before_any_resolution() {
    init_tracing();
    let resolver = Arc::new(CountingResolver::default());
    let mediator = Mediator::builder()
        .container(resolver.clone())
        .build()
        .expect("mediator should build");

    let err = mediator.send_erased(Box::new(NotARequest)).await.unwrap_err();

    assert!(matches!(err, DispatchError::UnknownRequestType(_)));
    assert_eq!(resolver.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn concurrent_sends_share_one_mediator() {
    init_tracing();
    let mediator = Arc::new(mediator_with_handlers());

    let a = mediator.send(Ping {
        message: "one".to_string(),
    });
    let b = mediator.send(Ping {
        message: "two".to_string(),
    });
    let (a, b) = tokio::join!(a, b);

    assert_eq!(a.unwrap().message, "one Pong");
    assert_eq!(b.unwrap().message, "two Pong");
}
