//! The dispatch engine routing requests to handlers.
//!
//! Callers hand the [`Mediator`] a request value; the mediator classifies
//! it, resolves the one handler registered for that exact request type
//! through the injected single-instance resolver, invokes it, and returns
//! the result. Per call the stages are classify, resolve, invoke — a call
//! either completes all three or fails at the first stage that cannot
//! proceed. No retries, caching, or buffering.
//!
//! The mediator holds no mutable state: two resolver handles plus an
//! immutable declaration table built before first use. It is `Send + Sync`
//! and safe to share across any number of concurrent calls, provided the
//! injected resolvers are safe for concurrent reads.

use crate::error::{BuildError, DispatchError};
use crate::handler::{NotificationHandler, RequestHandler};
use crate::request::{Notification, Request, RequestKind, classify};
use crate::resolver::{ContractKey, MultiResolver, SingleResolver};
use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed request accepted by the type-erased dispatch path.
pub type ErasedRequest = Box<dyn Any + Send>;

/// Boxed response produced by the type-erased dispatch path.
///
/// Downcast to the response type named by the request's [`RequestKind`];
/// void requests yield a boxed `()`.
pub type ErasedResponse = Box<dyn Any + Send>;

type ErasedFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ErasedResponse, DispatchError>> + Send + 'a>>;

/// Type-erased dispatch closure: downcasts the boxed request to its concrete
/// type and runs it through the typed `send` path.
type ErasedSendFn = Box<dyn for<'a> Fn(&'a Mediator, ErasedRequest) -> ErasedFuture<'a> + Send + Sync>;

struct DispatchEntry {
    kind: RequestKind,
    invoke: ErasedSendFn,
}

fn dispatch_entry<R: Request>() -> DispatchEntry {
    let invoke: ErasedSendFn = Box::new(|mediator: &Mediator, request: ErasedRequest| {
        Box::pin(async move {
            let request = request
                .downcast::<R>()
                .map_err(|value| DispatchError::UnknownRequestType((*value).type_id()))?;
            let response = mediator.send(*request).await?;
            Ok(Box::new(response) as ErasedResponse)
        })
    });

    DispatchEntry {
        kind: classify::<R>(),
        invoke,
    }
}

/// Routes requests to their handlers without the caller naming the handler.
///
/// # Example
///
/// ```rust,ignore
/// let mut registry = Registry::new();
/// registry.register::<Ping, _>(PingHandler);
///
/// let mediator = Mediator::builder()
///     .container(Arc::new(registry))
///     .build()?;
///
/// let pong = mediator.send(Ping { message: "Ping".into() }).await?;
/// ```
pub struct Mediator {
    single: Arc<dyn SingleResolver>,
    multi: Arc<dyn MultiResolver>,
    table: HashMap<TypeId, DispatchEntry>,
}

impl Mediator {
    /// Create a mediator over the two resolver capabilities.
    ///
    /// The resulting mediator has an empty declaration table, so only the
    /// typed [`send`](Self::send) and [`publish`](Self::publish) paths are
    /// usable. Use [`builder`](Self::builder) to declare request types for
    /// the type-erased path.
    pub fn new(single: Arc<dyn SingleResolver>, multi: Arc<dyn MultiResolver>) -> Self {
        Self {
            single,
            multi,
            table: HashMap::new(),
        }
    }

    /// Start building a mediator with the fluent API.
    pub fn builder() -> MediatorBuilder {
        MediatorBuilder::new()
    }

    /// Dispatch a request to its unique handler and return the response.
    ///
    /// For void requests (`Response = ()`) this completes with no value once
    /// the handler finishes. Classification is settled by `R` itself at
    /// compile time; resolution fails with
    /// [`DispatchError::HandlerNotFound`] when the resolver knows no handler
    /// for `R`, and handler failures come back verbatim as
    /// [`DispatchError::Handler`].
    pub async fn send<R: Request>(&self, request: R) -> Result<R::Response, DispatchError> {
        let contract = ContractKey::request_handler::<R>();
        let instance =
            self.single
                .resolve_one(contract)
                .ok_or(DispatchError::HandlerNotFound {
                    request: type_name::<R>(),
                })?;
        let handler = instance
            .downcast_ref::<Arc<dyn RequestHandler<R>>>()
            .cloned()
            .ok_or(DispatchError::ContractViolation {
                contract: contract.name(),
            })?;

        handler.handle(request).await.map_err(DispatchError::Handler)
    }

    /// Dispatch a type-erased request.
    ///
    /// Classification happens at runtime against the declaration table: a
    /// value whose type was never declared fails with
    /// [`DispatchError::UnknownRequestType`] before the resolver is ever
    /// consulted. Declared requests are downcast and forwarded through the
    /// typed [`send`](Self::send) path, so resolution and invocation behave
    /// identically on both paths.
    pub async fn send_erased(&self, request: ErasedRequest) -> Result<ErasedResponse, DispatchError> {
        // Type of the boxed value, not of the box.
        let type_id = (*request).type_id();
        let entry = self
            .table
            .get(&type_id)
            .ok_or(DispatchError::UnknownRequestType(type_id))?;

        (entry.invoke)(self, request).await
    }

    /// Publish a notification to every subscribed handler.
    ///
    /// Subscribers are resolved through the multi-instance resolver and
    /// invoked sequentially in registration order. Zero subscribers is a
    /// successful no-op; the first handler failure aborts the fan-out and
    /// comes back verbatim.
    pub async fn publish<N: Notification>(&self, notification: N) -> Result<(), DispatchError> {
        let contract = ContractKey::notification_handler::<N>();
        for instance in self.multi.resolve_all(contract) {
            let handler = instance
                .downcast_ref::<Arc<dyn NotificationHandler<N>>>()
                .cloned()
                .ok_or(DispatchError::ContractViolation {
                    contract: contract.name(),
                })?;

            handler
                .handle(&notification)
                .await
                .map_err(DispatchError::Handler)?;
        }

        Ok(())
    }

    /// Look up the declared classification of a request type.
    ///
    /// Returns `None` for types never declared to the builder. This mirrors
    /// what [`send_erased`](Self::send_erased) consults before resolving.
    pub fn kind_of(&self, request: TypeId) -> Option<RequestKind> {
        self.table.get(&request).map(|entry| entry.kind)
    }
}

/// Builder for [`Mediator`] with fluent API.
///
/// Both resolvers are required; request types intended for the type-erased
/// path are declared here, once, before the mediator is shared.
///
/// # Example
///
/// ```rust,ignore
/// let mediator = Mediator::builder()
///     .single_resolver(registry.clone())
///     .multi_resolver(registry)
///     .declare::<Ping>()
///     .declare::<Jing>()
///     .build()?;
/// ```
pub struct MediatorBuilder {
    single: Option<Arc<dyn SingleResolver>>,
    multi: Option<Arc<dyn MultiResolver>>,
    table: HashMap<TypeId, DispatchEntry>,
}

impl MediatorBuilder {
    /// Create a new mediator builder.
    pub fn new() -> Self {
        Self {
            single: None,
            multi: None,
            table: HashMap::new(),
        }
    }

    /// Set the single-instance resolver (required).
    pub fn single_resolver(mut self, resolver: Arc<dyn SingleResolver>) -> Self {
        self.single = Some(resolver);
        self
    }

    /// Set the multi-instance resolver (required).
    pub fn multi_resolver(mut self, resolver: Arc<dyn MultiResolver>) -> Self {
        self.multi = Some(resolver);
        self
    }

    /// Set one container as both resolvers.
    ///
    /// Convenience for containers like [`Registry`](crate::Registry) that
    /// implement both capabilities.
    pub fn container<C>(mut self, container: Arc<C>) -> Self
    where
        C: SingleResolver + MultiResolver + 'static,
    {
        self.single = Some(container.clone());
        self.multi = Some(container);
        self
    }

    /// Declare request type `R` for the type-erased dispatch path.
    ///
    /// Records `R`'s classification and a monomorphized invoker in the
    /// declaration table. The typed `send` path needs no declaration.
    pub fn declare<R: Request>(mut self) -> Self {
        tracing::debug!(
            request = type_name::<R>(),
            kind = ?classify::<R>(),
            "declaring request type for erased dispatch"
        );
        self.table.insert(TypeId::of::<R>(), dispatch_entry::<R>());
        self
    }

    /// Build the mediator.
    ///
    /// Fails if either resolver is missing.
    pub fn build(self) -> Result<Mediator, BuildError> {
        let single = self.single.ok_or(BuildError::MissingSingleResolver)?;
        let multi = self.multi.ok_or(BuildError::MissingMultiResolver)?;

        Ok(Mediator {
            single,
            multi,
            table: self.table,
        })
    }
}

impl Default for MediatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
