//! Reference container implementing both resolver capabilities.
//!
//! `Registry` is the in-crate stand-in for whatever dependency container
//! hosts the application: populate it once at startup, wrap it in an `Arc`,
//! and hand it to the mediator as both the single- and multi-instance
//! resolver. Hosts with a real container implement
//! [`SingleResolver`]/[`MultiResolver`] themselves and skip this type.

use crate::handler::{NotificationHandler, RequestHandler};
use crate::request::{Notification, Request};
use crate::resolver::{ContractKey, Instance, MultiResolver, SingleResolver};
use std::any::type_name;
use std::collections::HashMap;
use std::sync::Arc;

/// Maps handler contracts to registered instances.
///
/// Request handlers are unique per request type (a later registration
/// replaces the earlier one); notification handlers accumulate in
/// subscription order.
///
/// # Example
///
/// ```rust,ignore
/// let mut registry = Registry::new();
/// registry.register::<Ping, _>(PingHandler);
/// registry.subscribe::<Pinged, _>(AuditSubscriber);
///
/// let registry = Arc::new(registry);
/// let mediator = Mediator::builder().container(registry).build()?;
/// ```
#[derive(Default)]
pub struct Registry {
    single: HashMap<ContractKey, Instance>,
    multi: HashMap<ContractKey, Vec<Instance>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the unique handler for request type `R`.
    ///
    /// Replaces any previously registered handler for `R`, keeping the
    /// at-most-one invariant of the single-instance resolver.
    pub fn register<R, H>(&mut self, handler: H)
    where
        R: Request,
        H: RequestHandler<R> + 'static,
    {
        let contract = ContractKey::request_handler::<R>();
        tracing::debug!(
            request = type_name::<R>(),
            handler = type_name::<H>(),
            "registering request handler"
        );

        let erased: Arc<dyn RequestHandler<R>> = Arc::new(handler);
        if self.single.insert(contract, Arc::new(erased)).is_some() {
            tracing::warn!(
                request = type_name::<R>(),
                "replacing previously registered request handler"
            );
        }
    }

    /// Subscribe a handler to notification type `N`.
    ///
    /// Subscribers accumulate; fan-out visits them in subscription order.
    pub fn subscribe<N, H>(&mut self, handler: H)
    where
        N: Notification,
        H: NotificationHandler<N> + 'static,
    {
        let contract = ContractKey::notification_handler::<N>();
        tracing::debug!(
            notification = type_name::<N>(),
            handler = type_name::<H>(),
            "subscribing notification handler"
        );

        let erased: Arc<dyn NotificationHandler<N>> = Arc::new(handler);
        self.multi.entry(contract).or_default().push(Arc::new(erased));
    }

    /// Whether a request handler is registered for `R`.
    pub fn has_handler<R: Request>(&self) -> bool {
        self.single.contains_key(&ContractKey::request_handler::<R>())
    }

    /// Number of registered request handlers.
    pub fn handler_count(&self) -> usize {
        self.single.len()
    }

    /// Number of subscribers for notification type `N`.
    pub fn subscriber_count<N: Notification>(&self) -> usize {
        self.multi
            .get(&ContractKey::notification_handler::<N>())
            .map_or(0, Vec::len)
    }
}

impl SingleResolver for Registry {
    fn resolve_one(&self, contract: ContractKey) -> Option<Instance> {
        self.single.get(&contract).cloned()
    }
}

impl MultiResolver for Registry {
    fn resolve_all(&self, contract: ContractKey) -> Vec<Instance> {
        self.multi.get(&contract).cloned().unwrap_or_default()
    }
}
