//! Minimal Ping → Pong walkthrough.
//!
//! Registers one request handler and one notification subscriber, then
//! dispatches a request and publishes a notification through the mediator.

use courier::prelude::*;

struct Ping {
    message: String,
}

struct Pong {
    message: String,
}

impl Request for Ping {
    type Response = Pong;
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

struct Ponged {
    message: String,
}

impl Notification for Ponged {}

struct PongedLogger;

#[async_trait]
impl NotificationHandler<Ponged> for PongedLogger {
    async fn handle(&self, notification: &Ponged) -> Result<(), HandlerError> {
        println!("observed: {}", notification.message);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut registry = Registry::new();
    registry.register::<Ping, _>(PingHandler);
    registry.subscribe::<Ponged, _>(PongedLogger);

    let mediator = Mediator::builder().container(Arc::new(registry)).build()?;

    let pong = mediator
        .send(Ping {
            message: "Ping".to_string(),
        })
        .await?;
    println!("response: {}", pong.message);

    mediator
        .publish(Ponged {
            message: pong.message,
        })
        .await?;

    Ok(())
}
