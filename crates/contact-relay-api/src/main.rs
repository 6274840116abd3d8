use contact_relay_api::RelayContext;
use lambda_http::{Error, Request, run, service_fn};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing subscriber for structured logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .json()
        .init();

    info!("Starting contact relay Lambda function");

    let ctx = RelayContext::new()?;

    run(service_fn(|event: Request| {
        let ctx = ctx.clone();
        async move { contact_relay_api::handler(ctx, event).await }
    }))
    .await
}
