//! delivery-checkout-server
//!
//! HTTP server exposing the checkout computations over axum.
//!
//! # Endpoints
//!
//! - `POST /shipping-quote` - Resolves the delivery fee against vouchers
//! - `POST /order-progress` - Projects a backend status onto the progress sequence
//!
//! # Usage
//!
//! ```bash
//! # Start the server
//! cargo run --bin delivery-checkout-server
//!
//! # Send a request
//! curl -X POST http://localhost:8080/shipping-quote \
//!   -H "Content-Type: application/json" \
//!   -d '{"delivery_info": {"base_fee": "30000"}, "vouchers": []}'
//! ```

use axum::{Router, routing::post};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use delivery_checkout_sample::api::axum_handler::{
    order_progress_handler, shipping_quote_handler,
};

#[tokio::main]
async fn main() {
    // Tracing initialization
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "delivery_checkout_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Router construction
    let app = Router::new()
        .route("/shipping-quote", post(shipping_quote_handler))
        .route("/order-progress", post(order_progress_handler))
        .layer(TraceLayer::new_for_http());

    // Server startup
    let address = SocketAddr::from(([0, 0, 0, 0], 8080));
    tracing::info!("Starting server on {}", address);

    let listener = tokio::net::TcpListener::bind(address).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
