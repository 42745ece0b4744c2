//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber for the service.
//!
//! - **Filter**: taken from `RUST_LOG`, falling back to `product_catalog=info`.
//! - **Format**: `compact` for terminals, `json` for log collectors.
//! - **Targets hidden**: spans already name the request (`request{pattern=...}`).
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Payloads of every request
//! RUST_LOG=product_catalog=debug cargo run
//!
//! # One JSON object per line
//! LOG_FORMAT=json cargo run
//! ```
//!
//! With `RUST_LOG=debug` a single request looks like:
//!
//! ```text
//! DEBUG create_product: Sending request params=ProductCreate { name: "Keyboard", price: 49.9 }
//! DEBUG request{pattern="create_product"}:create: create called params=ProductCreate { .. }
//! INFO request{pattern="create_product"}:create: Created product_id=1
//! ```
use crate::config::LogFormat;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "product_catalog=info";

pub fn setup_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false); // Spans carry the message pattern instead

    match format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Json => builder.json().init(),
    }
}
