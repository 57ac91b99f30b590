//! Article CMS core.
//!
//! The crate covers the algorithmic heart of a content backend: globally
//! unique slug allocation, tag reconciliation against a canonical tag set,
//! idempotent one-to-one SEO upserts, the article create/update/delete
//! orchestration tying them together, and a directive-aware Markdown
//! renderer. Transport, authentication and UI are external collaborators;
//! they talk to [`application::services::ApplicationServices`] and consume
//! the [`rendering`] tree.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod rendering;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber, honoring `RUST_LOG`. Embedding
/// hosts that bring their own subscriber can skip this.
pub fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
