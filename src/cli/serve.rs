//! `serve` command: run the HTTP API

use std::sync::Arc;

use crate::config::settings::Settings;
use crate::error::{BodaiError, BodaiResult};
use crate::server::{self, AppState};
use crate::storage::Storage;

/// Start the API and block until it stops
///
/// `bind` overrides the configured listen address.
pub fn handle_serve_command(
    storage: Storage,
    mut settings: Settings,
    bind: Option<String>,
) -> BodaiResult<()> {
    if let Some(bind) = bind {
        settings.server.bind = bind;
    }
    server::init_tracing(&settings.server.log_filter);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| BodaiError::Server(format!("Failed to start runtime: {}", e)))?;

    let state = Arc::new(AppState::new(storage, settings));
    runtime.block_on(server::serve(state))
}
