//! # Server Bootstrap
//!
//! Binds the listener, spawns the axum server with graceful shutdown, and
//! returns a handle for lifecycle management. The same path serves the
//! production binary and integration tests (bind to port 0 for an ephemeral
//! port).

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::error::{Result, ServerError};
use crate::web::{create_app, ClientEnvWebState};

pub struct ServerBootstrap;

impl ServerBootstrap {
    /// Bind to `config.web.bind_address` and start serving in the background
    pub async fn start(state: Arc<ClientEnvWebState>) -> Result<ServerHandle> {
        let bind_address = state.config.web.socket_addr()?;

        let listener = TcpListener::bind(bind_address)
            .await
            .map_err(|source| ServerError::Bind {
                address: bind_address.to_string(),
                source,
            })?;

        let local_addr = listener.local_addr().map_err(|source| ServerError::Bind {
            address: bind_address.to_string(),
            source,
        })?;

        let app = create_app(state);
        let (shutdown_sender, shutdown_receiver) = oneshot::channel::<()>();

        let join_handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_receiver.await;
                })
                .await
                .map_err(|source| ServerError::Serve {
                    address: local_addr,
                    source,
                })
        });

        info!(address = %local_addr, "Web server listening");

        Ok(ServerHandle {
            local_addr,
            shutdown_sender: Some(shutdown_sender),
            join_handle,
        })
    }
}

/// Running server handle
#[derive(Debug)]
pub struct ServerHandle {
    local_addr: SocketAddr,
    /// Shutdown signal sender (Some while running)
    shutdown_sender: Option<oneshot::Sender<()>>,
    join_handle: JoinHandle<Result<()>>,
}

impl ServerHandle {
    /// Address actually bound, with the real port when port 0 was requested
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    pub fn is_running(&self) -> bool {
        self.shutdown_sender.is_some() && !self.join_handle.is_finished()
    }

    /// Stop accepting connections, drain in-flight requests, and wait for the server task
    pub async fn shutdown(mut self) -> Result<()> {
        match self.shutdown_sender.take() {
            Some(sender) => {
                if sender.send(()).is_err() {
                    warn!("Web server already stopped before shutdown was requested");
                }
                info!(address = %self.local_addr, "Web server shutdown requested");
            }
            None => warn!("Web server shutdown already requested"),
        }

        self.join_handle
            .await
            .map_err(|e| ServerError::Shutdown(e.to_string()))?
    }
}
