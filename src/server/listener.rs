use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::{info, warn};
use url::Url;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::sandbox::{self, ResolveError, ResolvedFile};

/// The embedded HTTP server.
///
/// Owned by the hosting application and constructed once at startup;
/// collaborators hold it to read the bound port, build navigation URLs,
/// and re-resolve sandboxed paths outside the HTTP flow.
pub struct Server {
    listener: TcpListener,
    host: String,
    port: u16,
    root: Arc<PathBuf>,
    permits: Arc<Semaphore>,
}

impl Server {
    /// Binds the listening socket.
    ///
    /// Starts at `base_port` and walks upward one port at a time while
    /// binding fails, up to `port_attempts` ports. Fails with the exhausted
    /// range when none of them is free.
    pub async fn bind(cfg: &Config) -> anyhow::Result<Self> {
        for offset in 0..cfg.port_attempts {
            let Some(port) = cfg.base_port.checked_add(offset) else {
                break;
            };

            let addr = format!("{}:{}", cfg.host, port);
            match TcpListener::bind(&addr).await {
                Ok(listener) => {
                    info!("Listening on {}", addr);
                    return Ok(Self {
                        listener,
                        host: cfg.host.clone(),
                        port,
                        root: Arc::new(cfg.root.clone()),
                        permits: Arc::new(Semaphore::new(cfg.max_connections)),
                    });
                }
                Err(e) => {
                    warn!("can't bind port {}: {}, trying next", port, e);
                }
            }
        }

        anyhow::bail!(
            "no free port in {}..{}",
            cfg.base_port,
            cfg.base_port.saturating_add(cfg.port_attempts)
        )
    }

    /// The port the server actually bound.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Builds the URL a local client should navigate to for `path`.
    pub fn url_for(&self, path: &str) -> anyhow::Result<Url> {
        Ok(Url::parse(&format!(
            "http://{}:{}{}",
            self.host, self.port, path
        ))?)
    }

    /// Resolves a sandboxed path without going through a socket, for
    /// collaborators that need the file itself (saving a copy to disk).
    pub async fn resolve(&self, url_path: &str) -> Result<ResolvedFile, ResolveError> {
        sandbox::resolve(&self.root, url_path).await
    }

    /// Accepts connections for the server's lifetime, dispatching each to
    /// its own handler task. A handler failure is logged and affects
    /// nothing but its own connection.
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            // At the connection cap, acceptance waits for a handler to finish
            let permit = self.permits.clone().acquire_owned().await?;
            let (socket, peer) = self.listener.accept().await?;
            info!("Accepted connection from {}", peer);

            let root = self.root.clone();
            tokio::spawn(async move {
                let _permit = permit;
                let mut conn = Connection::new(socket, root);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error from {}: {}", peer, e);
                }
            });
        }
    }
}
