//! HTTP protocol implementation.
//!
//! This module implements the minimal HTTP/1.1 subset the embedded server
//! speaks: one GET request per connection, one response, then close.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler driving one request-response exchange
//! - **`parser`**: Parses the incoming request head from a byte buffer
//! - **`request`**: Request-head representation and target/extension helpers
//! - **`response`**: Response-head representation and the fixed 404 document
//! - **`writer`**: Serializes response heads and streams file bodies to the client
//! - **`mime`**: MIME type lookup based on file extensions
//!
//! # Connection lifecycle
//!
//! Every accepted connection goes through the same straight line:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Accumulate bytes until the blank line
//!        └──────┬──────┘
//!               │ Head received (GET only; anything else just closes)
//!               ▼
//!        ┌──────────────────┐
//!        │   Resolving      │ ← Extension table + sandbox walk
//!        └──────┬───────────┘
//!               │ File found / any failure
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← 200 + streamed body, or the fixed 404
//!        └──────┬───────────┘
//!               │
//!               └─ Close (every response carries Connection: close)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use kiosk::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let root = Arc::new(PathBuf::from("web-root"));
//!     let listener = TcpListener::bind("127.0.0.1:8088").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let root = root.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, root);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
