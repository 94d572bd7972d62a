//! # Courtside
//!
//! A round-robin league server, usable both as a standalone binary and as
//! a library.
//!
//! ## Library Usage
//!
//! ```toml
//! [dependencies]
//! courtside = { version = "0.1", default-features = false }
//! ```
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use std::path::PathBuf;
//! use courtside::league::ScoreRules;
//! use courtside::server::{AppState, create_router};
//! use courtside::store::{SqliteStore, Store};
//!
//! let store = SqliteStore::new(&PathBuf::from("./data/courtside.db")).unwrap();
//! store.initialize().unwrap();
//!
//! let state = Arc::new(AppState {
//!     store: Arc::new(store),
//!     rules: ScoreRules::default(),
//! });
//! let router = create_router(state);
//! // Serve with axum...
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): Includes the server binary's CLI. Disable with
//!   `default-features = false`.

pub mod config;
pub mod error;
pub mod league;
pub mod server;
pub mod store;
pub mod types;
