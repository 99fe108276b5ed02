//! # hashkv
//!
//! A minimal single-node, file-backed key-value store:
//! - One storage directory per store, one file per key
//! - Entry files named by the BLAKE3 digest of the key (collision
//!   resistant, filesystem safe, fixed width)
//! - All operations serialized through one worker thread
//! - A closed four-variant error taxonomy callers can match exhaustively
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                  Caller(s)                  │
//! └──────────────────────┬──────────────────────┘
//!                        │
//! ┌──────────────────────▼──────────────────────┐
//! │               Store (handle)                │
//! │            closed-flag check                │
//! └──────────────────────┬──────────────────────┘
//!                        │
//! ┌──────────────────────▼──────────────────────┐
//! │        SerialExecutor (FIFO worker)         │
//! └──────────────────────┬──────────────────────┘
//!                        │
//!          ┌─────────────┴─────────────┐
//!          ▼                           ▼
//!   ┌─────────────┐            ┌─────────────┐
//!   │  validator  │            │   mapper    │
//!   └─────────────┘            └──────┬──────┘
//!                                     │
//!                              ┌──────▼──────┐
//!                              │ filesystem  │
//!                              └─────────────┘
//! ```
//!
//! ## Basic Usage
//!
//! ```no_run
//! use hashkv::{Config, Store};
//!
//! let store = Store::open(Config::builder().dir("./data").build())?;
//!
//! store.put("auth_token", &b"abc123"[..])?;
//! assert_eq!(&store.get("auth_token")?[..], b"abc123");
//!
//! store.remove("auth_token")?;
//! store.close();
//! # Ok::<(), hashkv::KvError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

mod engine;
mod executor;
mod key;
mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::Config;
pub use error::{KvError, Result};
pub use key::{InvalidKeyReason, MAX_KEY_LEN};
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of hashkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
