// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer - Concrete adapters for the application ports.
//!
//! - [`memory`]: In-memory document store and fixed-session auth provider,
//!   used by `main.rs` as the demo backend and by integration tests.
//!
//! A remote adapter binding an actual managed service would live here too;
//! the UI layer is written against the ports only.

pub mod memory;

pub use memory::{FixedSession, MemoryStore};
