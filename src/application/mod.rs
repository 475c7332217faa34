// SPDX-License-Identifier: MPL-2.0
//! Application layer - Port definitions for the external collaborators.
//!
//! The application layer sits between the domain layer (pure feed types) and
//! the infrastructure/presentation layers. It defines the trait contracts the
//! UI expects from the managed services this client delegates to:
//!
//! - [`port::store`]: Document store read/write
//! - [`port::auth`]: Authentication provider
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer drives the ports through Iced `Task`s

pub mod port;
