//! # Folio Architecture
//!
//! Folio is the content layer of a personal portfolio site: the skills shown on
//! the public pages and the blog posts behind them, plus the admin tools that
//! edit both. It is a UI-agnostic library with a CLI client, not a CLI with some
//! library code.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (folio binary)                                   │
//! │  - Parses arguments, renders output, picks exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - FolioApi<S>, one method per user-facing operation        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Drives caches and forms the way a view would             │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View State (cache.rs, categories.rs, form/)                │
//! │  - ContentCache: items, loading, category filter            │
//! │  - FormController: drafts, validation, submit state         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ContentStore<T> trait                                    │
//! │  - LocalStore (key-value files), RemoteStore (table API)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One Store, Chosen Once
//!
//! Which backend holds the content is a deployment decision made from
//! [`config::FolioConfig`] when the binary starts. Both bindings honour the same
//! [`store::ContentStore`] contract, so everything above the storage layer is
//! written once.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes and returns plain Rust values. User-facing
//! outcomes travel as [`notify::Notice`] values; diagnostics go through
//! `tracing`. Nothing here writes to stdout or exits the process.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: one module per operation
//! - [`cache`]: per-view content cache and refresh protocol
//! - [`categories`]: category index and filter
//! - [`form`]: draft editing and submission
//! - [`store`]: storage abstraction and both bindings
//! - [`model`]: `Skill`, `BlogPost` and the `Record` trait
//! - [`notify`]: success and error notices
//! - [`seed`]: sample portfolio content
//! - [`config`]: configuration loading
//! - [`error`]: error types

pub mod api;
pub mod cache;
pub mod categories;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod notify;
pub mod seed;
pub mod store;
