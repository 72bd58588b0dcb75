//! # Jot Architecture
//!
//! Jot is a **UI-agnostic client library** for the Scratch notes service. This is not a CLI
//! application that happens to have some library code—it's a library that happens to have a
//! CLI client.
//!
//! All persistence lives in a remote backend (notes REST API plus object storage for
//! attachments). The client holds a transient in-memory snapshot of the note list and
//! unconditionally replaces it after any mutating operation—there is no local cache to
//! reconcile.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Screen Layer (screen.rs)              │
//! │  - Thin async facade over commands                          │
//! │  - screen.rs holds the home-screen state machine            │
//! │    (panels, filter terms, loading flags, render states)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic: filtering, find & replace, CRUD          │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No terminal I/O assumptions whatsoever                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Backend Layer (backend/)                                   │
//! │  - Abstract NotesBackend trait (async)                      │
//! │  - HttpBackend (production), InMemoryBackend (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, screen, commands, backend trait), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a TUI, a REST proxy, or any other UI.
//!
//! ## Cancellation
//!
//! Asynchronous screen operations (`load`, `find_replace`) take a
//! `tokio_util::sync::CancellationToken`. The token is checked before every
//! state-committing step, so a caller that tears the screen down mid-flight simply
//! suppresses further snapshot writes. In-flight requests are not aborted.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): Thorough unit tests of business logic against
//!    `InMemoryBackend`. This is where the lion's share of testing lives.
//! 2. **Screen** (`screen.rs`): State-machine tests covering panel transitions,
//!    filter precedence, render-state composition, and the find & replace lifecycle.
//! 3. **CLI** (`main.rs` + `args.rs`): `assert_cmd` tests for argument parsing and
//!    offline subcommands.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for one-shot operations
//! - [`screen`]: Home-screen state machine (panels, filters, render states)
//! - [`commands`]: Business logic for each operation
//! - [`backend`]: Backend abstraction and implementations
//! - [`model`]: Core data types (`Note`, `NoteUpdate`)
//! - [`session`]: Explicit auth/session context
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration
//! - [`error`]: Error types
//! - The CLI surface lives in the binary (`args.rs`, `main.rs`), not the lib API

pub mod api;
pub mod backend;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod screen;
pub mod session;
