//! # Todoz Architecture
//!
//! Todoz is a **UI-agnostic to-do list library**. This is not a CLI application that
//! happens to have some library code: it's a library that happens to have a CLI client.
//!
//! That distinction drives the architecture and should guide all development.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host Layer (crates/todoz, or any other embedder)           │
//! │  - Parses input, renders the list, handles terminal I/O     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (session.rs)                                 │
//! │  - Owns the live list and the pending-input draft           │
//! │  - Dispatches operations, saves the slot after each one     │
//! │  - Returns structured results and notices, never prints     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  List Layer (list.rs, model.rs)                             │
//! │  - Pure list transformations on plain Rust types            │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract SlotStore trait: one slot, one value            │
//! │  - FileSlot (production), InMemorySlot (testing)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `session.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<...>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! The same core can serve a terminal client, a TUI, or an embedded widget.
//!
//! ## Testing Strategy
//!
//! 1. **List** (`list.rs`): thorough unit tests of the operation semantics.
//!    This is where the lion's share of testing lives.
//! 2. **Session** (`session.rs`): tests against `InMemorySlot`, verifying that
//!    every dispatch persists and that load recovery behaves.
//! 3. **Storage** (`store/`, `tests/`): real-filesystem tests with `tempfile`.
//!
//! ## Module Overview
//!
//! - [`session`]: The session facade, entry point for all operations
//! - [`list`]: The ordered list and its transformations
//! - [`model`]: Core data types (`TodoItem`, `Priority`, `MoveDirection`)
//! - [`store`]: Storage abstraction and implementations
//! - [`error`]: Error types

pub mod error;
pub mod list;
pub mod model;
pub mod session;
pub mod store;
