//! # Core Application Logic
//!
//! This module contains Quill's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Composer (state)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   genai    │      │  media /   │
//!     │  Adapter   │      │   client   │      │  speech    │
//!     │ (ratatui)  │      │ (reqwest)  │      │  (tokio)   │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Composer` struct — all draft/attachment state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Layered TOML/env/CLI configuration

pub mod action;
pub mod config;
pub mod state;
