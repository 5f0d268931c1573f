//! # Folio CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, and this file
//! only invokes `cli::run()` and turns its outcome into a process exit code.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/folio/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - config, logging, backend selection, dispatch             │
//! │    (commands.rs)                                            │
//! │  - terminal rendering (print.rs)                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/folioapp/src/api.rs)                     │
//! │  - FolioApi<S>, returns structured CmdResult values         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns every
//! user-facing concern: arguments, prompts, rendering, stderr logging and exit
//! codes.

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
