//! # CLI Behavior
//!
//! This is **one possible UI client** for folio, not the application itself.
//! It is the only place that knows about terminal I/O, prompts and exit codes.
//!
//! ## Commands
//!
//! - `folio skills list|categories|add|edit|delete`
//! - `folio posts list|show|categories|add|edit|delete`
//! - `folio seed`: load the sample portfolio into empty collections
//! - `folio config [--template]`: effective configuration, or a TOML template
//!
//! ## Output
//!
//! Records render as aligned tables; notices are coloured by level. With
//! `--json` the whole command result is printed as JSON instead. Logs go to
//! stderr (`FOLIO_LOG`, or `-v` for debug) so stdout only carries output.
//!
//! ## Deleting
//!
//! `delete` asks for confirmation on stdin unless `--yes` is given. Anything
//! other than an answer starting with `y` leaves the record in place.
//!
//! ## Exit Codes
//!
//! `0` on success, `1` when the command failed or reported an error notice (for
//! example a list whose fetch failed).
//!
//! ## Module Structure
//!
//! - `setup`: argument parsing via clap
//! - `commands`: context setup and per-command handlers
//! - `print`: tables, notices and JSON output

mod commands;
mod print;
pub mod setup;

pub use commands::run;
