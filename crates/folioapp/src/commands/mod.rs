//! # Command Layer
//!
//! Each command lives in its own submodule and is a plain function over a
//! [`ContentStore`](crate::store::ContentStore). Commands drive the same pieces a
//! view would: a [`ContentCache`](crate::cache::ContentCache) for reading, a
//! [`FormController`](crate::form::FormController) for writing, and a
//! `Vec<Notice>` as the notifier.
//!
//! Commands never print, prompt or pick exit codes. They return a [`CmdResult`]
//! and the UI decides how to render it.
//!
//! ## Command Modules
//!
//! - [`list`]: visible records of a type, with the category filter applied
//! - [`show`]: one record in full
//! - [`create`]: blank draft, field edits, submit
//! - [`update`]: draft copied from the stored record, field edits, submit
//! - [`delete`]: confirmed removal
//! - [`categories`]: category index with counts
//! - [`seed`]: load the sample portfolio into an empty store

use crate::notify::Notice;
use serde::Serialize;

pub mod categories;
pub mod create;
pub mod delete;
pub mod list;
pub mod seed;
pub mod show;
pub mod update;

#[derive(Debug, Clone, Serialize)]
pub struct CmdResult<T> {
    /// Records to display.
    pub listed: Vec<T>,
    /// Records written by the command.
    pub affected: Vec<T>,
    /// `(category, count)` pairs, for commands that derive the index.
    pub categories: Vec<(String, usize)>,
    /// Notices raised while the command ran, in order.
    pub messages: Vec<Notice>,
}

impl<T> Default for CmdResult<T> {
    fn default() -> Self {
        Self {
            listed: Vec::new(),
            affected: Vec::new(),
            categories: Vec::new(),
            messages: Vec::new(),
        }
    }
}

impl<T> CmdResult<T> {
    pub fn add_message(&mut self, message: Notice) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, listed: Vec<T>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_affected(mut self, affected: Vec<T>) -> Self {
        self.affected = affected;
        self
    }

    pub fn with_messages(mut self, messages: Vec<Notice>) -> Self {
        self.messages = messages;
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(Notice::is_error)
    }
}
