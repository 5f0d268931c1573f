//! # Form Controller
//!
//! Admin editing goes through a draft. A [`FormController`] owns at most one
//! draft at a time, either for a new record ([`FormMode::Create`]) or as an
//! independent copy of an existing one ([`FormMode::Edit`]). Edits touch the
//! draft only; the store sees nothing until a submit passes validation.
//!
//! ## States
//!
//! ```text
//!            create/edit            begin_submit (valid)
//!   Idle ───────────────▶ Editing ─────────────────────▶ Submitting
//!    ▲                     ▲   │                           │     │
//!    │         set         │   │ begin_submit (invalid)    │     │ failure
//!    │                     │   ▼                           │     ▼
//!    │                    Error(msg) ◀─────────────────────┼── Error(reason)
//!    │                                                     │
//!    └──────────────── success (draft closed) ◀────────────┘
//! ```
//!
//! `cancel` returns to `Idle` from anywhere and drops the draft.
//!
//! ## Submitting
//!
//! A submit is three steps, mirroring the cache's refresh protocol:
//!
//! 1. [`FormController::begin_submit`] validates the draft and moves to
//!    `Submitting`. While submitting, further submits fail with
//!    [`FolioError::SubmitInFlight`] and [`FormController::can_submit`] is false.
//! 2. [`Submission::execute`] performs the insert or update.
//! 3. [`FormController::finish_submit`] applies the outcome: on success the form
//!    closes, the cache is refreshed and a success notice goes out; on failure the
//!    draft is kept for another attempt and an error notice goes out.
//!
//! [`FormController::submit`] runs all three. Nothing is retried automatically.

use crate::cache::ContentCache;
use crate::error::{FolioError, Result};
use crate::model::{BlogPost, Record, RecordId, Skill};
use crate::notify::{Notice, Notifier};
use crate::store::ContentStore;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

pub mod post;
pub mod skill;

pub use post::{BlogPostDraft, BlogPostField};
pub use skill::{SkillDraft, SkillField};

/// Editable, unvalidated field values of one record.
pub trait Draft: Clone + fmt::Debug {
    type Record: Record;
    type Field: Copy + fmt::Debug + FromStr<Err = FolioError>;

    fn blank() -> Self;

    /// A draft holding a copy of `record`. Later edits never reach `record`.
    fn from_record(record: &Self::Record) -> Self;

    fn set(&mut self, field: Self::Field, value: String);

    /// Build the record this draft describes, or say which field is wrong.
    fn validate(&self) -> Result<Self::Record>;
}

/// Record types that can be edited through a form.
pub trait Editable: Record {
    type Draft: Draft<Record = Self>;
}

impl Editable for Skill {
    type Draft = SkillDraft;
}

impl Editable for BlogPost {
    type Draft = BlogPostDraft;
}

/// Field enum of the draft type used to edit `T`.
pub type FieldOf<T> = <<T as Editable>::Draft as Draft>::Field;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Editing,
    Submitting,
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

/// A validated record on its way to the store.
#[derive(Debug, Clone)]
pub struct Submission<R: Record> {
    mode: FormMode,
    record: R,
}

impl<R: Record> Submission<R> {
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn record(&self) -> &R {
        &self.record
    }

    /// Insert or update, depending on the form mode. Returns the stored record.
    pub fn execute<S>(&self, store: &mut S) -> Result<R>
    where
        S: ContentStore<R> + ?Sized,
    {
        match self.mode {
            FormMode::Create => store.insert(&self.record),
            FormMode::Edit(id) => {
                store.update(id, &self.record)?;
                let mut saved = self.record.clone();
                saved.set_id(id);
                Ok(saved)
            }
        }
    }
}

#[derive(Debug)]
pub struct FormController<D: Draft> {
    state: FormState,
    mode: FormMode,
    draft: Option<D>,
}

impl<D: Draft> Default for FormController<D> {
    fn default() -> Self {
        Self {
            state: FormState::Idle,
            mode: FormMode::Create,
            draft: None,
        }
    }
}

impl<D: Draft> FormController<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> Option<&D> {
        self.draft.as_ref()
    }

    pub fn is_closed(&self) -> bool {
        self.draft.is_none()
    }

    /// False while a submission is in flight or no form is open.
    pub fn can_submit(&self) -> bool {
        self.draft.is_some() && self.state != FormState::Submitting
    }

    /// Open a blank draft for a new record.
    pub fn create(&mut self) {
        self.open(FormMode::Create, D::blank());
    }

    /// Open a draft copied from `record`.
    pub fn edit(&mut self, record: &D::Record) {
        self.open(FormMode::Edit(record.id()), D::from_record(record));
    }

    fn open(&mut self, mode: FormMode, draft: D) {
        self.mode = mode;
        self.draft = Some(draft);
        self.state = FormState::Editing;
    }

    pub fn set(&mut self, field: D::Field, value: impl Into<String>) -> Result<()> {
        if self.state == FormState::Submitting {
            return Err(FolioError::SubmitInFlight);
        }
        let draft = self.draft.as_mut().ok_or_else(no_open_form)?;
        draft.set(field, value.into());
        self.state = FormState::Editing;
        Ok(())
    }

    /// Drop the draft. The store and any cache are left alone.
    pub fn cancel(&mut self) {
        self.draft = None;
        self.mode = FormMode::Create;
        self.state = FormState::Idle;
    }

    pub fn begin_submit<N: Notifier>(&mut self, notifier: &mut N) -> Result<Submission<D::Record>> {
        if self.state == FormState::Submitting {
            return Err(FolioError::SubmitInFlight);
        }
        let draft = self.draft.as_ref().ok_or_else(no_open_form)?;

        match draft.validate() {
            Ok(record) => {
                self.state = FormState::Submitting;
                let kind = <D::Record as Record>::KIND;
                debug!(%kind, mode = ?self.mode, "submitting");
                Ok(Submission {
                    mode: self.mode,
                    record,
                })
            }
            Err(e) => {
                self.state = FormState::Error(e.to_string());
                notifier.notify(Notice::error(e.to_string()));
                Err(e)
            }
        }
    }

    pub fn finish_submit<S, N>(
        &mut self,
        submission: Submission<D::Record>,
        outcome: Result<D::Record>,
        store: &S,
        cache: &mut ContentCache<D::Record>,
        notifier: &mut N,
    ) -> Result<D::Record>
    where
        S: ContentStore<D::Record> + ?Sized,
        N: Notifier,
    {
        let kind = <D::Record as Record>::KIND;
        let (verb, done) = match submission.mode {
            FormMode::Create => ("add", "added"),
            FormMode::Edit(_) => ("update", "updated"),
        };

        match outcome {
            Ok(saved) => {
                self.cancel();
                cache.refresh(store, notifier);
                notifier.notify(Notice::success(format!("{} {} successfully", kind, done)));
                Ok(saved)
            }
            Err(e) => {
                warn!(%kind, error = %e, "submit failed");
                self.state = FormState::Error(e.to_string());
                notifier.notify(Notice::error(format!(
                    "Failed to {} {}: {}",
                    verb,
                    kind.label().to_lowercase(),
                    e
                )));
                Err(e)
            }
        }
    }

    pub fn submit<S, N>(
        &mut self,
        store: &mut S,
        cache: &mut ContentCache<D::Record>,
        notifier: &mut N,
    ) -> Result<D::Record>
    where
        S: ContentStore<D::Record> + ?Sized,
        N: Notifier,
    {
        let submission = self.begin_submit(notifier)?;
        let outcome = submission.execute(store);
        self.finish_submit(submission, outcome, store, cache, notifier)
    }
}

fn no_open_form() -> FolioError {
    FolioError::validation("form", "No form is open")
}

/// Trimmed value of a required field, or the given validation error.
pub(crate) fn required(field: &'static str, value: &str, message: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FolioError::validation(field, message));
    }
    Ok(trimmed.to_string())
}
