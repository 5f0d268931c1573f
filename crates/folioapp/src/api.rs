//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single entry
//! point for every folio operation, whichever UI is calling.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Dispatches** to the command for each operation, per content type
//! - **Owns the store**: one [`ContentStore`] for both skills and posts
//! - **Returns structured types** (`Result<CmdResult<T>>`)
//!
//! It does no business logic, no I/O of its own and no rendering.
//!
//! ## Generic Over ContentStore
//!
//! `FolioApi<S>` needs a store that handles both record kinds:
//! - Local: `FolioApi<LocalStore<FsBackend>>`
//! - Remote: `FolioApi<RemoteStore<HttpTableApi>>`
//! - Testing: `FolioApi<LocalStore<MemBackend>>` or `FolioApi<RemoteStore<MemTable>>`
//!
//! The choice is made once, when the API is built. Nothing below this point
//! looks at which backend it got.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::form::{BlogPostField, SkillField};
use crate::model::{BlogPost, RecordId, Skill};
use crate::store::ContentStore;
use serde::Serialize;

/// Outcome of seeding both content types.
#[derive(Debug, Serialize)]
pub struct SeedReport {
    pub skills: CmdResult<Skill>,
    pub posts: CmdResult<BlogPost>,
}

/// The main API facade for folio operations.
pub struct FolioApi<S>
where
    S: ContentStore<Skill> + ContentStore<BlogPost>,
{
    store: S,
}

impl<S> FolioApi<S>
where
    S: ContentStore<Skill> + ContentStore<BlogPost>,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // Skills

    pub fn list_skills(&self, category: Option<&str>) -> Result<CmdResult<Skill>> {
        commands::list::run(&self.store, category)
    }

    pub fn add_skill(&mut self, fields: Vec<(SkillField, String)>) -> Result<CmdResult<Skill>> {
        commands::create::run(&mut self.store, fields)
    }

    pub fn edit_skill(
        &mut self,
        id: RecordId,
        fields: Vec<(SkillField, String)>,
    ) -> Result<CmdResult<Skill>> {
        commands::update::run(&mut self.store, id, fields)
    }

    pub fn delete_skill(&mut self, id: RecordId, confirmed: bool) -> Result<CmdResult<Skill>> {
        commands::delete::run(&mut self.store, id, confirmed)
    }

    pub fn skill_categories(&self) -> Result<CmdResult<Skill>> {
        commands::categories::run(&self.store)
    }

    // Blog posts

    pub fn list_posts(&self, category: Option<&str>) -> Result<CmdResult<BlogPost>> {
        commands::list::run(&self.store, category)
    }

    pub fn show_post(&self, id: RecordId) -> Result<CmdResult<BlogPost>> {
        commands::show::run(&self.store, id)
    }

    pub fn add_post(&mut self, fields: Vec<(BlogPostField, String)>) -> Result<CmdResult<BlogPost>> {
        commands::create::run(&mut self.store, fields)
    }

    pub fn edit_post(
        &mut self,
        id: RecordId,
        fields: Vec<(BlogPostField, String)>,
    ) -> Result<CmdResult<BlogPost>> {
        commands::update::run(&mut self.store, id, fields)
    }

    pub fn delete_post(&mut self, id: RecordId, confirmed: bool) -> Result<CmdResult<BlogPost>> {
        commands::delete::run(&mut self.store, id, confirmed)
    }

    pub fn post_categories(&self) -> Result<CmdResult<BlogPost>> {
        commands::categories::run(&self.store)
    }

    /// Load the sample portfolio. Each content type is only seeded when empty.
    pub fn seed(&mut self) -> Result<SeedReport> {
        Ok(SeedReport {
            skills: commands::seed::run(&mut self.store)?,
            posts: commands::seed::run(&mut self.store)?,
        })
    }
}
