//! # Domain Model: Skills and Blog Posts
//!
//! Folio manages two flat record kinds, [`Skill`] and [`BlogPost`]. Both implement
//! [`Record`], which is what the stores, the cache and the form controller are
//! generic over.
//!
//! ## Identifiers
//!
//! Records carry a numeric [`RecordId`]. A record that has not been persisted yet
//! carries [`UNASSIGNED_ID`] (zero); the store assigns the real id on insert.
//!
//! ## Two Shapes for Blog Posts
//!
//! The in-memory (client) shape of a post names its reading-time label `readTime`,
//! which is also how it is kept in local storage. The remote `blog_posts` table
//! names the same column `read_time`. [`BlogPostRow`] is the table shape and the
//! two `From` impls translate between them without loss:
//!
//! ```text
//! BlogPost { read_time, .. }  --(to_db_record)-->   BlogPostRow { read_time, .. }
//!   serialized as "readTime"  <--(to_client_record)--  serialized as "read_time"
//! ```
//!
//! ## Skill Level
//!
//! A skill level always lies in `0..=100`. Out-of-range values are clamped when a
//! skill is built or deserialized, so no `Skill` value can break the bound.

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

pub type RecordId = u64;

/// Placeholder id for records that have not been inserted yet.
pub const UNASSIGNED_ID: RecordId = 0;

pub const MAX_LEVEL: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Skill,
    BlogPost,
}

impl ContentKind {
    /// Table name in the remote table service.
    pub fn table(self) -> &'static str {
        match self {
            ContentKind::Skill => "skills",
            ContentKind::BlogPost => "blog_posts",
        }
    }

    /// Key under which the serialized list lives in local storage.
    pub fn storage_key(self) -> &'static str {
        match self {
            ContentKind::Skill => "portfolio-skills",
            ContentKind::BlogPost => "portfolio-blog-posts",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentKind::Skill => "Skill",
            ContentKind::BlogPost => "Blog post",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            ContentKind::Skill => "skills",
            ContentKind::BlogPost => "blog posts",
        }
    }

    /// Order used when a view refreshes its cache.
    pub fn default_order(self) -> OrderKey {
        match self {
            ContentKind::Skill => OrderKey::Category,
            ContentKind::BlogPost => OrderKey::CreatedAtDesc,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderKey {
    /// Whatever order the store keeps records in.
    #[default]
    Insertion,
    Category,
    CreatedAtDesc,
}

impl OrderKey {
    /// Column and direction (`true` = descending) for table queries.
    pub fn column(self) -> Option<(&'static str, bool)> {
        match self {
            OrderKey::Insertion => None,
            OrderKey::Category => Some(("category", false)),
            OrderKey::CreatedAtDesc => Some(("created_at", true)),
        }
    }

    /// Stable in-place sort. Records without a creation time sort last for
    /// `CreatedAtDesc`.
    pub fn sort<T: Record>(self, items: &mut [T]) {
        match self {
            OrderKey::Insertion => {}
            OrderKey::Category => items.sort_by(|a, b| a.category().cmp(b.category())),
            OrderKey::CreatedAtDesc => items.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
        }
    }
}

/// Common surface of every content type.
///
/// Stores, caches and forms only ever talk to records through this trait. Rows
/// exchanged with the remote table service go through [`Record::to_row`] and
/// [`Record::from_row`], which default to the serde shape of the type.
pub trait Record: Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned {
    const KIND: ContentKind;

    fn id(&self) -> RecordId;

    fn set_id(&mut self, id: RecordId);

    fn category(&self) -> &str;

    /// Human-facing name used in messages (skill name, post title).
    fn label(&self) -> &str;

    fn created_at(&self) -> Option<DateTime<Utc>> {
        None
    }

    fn to_row(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn from_row(row: Value) -> Result<Self> {
        Ok(serde_json::from_value(row)?)
    }

    fn is_new(&self) -> bool {
        self.id() == UNASSIGNED_ID
    }
}

pub fn clamp_level(raw: i64) -> u8 {
    raw.clamp(0, i64::from(MAX_LEVEL)) as u8
}

// Numeric columns may come back as floats; anything out of range is clamped.
fn deserialize_level<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(clamp_level(raw.round() as i64))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default)]
    pub id: RecordId,
    pub name: String,
    #[serde(deserialize_with = "deserialize_level")]
    level: u8,
    pub category: String,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: i64, category: impl Into<String>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            name: name.into(),
            level: clamp_level(level),
            category: category.into(),
        }
    }

    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = id;
        self
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn set_level(&mut self, level: i64) {
        self.level = clamp_level(level);
    }
}

impl Record for Skill {
    const KIND: ContentKind = ContentKind::Skill;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn label(&self) -> &str {
        &self.name
    }
}

/// A blog post in its client shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(default)]
    pub id: RecordId,
    pub title: String,
    pub excerpt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Display-formatted date ("May 15, 2023"), never parsed.
    pub date: String,
    /// Free-form label such as "5 min read".
    #[serde(rename = "readTime")]
    pub read_time: String,
    pub category: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BlogPost {
    pub fn new(
        title: impl Into<String>,
        excerpt: impl Into<String>,
        category: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: UNASSIGNED_ID,
            title: title.into(),
            excerpt: excerpt.into(),
            content: None,
            date: String::new(),
            read_time: String::new(),
            category: category.into(),
            image: image.into(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = id;
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>, read_time: impl Into<String>) -> Self {
        self.date = date.into();
        self.read_time = read_time.into();
        self
    }

    pub fn to_db_record(&self) -> BlogPostRow {
        BlogPostRow::from(self.clone())
    }
}

impl Record for BlogPost {
    const KIND: ContentKind = ContentKind::BlogPost;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn to_row(&self) -> Result<Value> {
        Ok(serde_json::to_value(self.to_db_record())?)
    }

    fn from_row(row: Value) -> Result<Self> {
        let row: BlogPostRow = serde_json::from_value(row)?;
        Ok(row.to_client_record())
    }
}

/// A blog post as stored in the `blog_posts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostRow {
    #[serde(default)]
    pub id: RecordId,
    pub title: String,
    pub excerpt: String,
    // Always sent so that a whole-record update can clear it.
    #[serde(default)]
    pub content: Option<String>,
    pub date: String,
    pub read_time: String,
    pub category: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BlogPostRow {
    pub fn to_client_record(&self) -> BlogPost {
        BlogPost::from(self.clone())
    }
}

impl From<BlogPost> for BlogPostRow {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title,
            excerpt: post.excerpt,
            content: post.content,
            date: post.date,
            read_time: post.read_time,
            category: post.category,
            image: post.image,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<BlogPostRow> for BlogPost {
    fn from(row: BlogPostRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            excerpt: row.excerpt,
            content: row.content,
            date: row.date,
            read_time: row.read_time,
            category: row.category,
            image: row.image,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample_post() -> BlogPost {
        BlogPost::new(
            "Mastering CSS Grid Layout",
            "A comprehensive guide to CSS Grid Layout.",
            "CSS",
            "https://example.com/grid.png",
        )
        .with_id(2)
        .with_content("Grid templates, areas and responsive design.")
        .with_date("April 22, 2023", "8 min read")
    }

    #[test]
    fn skill_level_is_clamped_on_construction() {
        assert_eq!(Skill::new("Go", 140, "Backend").level(), 100);
        assert_eq!(Skill::new("Go", -3, "Backend").level(), 0);
        assert_eq!(Skill::new("Go", 70, "Backend").level(), 70);
    }

    #[test]
    fn skill_level_is_clamped_on_deserialize() {
        let skill: Skill =
            serde_json::from_value(json!({"id": 1, "name": "Rust", "level": 250, "category": "Languages"}))
                .unwrap();
        assert_eq!(skill.level(), 100);

        let skill: Skill =
            serde_json::from_value(json!({"id": 1, "name": "Rust", "level": -10, "category": "Languages"}))
                .unwrap();
        assert_eq!(skill.level(), 0);

        let skill: Skill =
            serde_json::from_value(json!({"id": 1, "name": "Rust", "level": 72.6, "category": "Languages"}))
                .unwrap();
        assert_eq!(skill.level(), 73);
    }

    #[test]
    fn set_level_clamps() {
        let mut skill = Skill::new("Go", 50, "Backend");
        skill.set_level(101);
        assert_eq!(skill.level(), 100);
    }

    #[test]
    fn client_shape_uses_read_time_camel_case() {
        let value = serde_json::to_value(sample_post()).unwrap();
        assert_eq!(value["readTime"], "8 min read");
        assert!(value.get("read_time").is_none());
    }

    #[test]
    fn db_shape_uses_read_time_snake_case() {
        let value = sample_post().to_row().unwrap();
        assert_eq!(value["read_time"], "8 min read");
        assert!(value.get("readTime").is_none());
    }

    #[test]
    fn post_survives_db_round_trip() {
        let mut post = sample_post();
        post.created_at = Some(Utc.with_ymd_and_hms(2023, 4, 22, 9, 30, 0).unwrap());
        assert_eq!(post.to_db_record().to_client_record(), post);

        let no_content = BlogPost::new("T", "E", "C", "I").with_id(9);
        assert_eq!(no_content.to_db_record().to_client_record(), no_content);
    }

    #[test]
    fn row_survives_client_round_trip() {
        let row = BlogPostRow {
            id: 4,
            title: "Building Accessible Web Applications".into(),
            excerpt: "Why accessibility matters.".into(),
            content: None,
            date: "February 5, 2023".into(),
            read_time: "7 min read".into(),
            category: "Accessibility".into(),
            image: "https://example.com/a11y.png".into(),
            created_at: None,
            updated_at: Some(Utc.with_ymd_and_hms(2023, 2, 6, 0, 0, 0).unwrap()),
        };
        assert_eq!(row.to_client_record().to_db_record(), row);
    }

    #[test]
    fn post_row_parses_server_timestamps() {
        let post = BlogPost::from_row(json!({
            "id": 7,
            "title": "T",
            "excerpt": "E",
            "content": null,
            "date": "May 15, 2023",
            "read_time": "5 min read",
            "category": "React",
            "image": "https://example.com/i.png",
            "created_at": "2023-05-15T10:00:00.123456+00:00",
            "updated_at": "2023-05-16T10:00:00+00:00"
        }))
        .unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.read_time, "5 min read");
        assert!(post.created_at.is_some());
        assert!(post.content.is_none());
    }

    #[test]
    fn order_by_category_is_stable() {
        let mut skills = vec![
            Skill::new("React", 90, "Frontend").with_id(1),
            Skill::new("Node.js", 80, "Backend").with_id(2),
            Skill::new("CSS", 90, "Frontend").with_id(3),
        ];
        OrderKey::Category.sort(&mut skills);
        let ids: Vec<_> = skills.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn order_by_created_desc_puts_undated_last() {
        let mut old = BlogPost::new("old", "e", "c", "i").with_id(1);
        old.created_at = Some(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
        let mut new = BlogPost::new("new", "e", "c", "i").with_id(2);
        new.created_at = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let undated = BlogPost::new("undated", "e", "c", "i").with_id(3);

        let mut posts = vec![undated, old, new];
        OrderKey::CreatedAtDesc.sort(&mut posts);
        let ids: Vec<_> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}
