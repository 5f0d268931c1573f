use super::{required, Draft};
use crate::error::{FolioError, Result};
use crate::model::BlogPost;
use chrono::{DateTime, Local, Utc};
use std::str::FromStr;

pub const DEFAULT_READ_TIME: &str = "5 min read";

const MISSING: &str = "Please fill in all required fields";

/// Today's date the way posts display it, e.g. "May 15, 2023".
pub fn today() -> String {
    Local::now().format("%B %-d, %Y").to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogPostField {
    Title,
    Excerpt,
    Content,
    Date,
    ReadTime,
    Category,
    Image,
}

impl FromStr for BlogPostField {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "title" => Ok(BlogPostField::Title),
            "excerpt" => Ok(BlogPostField::Excerpt),
            "content" => Ok(BlogPostField::Content),
            "date" => Ok(BlogPostField::Date),
            "readtime" => Ok(BlogPostField::ReadTime),
            "category" => Ok(BlogPostField::Category),
            "image" => Ok(BlogPostField::Image),
            _ => Err(FolioError::validation(
                "field",
                format!("Unknown blog post field: {}", s),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: String,
    pub read_time: String,
    pub category: String,
    pub image: String,
    // Carried through an edit so a local rewrite keeps them.
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl Draft for BlogPostDraft {
    type Record = BlogPost;
    type Field = BlogPostField;

    fn blank() -> Self {
        Self {
            title: String::new(),
            excerpt: String::new(),
            content: String::new(),
            date: String::new(),
            read_time: String::new(),
            category: String::new(),
            image: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    fn from_record(record: &BlogPost) -> Self {
        Self {
            title: record.title.clone(),
            excerpt: record.excerpt.clone(),
            content: record.content.clone().unwrap_or_default(),
            date: record.date.clone(),
            read_time: record.read_time.clone(),
            category: record.category.clone(),
            image: record.image.clone(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }

    fn set(&mut self, field: BlogPostField, value: String) {
        let slot = match field {
            BlogPostField::Title => &mut self.title,
            BlogPostField::Excerpt => &mut self.excerpt,
            BlogPostField::Content => &mut self.content,
            BlogPostField::Date => &mut self.date,
            BlogPostField::ReadTime => &mut self.read_time,
            BlogPostField::Category => &mut self.category,
            BlogPostField::Image => &mut self.image,
        };
        *slot = value;
    }

    fn validate(&self) -> Result<BlogPost> {
        let title = required("title", &self.title, MISSING)?;
        let excerpt = required("excerpt", &self.excerpt, MISSING)?;
        let category = required("category", &self.category, MISSING)?;
        let image = required("image", &self.image, MISSING)?;

        let date = match self.date.trim() {
            "" => today(),
            given => given.to_string(),
        };
        let read_time = match self.read_time.trim() {
            "" => DEFAULT_READ_TIME.to_string(),
            given => given.to_string(),
        };

        let mut post = BlogPost::new(title, excerpt, category, image).with_date(date, read_time);
        if !self.content.trim().is_empty() {
            post = post.with_content(self.content.clone());
        }
        post.created_at = self.created_at;
        post.updated_at = self.updated_at;
        Ok(post)
    }
}
