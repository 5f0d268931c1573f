use super::{required, Draft};
use crate::error::{FolioError, Result};
use crate::model::{Skill, MAX_LEVEL};
use std::str::FromStr;

/// Level a new skill starts at when the field is left blank.
pub const DEFAULT_LEVEL: u8 = 50;

const MISSING: &str = "Please fill in all fields";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillField {
    Name,
    Level,
    Category,
}

impl FromStr for SkillField {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(SkillField::Name),
            "level" => Ok(SkillField::Level),
            "category" => Ok(SkillField::Category),
            other => Err(FolioError::validation(
                "field",
                format!("Unknown skill field: {}", other),
            )),
        }
    }
}

/// Skill form values as typed. `level` stays text until validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDraft {
    pub name: String,
    pub level: String,
    pub category: String,
}

impl Draft for SkillDraft {
    type Record = Skill;
    type Field = SkillField;

    fn blank() -> Self {
        Self {
            name: String::new(),
            level: DEFAULT_LEVEL.to_string(),
            category: String::new(),
        }
    }

    fn from_record(record: &Skill) -> Self {
        Self {
            name: record.name.clone(),
            level: record.level().to_string(),
            category: record.category.clone(),
        }
    }

    fn set(&mut self, field: SkillField, value: String) {
        match field {
            SkillField::Name => self.name = value,
            SkillField::Level => self.level = value,
            SkillField::Category => self.category = value,
        }
    }

    fn validate(&self) -> Result<Skill> {
        let name = required("name", &self.name, MISSING)?;
        let category = required("category", &self.category, MISSING)?;
        let level = parse_level(&self.level)?;
        Ok(Skill::new(name, i64::from(level), category))
    }
}

fn parse_level(text: &str) -> Result<u8> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(DEFAULT_LEVEL);
    }
    let out_of_range = || {
        FolioError::validation(
            "level",
            format!("Level must be a whole number between 0 and {}", MAX_LEVEL),
        )
    };
    let level: i64 = text.parse().map_err(|_| out_of_range())?;
    if !(0..=i64::from(MAX_LEVEL)).contains(&level) {
        return Err(out_of_range());
    }
    Ok(level as u8)
}
