use chrono::{DateTime, Utc};
use colored::Colorize;
use folioapp::model::{BlogPost, Skill, MAX_LEVEL};
use folioapp::notify::{Notice, NoticeLevel};
use serde::Serialize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;
const BAR_WIDTH: usize = 10;
const NAME_WIDTH: usize = 24;

pub(super) fn print_messages(messages: &[Notice]) {
    for message in messages {
        match message.level {
            NoticeLevel::Info => println!("{}", message.content.dimmed()),
            NoticeLevel::Success => println!("{}", message.content.green()),
            NoticeLevel::Warning => println!("{}", message.content.yellow()),
            NoticeLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(super) fn print_skills(skills: &[Skill]) {
    print!("{}", render_skills(skills));
}

pub(super) fn print_posts(posts: &[BlogPost]) {
    print!("{}", render_posts(posts));
}

pub(super) fn print_full_post(post: &BlogPost) {
    print!("{}", render_full_post(post));
}

pub(super) fn print_categories(categories: &[(String, usize)]) {
    print!("{}", render_categories(categories));
}

fn render_skills(skills: &[Skill]) -> String {
    if skills.is_empty() {
        return "No skills found.\n".to_string();
    }
    let mut out = String::new();
    for skill in skills {
        let idx = format!("{:>4}. ", skill.id);
        let name = pad_to_width(&truncate_to_width(&skill.name, NAME_WIDTH), NAME_WIDTH);
        out.push_str(&format!(
            "{}{} {} {:>3}  {}\n",
            idx.yellow(),
            name,
            level_bar(skill.level()).cyan(),
            skill.level(),
            skill.category.dimmed()
        ));
    }
    out
}

fn render_posts(posts: &[BlogPost]) -> String {
    if posts.is_empty() {
        return "No blog posts found.\n".to_string();
    }
    let mut out = String::new();
    for post in posts {
        let idx = format!("{:>4}. ", post.id);
        let category = format!("[{}] ", post.category);
        let when = match post.created_at {
            Some(created) => format_time_ago(created),
            None => format!("{:>width$}", post.date, width = TIME_WIDTH),
        };

        let fixed = idx.width() + category.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title = truncate_to_width(&post.title, available);
        let padding = available.saturating_sub(title.width());

        out.push_str(&format!(
            "{}{}{}{}{}\n",
            idx.yellow(),
            category.dimmed(),
            title,
            " ".repeat(padding),
            when.dimmed()
        ));
    }
    out
}

fn render_full_post(post: &BlogPost) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", format!("{}.", post.id).yellow(), post.title.bold()));
    out.push_str(&format!(
        "{}\n",
        format!("{} · {} · {}", post.category, post.date, post.read_time).dimmed()
    ));
    out.push_str("--------------------------------\n");
    out.push_str(&post.excerpt);
    out.push('\n');
    if let Some(content) = &post.content {
        out.push('\n');
        out.push_str(content);
        out.push('\n');
    }
    out.push_str(&format!("\n{}\n", post.image.dimmed()));
    out
}

fn render_categories(categories: &[(String, usize)]) -> String {
    if categories.is_empty() {
        return "No categories yet.\n".to_string();
    }
    let width = categories
        .iter()
        .map(|(name, _)| name.width())
        .max()
        .unwrap_or(0);
    categories
        .iter()
        .map(|(name, count)| format!("{}  {}\n", pad_to_width(name, width), count.to_string().dimmed()))
        .collect()
}

fn level_bar(level: u8) -> String {
    let filled = (usize::from(level) * BAR_WIDTH + usize::from(MAX_LEVEL) / 2) / usize::from(MAX_LEVEL);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
