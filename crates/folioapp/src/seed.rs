//! Sample portfolio content.
//!
//! A fresh site starts with a handful of skills and posts so the public pages are
//! not empty. `LocalStore` can serve these when nothing has been saved yet (see
//! `seed_defaults` in the config), and `folio seed` inserts them into an empty
//! store of either kind.

use crate::model::{BlogPost, Record, Skill};

/// Record types that ship with sample content.
pub trait SampleContent: Record {
    /// Sample records, ids already assigned starting at 1.
    fn samples() -> Vec<Self>;
}

impl SampleContent for Skill {
    fn samples() -> Vec<Self> {
        vec![
            Skill::new("React", 90, "Frontend").with_id(1),
            Skill::new("TypeScript", 85, "Languages").with_id(2),
            Skill::new("Node.js", 80, "Backend").with_id(3),
            Skill::new("CSS/Tailwind", 90, "Frontend").with_id(4),
            Skill::new("UI/UX Design", 75, "Design").with_id(5),
        ]
    }
}

impl SampleContent for BlogPost {
    fn samples() -> Vec<Self> {
        vec![
            BlogPost::new(
                "Getting Started with React Hooks",
                "Learn how to use React Hooks to simplify your functional components and manage state effectively.",
                "React",
                "https://images.unsplash.com/photo-1633356122102-3fe601e05bd2?q=80&w=2070&auto=format&fit=crop",
            )
            .with_id(1)
            .with_date("May 15, 2023", "5 min read")
            .with_content("This is a sample blog post about React Hooks. In this article, we'll explore how to use useState, useEffect, and other hooks to build powerful React applications."),
            BlogPost::new(
                "Mastering CSS Grid Layout",
                "A comprehensive guide to CSS Grid Layout and how it can transform your web design approach.",
                "CSS",
                "https://images.unsplash.com/photo-1507721999472-8ed4421c4af2?q=80&w=2070&auto=format&fit=crop",
            )
            .with_id(2)
            .with_date("April 22, 2023", "8 min read")
            .with_content("CSS Grid Layout is a powerful tool for creating complex web layouts. In this article, we'll dive deep into grid templates, areas, and responsive design techniques."),
            BlogPost::new(
                "TypeScript Best Practices",
                "Discover the best practices for writing clean, maintainable TypeScript code in your projects.",
                "TypeScript",
                "https://images.unsplash.com/photo-1555066931-4365d14bab8c?q=80&w=2070&auto=format&fit=crop",
            )
            .with_id(3)
            .with_date("March 10, 2023", "6 min read")
            .with_content("TypeScript has become an essential tool for modern web development. This article covers type definitions, interfaces, and patterns to make your TypeScript code more robust."),
            BlogPost::new(
                "Building Accessible Web Applications",
                "Why accessibility matters and how to implement it in your web applications for all users.",
                "Accessibility",
                "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?q=80&w=2069&auto=format&fit=crop",
            )
            .with_id(4)
            .with_date("February 5, 2023", "7 min read")
            .with_content("Web accessibility is crucial for ensuring your applications can be used by everyone. Learn about ARIA attributes, keyboard navigation, and testing tools for accessibility."),
        ]
    }
}
