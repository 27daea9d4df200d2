//! Static site content.
//!
//! All copy shown on the page lives in a single TOML document that is
//! deserialized into [`SiteContent`] and checked with
//! [`SiteContent::validate`] before anything renders.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::carousel::{ALL_CATEGORY, Categorized};
use crate::error::ContentError;
use crate::typewriter::TypewriterCycler;

/// Everything the page renders, section by section.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub hero: Hero,
    pub about: About,
    #[serde(default)]
    pub expertise: Vec<ExpertiseArea>,
    #[serde(default)]
    pub project_categories: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub companies: Vec<String>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub nav: Vec<NavLink>,
}

/// Who the site is about.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub bio: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub location: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Hero {
    pub greeting: String,
    /// Phrases cycled by the typewriter.
    pub phrases: Vec<String>,
    pub intro: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

/// Headline number with a caption, e.g. `20+ / Happy Clients`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ExpertiseArea {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

impl Categorized for Project {
    fn category(&self) -> &str {
        &self.category
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub role: String,
    #[serde(default = "default_rating")]
    pub rating: u8,
}

fn default_rating() -> u8 {
    5
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent, clamped to 100 when rendered.
    pub level: u8,
}

impl Skill {
    pub fn percent(&self) -> u8 {
        self.level.min(100)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BlogPost {
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub date: String,
    pub read_time: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub url: Option<String>,
}

impl Categorized for BlogPost {
    fn category(&self) -> &str {
        &self.category
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// In-page anchor shown in the navbar and footer.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NavLink {
    pub label: String,
    /// Section id without the leading `#`.
    pub target: String,
}

impl SiteContent {
    /// Parses and validates a TOML content document.
    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        let content: Self = toml::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    /// Checks cross-references the type system cannot express.
    pub fn validate(&self) -> Result<(), ContentError> {
        TypewriterCycler::new(self.hero.phrases.iter().cloned())?;

        if let Some(reserved) = self
            .project_categories
            .iter()
            .find(|c| c.as_str() == ALL_CATEGORY)
        {
            return Err(ContentError::ReservedCategory(reserved.clone()));
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateProjectId(project.id));
            }
            if !self.project_categories.contains(&project.category) {
                return Err(ContentError::UndeclaredCategory {
                    id: project.id,
                    category: project.category.clone(),
                });
            }
        }
        Ok(())
    }

    /// The post marked `featured`, falling back to the first post.
    pub fn featured_post(&self) -> Option<&BlogPost> {
        self.featured_index().map(|i| &self.posts[i])
    }

    /// Every post except the featured one, in declaration order.
    pub fn recent_posts(&self) -> Vec<BlogPost> {
        let featured = self.featured_index();
        self.posts
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != featured)
            .map(|(_, post)| post.clone())
            .collect()
    }

    fn featured_index(&self) -> Option<usize> {
        self.posts
            .iter()
            .position(|p| p.featured)
            .or_else(|| (!self.posts.is_empty()).then_some(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
project_categories = ["web", "trading"]

[profile]
name = "Ofameh"
headline = "Founder, trader, developer"
bio = "Builds things."
email = "hello@example.com"
location = "Lagos, Nigeria"

[hero]
greeting = "Hi, I'm"
phrases = ["Founder.", "Trader."]
intro = "Welcome."

[about]
paragraphs = ["One."]

[[projects]]
id = 1
title = "Dashboard"
category = "trading"
description = "Charts."

[[projects]]
id = 2
title = "Shop"
category = "web"
description = "Checkout."

[[posts]]
title = "First"
excerpt = "..."
category = "frontend"
date = "March 10, 2024"
read_time = "5 min read"

[[posts]]
title = "Second"
excerpt = "..."
category = "trading"
date = "March 15, 2024"
read_time = "8 min read"
featured = true
"#;

    #[test]
    fn test_parse_minimal() {
        let content = SiteContent::from_toml(MINIMAL).unwrap();
        assert_eq!(content.profile.name, "Ofameh");
        assert_eq!(content.projects.len(), 2);
        assert!(content.testimonials.is_empty());
        assert_eq!(content.profile.phone, None);
    }

    #[test]
    fn test_featured_post() {
        let content = SiteContent::from_toml(MINIMAL).unwrap();
        assert_eq!(content.featured_post().map(|p| p.title.as_str()), Some("Second"));
    }

    #[test]
    fn test_featured_post_falls_back_to_first() {
        let mut content = SiteContent::from_toml(MINIMAL).unwrap();
        content.posts.iter_mut().for_each(|p| p.featured = false);
        assert_eq!(content.featured_post().map(|p| p.title.as_str()), Some("First"));
    }

    #[test]
    fn test_recent_posts_skip_featured() {
        let content = SiteContent::from_toml(MINIMAL).unwrap();
        let titles: Vec<String> = content.recent_posts().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["First"]);
    }

    #[test]
    fn test_recent_posts_skip_fallback_featured() {
        let mut content = SiteContent::from_toml(MINIMAL).unwrap();
        content.posts.iter_mut().for_each(|p| p.featured = false);
        let titles: Vec<String> = content.recent_posts().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["Second"]);

        content.posts.clear();
        assert!(content.featured_post().is_none());
        assert!(content.recent_posts().is_empty());
    }

    #[test]
    fn test_undeclared_category() {
        let source = MINIMAL.replace(r#"category = "web""#, r#"category = "mobile""#);
        match SiteContent::from_toml(&source) {
            Err(ContentError::UndeclaredCategory { id, category }) => {
                assert_eq!(id, 2);
                assert_eq!(category, "mobile");
            }
            other => panic!("expected UndeclaredCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_project_id() {
        let source = MINIMAL.replace("id = 2", "id = 1");
        assert!(matches!(
            SiteContent::from_toml(&source),
            Err(ContentError::DuplicateProjectId(1))
        ));
    }

    #[test]
    fn test_reserved_category() {
        let source = MINIMAL.replace(r#"["web", "trading"]"#, r#"["web", "trading", "all"]"#);
        assert!(matches!(
            SiteContent::from_toml(&source),
            Err(ContentError::ReservedCategory(_))
        ));
    }

    #[test]
    fn test_empty_phrases_rejected() {
        let source = MINIMAL.replace(r#"["Founder.", "Trader."]"#, "[]");
        assert!(matches!(
            SiteContent::from_toml(&source),
            Err(ContentError::Phrases(_))
        ));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            SiteContent::from_toml("profile = 3"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_skill_percent_clamped() {
        let skill = Skill {
            name: "React".into(),
            level: 140,
        };
        assert_eq!(skill.percent(), 100);
    }
}
