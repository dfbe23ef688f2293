use chrono::{DateTime, Datelike};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

pub const PORTFOLIO_FILE: &str = "portfolio.json";

pub static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| match Portfolio::load() {
    Ok(p) => p,
    Err(e) => {
        log::error!("couldn't load {PORTFOLIO_FILE}: {e}");
        Portfolio::default()
    }
});

/// The page copy, loaded once from the embedded content folder.
pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate {kind} entry: {key}")]
    Duplicate { kind: &'static str, key: String },
}

/// Identifier of a page section. Doubles as the DOM id used for scroll targeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// Page order, top to bottom.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    ChevronDown,
    Mail,
    Phone,
    MapPin,
    Github,
    Linkedin,
    Twitter,
    Instagram,
    ExternalLink,
    ShoppingCart,
    Users,
    CheckSquare,
    Send,
    Menu,
    User,
    Code,
    Server,
    Settings,
}

impl Icon {
    /// Icon font class for this glyph.
    pub fn class(&self) -> &'static str {
        match self {
            Icon::ChevronDown => "extra-chevron-down",
            Icon::Mail => "extra-email",
            Icon::Phone => "extra-phone",
            Icon::MapPin => "extra-location",
            Icon::Github => "devicon-github-plain",
            Icon::Linkedin => "devicon-linkedin-plain",
            Icon::Twitter => "devicon-twitter-original",
            Icon::Instagram => "extra-instagram",
            Icon::ExternalLink => "extra-link",
            Icon::ShoppingCart => "extra-cart",
            Icon::Users => "extra-users",
            Icon::CheckSquare => "extra-check-square",
            Icon::Send => "extra-send",
            Icon::Menu => "extra-menu",
            Icon::User => "extra-user",
            Icon::Code => "extra-code",
            Icon::Server => "extra-server",
            Icon::Settings => "extra-settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Icon::Github => "GitHub",
            Icon::Linkedin => "LinkedIn",
            Icon::Twitter => "Twitter",
            Icon::Instagram => "Instagram",
            Icon::Mail => "Email",
            _ => "",
        }
    }
}

/// Integer percentage in `[0, 100]`; larger values clamp to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub fn new(level: u64) -> Self {
        Self(level.min(100) as u8)
    }

    pub fn percent(&self) -> u8 {
        self.0
    }
}

impl From<u64> for SkillLevel {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<SkillLevel> for u64 {
    fn from(value: SkillLevel) -> Self {
        value.0 as u64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillItem {
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub icon: Icon,
    pub gradient: String,
    pub skills: Vec<SkillItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub gradient: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub icon: Icon,
    pub label: String,
    pub class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMethod {
    pub icon: Icon,
    pub label: String,
    pub value: String,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: Icon,
    pub href: String,
    #[serde(default)]
    pub hover: String,
}

/// A decorative dot in the hero background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub top: String,
    pub left: String,
    pub size: u32,
    #[serde(default)]
    pub delay: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionCopy {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub owner: String,
    pub brand: String,
    pub tagline: String,
    #[serde(default)]
    pub cv_href: Option<String>,
    #[serde(default)]
    pub sections: BTreeMap<SectionId, SectionCopy>,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub badges: Vec<Badge>,
    #[serde(default)]
    pub skill_categories: Vec<SkillCategory>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub contact_methods: Vec<ContactMethod>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub particles: Vec<Particle>,
    #[serde(default)]
    pub footer: String,
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        let file = ContentAssets::get(PORTFOLIO_FILE)
            .ok_or_else(|| ContentError::NotFound(PORTFOLIO_FILE.to_string()))?;
        Self::from_json(&file.data)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, ContentError> {
        let portfolio = serde_json::from_slice::<Portfolio>(bytes)?;
        portfolio.check_unique()?;
        Ok(portfolio)
    }

    // titles are used as list keys when rendering
    fn check_unique(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for c in &self.skill_categories {
            if !seen.insert(c.title.as_str()) {
                return Err(ContentError::Duplicate {
                    kind: "skill category",
                    key: c.title.clone(),
                });
            }
        }
        seen.clear();
        for p in &self.projects {
            if !seen.insert(p.title.as_str()) {
                return Err(ContentError::Duplicate {
                    kind: "project",
                    key: p.title.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn section(&self, id: SectionId) -> SectionCopy {
        self.sections.get(&id).cloned().unwrap_or_default()
    }

    pub fn social(&self, icon: Icon) -> Option<&SocialLink> {
        self.social_links.iter().find(|s| s.icon == icon)
    }
}

/// Footer credit, prefixed with the year of `build_time` (RFC 3339) when it parses.
pub fn copyright_line(build_time: &str, credit: &str) -> String {
    match DateTime::parse_from_rfc3339(build_time) {
        Ok(t) => format!("© {} {credit}", t.year()),
        Err(_) => format!("© {credit}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_portfolio_loads() {
        let p = Portfolio::load().expect("embedded content should parse");
        assert!(!p.owner.is_empty());
        assert_eq!(p.skill_categories.len(), 3);
        assert_eq!(p.projects.len(), 3);
        assert_eq!(p.social_links.len(), 4);
        assert_eq!(p.particles.len(), 5);
        assert_eq!(p.section(SectionId::Projects).title, "Featured Projects");
        assert!(p
            .skill_categories
            .iter()
            .flat_map(|c| c.skills.iter())
            .all(|s| s.level.percent() <= 100));
    }

    #[test]
    fn test_section_ids_round_trip_through_str() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
        assert_eq!(
            "blog".parse::<SectionId>(),
            Err(UnknownSection("blog".to_string()))
        );
    }

    #[test]
    fn test_section_ids_are_unique() {
        let ids = SectionId::ALL
            .iter()
            .map(|id| id.as_str())
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), SectionId::ALL.len());
    }

    #[test]
    fn test_skill_level_clamps() {
        let json = r#"{"name": "Rust", "level": 250}"#;
        let skill: SkillItem = serde_json::from_str(json).unwrap();
        assert_eq!(skill.level.percent(), 100);
        assert_eq!(SkillLevel::new(0).percent(), 0);
        assert_eq!(SkillLevel::new(100).percent(), 100);
    }

    #[test]
    fn test_huge_skill_level_clamps_without_failing_load() {
        let json = r#"{"owner": "", "brand": "", "tagline": "", "skill_categories": [
            {"title": "A", "icon": "code", "gradient": "", "skills": [{"name": "Rust", "level": 70000}]}
        ]}"#;
        let portfolio = Portfolio::from_json(json.as_bytes()).unwrap();
        assert_eq!(portfolio.skill_categories[0].skills[0].level.percent(), 100);
        assert_eq!(SkillLevel::new(u64::MAX).percent(), 100);
    }

    #[test]
    fn test_negative_skill_level_rejected() {
        let json = r#"{"owner": "", "brand": "", "tagline": "", "skill_categories": [
            {"title": "A", "icon": "code", "gradient": "", "skills": [{"name": "x", "level": -5}]}
        ]}"#;
        assert!(matches!(
            Portfolio::from_json(json.as_bytes()),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_duplicate_project_rejected() {
        let json = r#"{"owner": "", "brand": "", "tagline": "", "projects": [
            {"title": "Same", "description": "", "icon": "code", "gradient": "", "tags": []},
            {"title": "Same", "description": "", "icon": "users", "gradient": "", "tags": []}
        ]}"#;
        let err = Portfolio::from_json(json.as_bytes()).unwrap_err();
        assert!(matches!(err, ContentError::Duplicate { kind: "project", .. }));
    }

    #[test]
    fn test_missing_section_copy_defaults() {
        let p = Portfolio::default();
        assert_eq!(p.section(SectionId::About), SectionCopy::default());
        assert!(p.social(Icon::Github).is_none());
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line("2024-05-01T12:00:00+00:00", "Jane Doe."),
            "© 2024 Jane Doe."
        );
        assert_eq!(copyright_line("yesterday", "Jane Doe."), "© Jane Doe.");
    }

    #[test]
    fn test_social_lookup() {
        let p = Portfolio::load().unwrap();
        let gh = p.social(Icon::Github).expect("github link present");
        assert!(gh.href.starts_with("https://github.com/"));
    }
}
