use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const SITE_FILE: &str = "site.json";

pub static GLOBAL_PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| Portfolio::from_assets(SITE_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Site content {0} not found")]
    Missing(String),
    #[error("Couldn't parse site content: {0}")]
    Parse(String),
}

/// Which page layout the site renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Classic,
    Showcase,
}

/// Named icon from the icon font. Rendering is left to the font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Mail,
    Github,
    Linkedin,
    Download,
    Cloud,
    GitBranch,
    Shield,
    Server,
    Award,
    Cpu,
    Database,
    GitPullRequest,
    Code,
    Terminal,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Mail => "mail",
            Icon::Github => "github",
            Icon::Linkedin => "linkedin",
            Icon::Download => "download",
            Icon::Cloud => "cloud",
            Icon::GitBranch => "git-branch",
            Icon::Shield => "shield",
            Icon::Server => "server",
            Icon::Award => "award",
            Icon::Cpu => "cpu",
            Icon::Database => "database",
            Icon::GitPullRequest => "git-pull-request",
            Icon::Code => "code",
            Icon::Terminal => "terminal",
        }
    }

    pub fn class(&self) -> String {
        format!("icon-{}", self.name())
    }
}

/// Colour family for a showcase card. Content picks the accent, the view owns the classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Amber,
    Emerald,
    Blue,
    Red,
    Slate,
}

impl Accent {
    pub fn gradient_class(&self) -> &'static str {
        match self {
            Accent::Amber => "from-amber-600/20 to-amber-800/10",
            Accent::Emerald => "from-emerald-600/20 to-emerald-800/10",
            Accent::Blue => "from-blue-600/20 to-blue-800/10",
            Accent::Red => "from-red-600/20 to-red-800/10",
            Accent::Slate => "from-slate-600/20 to-slate-800/10",
        }
    }

    pub fn border_class(&self) -> &'static str {
        match self {
            Accent::Amber => "border-amber-700/40",
            Accent::Emerald => "border-emerald-700/40",
            Accent::Blue => "border-blue-700/40",
            Accent::Red => "border-red-700/40",
            Accent::Slate => "border-slate-700/40",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            Accent::Amber => "text-amber-500",
            Accent::Emerald => "text-emerald-500",
            Accent::Blue => "text-blue-500",
            Accent::Red => "text-red-500",
            Accent::Slate => "text-slate-300",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteMeta {
    pub owner: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub variant: Variant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    pub tagline: String,
    pub cv_href: String,
    pub contact_href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub level: i32,
}

impl SkillEntry {
    /// Label shown beside the bar. Reports the level as written.
    pub fn level_label(&self) -> String {
        format!("{}%", self.level)
    }

    /// Width of the bar fill as a percentage of the track, held to 0..=100.
    pub fn fill_percent(&self) -> i32 {
        self.level.clamp(0, 100)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramCard {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub icon: Icon,
    pub label: String,
    pub href: String,
}

impl ContactLink {
    /// Outbound web links open in a new tab; mail and in-page anchors don't.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: f64,
    pub label: String,
    pub suffix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertiseCard {
    pub title: String,
    pub icon: Icon,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub stack: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub icon: Icon,
    pub date: String,
    pub badge: String,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineStep {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactCard {
    pub icon: Icon,
    pub platform: String,
    pub value: String,
    pub href: String,
    pub accent: Accent,
}

/// Content of the extended layout. Only rendered when the site variant is `showcase`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Showcase {
    /// `(command, output)` pairs typed out on the intro screen.
    pub intro: Vec<(String, String)>,
    pub profiles: Vec<ContactLink>,
    pub cv_href: String,
    pub stats: Vec<Stat>,
    pub expertise: Vec<ExpertiseCard>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub pipeline: Vec<PipelineStep>,
    pub pipeline_diagram: Vec<String>,
    pub contact_cards: Vec<ContactCard>,
    pub availability: String,
    pub contact_email: String,
    pub built_with: String,
}

impl Showcase {
    pub fn intro_text(&self) -> String {
        self.intro
            .iter()
            .map(|(cmd, out)| format!("$ {cmd}\n{out}"))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub site: SiteMeta,
    pub hero: Hero,
    pub skills: Vec<SkillEntry>,
    pub timeline: Vec<TimelineEntry>,
    pub diagrams: Vec<DiagramCard>,
    pub contacts: Vec<ContactLink>,
    pub showcase: Showcase,
}

impl Portfolio {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        serde_json::from_str(raw).map_err(|e| ContentError::Parse(e.to_string()))
    }

    fn from_assets(name: &str) -> Result<Self, ContentError> {
        let file = Assets::get(name).ok_or_else(|| ContentError::Missing(name.to_string()))?;
        let raw = std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse(e.to_string()))?;
        Self::from_json(raw)
    }

    /// The embedded site content, parsed on first use.
    pub fn load() -> Result<&'static Portfolio, ContentError> {
        GLOBAL_PORTFOLIO.as_ref().map_err(Clone::clone)
    }

    /// Skills whose level falls outside 0..=100. These still render, with the bar held at the edge.
    pub fn out_of_range_skills(&self) -> impl Iterator<Item = &SkillEntry> {
        self.skills.iter().filter(|s| !(0..=100).contains(&s.level))
    }
}

pub fn footer_text(owner: &str, year: i32) -> String {
    format!("© {year} {owner}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio() -> &'static Portfolio {
        Portfolio::load().expect("embedded content should parse")
    }

    #[test]
    fn test_default_skills() {
        let skills = &portfolio().skills;
        let rows = skills
            .iter()
            .map(|s| (s.name.as_str(), s.level_label()))
            .collect::<Vec<_>>();
        assert_eq!(
            rows,
            vec![
                ("AWS Cloud", "90%".to_string()),
                ("Docker & Containers", "85%".to_string()),
                ("CI/CD Pipelines", "80%".to_string()),
                ("Linux & Nginx", "88%".to_string()),
            ]
        );
        assert_eq!(portfolio().out_of_range_skills().count(), 0);
    }

    #[test]
    fn test_site_metadata() {
        let site = &portfolio().site;
        assert_eq!(site.title, "Arbin Sapkota | DevOps Engineer");
        assert_eq!(
            site.description,
            "DevOps & Cloud Engineer specializing in AWS, CI/CD, and cloud infrastructure"
        );
        assert_eq!(site.variant, Variant::Classic);
    }

    #[test]
    fn test_fill_percent() {
        let skill = |level| SkillEntry {
            name: "x".to_string(),
            level,
        };
        assert_eq!(skill(0).fill_percent(), 0);
        assert_eq!(skill(100).fill_percent(), 100);
        assert_eq!(skill(42).fill_percent(), 42);
        // bar is held at the edge but the label keeps the written value
        assert_eq!(skill(150).fill_percent(), 100);
        assert_eq!(skill(150).level_label(), "150%");
        assert_eq!(skill(-5).fill_percent(), 0);
    }

    #[test]
    fn test_timeline_order() {
        let years = portfolio()
            .timeline
            .iter()
            .map(|t| t.year.as_str())
            .collect::<Vec<_>>();
        assert_eq!(years, vec!["2025", "2023"]);
        assert_eq!(portfolio().timeline[0].title, "DevOps Engineer");
    }

    #[test]
    fn test_contact_hrefs() {
        let contacts = &portfolio().contacts;
        assert_eq!(contacts.len(), 3);
        assert_eq!(contacts[0].href, "mailto:arbin@example.com");
        assert_eq!(contacts[1].href, "https://github.com/Arbinsapkota");
        assert_eq!(contacts[2].href, "#");
        assert!(!contacts[0].is_external());
        assert!(contacts[1].is_external());
        assert!(!contacts[2].is_external());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let raw = r##"{
            "site": { "owner": "o", "title": "t", "description": "d" },
            "hero": { "title": "h", "tagline": "t", "cv_href": "/cv.pdf", "contact_href": "#contact" },
            "skills": [ { "name": "Rust", "level": 70 }, { "name": "Rust", "level": 70 } ],
            "timeline": [],
            "diagrams": [],
            "contacts": [],
            "showcase": {
                "intro": [], "profiles": [], "cv_href": "/cv.pdf", "stats": [], "expertise": [],
                "projects": [], "certifications": [], "pipeline": [], "pipeline_diagram": [],
                "contact_cards": [], "availability": "", "contact_email": "", "built_with": ""
            }
        }"##;
        let p = Portfolio::from_json(raw).expect("minimal content should parse");
        assert_eq!(p.skills.len(), 2);
        assert!(p.timeline.is_empty());
        // variant defaults when omitted
        assert_eq!(p.site.variant, Variant::Classic);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Portfolio::from_json("{ not json"),
            Err(ContentError::Parse(_))
        ));
        assert!(matches!(
            Portfolio::from_assets("missing.json"),
            Err(ContentError::Missing(_))
        ));
    }

    #[test]
    fn test_icons() {
        let icons = portfolio()
            .diagrams
            .iter()
            .map(|d| d.icon.class())
            .collect::<Vec<_>>();
        assert_eq!(icons, vec!["icon-cloud", "icon-git-branch", "icon-shield"]);
        assert_eq!(Icon::GitPullRequest.name(), "git-pull-request");
    }

    #[test]
    fn test_showcase_content() {
        let showcase = &portfolio().showcase;
        assert_eq!(showcase.stats.len(), 4);
        assert_eq!(showcase.stats[2].value, 99.9);
        assert_eq!(showcase.certifications[0].accent, Accent::Amber);
        assert!(showcase.intro_text().starts_with("$ whoami\narbin-sapkota\n\n$ role"));
    }

    #[test]
    fn test_footer_text() {
        assert_eq!(footer_text("Arbin Sapkota", 2026), "© 2026 Arbin Sapkota");
    }
}
