//! Static page content, bundled at build time from `content/site.json`.
//!
//! The document is parsed and validated once at start-up. After that the
//! content is read-only; the view only ever borrows from it.

use serde::Deserialize;
use url::Url;

use crate::carousel::ProjectId;
use crate::error::ContentError;

const BUNDLED_CONTENT: &str = include_str!("../content/site.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Mobile,
    Brain,
    Database,
    Code,
    Github,
    Linkedin,
    Mail,
    Award,
}

impl IconKind {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Mobile => "▯",
            Self::Brain => "✷",
            Self::Database => "⛁",
            Self::Code => "</>",
            Self::Github => "⌥",
            Self::Linkedin => "in",
            Self::Mail => "✉",
            Self::Award => "★",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub summary_lead: String,
    #[serde(default)]
    pub focus: Vec<String>,
    pub summary_tail: String,
    pub photo: String,
    pub copyright: String,
}

impl Profile {
    /// Text placed before the focus item at `index`, producing "A, B, and C".
    pub fn focus_separator(&self, index: usize) -> &'static str {
        let len = self.focus.len();
        match index {
            0 => " ",
            i if i + 1 == len && len == 2 => " and ",
            i if i + 1 == len => ", and ",
            _ => ", ",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub title: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub description: String,
    pub category: String,
    pub icon: IconKind,
    pub images: Vec<String>,
    pub repository: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl ProjectEntry {
    pub fn image_alt(&self, index: usize) -> String {
        format!("{} screenshot {}", self.title, index + 1)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub icon: IconKind,
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub dates: String,
    pub grade: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub icon: IconKind,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactLinks {
    pub heading: String,
    pub tagline: String,
    pub email: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

impl ContactLinks {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    pub education: Education,
    pub contact: ContactLinks,
}

impl SiteContent {
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_CONTENT)
    }

    pub fn from_json(document: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(document)?;
        content.validate()?;
        Ok(content)
    }

    pub fn projects(&self) -> impl Iterator<Item = (ProjectId, &ProjectEntry)> {
        self.projects
            .iter()
            .enumerate()
            .map(|(index, project)| (ProjectId(index), project))
    }

    fn validate(&self) -> Result<(), ContentError> {
        // The summary lead ends mid-sentence and reads into the focus list.
        if self.profile.focus.is_empty() {
            return Err(ContentError::EmptyFocus);
        }

        for (index, project) in self.projects.iter().enumerate() {
            if project.images.is_empty() {
                return Err(ContentError::NoImages {
                    project: project.title.clone(),
                });
            }
            ensure_link(&format!("projects[{index}].repository"), &project.repository)?;
        }

        ensure_link("profile.photo", &self.profile.photo)?;

        for (index, social) in self.contact.socials.iter().enumerate() {
            ensure_link(&format!("contact.socials[{index}].url"), &social.url)?;
        }

        if !is_well_formed_email(&self.contact.email) {
            return Err(ContentError::MalformedEmail(self.contact.email.clone()));
        }

        Ok(())
    }
}

fn ensure_link(field: &str, value: &str) -> Result<(), ContentError> {
    if is_well_formed_link(value) {
        return Ok(());
    }

    Err(ContentError::MalformedLink {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Absolute http(s) URL with a host, or a site-relative path.
pub fn is_well_formed_link(value: &str) -> bool {
    if value.starts_with('/') {
        return !value.starts_with("//") && !value.chars().any(char::is_whitespace);
    }

    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
        .unwrap_or(false)
}

fn is_well_formed_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.chars().any(char::is_whitespace)
}
