use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

const BUNDLED: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0} must not be empty")]
    Missing(&'static str),
    #[error("duplicate clinic id {0:?}")]
    DuplicateClinic(String),
    #[error("unsupported inline markup: {0}")]
    Markup(&'static str),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    pub doctor_name: String,
    pub specialty: String,
    pub profile_image: ProfileImage,
    pub hero: HeroCopy,
    pub stats: Vec<Stat>,
    pub expertise: Expertise,
    pub clinics: Vec<Clinic>,
    pub footer: FooterCopy,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileImage {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeroCopy {
    pub badge: String,
    pub title: InlineMarkup,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Expertise {
    pub title: String,
    pub heading: String,
    pub description: String,
    pub services: Vec<Service>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Activity,
    User,
    Stethoscope,
    HeartPulse,
    CheckCircle,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Service {
    pub icon: Icon,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Clinic {
    pub id: String,
    pub name: String,
    pub status: String,
    pub address: String,
    pub hours: String,
    pub theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FooterCopy {
    pub tagline: String,
    pub motto: String,
}

impl SiteContent {
    /// Content bundled into the binary at build time.
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        require(&self.doctor_name, "doctor_name")?;
        require(&self.specialty, "specialty")?;
        require(&self.profile_image.src, "profile_image.src")?;
        if self.stats.is_empty() {
            return Err(ContentError::Missing("stats"));
        }
        for stat in &self.stats {
            require(&stat.label, "stats[].label")?;
            require(&stat.value, "stats[].value")?;
        }
        if self.expertise.services.is_empty() {
            return Err(ContentError::Missing("expertise.services"));
        }
        if self.clinics.is_empty() {
            return Err(ContentError::Missing("clinics"));
        }

        let mut ids = HashSet::new();
        for clinic in &self.clinics {
            require(&clinic.id, "clinics[].id")?;
            require(&clinic.name, "clinics[].name")?;
            if !ids.insert(clinic.id.as_str()) {
                return Err(ContentError::DuplicateClinic(clinic.id.clone()));
            }
        }
        Ok(())
    }
}

fn require(value: &str, field: &'static str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        Err(ContentError::Missing(field))
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Emphasis { class: String, text: String },
}

/// Text that may carry `<span class='…'>…</span>` runs for emphasis. Nothing
/// else is accepted, and entities are left as written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct InlineMarkup(Vec<Segment>);

impl InlineMarkup {
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }
}

impl TryFrom<String> for InlineMarkup {
    type Error = ContentError;

    fn try_from(source: String) -> Result<Self, Self::Error> {
        parse_markup(&source).map(Self)
    }
}

const SPAN_CLOSE: &str = "</span>";

pub fn parse_markup(source: &str) -> Result<Vec<Segment>, ContentError> {
    let mut segments = Vec::new();
    let mut rest = source;

    while let Some(start) = rest.find('<') {
        if start > 0 {
            segments.push(Segment::Plain(rest[..start].to_string()));
        }
        let tag = &rest[start + 1..];
        let open_end = tag
            .find('>')
            .ok_or(ContentError::Markup("unterminated tag"))?;
        let class = span_class(&tag[..open_end])
            .ok_or(ContentError::Markup("only <span> with a class is allowed"))?;

        let body = &tag[open_end + 1..];
        let close = body
            .find(SPAN_CLOSE)
            .ok_or(ContentError::Markup("missing </span>"))?;
        let text = &body[..close];
        if text.contains('<') {
            return Err(ContentError::Markup("nested tags are not allowed"));
        }
        segments.push(Segment::Emphasis {
            class,
            text: text.to_string(),
        });
        rest = &body[close + SPAN_CLOSE.len()..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Plain(rest.to_string()));
    }
    Ok(segments)
}

fn span_class(tag: &str) -> Option<String> {
    let attrs = tag.strip_prefix("span")?;
    if attrs.is_empty() {
        return Some(String::new());
    }
    if !attrs.starts_with(char::is_whitespace) {
        return None;
    }
    let value = attrs.trim().strip_prefix("class=")?;
    let quote = value.chars().next().filter(|c| *c == '\'' || *c == '"')?;
    let inner = value[1..].strip_suffix(quote)?;
    if inner.contains(quote) {
        return None;
    }
    Some(inner.to_string())
}
