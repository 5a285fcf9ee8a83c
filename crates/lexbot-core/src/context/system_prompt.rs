use crate::constants::prompts;
use crate::error::LexError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Legal area the conversation is focused on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Topic {
    #[default]
    General,
    EmploymentLaw,
    FamilyLaw,
    ContractLaw,
    PropertyLaw,
    CriminalLaw,
    IntellectualProperty,
    TortLaw,
    BusinessLaw,
    CivilRights,
}

impl Topic {
    pub const ALL: [Topic; 10] = [
        Topic::General,
        Topic::EmploymentLaw,
        Topic::FamilyLaw,
        Topic::ContractLaw,
        Topic::PropertyLaw,
        Topic::CriminalLaw,
        Topic::IntellectualProperty,
        Topic::TortLaw,
        Topic::BusinessLaw,
        Topic::CivilRights,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::EmploymentLaw => "Employment Law",
            Self::FamilyLaw => "Family Law",
            Self::ContractLaw => "Contract Law",
            Self::PropertyLaw => "Property Law",
            Self::CriminalLaw => "Criminal Law",
            Self::IntellectualProperty => "Intellectual Property",
            Self::TortLaw => "Tort Law",
            Self::BusinessLaw => "Business Law",
            Self::CivilRights => "Civil Rights",
        }
    }

    pub fn all_names() -> Vec<&'static str> {
        Self::ALL.iter().map(Topic::name).collect()
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topic {
    type Err = LexError;

    /// Accepts the display name in any case, with `-` or `_` in place of
    /// spaces, the name without its trailing "Law", or `ip`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', '_'], " ");
        if wanted == "ip" {
            return Ok(Self::IntellectualProperty);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|topic| {
                let name = topic.name().to_lowercase();
                name == wanted || name.strip_suffix(" law") == Some(wanted.as_str())
            })
            .ok_or_else(|| LexError::UnknownTopic(s.trim().to_string()))
    }
}

impl TryFrom<String> for Topic {
    type Error = LexError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Topic> for String {
    fn from(topic: Topic) -> Self {
        topic.name().to_string()
    }
}

/// How long the reply should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResponseLength {
    Brief,
    #[default]
    Medium,
    Detailed,
}

impl ResponseLength {
    pub const ALL: [ResponseLength; 3] = [Self::Brief, Self::Medium, Self::Detailed];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Brief => "Brief",
            Self::Medium => "Medium",
            Self::Detailed => "Detailed",
        }
    }

    /// Total parse: anything unrecognized is `Medium`.
    pub fn from_name(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "brief" => Self::Brief,
            "detailed" => Self::Detailed,
            _ => Self::Medium,
        }
    }

    pub fn directive(&self) -> &'static str {
        match self {
            Self::Brief => prompts::BRIEF_DIRECTIVE,
            Self::Detailed => prompts::DETAILED_DIRECTIVE,
            Self::Medium => prompts::MEDIUM_DIRECTIVE,
        }
    }
}

impl fmt::Display for ResponseLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strict parse for user input: only the three names, in any case.
impl FromStr for ResponseLength {
    type Err = LexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|length| length.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LexError::UnknownLength(s.trim().to_string()))
    }
}

impl From<String> for ResponseLength {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<ResponseLength> for String {
    fn from(length: ResponseLength) -> Self {
        length.name().to_string()
    }
}

/// Builds the system prompt: base persona, optional focus area, one length
/// directive.
#[derive(Debug, Clone)]
pub struct PromptComposer {
    base: String,
}

impl PromptComposer {
    pub fn new() -> Self {
        Self {
            base: prompts::BASE_PERSONA.to_string(),
        }
    }

    /// Replace the base persona text.
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn compose(&self, topic: Topic, length: ResponseLength) -> String {
        let directive = length.directive();
        let mut prompt = String::with_capacity(self.base.len() + directive.len() + 128);

        prompt.push_str(&self.base);

        if topic != Topic::General {
            prompt.push_str(&focus_sentence(topic));
        }

        prompt.push_str(directive);
        prompt
    }
}

impl Default for PromptComposer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn focus_sentence(topic: Topic) -> String {
    format!(
        "\n\nCurrent focus area: {}. Provide information relevant to this legal domain.",
        topic.name()
    )
}
