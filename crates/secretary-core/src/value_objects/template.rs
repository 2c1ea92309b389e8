//! Message templates for arrival and departure notifications
//!
//! Templates use `{{field}}` placeholders referring to profile fields. They are
//! compiled once when profiles are loaded so rendering can never fail.

use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Profile fields that may be referenced from a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    ChatId,
    ChatChannel,
    DisplayName,
    DisplayIcon,
}

impl ProfileField {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::ChatId,
        Self::ChatChannel,
        Self::DisplayName,
        Self::DisplayIcon,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::ChatId => "chat_id",
            Self::ChatChannel => "chat_channel",
            Self::DisplayName => "display_name",
            Self::DisplayIcon => "display_icon",
        }
    }
}

impl FromStr for ProfileField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::InvalidTemplate(format!("unknown placeholder `{s}`")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Field(ProfileField),
}

/// A compiled message template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl MessageTemplate {
    const OPEN: &'static str = "{{";
    const CLOSE: &'static str = "}}";

    /// Compile a template, rejecting unknown placeholders and unbalanced braces
    pub fn parse(source: &str) -> Result<Self, DomainError> {
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(open) = rest.find(Self::OPEN) {
            if open > 0 {
                segments.push(Segment::Text(rest[..open].to_string()));
            }
            let after_open = &rest[open + Self::OPEN.len()..];
            let close = after_open.find(Self::CLOSE).ok_or_else(|| {
                DomainError::InvalidTemplate(format!("unclosed `{{{{` in \"{source}\""))
            })?;
            let field = after_open[..close].trim().parse::<ProfileField>()?;
            segments.push(Segment::Field(field));
            rest = &after_open[close + Self::CLOSE.len()..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// Render the template, resolving each placeholder through `lookup`
    pub fn render<'a, F>(&self, lookup: F) -> String
    where
        F: Fn(ProfileField) -> &'a str,
    {
        self.segments.iter().fold(
            String::with_capacity(self.source.len()),
            |mut out, segment| {
                match segment {
                    Segment::Text(text) => out.push_str(text),
                    Segment::Field(field) => out.push_str(lookup(*field)),
                }
                out
            },
        )
    }

    /// The template text as written in the profile file
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Fields referenced by this template, in order of appearance
    pub fn fields(&self) -> impl Iterator<Item = ProfileField> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field(field) => Some(*field),
            Segment::Text(_) => None,
        })
    }
}

impl fmt::Display for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for MessageTemplate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
