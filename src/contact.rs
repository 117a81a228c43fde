//! Static contact identity and destination links.

use std::fmt;
use std::str::FromStr;

pub const DEFAULT_EMAIL: &str = "jatinm1shra10cr@gmail.com";
pub const DEFAULT_PHONE_E164: &str = "+919696658203";

pub const DEFAULT_SCHEDULING_URL: &str = "https://topmate.io/jatin_mishra/";
pub const DEFAULT_RESUME_URL: &str = "https://jatin-mishra.github.io/Jatin_Resume.pdf";
pub const DEFAULT_PROFILE_URL: &str = "https://www.linkedin.com/in/jatin-mishra/";

/// Message pre-filled into the outbound messaging link.
pub const DEFAULT_MESSAGE: &str = "Discussing backend engineering opportunities.";

/// Subject used by the training inquiry mail link.
pub const TRAINING_SUBJECT: &str = "Corporate Training Inquiry";

/// Who to contact. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactIdentity {
    pub email: String,
    pub phone_e164: String,
}

impl ContactIdentity {
    pub fn new(email: impl Into<String>, phone_e164: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            phone_e164: phone_e164.into(),
        }
    }
}

impl Default for ContactIdentity {
    fn default() -> Self {
        Self::new(DEFAULT_EMAIL, DEFAULT_PHONE_E164)
    }
}

/// Named outbound destinations rendered next to the contact actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    pub scheduling: String,
    pub resume: String,
    pub profile: String,
}

impl Links {
    /// `(label, url)` pairs in the order the contact block lists them.
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("Topmate", self.scheduling.as_str()),
            ("LinkedIn", self.profile.as_str()),
            ("Resume", self.resume.as_str()),
        ]
    }
}

impl Default for Links {
    fn default() -> Self {
        Self {
            scheduling: DEFAULT_SCHEDULING_URL.to_string(),
            resume: DEFAULT_RESUME_URL.to_string(),
            profile: DEFAULT_PROFILE_URL.to_string(),
        }
    }
}

/// Which copy action produced a piece of feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyKind {
    Email,
    Whatsapp,
}

impl CopyKind {
    /// The text this kind copies out of `identity`.
    pub fn payload<'a>(&self, identity: &'a ContactIdentity) -> &'a str {
        match self {
            CopyKind::Email => &identity.email,
            CopyKind::Whatsapp => &identity.phone_e164,
        }
    }

    pub fn success_description(&self) -> &'static str {
        match self {
            CopyKind::Email => "Email copied.",
            CopyKind::Whatsapp => "WhatsApp number copied.",
        }
    }
}

impl fmt::Display for CopyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyKind::Email => f.write_str("email"),
            CopyKind::Whatsapp => f.write_str("whatsapp"),
        }
    }
}

impl FromStr for CopyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(CopyKind::Email),
            "whatsapp" | "phone" => Ok(CopyKind::Whatsapp),
            other => Err(format!("unknown copy kind: {}", other)),
        }
    }
}
