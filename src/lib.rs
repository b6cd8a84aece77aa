//! Quill library exports for testing

use clap::ValueEnum;
use std::fmt;

pub mod core;
pub mod genai;
pub mod media;
pub mod speech;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Target platform for generated content. The name is interpolated into
/// the generation prompt; `General` asks for platform-neutral copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Platform {
    #[default]
    General,
    Twitter,
    Instagram,
    Linkedin,
    Facebook,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::General => "general",
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
            Platform::Linkedin => "linkedin",
            Platform::Facebook => "facebook",
        }
    }

    /// Parses a platform name as it appears in config files or env vars.
    pub fn from_name(name: &str) -> Option<Platform> {
        match name.to_ascii_lowercase().as_str() {
            "general" => Some(Platform::General),
            "twitter" => Some(Platform::Twitter),
            "instagram" => Some(Platform::Instagram),
            "linkedin" => Some(Platform::Linkedin),
            "facebook" => Some(Platform::Facebook),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_name_round_trip() {
        for platform in [
            Platform::General,
            Platform::Twitter,
            Platform::Instagram,
            Platform::Linkedin,
            Platform::Facebook,
        ] {
            assert_eq!(Platform::from_name(platform.as_str()), Some(platform));
        }
    }

    #[test]
    fn test_platform_from_name_ignores_case() {
        assert_eq!(Platform::from_name("Twitter"), Some(Platform::Twitter));
        assert_eq!(Platform::from_name("GENERAL"), Some(Platform::General));
    }

    #[test]
    fn test_platform_from_name_unknown() {
        assert_eq!(Platform::from_name("myspace"), None);
    }
}
