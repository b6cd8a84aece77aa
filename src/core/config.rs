//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.quill/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::Platform;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuillConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_platform: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SpeechConfig {
    /// Shell command whose stdout lines become the dictation transcript.
    pub command: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub platform: Platform,
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub speech_command: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.quill/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".quill").join("config.toml"))
}

/// Load config from `~/.quill/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `QuillConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<QuillConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(QuillConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(QuillConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: QuillConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Quill Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_platform = "general"       # "general", "twitter", "instagram", "linkedin", "facebook"

# [gemini]
# api_key = "AIza..."                # Or set GEMINI_API_KEY env var
# base_url = "https://generativelanguage.googleapis.com/v1beta"
# model = "gemini-pro"

# [speech]
# A transcriber command for dictation. Quill runs it while the mic key is
# held on and folds its stdout lines into the transcript.
# command = "whisper-stream --model base.en --output-lines"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_platform` is from the CLI flag (None = not specified).
pub fn resolve(config: &QuillConfig, cli_platform: Option<Platform>) -> ResolvedConfig {
    // Platform: CLI → env → config → default
    let platform = cli_platform
        .or_else(|| platform_from_env())
        .or_else(|| {
            config
                .general
                .default_platform
                .as_deref()
                .and_then(|name| {
                    let parsed = Platform::from_name(name);
                    if parsed.is_none() {
                        warn!("Unknown default_platform {name:?} in config, ignoring");
                    }
                    parsed
                })
        })
        .unwrap_or_default();

    // Gemini API key: env → config
    let gemini_api_key = std::env::var("GEMINI_API_KEY")
        .ok()
        .or_else(|| config.gemini.api_key.clone());

    // Gemini base URL: env → config → default
    let gemini_base_url = std::env::var("GEMINI_BASE_URL")
        .ok()
        .or_else(|| config.gemini.base_url.clone())
        .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string());

    // Gemini model: env → config → default
    let gemini_model = std::env::var("GEMINI_MODEL")
        .ok()
        .or_else(|| config.gemini.model.clone())
        .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

    // Speech command: env → config
    let speech_command = std::env::var("QUILL_SPEECH_COMMAND")
        .ok()
        .or_else(|| config.speech.command.clone());

    ResolvedConfig {
        platform,
        gemini_api_key,
        gemini_base_url,
        gemini_model,
        speech_command,
    }
}

fn platform_from_env() -> Option<Platform> {
    let name = std::env::var("QUILL_PLATFORM").ok()?;
    let parsed = Platform::from_name(&name);
    if parsed.is_none() {
        warn!("Unknown QUILL_PLATFORM {name:?}, ignoring");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = QuillConfig::default();
        assert!(config.general.default_platform.is_none());
        assert!(config.gemini.api_key.is_none());
        assert!(config.speech.command.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = QuillConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.gemini_base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(resolved.gemini_model, DEFAULT_GEMINI_MODEL);
        assert!(resolved.speech_command.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = QuillConfig {
            general: GeneralConfig {
                default_platform: Some("twitter".to_string()),
            },
            gemini: GeminiConfig {
                api_key: Some("key-from-file".to_string()),
                base_url: Some("http://localhost:9999".to_string()),
                model: Some("gemini-ultra".to_string()),
            },
            speech: SpeechConfig {
                command: Some("transcribe --stream".to_string()),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.platform, Platform::Twitter);
        assert_eq!(resolved.gemini_base_url, "http://localhost:9999");
        assert_eq!(resolved.gemini_model, "gemini-ultra");
        assert_eq!(resolved.speech_command.as_deref(), Some("transcribe --stream"));
    }

    #[test]
    fn test_resolve_cli_platform_wins() {
        let config = QuillConfig {
            general: GeneralConfig {
                default_platform: Some("facebook".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(Platform::Linkedin));
        assert_eq!(resolved.platform, Platform::Linkedin);
    }

    #[test]
    fn test_resolve_ignores_unknown_platform_name() {
        let config = QuillConfig {
            general: GeneralConfig {
                default_platform: Some("myspace".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.platform, Platform::General);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
default_platform = "instagram"

[gemini]
api_key = "AIza-test-123"
model = "gemini-pro"

[speech]
command = "whisper-stream"
"#;
        let config: QuillConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.general.default_platform.as_deref(),
            Some("instagram")
        );
        assert_eq!(config.gemini.api_key.as_deref(), Some("AIza-test-123"));
        assert_eq!(config.gemini.base_url, None);
        assert_eq!(config.speech.command.as_deref(), Some("whisper-stream"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[gemini]
api_key = "only-the-key"
"#;
        let config: QuillConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.api_key.as_deref(), Some("only-the-key"));
        assert!(config.general.default_platform.is_none());
        assert!(config.speech.command.is_none());
    }
}
