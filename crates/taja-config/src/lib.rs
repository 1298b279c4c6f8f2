//! Configuration loading for the taja banner.
//!
//! Reads `taja.toml` from the platform config directory; a missing file
//! yields the defaults. The two built-in profiles carry the banner's two
//! stock content sets, and every field can be overridden individually.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;
use taja_core::{BackdropSettings, ColorTheme, DEFAULT_STAR_COUNT};

/// Largest accepted star count.
const MAX_STAR_COUNT: u16 = 500;

/// Role list for the `garden` profile.
const GARDEN_ROLES: &[&str] = &[
    "Ideas Growing Under the Sun 🌱",
    "Different Perspectives, One Vision 📖",
    "Where Wisdom Meets Innovation 🦉",
    "AI & Machine Learning 🤖",
    "Amateur Astronomer 🔭",
    "Science & Philosophy ⚛️",
];

/// Role list for the `observatory` profile.
const OBSERVATORY_ROLES: &[&str] = &[
    "AI & Machine Learning Engineer 🤖",
    "Amateur Astronomer 🔭",
    "Physics Enthusiast ⚛️",
    "Mathematics Lover ∑",
    "Full-Stack Developer 💻",
    "Science Fiction Writer ✍️",
];

/// A built-in content set: stock roles plus which layers it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Profile {
    /// Growth-themed roles with the leaf drift enabled.
    Garden,
    /// Engineer/astronomer roles under a bare star field.
    Observatory,
}

impl Profile {
    /// Resolve a profile from its config-file name. Unknown names fall
    /// back to `Garden`.
    fn from_name(name: &str) -> Self {
        match name {
            "observatory" => Profile::Observatory,
            _ => Profile::Garden,
        }
    }

    fn roles(self) -> &'static [&'static str] {
        match self {
            Profile::Garden => GARDEN_ROLES,
            Profile::Observatory => OBSERVATORY_ROLES,
        }
    }

    fn leaves(self) -> bool {
        matches!(self, Profile::Garden)
    }
}

/// User configuration, deserialized from `taja.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Built-in content set: `garden` or `observatory`.
    pub profile: String,
    /// Banner headline above the typed line.
    pub title: String,
    /// Custom role list; empty means the profile's stock list.
    pub roles: Vec<String>,
    /// Color theme name for the banner text.
    pub theme: String,
    /// Override for the leaf drift layer.
    pub leaves: Option<bool>,
    /// Override for the star field layer.
    pub stars: Option<bool>,
    /// Number of stars to scatter (clamped to 0..=500).
    pub star_count: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: "garden".to_string(),
            title: "Welcome".to_string(),
            roles: Vec::new(),
            theme: String::new(),
            leaves: None,
            stars: None,
            star_count: DEFAULT_STAR_COUNT,
        }
    }
}

impl Config {
    /// The effective role list: custom roles, or the profile's stock list.
    pub fn role_list(&self) -> Vec<String> {
        if self.roles.is_empty() {
            Profile::from_name(&self.profile)
                .roles()
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            self.roles.clone()
        }
    }

    /// The effective backdrop settings.
    pub fn backdrop(&self) -> BackdropSettings {
        let profile = Profile::from_name(&self.profile);
        BackdropSettings {
            leaves: self.leaves.unwrap_or(profile.leaves()),
            stars: self.stars.unwrap_or(true),
            star_count: self.star_count.min(MAX_STAR_COUNT),
        }
    }

    /// The effective color theme. Unknown names fall back to the default.
    pub fn color_theme(&self) -> ColorTheme {
        ColorTheme::from_name(&self.theme).unwrap_or_default()
    }
}

/// Path of the config file, if a config directory can be determined.
fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "taja").map(|dirs| dirs.config_dir().join("taja.toml"))
}

/// Load the configuration, falling back to defaults when no file exists.
pub fn load() -> Result<Config, String> {
    let Some(path) = config_path() else {
        return Ok(Config::default());
    };
    if !path.exists() {
        return Ok(Config::default());
    }

    let raw = fs::read_to_string(&path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    parse(&raw).map_err(|e| format!("failed to parse {}: {e}", path.display()))
}

/// Parse a configuration document.
fn parse(raw: &str) -> Result<Config, String> {
    toml::from_str(raw).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_all_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.profile, "garden");
        assert_eq!(config.star_count, DEFAULT_STAR_COUNT);
        assert_eq!(config.role_list().len(), GARDEN_ROLES.len());
        assert!(config.backdrop().leaves);
        assert!(config.backdrop().stars);
    }

    #[test]
    fn test_full_document() {
        let config = parse(
            r#"
            profile = "observatory"
            title = "Hello"
            theme = "cyan"
            stars = true
            star_count = 40
            "#,
        )
        .unwrap();
        assert_eq!(config.title, "Hello");
        assert_eq!(config.color_theme(), ColorTheme::Cyan);
        assert_eq!(config.backdrop().star_count, 40);
        assert!(!config.backdrop().leaves);
        assert_eq!(config.role_list()[0], "AI & Machine Learning Engineer 🤖");
    }

    #[test]
    fn test_unknown_profile_falls_back_to_garden() {
        let config = parse("profile = \"arboretum\"").unwrap();
        assert_eq!(config.role_list().len(), GARDEN_ROLES.len());
        assert!(config.backdrop().leaves);
    }

    #[test]
    fn test_custom_roles_override_profile() {
        let config = parse("roles = [\"Only Role\"]").unwrap();
        assert_eq!(config.role_list(), ["Only Role"]);
    }

    #[test]
    fn test_empty_custom_roles_fall_back_to_profile() {
        let config = parse("roles = []").unwrap();
        assert_eq!(config.role_list().len(), GARDEN_ROLES.len());
    }

    #[test]
    fn test_layer_overrides_beat_profile() {
        let config = parse(
            r#"
            profile = "observatory"
            leaves = true
            stars = false
            "#,
        )
        .unwrap();
        let backdrop = config.backdrop();
        assert!(backdrop.leaves);
        assert!(!backdrop.stars);
    }

    #[test]
    fn test_star_count_is_clamped() {
        let config = parse("star_count = 9000").unwrap();
        assert_eq!(config.backdrop().star_count, MAX_STAR_COUNT);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let config = parse("theme = \"chartreuse\"").unwrap();
        assert_eq!(config.color_theme(), ColorTheme::default());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(parse("star_count = \"many\"").is_err());
    }
}
