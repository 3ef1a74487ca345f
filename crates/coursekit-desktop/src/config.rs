//! Desktop configuration resolved from the environment.

use coursekit_core::config::{ClientConfig, ClientSettings};
use coursekit_core::{CourseId, Error, Result};

use crate::theme::{parse_theme, ResolvedTheme};

pub const COURSE_ID_VAR: &str = "COURSEKIT_COURSE_ID";
pub const THEME_VAR: &str = "COURSEKIT_THEME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopConfig {
    pub client: ClientConfig,
    pub course_id: CourseId,
    pub theme: ResolvedTheme,
}

/// Loads configuration from process environment variables.
///
/// A course id passed as the first command-line argument takes precedence
/// over `COURSEKIT_COURSE_ID`.
pub fn load_desktop_config() -> Result<DesktopConfig> {
    let cli_course_id = std::env::args().nth(1);
    resolve_desktop_config(
        ClientSettings::from_env(),
        |key| std::env::var(key).ok(),
        cli_course_id,
    )
}

fn resolve_desktop_config(
    settings: ClientSettings,
    lookup: impl Fn(&str) -> Option<String>,
    cli_course_id: Option<String>,
) -> Result<DesktopConfig> {
    let client = settings.resolve()?;

    let course_id = cli_course_id
        .or_else(|| lookup(COURSE_ID_VAR))
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            Error::Config(format!(
                "a course id is required (pass it as an argument or set {COURSE_ID_VAR})"
            ))
        })?;

    let theme = lookup(THEME_VAR)
        .as_deref()
        .map_or(ResolvedTheme::Light, parse_theme);

    Ok(DesktopConfig {
        client,
        course_id: CourseId::new(course_id),
        theme,
    })
}
