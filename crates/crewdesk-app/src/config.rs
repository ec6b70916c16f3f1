use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crewdesk_core::category::{
    ActivityKind, AttendanceStatus, Category, Folder, MeetingKind, TaskPriority, TaskStatus,
};
use crewdesk_core::classify::{self, Classification, Classifier};

/// Top-level application configuration loaded from `crewdesk.toml`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl AppConfig {
    /// Load configuration from a known path; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails when the file exists but cannot be read, parsed or validated.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.theme.validate()
    }

    /// Build the per-domain classifier tables with theme overrides applied.
    ///
    /// # Errors
    /// Fails when an override names a category outside its domain.
    pub fn classifiers(&self) -> Result<Classifiers> {
        self.theme.classifiers()
    }
}

/// Classifier tables for every domain, built once at startup and shared.
#[derive(Debug, Clone)]
pub struct Classifiers {
    pub task_status: Classifier,
    pub task_priority: Classifier,
    pub attendance_status: Classifier,
    pub meeting_kind: Classifier,
    pub activity_kind: Classifier,
    pub folder: Classifier,
}

impl Default for Classifiers {
    fn default() -> Self {
        Self {
            task_status: classify::task_status(),
            task_priority: classify::task_priority(),
            attendance_status: classify::attendance_status(),
            meeting_kind: classify::meeting_kind(),
            activity_kind: classify::activity_kind(),
            folder: classify::folder(),
        }
    }
}

/// Per-domain display overrides, keyed by category token.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ThemeConfig {
    #[serde(default)]
    task_status: BTreeMap<String, StyleOverride>,
    #[serde(default)]
    task_priority: BTreeMap<String, StyleOverride>,
    #[serde(default)]
    attendance_status: BTreeMap<String, StyleOverride>,
    #[serde(default)]
    meeting_kind: BTreeMap<String, StyleOverride>,
    #[serde(default)]
    activity_kind: BTreeMap<String, StyleOverride>,
    #[serde(default)]
    folder: BTreeMap<String, StyleOverride>,
}

/// Partial override of one category's classification.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleOverride {
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    icon: Option<String>,
}

impl ThemeConfig {
    fn validate(&self) -> Result<()> {
        for overrides in [
            &self.task_status,
            &self.task_priority,
            &self.attendance_status,
            &self.meeting_kind,
            &self.activity_kind,
            &self.folder,
        ] {
            for (token, style) in overrides {
                if let Some(color) = &style.color {
                    ensure_hex_color(token, color)?;
                }
            }
        }
        Ok(())
    }

    fn classifiers(&self) -> Result<Classifiers> {
        Ok(Classifiers {
            task_status: apply::<TaskStatus>("task_status", classify::task_status(), &self.task_status)?,
            task_priority: apply::<TaskPriority>(
                "task_priority",
                classify::task_priority(),
                &self.task_priority,
            )?,
            attendance_status: apply::<AttendanceStatus>(
                "attendance_status",
                classify::attendance_status(),
                &self.attendance_status,
            )?,
            meeting_kind: apply::<MeetingKind>("meeting_kind", classify::meeting_kind(), &self.meeting_kind)?,
            activity_kind: apply::<ActivityKind>(
                "activity_kind",
                classify::activity_kind(),
                &self.activity_kind,
            )?,
            folder: apply::<Folder>("folder", classify::folder(), &self.folder)?,
        })
    }
}

fn apply<C: Category>(
    domain: &'static str,
    mut table: Classifier,
    overrides: &BTreeMap<String, StyleOverride>,
) -> Result<Classifier> {
    for (token, style) in overrides {
        let Some(category) = C::parse(token) else {
            bail!("unknown {domain} category in theme: {token}");
        };
        let current = table.classify(category.label()).clone();
        let merged = Classification {
            color: style.color.clone().unwrap_or(current.color),
            icon: style.icon.clone().unwrap_or(current.icon),
        };
        table.override_entry(category.label(), merged);
    }
    Ok(table)
}

fn ensure_hex_color(token: &str, value: &str) -> Result<()> {
    let digits = value.strip_prefix('#').unwrap_or("");
    let valid = matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        bail!("theme color for '{token}' must be #RGB or #RRGGBB, got '{value}'");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn missing_config_yields_builtin_tables() -> Result<()> {
        let dir = tempdir()?;
        let config = AppConfig::from_path(dir.path().join("crewdesk.toml"))?;
        let tables = config.classifiers()?;
        assert_eq!(tables.task_status.classify("Pending").color, "#FF9800");
        assert_eq!(tables.meeting_kind.classify("Virtual").icon, "📹");
        Ok(())
    }

    #[test]
    fn overrides_merge_into_the_tables() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("crewdesk.toml");
        let mut file = fs::File::create(&path)?;
        writeln!(
            file,
            "[theme.task_status]\npending = {{ color = \"#FFA000\" }}\n\n[theme.meeting_kind]\nin_person = {{ icon = \"🏛️\" }}"
        )?;

        let tables = AppConfig::from_path(&path)?.classifiers()?;
        // Color overridden, icon kept from the builtin table.
        assert_eq!(tables.task_status.classify("Pending").color, "#FFA000");
        assert_eq!(tables.task_status.classify("Pending").icon, "⏳");
        assert_eq!(tables.meeting_kind.classify("In-Person").icon, "🏛️");
        assert_eq!(tables.meeting_kind.classify("In-Person").color, "#4CAF50");
        // Untouched entries keep their defaults.
        assert_eq!(tables.task_status.classify("Completed").color, "#4CAF50");
        Ok(())
    }

    #[test]
    fn unknown_category_tokens_are_rejected() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("crewdesk.toml");
        let mut file = fs::File::create(&path)?;
        writeln!(file, "[theme.task_status]\ncancelled = {{ color = \"#000000\" }}")?;

        let Err(err) = AppConfig::from_path(&path)?.classifiers() else {
            panic!("unknown category token should error");
        };
        assert!(err.to_string().contains("unknown task_status category"));
        Ok(())
    }

    #[test]
    fn malformed_colors_are_rejected_at_load() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("crewdesk.toml");
        let mut file = fs::File::create(&path)?;
        writeln!(file, "[theme.folder]\ninbox = {{ color = \"blue\" }}")?;

        let Err(err) = AppConfig::from_path(&path) else {
            panic!("malformed color should error");
        };
        assert!(err.to_string().contains("must be #RGB or #RRGGBB"));
        Ok(())
    }

    #[test]
    fn short_hex_colors_are_accepted() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("crewdesk.toml");
        let mut file = fs::File::create(&path)?;
        writeln!(file, "[theme.task_priority]\nlow = {{ color = \"#0f0\" }}")?;

        let tables = AppConfig::from_path(&path)?.classifiers()?;
        assert_eq!(tables.task_priority.classify("Low").color, "#0f0");
        Ok(())
    }
}
