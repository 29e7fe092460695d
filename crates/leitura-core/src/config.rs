use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Contacts for delivery (optional section in config.toml). Defaults send
/// to the notepad test contact until a reading group is configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactsConfig {
    /// Contact used for dry runs and error notices.
    pub test_user: String,
    /// Contact that receives the daily reading when no group is set.
    pub support_user: String,
    /// Reading group chat name; when set it receives the daily reading.
    #[serde(default)]
    pub reading_group: Option<String>,
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            test_user: "Bloco de Notas".to_string(),
            support_user: "Bloco de Notas".to_string(),
            reading_group: None,
        }
    }
}

impl ContactsConfig {
    /// The contact the daily reading goes to: the group when configured,
    /// the support user otherwise.
    pub fn recipient(&self) -> &str {
        self.reading_group.as_deref().unwrap_or(&self.support_user)
    }
}

/// Delivery sink: print to the console or append to the outbox file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    #[default]
    Console,
    Outbox,
}

/// Global configuration loaded from `~/.config/leitura/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeituraConfig {
    /// Chapters delivered per day.
    pub chapters_per_day: u32,
    /// First hour (inclusive) of the daily send window.
    pub window_start_hour: u32,
    /// Last hour (inclusive) of the daily send window.
    pub window_end_hour: u32,
    /// Corpus root directory; defaults to `~/.local/share/leitura/bible`.
    #[serde(default)]
    pub corpus_dir: Option<PathBuf>,
    /// Delivery sink: "console" (default) or "outbox".
    #[serde(default)]
    pub delivery: DeliveryMode,
    #[serde(default)]
    pub contacts: ContactsConfig,
}

impl Default for LeituraConfig {
    fn default() -> Self {
        Self {
            chapters_per_day: 4,
            window_start_hour: 5,
            window_end_hour: 20,
            corpus_dir: None,
            delivery: DeliveryMode::default(),
            contacts: ContactsConfig::default(),
        }
    }
}

impl LeituraConfig {
    /// Resolved corpus root: the configured override or the XDG data dir.
    pub fn corpus_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.corpus_dir {
            return Ok(dir.clone());
        }
        let xdg_dirs = xdg::BaseDirectories::with_prefix("leitura")?;
        Ok(xdg_dirs.get_data_home().join("bible"))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("leitura")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LeituraConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LeituraConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: LeituraConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = LeituraConfig::default();
        assert_eq!(cfg.chapters_per_day, 4);
        assert_eq!(cfg.window_start_hour, 5);
        assert_eq!(cfg.window_end_hour, 20);
        assert_eq!(cfg.delivery, DeliveryMode::Console);
        assert_eq!(cfg.contacts.recipient(), "Bloco de Notas");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = LeituraConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: LeituraConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.chapters_per_day, cfg.chapters_per_day);
        assert_eq!(parsed.window_start_hour, cfg.window_start_hour);
        assert_eq!(parsed.window_end_hour, cfg.window_end_hour);
        assert_eq!(parsed.contacts.support_user, cfg.contacts.support_user);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            chapters_per_day = 2
            window_start_hour = 7
            window_end_hour = 22
            corpus_dir = "/srv/bible"
            delivery = "outbox"

            [contacts]
            test_user = "Teste"
            support_user = "Suporte"
            reading_group = "Grupo de Leitura"
        "#;
        let cfg: LeituraConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.chapters_per_day, 2);
        assert_eq!(cfg.window_end_hour, 22);
        assert_eq!(cfg.corpus_dir.as_deref(), Some(std::path::Path::new("/srv/bible")));
        assert_eq!(cfg.delivery, DeliveryMode::Outbox);
        assert_eq!(cfg.contacts.recipient(), "Grupo de Leitura");
    }

    #[test]
    fn contacts_section_optional() {
        let toml = r#"
            chapters_per_day = 4
            window_start_hour = 5
            window_end_hour = 20
        "#;
        let cfg: LeituraConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.contacts.support_user, "Bloco de Notas");
        assert!(cfg.contacts.reading_group.is_none());
    }
}
