use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Keys an admin may edit, in display order.
pub const EDITABLE_KEYS: &[&str] = &[
    "assistant_name",
    "welcome_title",
    "welcome_message",
    "topics_title",
    "specialties",
];

/// Interface texts shown around the answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSettings {
    pub assistant_name: String,
    pub welcome_title: String,
    pub welcome_message: String,
    pub topics_title: String,
    pub specialties: Vec<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            assistant_name: "LexAprendiz".to_string(),
            welcome_title: "Conheça o LexAprendiz".to_string(),
            welcome_message: "Obtenha respostas rápidas e precisas sobre a legislação da \
                              aprendizagem no Brasil, com fundamentação legal e fontes oficiais."
                .to_string(),
            topics_title: "📋 Especialidades".to_string(),
            specialties: vec![
                "Cálculo de cotas de aprendizes".to_string(),
                "Direitos e deveres de aprendizes".to_string(),
                "Legislação trabalhista específica".to_string(),
                "Fiscalização e auditoria".to_string(),
                "Portarias e decretos atualizados".to_string(),
            ],
            last_updated: None,
        }
    }
}

impl ContentSettings {
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "assistant_name" => self.assistant_name.clone(),
            "welcome_title" => self.welcome_title.clone(),
            "welcome_message" => self.welcome_message.clone(),
            "topics_title" => self.topics_title.clone(),
            "specialties" => self.specialties.join("; "),
            _ => return None,
        };
        Some(value)
    }

    /// Set one editable key. `specialties` takes a `;`-separated list.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            bail!("O valor de `{}` não pode ficar vazio", key);
        }
        match key {
            "assistant_name" => self.assistant_name = value.to_string(),
            "welcome_title" => self.welcome_title = value.to_string(),
            "welcome_message" => self.welcome_message = value.to_string(),
            "topics_title" => self.topics_title = value.to_string(),
            "specialties" => {
                self.specialties = value
                    .split(';')
                    .map(|s| s.trim().trim_start_matches('•').trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
            _ => bail!(
                "Chave desconhecida `{}`. Válidas: {}",
                key,
                EDITABLE_KEYS.join(", ")
            ),
        }
        Ok(())
    }

    pub fn specialties_list(&self) -> String {
        self.specialties
            .iter()
            .map(|s| format!("• {}", s))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// `content.json` on disk.
pub struct ContentStore {
    path: PathBuf,
}

impl ContentStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Read the file, writing defaults first when it does not exist.
    pub async fn load(&self) -> Result<ContentSettings> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("Failed to parse {:?}", self.path)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let defaults = ContentSettings::default();
                self.save(&defaults).await?;
                info!(path = ?self.path, "Wrote default content settings");
                Ok(defaults)
            }
            Err(e) => Err(e).with_context(|| format!("Failed to read {:?}", self.path)),
        }
    }

    pub async fn save(&self, settings: &ContentSettings) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        let json = serde_json::to_vec_pretty(settings)?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write {:?}", self.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut c = ContentSettings::default();
        c.set("welcome_title", "  Bem-vindo  ").unwrap();
        assert_eq!(c.get("welcome_title").as_deref(), Some("Bem-vindo"));
        assert!(c.get("theme_mode").is_none());
    }

    #[test]
    fn test_specialties_split() {
        let mut c = ContentSettings::default();
        c.set("specialties", "• Cotas; Jornada ;; Férias").unwrap();
        assert_eq!(c.specialties, vec!["Cotas", "Jornada", "Férias"]);
        assert_eq!(c.get("specialties").as_deref(), Some("Cotas; Jornada; Férias"));
        assert_eq!(c.specialties_list(), "• Cotas\n• Jornada\n• Férias");
    }

    #[test]
    fn test_unknown_key_lists_valid_ones() {
        let mut c = ContentSettings::default();
        let err = c.set("agent_model", "x").unwrap_err().to_string();
        assert!(err.contains("assistant_name"));
        assert!(err.contains("specialties"));
    }

    #[test]
    fn test_empty_value_rejected() {
        let mut c = ContentSettings::default();
        assert!(c.set("assistant_name", "   ").is_err());
        assert_eq!(c.assistant_name, "LexAprendiz");
    }

    #[tokio::test]
    async fn test_defaults_written_then_reloaded() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::new(&dir.path().join("content.json"));

        let first = store.load().await.unwrap();
        assert_eq!(first, ContentSettings::default());
        assert!(dir.path().join("content.json").exists());

        let mut edited = first.clone();
        edited.set("assistant_name", "Lex").unwrap();
        edited.last_updated = Some(Utc::now());
        store.save(&edited).await.unwrap();

        assert_eq!(store.load().await.unwrap(), edited);
    }

    #[tokio::test]
    async fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(&path, r#"{"assistant_name":"Lex"}"#).unwrap();

        let loaded = ContentStore::new(&path).load().await.unwrap();
        assert_eq!(loaded.assistant_name, "Lex");
        assert_eq!(loaded.specialties.len(), 5);
    }
}
