use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub lexicon: LexiconConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InputConfig {
    pub root: PathBuf,
    #[serde(default = "default_include_globs")]
    pub include_globs: Vec<String>,
    #[serde(default)]
    pub exclude_globs: Vec<String>,
    #[serde(default)]
    pub follow_symlinks: bool,
}

fn default_include_globs() -> Vec<String> {
    vec![
        "**/*.pdf".to_string(),
        "**/*.txt".to_string(),
        "**/*.md".to_string(),
    ]
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LexiconConfig {
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

fn default_language() -> String {
    "english".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SelectionConfig {
    /// Maximum number of ranked sections kept per document.
    #[serde(default = "default_max_sections")]
    pub max_sections: usize,
    /// Maximum section-title length in characters before truncation.
    #[serde(default = "default_max_title_len")]
    pub max_title_len: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            max_sections: default_max_sections(),
            max_title_len: default_max_title_len(),
        }
    }
}

fn default_max_sections() -> usize {
    10
}

fn default_max_title_len() -> usize {
    100
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.selection.max_sections == 0 {
        anyhow::bail!("selection.max_sections must be >= 1");
    }
    if config.selection.max_title_len == 0 {
        anyhow::bail!("selection.max_title_len must be >= 1");
    }
    if config.lexicon.language.trim().is_empty() {
        anyhow::bail!("lexicon.language must not be empty");
    }
    if config.input.include_globs.is_empty() {
        anyhow::bail!("input.include_globs must not be empty");
    }

    Ok(config)
}
