//! Configuration for sailcheck paths.
//!
//! Configuration sources (highest priority first):
//! 1. Command-line flags (applied with `ResolvedConfig::with_overrides`)
//! 2. Environment variables (SAILCHECK_HOME, SAILCHECK_CONTENT_DIR, SAILCHECK_MAPPINGS)
//! 3. Config file (.sailcheck/config.yaml)
//! 4. Defaults (~/.sailcheck, ~/.sailcheck/content, built-in mappings)
//!
//! When both `--content-dir` and `--mappings` are given, the CLI builds its
//! configuration with `ResolvedConfig::from_paths` and never reads the
//! environment or a config file, so a broken config file cannot block it.
//!
//! Config file discovery:
//! - Searches current directory and parents for .sailcheck/config.yaml
//! - `home` is relative to the .sailcheck/ directory; `content` and
//!   `mappings` are relative to the project root (the parent of .sailcheck/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::Category;
use crate::providers::table::category_file;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const CONFIG_DIR: &str = ".sailcheck";
const CONFIG_FILE: &str = "config.yaml";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// State directory (relative to .sailcheck/)
    pub home: Option<String>,
    /// Content pack directory holding <category>.yaml files
    pub content: Option<String>,
    /// Mapping table file replacing the built-in table
    pub mappings: Option<String>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Absolute path to sailcheck home
    pub home: PathBuf,
    /// Content pack directory
    pub content_dir: PathBuf,
    /// External mapping table (built-in table when `None`)
    pub mappings_file: Option<PathBuf>,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl ResolvedConfig {
    /// Configuration from explicit paths only, without reading the
    /// environment or any config file
    pub fn from_paths(content_dir: PathBuf, mappings_file: Option<PathBuf>) -> Self {
        let home = dirs::home_dir()
            .map(|home| home.join(CONFIG_DIR))
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR));

        Self {
            home,
            content_dir,
            mappings_file,
            config_file: None,
        }
    }

    /// Content file for a given category
    pub fn category_file(&self, category: Category) -> PathBuf {
        category_file(&self.content_dir, category)
    }

    /// Apply command-line overrides on top of the resolved sources
    pub fn with_overrides(mut self, content_dir: Option<PathBuf>, mappings: Option<PathBuf>) -> Self {
        if let Some(dir) = content_dir {
            self.content_dir = dir;
        }
        if let Some(file) = mappings {
            self.mappings_file = Some(file);
        }
        self
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(CONFIG_DIR).join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's parent
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Resolve all sources given an optional config file, the default home and
/// an environment lookup
fn resolve<E>(
    config_file: Option<PathBuf>,
    default_home: PathBuf,
    env: E,
) -> Result<ResolvedConfig>
where
    E: Fn(&str) -> Option<PathBuf>,
{
    let file = config_file
        .as_deref()
        .map(load_config_file)
        .transpose()?;
    let paths = file.map(|f| f.paths).unwrap_or_default();

    // .sailcheck/ and the project root that contains it
    let config_dir = config_file
        .as_deref()
        .and_then(Path::parent)
        .unwrap_or(Path::new("."));
    let base_dir = config_dir.parent().unwrap_or(Path::new("."));

    let home = env("SAILCHECK_HOME")
        .or_else(|| paths.home.as_deref().map(|p| resolve_path(config_dir, p)))
        .unwrap_or(default_home);

    let content_dir = env("SAILCHECK_CONTENT_DIR")
        .or_else(|| paths.content.as_deref().map(|p| resolve_path(base_dir, p)))
        .unwrap_or_else(|| home.join("content"));

    let mappings_file = env("SAILCHECK_MAPPINGS")
        .or_else(|| paths.mappings.as_deref().map(|p| resolve_path(base_dir, p)));

    Ok(ResolvedConfig {
        home,
        content_dir,
        mappings_file,
        config_file,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let default_home = dirs::home_dir()
        .context("Failed to determine home directory")?
        .join(CONFIG_DIR);

    resolve(find_config_file(), default_home, env_path)
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<PathBuf> {
        None
    }

    /// Write `<root>/.sailcheck/config.yaml` and return its path
    fn write_config(root: &Path, yaml: &str) -> PathBuf {
        let config_dir = root.join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();
        let config_path = config_dir.join(CONFIG_FILE);
        std::fs::write(&config_path, yaml).unwrap();
        config_path
    }

    #[test]
    fn test_resolve_defaults_without_config_file() {
        let config = resolve(None, PathBuf::from("/def"), no_env).unwrap();

        assert_eq!(config.home, PathBuf::from("/def"));
        assert_eq!(config.content_dir, PathBuf::from("/def/content"));
        assert_eq!(config.mappings_file, None);
        assert_eq!(config.config_file, None);
    }

    #[test]
    fn test_resolve_config_file_beats_defaults() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        let config_path = write_config(
            &root,
            "version: \"1.0\"\npaths:\n  content: pack\n  mappings: m.yaml\n",
        );

        let config = resolve(Some(config_path.clone()), PathBuf::from("/def"), no_env).unwrap();

        assert_eq!(config.home, PathBuf::from("/def"));
        assert_eq!(config.content_dir, root.join("pack"));
        assert_eq!(config.mappings_file, Some(root.join("m.yaml")));
        assert_eq!(config.config_file, Some(config_path));
    }

    #[test]
    fn test_resolve_home_is_relative_to_config_dir() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        std::fs::create_dir_all(root.join(CONFIG_DIR).join("state")).unwrap();
        let config_path = write_config(
            &root,
            "version: \"1.0\"\npaths:\n  home: state\n  content: pack\n",
        );

        let config = resolve(Some(config_path), PathBuf::from("/def"), no_env).unwrap();

        // home sits under .sailcheck/, content under the project root
        assert_eq!(config.home, root.join(CONFIG_DIR).join("state"));
        assert_eq!(config.content_dir, root.join("pack"));
    }

    #[test]
    fn test_resolve_content_defaults_to_configured_home() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        let config_path = write_config(&root, "version: \"1.0\"\npaths:\n  home: ./\n");

        let config = resolve(Some(config_path), PathBuf::from("/def"), no_env).unwrap();

        assert_eq!(config.home, root.join(CONFIG_DIR));
        assert_eq!(config.content_dir, root.join(CONFIG_DIR).join("content"));
    }

    #[test]
    fn test_resolve_env_beats_config_file() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        let config_path = write_config(
            &root,
            "version: \"1.0\"\npaths:\n  content: pack\n  mappings: m.yaml\n",
        );

        let env = |name: &str| match name {
            "SAILCHECK_CONTENT_DIR" => Some(PathBuf::from("/env/pack")),
            "SAILCHECK_MAPPINGS" => Some(PathBuf::from("/env/mappings.yaml")),
            _ => None,
        };
        let config = resolve(Some(config_path), PathBuf::from("/def"), env).unwrap();

        assert_eq!(config.content_dir, PathBuf::from("/env/pack"));
        assert_eq!(config.mappings_file, Some(PathBuf::from("/env/mappings.yaml")));
    }

    #[test]
    fn test_resolve_env_home_moves_default_content() {
        let env = |name: &str| (name == "SAILCHECK_HOME").then(|| PathBuf::from("/env/home"));
        let config = resolve(None, PathBuf::from("/def"), env).unwrap();

        assert_eq!(config.home, PathBuf::from("/env/home"));
        assert_eq!(config.content_dir, PathBuf::from("/env/home/content"));
    }

    #[test]
    fn test_flags_beat_env_and_file() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        let config_path = write_config(&root, "version: \"1.0\"\npaths:\n  content: pack\n");

        let env = |name: &str| (name == "SAILCHECK_MAPPINGS").then(|| PathBuf::from("/env/m.yaml"));
        let config = resolve(Some(config_path), PathBuf::from("/def"), env)
            .unwrap()
            .with_overrides(Some(PathBuf::from("/flag/pack")), Some(PathBuf::from("/flag/m.yaml")));

        assert_eq!(config.content_dir, PathBuf::from("/flag/pack"));
        assert_eq!(config.mappings_file, Some(PathBuf::from("/flag/m.yaml")));
    }

    #[test]
    fn test_from_paths_skips_config_sources() {
        let config = ResolvedConfig::from_paths(
            PathBuf::from("/flag/pack"),
            Some(PathBuf::from("/flag/m.yaml")),
        );

        assert_eq!(config.content_dir, PathBuf::from("/flag/pack"));
        assert_eq!(config.mappings_file, Some(PathBuf::from("/flag/m.yaml")));
        assert_eq!(config.config_file, None);
        assert_eq!(config.category_file(Category::Crew), PathBuf::from("/flag/pack/crew.yaml"));
    }

    #[test]
    fn test_resolve_malformed_config_file_is_error() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(temp.path(), "paths: [not, a, map]\n");

        assert!(resolve(Some(config_path), PathBuf::from("/def"), no_env).is_err());
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let config_dir = temp.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();

        let config_path = config_dir.join(CONFIG_FILE);
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(
            file,
            r#"
version: "1.0"
paths:
  home: ./
  content: content
  mappings: data/mappings.yaml
"#
        )
        .unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.paths.home, Some("./".to_string()));
        assert_eq!(config.paths.content, Some("content".to_string()));
        assert_eq!(config.paths.mappings, Some("data/mappings.yaml".to_string()));
    }

    #[test]
    fn test_config_file_without_paths() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "version: \"1.0\"\n").unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert!(config.paths.content.is_none());
        assert!(config.paths.mappings.is_none());
    }

    #[test]
    fn test_with_overrides() {
        let config = ResolvedConfig {
            home: PathBuf::from("/test/.sailcheck"),
            content_dir: PathBuf::from("/test/.sailcheck/content"),
            mappings_file: None,
            config_file: None,
        };

        let same = config.clone().with_overrides(None, None);
        assert_eq!(same, config);

        let overridden = config.with_overrides(
            Some(PathBuf::from("/pack")),
            Some(PathBuf::from("/pack/mappings.yaml")),
        );
        assert_eq!(overridden.content_dir, PathBuf::from("/pack"));
        assert_eq!(
            overridden.mappings_file,
            Some(PathBuf::from("/pack/mappings.yaml"))
        );
        assert_eq!(
            overridden.category_file(Category::Rig),
            PathBuf::from("/pack/rig.yaml")
        );
    }

    #[test]
    fn test_resolve_relative_path() {
        let base = PathBuf::from("/home/user/project");

        assert_eq!(
            resolve_path(&base, "./subdir"),
            PathBuf::from("/home/user/project/subdir")
        );
        assert_eq!(
            resolve_path(&base, "../sibling"),
            PathBuf::from("/home/user/project/../sibling")
        );
        assert_eq!(
            resolve_path(&base, "/absolute/path"),
            PathBuf::from("/absolute/path")
        );
    }
}
