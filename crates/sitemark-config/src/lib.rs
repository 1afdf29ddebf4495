use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read site config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid site config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Site layout: where pages and assets come from and where output goes.
///
/// Every field is optional in the file; missing ones take the defaults
/// `content`, `static`, `public` and `template.html`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub output_dir: PathBuf,
    pub template_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("public"),
            template_path: PathBuf::from("template.html"),
        }
    }
}

impl Config {
    /// Config file name looked up in the site directory.
    pub const FILE_NAME: &'static str = "sitemark.toml";

    /// Reads a site config. A missing file is `Ok(None)` so callers can fall
    /// back to [`Config::default`].
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Some(config.map_paths(expand)))
    }

    /// Loads `sitemark.toml` from the current directory.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::FILE_NAME)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Resolves relative paths against `base`, typically the directory
    /// holding the config file.
    pub fn relative_to(self, base: &Path) -> Self {
        self.map_paths(|p| if p.is_absolute() { p } else { base.join(p) })
    }

    fn map_paths(self, f: impl Fn(PathBuf) -> PathBuf) -> Self {
        Self {
            content_dir: f(self.content_dir),
            static_dir: f(self.static_dir),
            output_dir: f(self.output_dir),
            template_path: f(self.template_path),
        }
    }
}

/// Expands `~` and `$VAR`; a path that fails to expand is kept as written.
fn expand(path: PathBuf) -> PathBuf {
    let raw = path.to_string_lossy().into_owned();
    match shellexpand::full(&raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join(Config::FILE_NAME);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn missing_fields_take_site_defaults() {
        let config: Config = toml::from_str(r#"output_dir = "docs""#).unwrap();
        assert_eq!(
            config,
            Config {
                output_dir: PathBuf::from("docs"),
                ..Config::default()
            }
        );
    }

    #[test]
    fn absent_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Config::load_from_path(dir.path().join(Config::FILE_NAME)).unwrap(), None);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "content_dir = [");

        let err = Config::load_from_path(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { path: p, .. } if p == path));
    }

    #[test]
    fn unreadable_path_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        // A directory exists but cannot be read as a file.
        let err = Config::load_from_path(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn saved_config_loads_back_into_nested_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site").join(Config::FILE_NAME);
        let config = Config {
            template_path: PathBuf::from("/srv/templates/page.html"),
            ..Config::default()
        };

        config.save_to_path(&path).unwrap();

        assert_eq!(Config::load_from_path(&path).unwrap(), Some(config));
    }

    #[test]
    fn variables_in_paths_are_expanded_on_load() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "content_dir = \"$SITEMARK_TEST_ROOT/pages\"\nstatic_dir = \"~/assets\"",
        );
        unsafe {
            std::env::set_var("SITEMARK_TEST_ROOT", "/custom/site");
        }

        let config = Config::load_from_path(&path).unwrap().unwrap();

        unsafe {
            std::env::remove_var("SITEMARK_TEST_ROOT");
        }
        assert_eq!(config.content_dir, PathBuf::from("/custom/site/pages"));
        assert!(!config.static_dir.to_string_lossy().starts_with('~'));
        assert!(config.static_dir.ends_with("assets"));
    }

    #[test]
    fn unknown_variable_keeps_path_as_written() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"output_dir = "$SITEMARK_UNSET_VAR/out""#);

        let config = Config::load_from_path(&path).unwrap().unwrap();

        assert_eq!(config.output_dir, PathBuf::from("$SITEMARK_UNSET_VAR/out"));
    }

    #[test]
    fn relative_to_anchors_only_relative_paths() {
        let config = Config {
            output_dir: PathBuf::from("/srv/www"),
            ..Config::default()
        }
        .relative_to(Path::new("/home/me/site"));

        assert_eq!(config.content_dir, PathBuf::from("/home/me/site/content"));
        assert_eq!(config.template_path, PathBuf::from("/home/me/site/template.html"));
        assert_eq!(config.output_dir, PathBuf::from("/srv/www"));
    }
}
