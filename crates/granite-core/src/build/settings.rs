use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid settings in '{path}': {reason}")]
    Invalid { path: String, reason: String },
}

/// Whether a project's files build into one library or into one executable each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectKind {
    #[default]
    Library,
    Application,
}

/// One group of source files under a common subdirectory of the project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SourceGroup {
    pub dir: String,
    pub files: Vec<String>,
}

/// Describes one project: a named group of source files compiled into one
/// library or, for application projects, one executable per source file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ProjectSettings {
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub kind: ProjectKind,
    #[serde(default)]
    pub sources: Vec<SourceGroup>,
}

/// One test-suite file entry: a header, its optional companion source, and
/// whether it is a root file (excluded from both emission lists).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TestFileEntry {
    pub header: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub root: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TestGroup {
    pub dir: String,
    pub files: Vec<TestFileEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct InputGroup {
    pub dir: String,
    pub files: Vec<String>,
}

/// Describes one test suite: its file groups and its input-data groups.
///
/// `project_path` is carried for parity with the project descriptors; the
/// emitter does not consume it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TestSettings {
    pub name: String,
    #[serde(default)]
    pub project_path: String,
    #[serde(default)]
    pub test_path: String,
    #[serde(default)]
    pub groups: Vec<TestGroup>,
    #[serde(default)]
    pub inputs: Vec<InputGroup>,
}

/// Every descriptor discovered in one settings directory.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub projects: Vec<ProjectSettings>,
    pub tests: Vec<TestSettings>,
}

fn is_token(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn validate_relative(path: &Path, field: &str, value: &str) -> Result<(), SettingsError> {
    if value.starts_with('/') || value.starts_with('\\') {
        return Err(SettingsError::Invalid {
            path: path.to_string_lossy().to_string(),
            reason: format!("{} '{}' must be relative", field, value),
        });
    }
    if value.split(['/', '\\']).any(|seg| seg == "..") {
        return Err(SettingsError::Invalid {
            path: path.to_string_lossy().to_string(),
            reason: format!("{} '{}' must not contain '..' segments", field, value),
        });
    }
    Ok(())
}

fn validate_name(path: &Path, name: &str) -> Result<(), SettingsError> {
    if !is_token(name) {
        return Err(SettingsError::Invalid {
            path: path.to_string_lossy().to_string(),
            reason: format!("name '{}' is not a valid CMake identifier", name),
        });
    }
    Ok(())
}

/// Normalizes a directory field to end with `/`. An empty string stays empty,
/// meaning the group sits at the project or test root.
fn normalize_dir(dir: &mut String) {
    if !dir.is_empty() && !dir.ends_with('/') {
        dir.push('/');
    }
}

fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| SettingsError::Toml {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}

impl ProjectSettings {
    /// Reads, parses, and validates one project settings file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let mut settings: ProjectSettings = read_toml(path)?;

        validate_name(path, &settings.name)?;
        validate_relative(path, "path", &settings.path)?;
        normalize_dir(&mut settings.path);
        for group in &mut settings.sources {
            validate_relative(path, "dir", &group.dir)?;
            normalize_dir(&mut group.dir);
        }
        Ok(settings)
    }
}

impl TestSettings {
    /// Reads, parses, and validates one test settings file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let mut settings: TestSettings = read_toml(path)?;

        validate_name(path, &settings.name)?;
        validate_relative(path, "project-path", &settings.project_path)?;
        validate_relative(path, "test-path", &settings.test_path)?;
        normalize_dir(&mut settings.project_path);
        normalize_dir(&mut settings.test_path);
        for group in &mut settings.groups {
            validate_relative(path, "dir", &group.dir)?;
            normalize_dir(&mut group.dir);
        }
        for group in &mut settings.inputs {
            validate_relative(path, "dir", &group.dir)?;
            normalize_dir(&mut group.dir);
        }
        Ok(settings)
    }
}

/// Scans a directory (non-recursively) for `*.project.toml` and `*.test.toml`
/// files and loads each one.
///
/// Files are visited sorted by file name, so descriptor order (and therefore
/// generation order) is deterministic across platforms.
pub fn discover(dir: &Path) -> Result<Settings, SettingsError> {
    let entries = std::fs::read_dir(dir).map_err(|e| SettingsError::Io {
        path: dir.to_string_lossy().to_string(),
        source: e,
    })?;

    let mut paths: Vec<_> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SettingsError::Io {
            path: dir.to_string_lossy().to_string(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut settings = Settings::default();
    for path in paths {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if file_name.ends_with(".project.toml") {
            settings.projects.push(ProjectSettings::load(&path)?);
        } else if file_name.ends_with(".test.toml") {
            settings.tests.push(TestSettings::load(&path)?);
        }
    }
    Ok(settings)
}
