use crate::cli::GenerateArgs;
use crate::error::{CliError, Result};
use granite::build::cmake::EmitterSettings;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Emitter settings as they appear in an optional TOML config file.
///
/// Every field is optional; resolution order is CLI flag, then config file,
/// then the built-in default.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PartialEmitterConfig {
    source_prefix: Option<String>,
    link_libraries_var: Option<String>,
    compile_flags_var: Option<String>,
    link_flags_var: Option<String>,
    libs_target: Option<String>,
    symlink_script: Option<String>,
    app_include_prefix: Option<String>,
    source_extension: Option<String>,
    header_extension: Option<String>,
}

impl PartialEmitterConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading emitter configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn merge_with_cli(self, args: &GenerateArgs) -> EmitterSettings {
        let defaults = EmitterSettings::default();

        let resolve = |cli: Option<&String>, file: Option<String>, default: String| -> String {
            cli.cloned().or(file).unwrap_or(default)
        };

        EmitterSettings {
            source_prefix: resolve(
                args.source_prefix.as_ref(),
                self.source_prefix,
                defaults.source_prefix,
            ),
            link_libraries_var: resolve(None, self.link_libraries_var, defaults.link_libraries_var),
            compile_flags_var: resolve(None, self.compile_flags_var, defaults.compile_flags_var),
            link_flags_var: resolve(None, self.link_flags_var, defaults.link_flags_var),
            libs_target: resolve(
                args.libs_target.as_ref(),
                self.libs_target,
                defaults.libs_target,
            ),
            symlink_script: resolve(
                args.symlink_script.as_ref(),
                self.symlink_script,
                defaults.symlink_script,
            ),
            app_include_prefix: resolve(None, self.app_include_prefix, defaults.app_include_prefix),
            source_extension: resolve(None, self.source_extension, defaults.source_extension),
            header_extension: resolve(None, self.header_extension, defaults.header_extension),
        }
    }
}
