use phf::{Set, phf_set};

/// Target names CMake reserves for itself; an executable stem that collides
/// with one of these will shadow a built-in target.
static RESERVED_TARGET_NAMES: Set<&'static str> = phf_set! {
    "all", "clean", "test", "install", "package", "help",
    "ALL_BUILD", "ZERO_CHECK", "RUN_TESTS", "INSTALL", "PACKAGE",
    "edit_cache", "rebuild_cache", "list_install_components",
    "package_source", "preinstall",
};

pub fn is_reserved_target(name: &str) -> bool {
    RESERVED_TARGET_NAMES.contains(name)
}

/// Renders one CMake `SET` block.
///
/// An empty entry list renders `SET(<identifier>\n)\n` with no stray tab line.
pub fn set_block<I, S>(identifier: &str, entries: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = format!("SET({}\n", identifier);
    for entry in entries {
        out.push('\t');
        out.push_str(entry.as_ref());
        out.push('\n');
    }
    out.push_str(")\n");
    out
}

/// Derives an executable name from a source file path: the portion after the
/// last `/`, minus the final extension, with any remaining `.` characters
/// removed, guaranteeing a valid CMake token.
pub fn executable_stem(file: &str) -> String {
    let base = file.rsplit('/').next().unwrap_or(file);
    match base.rfind('.') {
        Some(idx) => base[..idx].chars().filter(|&c| c != '.').collect(),
        None => base.to_string(),
    }
}

/// Returns the final extension of a path, if any.
pub(crate) fn extension(file: &str) -> Option<&str> {
    let base = file.rsplit('/').next().unwrap_or(file);
    base.rfind('.').map(|idx| &base[idx + 1..])
}

/// The knobs the emitted CMake text interpolates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterSettings {
    /// Prefix prepended to every source path (relative to the build tree).
    pub source_prefix: String,
    /// Variable holding the aggregate library list executables link against.
    pub link_libraries_var: String,
    pub compile_flags_var: String,
    pub link_flags_var: String,
    /// The "build all libraries" target every executable depends on.
    pub libs_target: String,
    /// Post-build helper invoked to symlink each executable into place.
    pub symlink_script: String,
    /// Prefix on the umbrella file's `INCLUDE` lines.
    pub app_include_prefix: String,
    pub source_extension: String,
    pub header_extension: String,
}

impl Default for EmitterSettings {
    fn default() -> Self {
        Self {
            source_prefix: "../".to_string(),
            link_libraries_var: "LINK_ALL_LIBS".to_string(),
            compile_flags_var: "COMPILE_FLAGS".to_string(),
            link_flags_var: "LINK_FLAGS".to_string(),
            libs_target: "BUILD_ALL_LIBS".to_string(),
            symlink_script: "../smart_symlink.py".to_string(),
            app_include_prefix: "../build/apps/".to_string(),
            source_extension: "cc".to_string(),
            header_extension: "hh".to_string(),
        }
    }
}
