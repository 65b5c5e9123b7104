use crate::build::artifact::Artifact;
use crate::build::cmake::EmitterSettings;
use crate::build::project::emit_project;
use crate::build::settings::{self, ProjectKind, SettingsError};
use crate::build::testsuite::emit_test;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("Failed to write '{path}': {source}", path = path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Summary of one generation run, for the CLI's closing line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub projects: usize,
    pub executables: usize,
    pub tests: usize,
    pub files_written: usize,
}

/// Progress events for callers that want to drive a progress display.
#[derive(Debug, Clone, Copy)]
pub enum GenerateProgress<'a> {
    /// Discovery finished; `projects + tests` emissions will follow.
    Discovered { projects: usize, tests: usize },
    /// One descriptor's artifacts were written.
    Emitted { name: &'a str },
}

/// Discovers every descriptor in `settings_dir`, emits its artifacts, and
/// writes them under `output_root`, creating directories as needed and
/// overwriting existing files unconditionally.
///
/// Output bytes are a pure function of the descriptors and emitter settings:
/// re-running on unchanged inputs rewrites byte-identical files.
pub fn run(
    settings_dir: &Path,
    output_root: &Path,
    emitter: &EmitterSettings,
) -> Result<GenerateReport, GenerateError> {
    run_with_progress(settings_dir, output_root, emitter, |_| {})
}

pub fn run_with_progress(
    settings_dir: &Path,
    output_root: &Path,
    emitter: &EmitterSettings,
    mut progress: impl FnMut(GenerateProgress),
) -> Result<GenerateReport, GenerateError> {
    let settings = settings::discover(settings_dir)?;
    info!(
        projects = settings.projects.len(),
        tests = settings.tests.len(),
        "discovered settings descriptors"
    );
    progress(GenerateProgress::Discovered {
        projects: settings.projects.len(),
        tests: settings.tests.len(),
    });

    let mut report = GenerateReport::default();

    for project in &settings.projects {
        let artifacts = emit_project(project, emitter);
        if project.kind == ProjectKind::Application {
            // Every application artifact but the umbrella is one executable.
            report.executables += artifacts.len() - 1;
        }
        write_artifacts(output_root, &artifacts, &mut report)?;
        report.projects += 1;
        progress(GenerateProgress::Emitted {
            name: &project.name,
        });
    }

    for test in &settings.tests {
        let artifact = emit_test(test, emitter);
        write_artifacts(output_root, std::slice::from_ref(&artifact), &mut report)?;
        report.tests += 1;
        progress(GenerateProgress::Emitted { name: &test.name });
    }

    info!(
        projects = report.projects,
        executables = report.executables,
        tests = report.tests,
        files = report.files_written,
        "generation complete"
    );
    Ok(report)
}

fn write_artifacts(
    output_root: &Path,
    artifacts: &[Artifact],
    report: &mut GenerateReport,
) -> Result<(), GenerateError> {
    for artifact in artifacts {
        let path = output_root.join(&artifact.path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GenerateError::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        debug!(path = %path.display(), "writing artifact");
        std::fs::write(&path, &artifact.content).map_err(|e| GenerateError::Write {
            path: path.clone(),
            source: e,
        })?;
        report.files_written += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_settings(dir: &Path) {
        fs::write(
            dir.join("utility.project.toml"),
            r#"
            name = "utility"
            path = "src/utility"

            [[sources]]
            dir = "io"
            files = ["izstream.cc"]
            "#,
        )
        .unwrap();
        fs::write(
            dir.join("apps.project.toml"),
            r#"
            name = "apps"
            path = "src/apps"
            kind = "application"

            [[sources]]
            dir = "public"
            files = ["minirosetta.cc", "score.cc"]
            "#,
        )
        .unwrap();
        fs::write(
            dir.join("numeric.test.toml"),
            r#"
            name = "numeric"
            test-path = "test/numeric"

            [[groups]]
            dir = "closure"
            files = [{ header = "ClosureTests.hh", source = "ClosureTests.cc" }]
            "#,
        )
        .unwrap();
    }

    #[test]
    fn generates_all_artifacts_and_reports_counts() {
        let settings_dir = tempdir().unwrap();
        let output_dir = tempdir().unwrap();
        write_settings(settings_dir.path());

        let report = run(
            settings_dir.path(),
            output_dir.path(),
            &EmitterSettings::default(),
        )
        .unwrap();

        assert_eq!(report.projects, 2);
        assert_eq!(report.executables, 2);
        assert_eq!(report.tests, 1);
        // utility.cmake + 2 app fragments + apps.all.cmake + test_numeric.cmake
        assert_eq!(report.files_written, 5);

        assert!(output_dir.path().join("build/utility.cmake").is_file());
        assert!(output_dir.path().join("build/apps/minirosetta.cmake").is_file());
        assert!(output_dir.path().join("build/apps/score.cmake").is_file());
        assert!(output_dir.path().join("build/apps.all.cmake").is_file());
        assert!(
            output_dir
                .path()
                .join("test/numeric/test_numeric.cmake")
                .is_file()
        );
    }

    #[test]
    fn rerunning_produces_byte_identical_files() {
        let settings_dir = tempdir().unwrap();
        let output_dir = tempdir().unwrap();
        write_settings(settings_dir.path());
        let emitter = EmitterSettings::default();

        run(settings_dir.path(), output_dir.path(), &emitter).unwrap();
        let first = fs::read(output_dir.path().join("build/apps.all.cmake")).unwrap();

        run(settings_dir.path(), output_dir.path(), &emitter).unwrap();
        let second = fs::read(output_dir.path().join("build/apps.all.cmake")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn progress_reports_discovery_then_each_descriptor() {
        let settings_dir = tempdir().unwrap();
        let output_dir = tempdir().unwrap();
        write_settings(settings_dir.path());

        let mut discovered = None;
        let mut emitted = Vec::new();
        run_with_progress(
            settings_dir.path(),
            output_dir.path(),
            &EmitterSettings::default(),
            |p| match p {
                GenerateProgress::Discovered { projects, tests } => {
                    discovered = Some((projects, tests));
                }
                GenerateProgress::Emitted { name } => emitted.push(name.to_string()),
            },
        )
        .unwrap();

        assert_eq!(discovered, Some((2, 1)));
        // Projects first (sorted by settings file name), then tests.
        assert_eq!(emitted, vec!["apps", "utility", "numeric"]);
    }

    #[test]
    fn unreadable_settings_directory_aborts_the_run() {
        let output_dir = tempdir().unwrap();
        let result = run(
            Path::new("/nonexistent-settings-dir"),
            output_dir.path(),
            &EmitterSettings::default(),
        );
        assert!(matches!(result, Err(GenerateError::Settings(_))));
    }
}
