use super::artifact::Artifact;
use super::cmake::{self, EmitterSettings};
use super::settings::{ProjectKind, ProjectSettings};
use std::collections::BTreeMap;
use std::fmt::Write;
use tracing::warn;

/// Emits the CMake artifacts for one project descriptor.
///
/// Library projects produce a single `SET(<name>_files ...)` fragment at
/// `build/<name>.cmake`. Application projects produce one executable fragment
/// per distinct source-file stem at `build/apps/<stem>.cmake` plus an umbrella
/// include file at `build/<name>.all.cmake`, sorted by stem.
pub fn emit_project(project: &ProjectSettings, emitter: &EmitterSettings) -> Vec<Artifact> {
    match project.kind {
        ProjectKind::Library => vec![emit_library(project, emitter)],
        ProjectKind::Application => emit_application(project, emitter),
    }
}

fn source_path(project: &ProjectSettings, emitter: &EmitterSettings, dir: &str, file: &str) -> String {
    format!("{}{}{}{}", emitter.source_prefix, project.path, dir, file)
}

fn emit_library(project: &ProjectSettings, emitter: &EmitterSettings) -> Artifact {
    let entries = project.sources.iter().flat_map(|group| {
        group
            .files
            .iter()
            .map(|file| source_path(project, emitter, &group.dir, file))
    });
    let content = cmake::set_block(&format!("{}_files", project.name), entries);
    Artifact::new(format!("build/{}.cmake", project.name), content)
}

fn emit_application(project: &ProjectSettings, emitter: &EmitterSettings) -> Vec<Artifact> {
    let mut stems: BTreeMap<String, String> = BTreeMap::new();

    for group in &project.sources {
        for file in &group.files {
            if cmake::extension(file) != Some(emitter.source_extension.as_str()) {
                continue;
            }
            let stem = cmake::executable_stem(file);
            if cmake::is_reserved_target(&stem) {
                warn!(
                    stem = %stem,
                    file = %file,
                    "executable stem collides with a reserved CMake target name"
                );
            }
            let path = source_path(project, emitter, &group.dir, file);
            if let Some(displaced) = stems.insert(stem.clone(), path) {
                // Last write wins, matching historical behavior; surfaced
                // because two sources now silently share one target name.
                warn!(
                    stem = %stem,
                    displaced = %displaced,
                    winner = %stems[&stem],
                    "duplicate executable stem; later entry overwrites earlier one"
                );
            }
        }
    }

    let mut artifacts = Vec::with_capacity(stems.len() + 1);
    let mut umbrella = String::new();
    for (stem, path) in &stems {
        artifacts.push(Artifact::new(
            format!("build/apps/{}.cmake", stem),
            executable_fragment(stem, path, emitter),
        ));
        let _ = writeln!(
            umbrella,
            "INCLUDE( {}{}.cmake )",
            emitter.app_include_prefix, stem
        );
    }
    artifacts.push(Artifact::new(
        format!("build/{}.all.cmake", project.name),
        umbrella,
    ));
    artifacts
}

fn executable_fragment(stem: &str, path: &str, emitter: &EmitterSettings) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ADD_EXECUTABLE( {} {} )", stem, path);
    let _ = writeln!(
        out,
        "TARGET_LINK_LIBRARIES( {} ${{{}}} )",
        stem, emitter.link_libraries_var
    );
    let _ = writeln!(
        out,
        "SET_TARGET_PROPERTIES( {} PROPERTIES COMPILE_FLAGS \"${{{}}}\" )",
        stem, emitter.compile_flags_var
    );
    let _ = writeln!(
        out,
        "SET_TARGET_PROPERTIES( {} PROPERTIES LINK_FLAGS \"${{{}}}\" )",
        stem, emitter.link_flags_var
    );
    let _ = writeln!(out, "ADD_CUSTOM_TARGET( {}_symlink ALL )", stem);
    let _ = writeln!(
        out,
        "ADD_CUSTOM_COMMAND( TARGET {}_symlink POST_BUILD COMMAND python {} ${{COMPILER}} ${{MODE}} {} )",
        stem, emitter.symlink_script, stem
    );
    let _ = writeln!(out, "ADD_DEPENDENCIES( {}_symlink {} )", stem, stem);
    let _ = writeln!(out, "ADD_DEPENDENCIES( {} {} )", stem, emitter.libs_target);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::settings::SourceGroup;

    fn library(name: &str, groups: Vec<SourceGroup>) -> ProjectSettings {
        ProjectSettings {
            name: name.to_string(),
            path: "src/".to_string(),
            kind: ProjectKind::Library,
            sources: groups,
        }
    }

    fn application(groups: Vec<SourceGroup>) -> ProjectSettings {
        ProjectSettings {
            name: "apps".to_string(),
            path: "src/apps/".to_string(),
            kind: ProjectKind::Application,
            sources: groups,
        }
    }

    fn group(dir: &str, files: &[&str]) -> SourceGroup {
        SourceGroup {
            dir: dir.to_string(),
            files: files.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn library_project_emits_one_set_block() {
        let project = library(
            "utility",
            vec![group("io/", &["izstream.cc"]), group("", &["exit.cc"])],
        );
        let artifacts = emit_project(&project, &EmitterSettings::default());

        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].path.to_str(), Some("build/utility.cmake"));
        assert_eq!(
            artifacts[0].content,
            "SET(utility_files\n\t../src/io/izstream.cc\n\t../src/exit.cc\n)\n"
        );
    }

    #[test]
    fn library_project_with_no_groups_emits_empty_body() {
        let project = library("empty", vec![]);
        let artifacts = emit_project(&project, &EmitterSettings::default());
        assert_eq!(artifacts[0].content, "SET(empty_files\n)\n");
    }

    #[test]
    fn application_project_emits_fragment_per_stem_plus_umbrella() {
        let project = application(vec![group("public/", &["minirosetta.cc", "score.cc"])]);
        let artifacts = emit_project(&project, &EmitterSettings::default());

        assert_eq!(artifacts.len(), 3);
        assert_eq!(
            artifacts[0].path.to_str(),
            Some("build/apps/minirosetta.cmake")
        );
        assert_eq!(artifacts[1].path.to_str(), Some("build/apps/score.cmake"));
        assert_eq!(artifacts[2].path.to_str(), Some("build/apps.all.cmake"));
        assert_eq!(
            artifacts[2].content,
            "INCLUDE( ../build/apps/minirosetta.cmake )\nINCLUDE( ../build/apps/score.cmake )\n"
        );
    }

    #[test]
    fn executable_fragment_contains_all_directives() {
        let project = application(vec![group("public/", &["score.cc"])]);
        let artifacts = emit_project(&project, &EmitterSettings::default());
        let content = &artifacts[0].content;

        assert!(content.starts_with("ADD_EXECUTABLE( score ../src/apps/public/score.cc )\n"));
        assert!(content.contains("TARGET_LINK_LIBRARIES( score ${LINK_ALL_LIBS} )\n"));
        assert!(content.contains("PROPERTIES COMPILE_FLAGS \"${COMPILE_FLAGS}\""));
        assert!(content.contains("PROPERTIES LINK_FLAGS \"${LINK_FLAGS}\""));
        assert!(content.contains("ADD_CUSTOM_TARGET( score_symlink ALL )\n"));
        assert!(content.contains(
            "ADD_CUSTOM_COMMAND( TARGET score_symlink POST_BUILD COMMAND python ../smart_symlink.py ${COMPILER} ${MODE} score )\n"
        ));
        assert!(content.contains("ADD_DEPENDENCIES( score_symlink score )\n"));
        assert!(content.ends_with("ADD_DEPENDENCIES( score BUILD_ALL_LIBS )\n"));
    }

    #[test]
    fn non_source_files_are_ignored_for_applications() {
        let project = application(vec![group("public/", &["score.cc", "notes.txt", "score.hh"])]);
        let artifacts = emit_project(&project, &EmitterSettings::default());
        // One fragment for score.cc plus the umbrella.
        assert_eq!(artifacts.len(), 2);
    }

    #[test]
    fn duplicate_stems_collapse_to_one_fragment_with_last_path_winning() {
        let project = application(vec![
            group("public/", &["score.cc"]),
            group("pilot/", &["score.cc"]),
        ]);
        let artifacts = emit_project(&project, &EmitterSettings::default());

        assert_eq!(artifacts.len(), 2);
        assert!(
            artifacts[0]
                .content
                .starts_with("ADD_EXECUTABLE( score ../src/apps/pilot/score.cc )")
        );
    }

    #[test]
    fn umbrella_includes_are_sorted_by_stem() {
        let project = application(vec![group("public/", &["zeta.cc", "alpha.cc", "mid.cc"])]);
        let artifacts = emit_project(&project, &EmitterSettings::default());
        let umbrella = &artifacts.last().unwrap().content;

        let lines: Vec<_> = umbrella.lines().collect();
        assert_eq!(
            lines,
            vec![
                "INCLUDE( ../build/apps/alpha.cmake )",
                "INCLUDE( ../build/apps/mid.cmake )",
                "INCLUDE( ../build/apps/zeta.cmake )",
            ]
        );
    }

    #[test]
    fn emission_is_deterministic_for_identical_descriptors() {
        let project = application(vec![group("public/", &["b.cc", "a.cc"])]);
        let emitter = EmitterSettings::default();
        assert_eq!(emit_project(&project, &emitter), emit_project(&project, &emitter));
    }
}
