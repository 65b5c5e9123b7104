use super::artifact::Artifact;
use super::cmake::{self, EmitterSettings};
use super::settings::TestSettings;
use std::collections::BTreeSet;

/// Emits the CMake artifact for one test descriptor: four `SET` blocks at
/// `<test_path>test_<name>.cmake`.
///
/// - `<name>_testfiles` - entries with a companion source, header extension
///   replaced by the source extension
/// - `<name>_testdirectories` - every directory that must exist, sorted
///   lexicographically so parents are created before children, deduplicated
/// - `<name>_testheaders` - entries with no companion source
/// - `<name>_testinputs` - every input file, directory-prefixed
///
/// Root-flagged entries appear in neither the testfiles nor the testheaders
/// list, though their group's directory is still created.
pub fn emit_test(test: &TestSettings, emitter: &EmitterSettings) -> Artifact {
    let mut testfiles = Vec::new();
    let mut testheaders = Vec::new();
    let mut testinputs = Vec::new();
    let mut directories: BTreeSet<String> = BTreeSet::new();

    for group in &test.groups {
        directories.insert(group.dir.clone());
        for entry in &group.files {
            add_implied_directory(&mut directories, &group.dir, &entry.header);
            if let Some(source) = &entry.source {
                add_implied_directory(&mut directories, &group.dir, source);
            }
            if entry.root {
                continue;
            }
            match &entry.source {
                Some(_) => testfiles.push(format!(
                    "{}{}",
                    group.dir,
                    replace_extension(&entry.header, &emitter.source_extension)
                )),
                None => testheaders.push(format!("{}{}", group.dir, entry.header)),
            }
        }
    }

    for group in &test.inputs {
        directories.insert(group.dir.clone());
        for file in &group.files {
            add_implied_directory(&mut directories, &group.dir, file);
            testinputs.push(format!("{}{}", group.dir, file));
        }
    }

    let content = [
        cmake::set_block(&format!("{}_testfiles", test.name), &testfiles),
        cmake::set_block(&format!("{}_testdirectories", test.name), &directories),
        cmake::set_block(&format!("{}_testheaders", test.name), &testheaders),
        cmake::set_block(&format!("{}_testinputs", test.name), &testinputs),
    ]
    .join("\n");

    Artifact::new(
        format!("{}test_{}.cmake", test.test_path, test.name),
        content,
    )
}

/// A slash-containing filename implies a subdirectory that must also exist.
fn add_implied_directory(directories: &mut BTreeSet<String>, dir: &str, file: &str) {
    if let Some(idx) = file.rfind('/') {
        directories.insert(format!("{}{}", dir, &file[..idx]));
    }
}

fn replace_extension(header: &str, source_extension: &str) -> String {
    match header.rfind('.') {
        Some(idx) => format!("{}.{}", &header[..idx], source_extension),
        None => format!("{}.{}", header, source_extension),
    }
}
