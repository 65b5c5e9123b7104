use crate::cli::GenerateArgs;
use crate::config::PartialEmitterConfig;
use crate::error::Result;
use granite::workflows::generate::{self, GenerateProgress};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

pub fn run(args: GenerateArgs) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialEmitterConfig::from_file(path)?,
        None => PartialEmitterConfig::default(),
    };
    info!("Merging emitter configuration from file and CLI arguments...");
    let emitter = partial_config.merge_with_cli(&args);

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("Invalid template")
            .progress_chars("#>-"),
    );

    info!(
        "Generating CMake fragments from {:?} into {:?}",
        &args.settings, &args.output
    );
    let result = generate::run_with_progress(&args.settings, &args.output, &emitter, |progress| {
        match progress {
            GenerateProgress::Discovered { projects, tests } => {
                pb.set_length((projects + tests) as u64);
            }
            GenerateProgress::Emitted { name } => {
                pb.set_message(name.to_string());
                pb.inc(1);
            }
        }
    });

    match result {
        Ok(report) => {
            pb.finish_and_clear();
            println!(
                "Generated {} project(s), {} executable fragment(s), {} test list(s) ({} files written).",
                report.projects, report.executables, report.tests, report.files_written
            );
            Ok(())
        }
        Err(e) => {
            pb.finish_and_clear();
            Err(e.into())
        }
    }
}
