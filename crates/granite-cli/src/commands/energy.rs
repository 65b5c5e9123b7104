use crate::cli::PairEnergyArgs;
use crate::error::{CliError, Result};
use granite::core::forcefield::params::Forcefield;
use granite::core::io::bgf::BgfFile;
use granite::core::io::traits::StructureFile;
use granite::workflows::pair_energy;
use tracing::info;

pub fn run(args: PairEnergyArgs) -> Result<()> {
    info!("Loading forcefield parameters from {:?}", &args.forcefield);
    let forcefield = Forcefield::load(&args.forcefield, &args.solvation)?;

    info!("Reading structure from {:?}", &args.structure);
    let system = BgfFile::read_from_path(&args.structure).map_err(|e| CliError::FileParsing {
        path: args.structure.clone(),
        source: e.into(),
    })?;

    let report = pair_energy::run(&system, &forcefield, args.first, args.second)?;

    println!(
        "Residue pair {} / {} ({} atom pairs)",
        report.first, report.second, report.atom_pairs
    );
    println!(
        "{:<12} {:>18} {:>18} {:>14}",
        "term", "pairwise sum", "direct", "difference"
    );
    for (name, pairwise, direct) in [
        ("attractive", report.pairwise.attractive, report.direct.attractive),
        ("repulsive", report.pairwise.repulsive, report.direct.repulsive),
        ("solvation", report.pairwise.solvation, report.direct.solvation),
    ] {
        println!(
            "{:<12} {:>18.6} {:>18.6} {:>14.3e}",
            name,
            pairwise,
            direct,
            pairwise - direct
        );
    }
    println!(
        "{:<12} {:>18.6} {:>18.6} {:>14.3e}",
        "total",
        report.pairwise.total(),
        report.direct.total(),
        report.pairwise.total() - report.direct.total()
    );

    Ok(())
}
