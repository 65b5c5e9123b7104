use crate::core::forcefield::params::Forcefield;
use crate::core::forcefield::scoring::{Scorer, ScoringError};
use crate::core::forcefield::term::PairEnergy;
use crate::core::models::ids::ResidueId;
use crate::core::models::system::MolecularSystem;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Names one residue the way CLI arguments and structure files do:
/// by chain letter and sequence number, e.g. `A:275`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResidueSpecifier {
    pub chain_id: char,
    pub residue_number: isize,
}

impl fmt::Display for ResidueSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chain_id, self.residue_number)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid residue specifier '{0}' (expected '<chain>:<number>', e.g. 'A:275')")]
pub struct ParseResidueSpecifierError(String);

impl FromStr for ResidueSpecifier {
    type Err = ParseResidueSpecifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseResidueSpecifierError(s.to_string());
        let (chain, number) = s.split_once(':').ok_or_else(err)?;

        let mut chain_chars = chain.chars();
        let chain_id = chain_chars.next().ok_or_else(err)?;
        if chain_chars.next().is_some() {
            return Err(err());
        }
        let residue_number = number.parse().map_err(|_| err())?;
        Ok(Self {
            chain_id,
            residue_number,
        })
    }
}

#[derive(Debug, Error)]
pub enum PairEnergyError {
    #[error("Residue {0} not found in the structure")]
    ResidueNotFound(ResidueSpecifier),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

/// The diagnostic's output: both evaluations of the same residue pair,
/// side by side for manual comparison. No tolerance is applied here; the
/// numerical agreement is the property the caller exists to surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairEnergyReport {
    pub first: ResidueSpecifier,
    pub second: ResidueSpecifier,
    pub atom_pairs: usize,
    /// The three terms accumulated atom pair by atom pair.
    pub pairwise: PairEnergy,
    /// The scorer's own whole-residue-pair evaluation.
    pub direct: PairEnergy,
}

/// Accumulates the three energy terms over the full atom cross-product of the
/// two residues, then evaluates the same pair directly through the scorer.
pub fn run(
    system: &MolecularSystem,
    forcefield: &Forcefield,
    first: ResidueSpecifier,
    second: ResidueSpecifier,
) -> Result<PairEnergyReport, PairEnergyError> {
    let res1_id = resolve(system, first)?;
    let res2_id = resolve(system, second)?;
    let scorer = Scorer::new(system, forcefield);

    let res1 = system
        .residue(res1_id)
        .ok_or(PairEnergyError::ResidueNotFound(first))?;
    let res2 = system
        .residue(res2_id)
        .ok_or(PairEnergyError::ResidueNotFound(second))?;

    let mut attractive_total = 0.0;
    let mut repulsive_total = 0.0;
    let mut solvation_total = 0.0;
    let mut atom_pairs = 0;

    for &atom1_id in res1.atoms() {
        for &atom2_id in res2.atoms() {
            let terms = scorer.pair_energy(atom1_id, atom2_id)?;
            attractive_total += terms.attractive;
            repulsive_total += terms.repulsive;
            solvation_total += terms.solvation;
            atom_pairs += 1;
        }
    }

    let direct = scorer.residue_pair_energy(res1_id, res2_id)?;

    Ok(PairEnergyReport {
        first,
        second,
        atom_pairs,
        pairwise: PairEnergy {
            attractive: attractive_total,
            repulsive: repulsive_total,
            solvation: solvation_total,
        },
        direct,
    })
}

fn resolve(
    system: &MolecularSystem,
    spec: ResidueSpecifier,
) -> Result<ResidueId, PairEnergyError> {
    let chain_id = system
        .find_chain_by_id(spec.chain_id)
        .ok_or(PairEnergyError::ResidueNotFound(spec))?;
    system
        .find_residue_by_id(chain_id, spec.residue_number)
        .ok_or(PairEnergyError::ResidueNotFound(spec))
}
