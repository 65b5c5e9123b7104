use super::energy::EnergyCalculator;
use super::params::{Forcefield, SolvationParam, VdwParam};
use super::term::PairEnergy;
use crate::core::models::ids::{AtomId, ResidueId};
use crate::core::models::system::MolecularSystem;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Atom with ID {0:?} not found in the system")]
    AtomNotFound(AtomId),
    #[error("Residue with ID {0:?} not found in the system")]
    ResidueNotFound(ResidueId),
    #[error("No van der Waals parameters for forcefield type '{0}'")]
    MissingVdwParams(String),
    #[error("No solvation parameters for forcefield type '{0}'")]
    MissingSolvationParams(String),
}

pub struct Scorer<'a> {
    system: &'a MolecularSystem,
    forcefield: &'a Forcefield,
}

impl<'a> Scorer<'a> {
    pub fn new(system: &'a MolecularSystem, forcefield: &'a Forcefield) -> Self {
        Self { system, forcefield }
    }

    /// Evaluates the three energy terms for a single atom pair.
    pub fn pair_energy(&self, atom1_id: AtomId, atom2_id: AtomId) -> Result<PairEnergy, ScoringError> {
        let atom1 = self
            .system
            .atom(atom1_id)
            .ok_or(ScoringError::AtomNotFound(atom1_id))?;
        let atom2 = self
            .system
            .atom(atom2_id)
            .ok_or(ScoringError::AtomNotFound(atom2_id))?;

        let vdw1 = self.vdw_params(&atom1.force_field_type)?;
        let vdw2 = self.vdw_params(&atom2.force_field_type)?;
        let solv1 = self.solvation_params(&atom1.force_field_type)?;
        let solv2 = self.solvation_params(&atom2.force_field_type)?;

        Ok(EnergyCalculator::pair_terms(
            atom1,
            atom2,
            vdw1,
            vdw2,
            solv1,
            solv2,
            self.forcefield.non_bonded.globals.cutoff,
        ))
    }

    /// Evaluates a whole residue pair: the sum of [`Self::pair_energy`] over
    /// the full atom cross-product between the two residues.
    pub fn residue_pair_energy(
        &self,
        res1_id: ResidueId,
        res2_id: ResidueId,
    ) -> Result<PairEnergy, ScoringError> {
        let res1 = self
            .system
            .residue(res1_id)
            .ok_or(ScoringError::ResidueNotFound(res1_id))?;
        let res2 = self
            .system
            .residue(res2_id)
            .ok_or(ScoringError::ResidueNotFound(res2_id))?;

        let mut energy = PairEnergy::default();
        for &atom1_id in res1.atoms() {
            for &atom2_id in res2.atoms() {
                energy += self.pair_energy(atom1_id, atom2_id)?;
            }
        }
        Ok(energy)
    }

    fn vdw_params(&self, ff_type: &str) -> Result<&VdwParam, ScoringError> {
        self.forcefield
            .non_bonded
            .vdw
            .get(ff_type)
            .ok_or_else(|| ScoringError::MissingVdwParams(ff_type.to_string()))
    }

    fn solvation_params(&self, ff_type: &str) -> Result<&SolvationParam, ScoringError> {
        self.forcefield
            .solvation
            .get(ff_type)
            .ok_or_else(|| ScoringError::MissingSolvationParams(ff_type.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forcefield::params::{GlobalParams, NonBondedParams};
    use crate::core::models::atom::Atom;
    use nalgebra::Point3;
    use std::collections::HashMap;

    fn create_test_forcefield() -> Forcefield {
        let mut vdw = HashMap::new();
        vdw.insert(
            "C".to_string(),
            VdwParam {
                radius: 4.0,
                well_depth: 0.1,
            },
        );
        vdw.insert(
            "N".to_string(),
            VdwParam {
                radius: 3.5,
                well_depth: 0.2,
            },
        );

        let mut solvation = HashMap::new();
        for (ff_type, dgfree, volume) in [("C", 0.52, 14.7), ("N", -5.95, 11.2)] {
            solvation.insert(
                ff_type.to_string(),
                SolvationParam {
                    ff_type: ff_type.to_string(),
                    dgfree,
                    lambda: 3.5,
                    volume,
                },
            );
        }

        Forcefield {
            non_bonded: NonBondedParams {
                globals: GlobalParams { cutoff: 8.0 },
                vdw,
            },
            solvation,
        }
    }

    fn build_residue_pair(
        atoms1: &[(&str, f64)],
        atoms2: &[(&str, f64)],
    ) -> (MolecularSystem, ResidueId, ResidueId) {
        let mut system = MolecularSystem::new();
        let chain_id = system.add_chain('A');
        let res1_id = system.add_residue(chain_id, 1, "RES").unwrap();
        let res2_id = system.add_residue(chain_id, 2, "RES").unwrap();

        for (i, &(ff_type, x)) in atoms1.iter().enumerate() {
            let mut atom = Atom::new(&format!("A{}", i), res1_id, Point3::new(x, 0.0, 0.0));
            atom.force_field_type = ff_type.to_string();
            system.add_atom_to_residue(res1_id, atom).unwrap();
        }
        for (i, &(ff_type, x)) in atoms2.iter().enumerate() {
            let mut atom = Atom::new(&format!("B{}", i), res2_id, Point3::new(x, 1.0, 0.0));
            atom.force_field_type = ff_type.to_string();
            system.add_atom_to_residue(res2_id, atom).unwrap();
        }

        (system, res1_id, res2_id)
    }

    #[test]
    fn pair_energy_scores_a_simple_pair() {
        let (system, res1_id, res2_id) = build_residue_pair(&[("C", 0.0)], &[("C", 4.0)]);
        let ff = create_test_forcefield();
        let scorer = Scorer::new(&system, &ff);

        let a1 = system.residue(res1_id).unwrap().atoms()[0];
        let a2 = system.residue(res2_id).unwrap().atoms()[0];
        let energy = scorer.pair_energy(a1, a2).unwrap();

        assert!(energy.attractive < 0.0);
        assert!(energy.repulsive >= 0.0);
        assert!(energy.solvation != 0.0);
    }

    #[test]
    fn residue_pair_energy_equals_sum_over_atom_cross_product() {
        let (system, res1_id, res2_id) =
            build_residue_pair(&[("C", 0.0), ("N", 1.5)], &[("C", 4.0), ("N", 5.5), ("C", 7.0)]);
        let ff = create_test_forcefield();
        let scorer = Scorer::new(&system, &ff);

        let mut summed = PairEnergy::default();
        for &a1 in system.residue(res1_id).unwrap().atoms() {
            for &a2 in system.residue(res2_id).unwrap().atoms() {
                summed += scorer.pair_energy(a1, a2).unwrap();
            }
        }

        let direct = scorer.residue_pair_energy(res1_id, res2_id).unwrap();
        assert!((direct.attractive - summed.attractive).abs() < 1e-12);
        assert!((direct.repulsive - summed.repulsive).abs() < 1e-12);
        assert!((direct.solvation - summed.solvation).abs() < 1e-12);
    }

    #[test]
    fn returns_error_for_missing_atom() {
        let system = MolecularSystem::new();
        let ff = create_test_forcefield();
        let scorer = Scorer::new(&system, &ff);

        let result = scorer.pair_energy(AtomId::default(), AtomId::default());
        assert!(matches!(result, Err(ScoringError::AtomNotFound(_))));
    }

    #[test]
    fn returns_error_for_missing_residue() {
        let system = MolecularSystem::new();
        let ff = create_test_forcefield();
        let scorer = Scorer::new(&system, &ff);

        let result = scorer.residue_pair_energy(ResidueId::default(), ResidueId::default());
        assert!(matches!(result, Err(ScoringError::ResidueNotFound(_))));
    }

    #[test]
    fn returns_error_for_unparameterized_forcefield_type() {
        let (system, res1_id, res2_id) = build_residue_pair(&[("Unknown", 0.0)], &[("C", 4.0)]);
        let ff = create_test_forcefield();
        let scorer = Scorer::new(&system, &ff);

        let result = scorer.residue_pair_energy(res1_id, res2_id);
        assert!(matches!(result, Err(ScoringError::MissingVdwParams(t)) if t == "Unknown"));
    }

    #[test]
    fn returns_error_for_missing_solvation_params() {
        let (system, res1_id, res2_id) = build_residue_pair(&[("C", 0.0)], &[("C", 4.0)]);
        let mut ff = create_test_forcefield();
        ff.solvation.remove("C");
        let scorer = Scorer::new(&system, &ff);

        let result = scorer.residue_pair_energy(res1_id, res2_id);
        assert!(matches!(result, Err(ScoringError::MissingSolvationParams(t)) if t == "C"));
    }
}
