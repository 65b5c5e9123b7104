use super::params::{SolvationParam, VdwParam};
use super::potentials;
use super::term::PairEnergy;
use crate::core::models::atom::Atom;

pub struct EnergyCalculator;

impl EnergyCalculator {
    /// Evaluates all three terms for one atom pair.
    ///
    /// Combining rules: arithmetic-mean radius, geometric-mean well depth.
    /// A pair beyond the global cutoff contributes zero to every term.
    pub fn pair_terms(
        atom1: &Atom,
        atom2: &Atom,
        vdw1: &VdwParam,
        vdw2: &VdwParam,
        solv1: &SolvationParam,
        solv2: &SolvationParam,
        cutoff: f64,
    ) -> PairEnergy {
        let dist = (atom1.position - atom2.position).norm();
        if dist > cutoff {
            return PairEnergy::default();
        }

        let r_min = (vdw1.radius + vdw2.radius) / 2.0;
        let well_depth = (vdw1.well_depth * vdw2.well_depth).sqrt();

        let attractive = potentials::lennard_jones_attractive(dist, r_min, well_depth);
        let repulsive = potentials::lennard_jones_repulsive(dist, r_min, well_depth);

        // Desolvation is asymmetric; the pair value sums both halves.
        let solvation = potentials::lk_desolvation(
            dist,
            vdw1.radius,
            solv1.lambda,
            solv1.dgfree,
            solv2.volume,
        ) + potentials::lk_desolvation(
            dist,
            vdw2.radius,
            solv2.lambda,
            solv2.dgfree,
            solv1.volume,
        );

        PairEnergy {
            attractive,
            repulsive,
            solvation,
        }
    }
}
