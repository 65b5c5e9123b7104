use std::f64::consts::PI;

#[inline]
pub fn lennard_jones_12_6(dist: f64, r_min: f64, well_depth: f64) -> f64 {
    if dist < 1e-6 {
        return 1e10;
    }
    let rho = r_min / dist;
    let rho6 = rho.powi(6);
    let rho12 = rho6 * rho6;
    well_depth * (rho12 - 2.0 * rho6)
}

/// The attractive half of the 12-6 potential: the full curve beyond the
/// minimum, flattened to `-well_depth` inside it.
#[inline]
pub fn lennard_jones_attractive(dist: f64, r_min: f64, well_depth: f64) -> f64 {
    if dist >= r_min {
        lennard_jones_12_6(dist, r_min, well_depth)
    } else {
        -well_depth
    }
}

/// The repulsive half of the 12-6 potential: zero beyond the minimum, the
/// inner wall shifted up by `well_depth` inside it.
///
/// Invariant: `lennard_jones_attractive + lennard_jones_repulsive` equals
/// `lennard_jones_12_6` at every distance.
#[inline]
pub fn lennard_jones_repulsive(dist: f64, r_min: f64, well_depth: f64) -> f64 {
    if dist >= r_min {
        0.0
    } else {
        lennard_jones_12_6(dist, r_min, well_depth) + well_depth
    }
}

/// The Lazaridis-Karplus Gaussian-exclusion desolvation term: the free-energy
/// cost of atom `j` displacing solvent from the first shell of atom `i`.
///
/// This is one asymmetric half; the pair value sums both directions.
#[inline]
pub fn lk_desolvation(dist: f64, r_i: f64, lambda_i: f64, dgfree_i: f64, volume_j: f64) -> f64 {
    if dist < 1e-6 {
        return 0.0;
    }
    let x = (dist - r_i) / lambda_i;
    let prefactor = -dgfree_i / (2.0 * PI.powf(1.5) * lambda_i * dist * dist);
    prefactor * (-x * x).exp() * volume_j
}
