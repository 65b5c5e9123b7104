use super::ids::ResidueId;
use nalgebra::Point3;

/// Represents an atom in a molecular structure with its properties.
///
/// This struct carries exactly what the pairwise energy evaluation consumes:
/// the atom's identity, its forcefield type (the key into the parameter tables),
/// its partial charge, and its coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The name of the atom (e.g., "CA", "N", "O").
    pub name: String,
    /// The ID of the parent residue this atom belongs to.
    pub residue_id: ResidueId,
    /// The force field atom type (e.g., "C_3", "N_R").
    pub force_field_type: String,
    /// The partial atomic charge in elementary charge units.
    pub partial_charge: f64,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom` with default values for most fields.
    ///
    /// The forcefield type and partial charge are set to their defaults and
    /// can be modified afterward as needed.
    pub fn new(name: &str, residue_id: ResidueId, position: Point3<f64>) -> Self {
        Self {
            name: name.to_string(),
            residue_id,
            position,
            force_field_type: String::new(),
            partial_charge: 0.0,
        }
    }
}
