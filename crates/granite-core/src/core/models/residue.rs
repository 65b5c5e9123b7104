use super::ids::{AtomId, ChainId};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    pub number: isize,                      // Residue sequence number from source file
    pub name: String,                       // Name of the residue (e.g., "ALA", "GLY")
    pub chain_id: ChainId,                  // ID of the parent chain
    pub(crate) atoms: Vec<AtomId>,          // IDs of atoms belonging to this residue
    atom_name_map: HashMap<String, AtomId>, // Map from atom name to its stable ID
}

impl Residue {
    pub(crate) fn new(number: isize, name: &str, chain_id: ChainId) -> Self {
        Self {
            number,
            name: name.to_string(),
            chain_id,
            atoms: Vec::new(),
            atom_name_map: HashMap::new(),
        }
    }

    pub(crate) fn add_atom(&mut self, atom_name: &str, atom_id: AtomId) {
        self.atoms.push(atom_id);
        self.atom_name_map.insert(atom_name.to_string(), atom_id);
    }

    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    pub fn get_atom_id_by_name(&self, name: &str) -> Option<AtomId> {
        self.atom_name_map.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;

    fn dummy_atom_id(n: u64) -> AtomId {
        AtomId::from(KeyData::from_ffi(n))
    }

    #[test]
    fn add_atom_registers_id_and_name_lookup() {
        let mut residue = Residue::new(1, "ALA", ChainId::default());
        let ca = dummy_atom_id(1);
        let cb = dummy_atom_id(2);
        residue.add_atom("CA", ca);
        residue.add_atom("CB", cb);

        assert_eq!(residue.atoms(), &[ca, cb]);
        assert_eq!(residue.get_atom_id_by_name("CA"), Some(ca));
        assert_eq!(residue.get_atom_id_by_name("CB"), Some(cb));
        assert_eq!(residue.get_atom_id_by_name("CG"), None);
    }

    #[test]
    fn atoms_preserve_insertion_order() {
        let mut residue = Residue::new(7, "GLY", ChainId::default());
        let ids: Vec<_> = (1..=4).map(dummy_atom_id).collect();
        for (i, &id) in ids.iter().enumerate() {
            residue.add_atom(&format!("A{}", i), id);
        }
        assert_eq!(residue.atoms(), ids.as_slice());
    }
}
