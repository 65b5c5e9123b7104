use crate::core::io::traits::StructureFile;
use crate::core::models::atom::Atom;
use crate::core::models::system::MolecularSystem;
use nalgebra::Point3;
use std::collections::HashSet;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BgfError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: BgfParseErrorKind,
    },
    #[error("Inconsistent data: {0}")]
    Inconsistency(String),
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum BgfParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: String },
    #[error("Line is too short for ATOM/HETATM record (must be at least 80 chars)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

/// Fixed-column BGF structure reader.
///
/// Only the records the pair-energy diagnostic consumes are materialized:
/// ATOM/HETATM lines become atoms grouped into residues and chains.
/// CONECT, ORDER, and FORMAT lines are tolerated and skipped, since no
/// operation in this crate consumes bond topology.
pub struct BgfFile;

impl StructureFile for BgfFile {
    type Error = BgfError;

    fn read_from(reader: &mut impl BufRead) -> Result<MolecularSystem, Self::Error> {
        let mut system = MolecularSystem::new();
        let mut seen_serials = HashSet::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            let record_type = slice_and_trim(&line, 0, 6);
            match record_type {
                "ATOM" | "HETATM" => {
                    if line.len() < 80 {
                        return Err(BgfError::Parse {
                            line: line_num,
                            kind: BgfParseErrorKind::LineTooShort,
                        });
                    }

                    let serial_str = slice_and_trim(&line, 7, 12);
                    let name_str = slice_and_trim(&line, 13, 18);
                    let res_name_str = slice_and_trim(&line, 19, 22);
                    let chain_id_str = slice_and_trim(&line, 23, 24);
                    let res_num_str = slice_and_trim(&line, 25, 30);
                    let x_str = slice_and_trim(&line, 30, 40);
                    let y_str = slice_and_trim(&line, 40, 50);
                    let z_str = slice_and_trim(&line, 50, 60);
                    let ff_type_str = slice_and_trim(&line, 61, 66);
                    let charge_str = slice_and_trim(&line, 72, 80);

                    if name_str.is_empty() {
                        return Err(BgfError::Parse {
                            line: line_num,
                            kind: BgfParseErrorKind::MissingRequiredField {
                                columns: "14-18".into(),
                            },
                        });
                    }
                    let serial: usize = serial_str.parse().map_err(|_| BgfError::Parse {
                        line: line_num,
                        kind: BgfParseErrorKind::InvalidInt {
                            columns: "8-12".into(),
                            value: serial_str.into(),
                        },
                    })?;
                    if !seen_serials.insert(serial) {
                        return Err(BgfError::Inconsistency(format!(
                            "Duplicate atom serial: {}",
                            serial
                        )));
                    }

                    let chain_id: char = chain_id_str.chars().next().unwrap_or('A');
                    let res_num: isize = res_num_str.parse().map_err(|_| BgfError::Parse {
                        line: line_num,
                        kind: BgfParseErrorKind::InvalidInt {
                            columns: "26-30".into(),
                            value: res_num_str.into(),
                        },
                    })?;
                    let x: f64 = x_str.parse().map_err(|_| BgfError::Parse {
                        line: line_num,
                        kind: BgfParseErrorKind::InvalidFloat {
                            columns: "31-40".into(),
                            value: x_str.into(),
                        },
                    })?;
                    let y: f64 = y_str.parse().map_err(|_| BgfError::Parse {
                        line: line_num,
                        kind: BgfParseErrorKind::InvalidFloat {
                            columns: "41-50".into(),
                            value: y_str.into(),
                        },
                    })?;
                    let z: f64 = z_str.parse().map_err(|_| BgfError::Parse {
                        line: line_num,
                        kind: BgfParseErrorKind::InvalidFloat {
                            columns: "51-60".into(),
                            value: z_str.into(),
                        },
                    })?;
                    if ff_type_str.is_empty() {
                        return Err(BgfError::Parse {
                            line: line_num,
                            kind: BgfParseErrorKind::MissingRequiredField {
                                columns: "62-66".into(),
                            },
                        });
                    }
                    let charge: f64 = charge_str.parse().map_err(|_| BgfError::Parse {
                        line: line_num,
                        kind: BgfParseErrorKind::InvalidFloat {
                            columns: "73-80".into(),
                            value: charge_str.into(),
                        },
                    })?;

                    let chain = system.add_chain(chain_id);
                    let residue_id = system
                        .add_residue(chain, res_num, res_name_str)
                        .ok_or_else(|| {
                            BgfError::Inconsistency(format!(
                                "Chain '{}' vanished while adding residue {}",
                                chain_id, res_num
                            ))
                        })?;

                    let mut atom = Atom::new(name_str, residue_id, Point3::new(x, y, z));
                    atom.force_field_type = ff_type_str.to_string();
                    atom.partial_charge = charge;
                    system.add_atom_to_residue(residue_id, atom).ok_or_else(|| {
                        BgfError::Inconsistency(format!(
                            "Residue {} vanished while adding atom {}",
                            res_num, serial
                        ))
                    })?;
                }
                // Bond topology is not consumed by anything in this crate.
                "CONECT" | "ORDER" | "FORMAT" => continue,
                "END" => break,
                _ => continue,
            }
        }

        if seen_serials.is_empty() {
            return Err(BgfError::MissingRecord("ATOM/HETATM records".into()));
        }
        Ok(system)
    }
}
