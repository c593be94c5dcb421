//! Module containing amino acid residue masses

// std imports
use std::collections::HashMap;

// 3rd party imports
use tracing::trace;

// internal imports
use crate::chemistry::errors::mass_calculation_error::MassCalculationError;
use crate::chemistry::molecule::{HYDROGEN_MASS, WATER_MASS};

/// Mapping from one letter code to the average residue mass in Dalton
pub type ResidueMassTable = HashMap<char, f64>;

// Average residue masses of the canonical amino acids
lazy_static! {
    pub static ref RESIDUE_MASSES: ResidueMassTable = collection! {
        'G' => 57.05132,
        'A' => 71.0779,
        'S' => 87.0773,
        'P' => 97.11518,
        'V' => 99.13106,
        'T' => 101.10388,
        'C' => 103.1429,
        'L' => 113.15764,
        'I' => 113.15764,
        'N' => 114.10264,
        'D' => 115.0874,
        'Q' => 128.12922,
        'K' => 128.17228,
        'E' => 129.11398,
        'M' => 131.19606,
        'H' => 137.13928,
        'F' => 147.17386,
        'R' => 156.18568,
        'Y' => 163.17326,
        'W' => 186.2099,
    };
}

/// Calculates the average mass of an amino acid sequence with the given residue masses:
/// sum of the residue masses plus one water, minus two hydrogens per disulfide bridge.
///
/// # Arguments
/// * `sequence` - Amino acid sequence in one letter code
/// * `residue_masses` - Residue masses to use
/// * `disulfide_bonds` - Number of disulfide bridges
///
pub fn calc_sequence_mass_with_table(
    sequence: &str,
    residue_masses: &ResidueMassTable,
    disulfide_bonds: u32,
) -> Result<f64, MassCalculationError> {
    let mut mass = WATER_MASS;
    for one_letter_code in sequence.chars() {
        mass += residue_masses
            .get(&one_letter_code)
            .ok_or(MassCalculationError::UnknownResidue(one_letter_code))?;
    }
    mass -= 2.0 * HYDROGEN_MASS * disulfide_bonds as f64;
    trace!(
        "{} residues, {} disulfide bonds: {} Da",
        sequence.len(),
        disulfide_bonds,
        mass
    );
    Ok(mass)
}

/// Calculates the average mass of an amino acid sequence with the built-in residue masses.
///
/// # Arguments
/// * `sequence` - Amino acid sequence in one letter code
/// * `disulfide_bonds` - Number of disulfide bridges
///
pub fn calc_sequence_mass(sequence: &str, disulfide_bonds: u32) -> Result<f64, MassCalculationError> {
    calc_sequence_mass_with_table(sequence, &RESIDUE_MASSES, disulfide_bonds)
}
