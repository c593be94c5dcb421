// std imports
use std::fmt;

// internal imports
use crate::chemistry::amino_acid::calc_sequence_mass;
use crate::chemistry::errors::mass_calculation_error::MassCalculationError;

#[derive(Clone, Debug, PartialEq)]
/// Protein with name, UniProt accession and amino acid sequence
///
pub struct Protein {
    name: String,
    accession: String,
    sequence: String,
}

impl Protein {
    /// Creates a new protein
    ///
    /// # Arguments
    /// * `name` - The protein name
    /// * `accession` - The UniProt accession
    /// * `sequence` - The amino acid sequence in one letter code
    ///
    pub fn new(name: String, accession: String, sequence: String) -> Self {
        Self {
            name,
            accession,
            sequence,
        }
    }

    /// Returns the protein name
    ///
    pub fn get_name(&self) -> &String {
        &self.name
    }

    /// Returns the UniProt accession
    ///
    pub fn get_accession(&self) -> &String {
        &self.accession
    }

    /// Returns the amino acid sequence
    ///
    pub fn get_sequence(&self) -> &String {
        &self.sequence
    }

    /// Returns the number of amino acids
    ///
    pub fn get_length(&self) -> usize {
        self.sequence.chars().count()
    }

    /// Returns true if the sequence contains the given peptide
    ///
    /// # Arguments
    /// * `peptide` - Amino acid sequence to look for
    ///
    pub fn contains(&self, peptide: &str) -> bool {
        self.sequence.contains(peptide)
    }

    /// Returns the average molecular weight in Dalton
    ///
    /// # Arguments
    /// * `disulfide_bonds` - Number of disulfide bridges
    ///
    pub fn get_molecular_weight(&self, disulfide_bonds: u32) -> Result<f64, MassCalculationError> {
        calc_sequence_mass(&self.sequence, disulfide_bonds)
    }
}

impl fmt::Display for Protein {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.accession)
    }
}
