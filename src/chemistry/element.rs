//! Module containing the element mass table

// std imports
use std::collections::HashMap;
use std::path::Path;

// internal imports
use crate::io::errors::mass_table_error::MassTableError;
use crate::io::mass_table_csv::reader::Reader as MassTableReader;

/// Immutable mapping from element symbol (e.g. `H`, `Cl`) to its atomic mass in Dalton.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementMassTable {
    masses: HashMap<String, f64>,
}

impl ElementMassTable {
    /// Creates a new element mass table
    ///
    /// # Arguments
    /// * `masses` - Map of element symbols to atomic masses
    ///
    pub fn new(masses: HashMap<String, f64>) -> Self {
        Self { masses }
    }

    /// Reads an element mass table from a CSV file with `symbol,mass` records.
    ///
    /// # Arguments
    /// * `path` - Path to the mass table file
    ///
    pub fn from_path(path: &Path) -> Result<Self, MassTableError> {
        Ok(MassTableReader::read(path)?.into())
    }

    /// Returns the atomic mass of the given element symbol, if known
    ///
    /// # Arguments
    /// * `symbol` - Element symbol, e.g. `Na`
    ///
    pub fn get_mass(&self, symbol: &str) -> Option<f64> {
        self.masses.get(symbol).copied()
    }

    /// Returns the number of elements in the table
    ///
    pub fn len(&self) -> usize {
        self.masses.len()
    }

    /// Returns true if the table has no elements
    ///
    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }
}

impl From<HashMap<String, f64>> for ElementMassTable {
    fn from(masses: HashMap<String, f64>) -> Self {
        Self::new(masses)
    }
}

// Average masses of the first 20 elements
lazy_static! {
    pub static ref ELEMENT_MASSES: ElementMassTable = ElementMassTable::new(collection! {
        "H".to_owned() => 1.008,
        "He".to_owned() => 4.0026,
        "Li".to_owned() => 6.94,
        "Be".to_owned() => 9.0122,
        "B".to_owned() => 10.81,
        "C".to_owned() => 12.011,
        "N".to_owned() => 14.007,
        "O".to_owned() => 15.999,
        "F".to_owned() => 18.998,
        "Ne".to_owned() => 20.18,
        "Na".to_owned() => 22.99,
        "Mg".to_owned() => 24.305,
        "Al".to_owned() => 26.982,
        "Si".to_owned() => 28.085,
        "P".to_owned() => 30.974,
        "S".to_owned() => 32.06,
        "Cl".to_owned() => 35.45,
        "Ar".to_owned() => 39.948,
        "K".to_owned() => 39.098,
        "Ca".to_owned() => 40.078,
    });
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_builtin_table() {
        assert_eq!(ELEMENT_MASSES.len(), 20);
        assert_eq!(ELEMENT_MASSES.get_mass("H"), Some(1.008));
        assert_eq!(ELEMENT_MASSES.get_mass("Cl"), Some(35.45));
        assert_eq!(ELEMENT_MASSES.get_mass("Ca"), Some(40.078));
        // lookups are case sensitive
        assert_eq!(ELEMENT_MASSES.get_mass("CL"), None);
        assert_eq!(ELEMENT_MASSES.get_mass("Xx"), None);
    }

    #[test]
    fn test_from_path() {
        let table = ElementMassTable::from_path(Path::new("test_files/average_mass.csv")).unwrap();
        assert_eq!(table.len(), 20);
        assert_eq!(table.get_mass("He"), Some(4.0026));
    }

    #[test]
    fn test_from_map() {
        let table: ElementMassTable = HashMap::from([("Fe".to_owned(), 55.845)]).into();
        assert!(!table.is_empty());
        assert_eq!(table.get_mass("Fe"), Some(55.845));
        assert_eq!(table.get_mass("H"), None);
    }
}
