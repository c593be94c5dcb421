// std imports
use std::collections::HashMap;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

// 3rd party imports
use csv::StringRecord;
use serde::Deserialize;
use tracing::debug;

// internal imports
use crate::io::errors::mass_table_error::MassTableError;

/// Separator between symbol and mass
const FIELD_SEPARATOR: char = ',';

#[derive(Debug, Deserialize)]
struct MassTableCsvRecord {
    symbol: String,
    mass: f64,
}

pub struct Reader {}

impl Reader {
    /// Reads a mass table, one `symbol,mass` record per line without header.
    /// Every line, including empty ones, must contain exactly one separator.
    /// The symbol is taken as is, whitespace around the mass is ignored.
    /// If a symbol occurs multiple times, the last record wins.
    ///
    /// # Arguments
    /// * `path` - Path to the mass table
    ///
    pub fn read(path: &Path) -> Result<HashMap<String, f64>, MassTableError> {
        let file = File::open(path).map_err(|source| MassTableError::ResourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut masses: HashMap<String, f64> = HashMap::new();
        // `lines()` strips `\n` and `\r\n`
        for (line_idx, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let entry = Self::parse_line(&line, line_idx as u64 + 1)?;
            masses.insert(entry.symbol, entry.mass);
        }
        debug!("Read {} masses from {}", masses.len(), path.display());
        Ok(masses)
    }

    fn parse_line(line: &str, line_number: u64) -> Result<MassTableCsvRecord, MassTableError> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() != 2 {
            return Err(MassTableError::MalformedRecord {
                line: line_number,
                content: line.to_owned(),
            });
        }
        let record = StringRecord::from(vec![fields[0], fields[1].trim()]);
        record
            .deserialize(None)
            .map_err(|_| MassTableError::InvalidMass {
                line: line_number,
                value: fields[1].to_owned(),
            })
    }
}
