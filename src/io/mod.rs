/// Errors which might occur while reading input files
pub mod errors;
/// IO for mass table CSV files (`symbol,mass` per line)
pub mod mass_table_csv;
