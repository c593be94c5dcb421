/// Mass table error
pub mod mass_table_error;
