/// Mass calculation error
pub mod mass_calculation_error;
