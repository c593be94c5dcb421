/// Information about amino acid residues and sequence mass calculation
pub mod amino_acid;
/// Information about chemical elements, e.g. their average masses
pub mod element;
/// Errors which might occur during mass calculation
pub mod errors;
/// Tokenizing of chemical formulas and formula mass calculation
pub mod formula;
/// Information about additional molecules, e.g water
pub mod molecule;
