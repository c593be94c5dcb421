//! Module for tokenizing chemical formulas and calculating their mass.
//!
//! A formula is a freely delimited list of compounds, e.g. `C6 H12 O6` or `NaCl`. Each compound
//! starts with exactly one capital letter, followed by at most one small letter and an optional
//! element count. Characters which do not belong to a compound are skipped.

// 3rd party imports
use fancy_regex::{CaptureMatches, Captures, Regex};
use tracing::trace;

// internal imports
use crate::chemistry::element::{ElementMassTable, ELEMENT_MASSES};
use crate::chemistry::errors::mass_calculation_error::MassCalculationError;

lazy_static! {
    /// First group is the element symbol, second group the (possibly empty) count
    static ref FORMULA_TOKEN_REGEX: Regex = Regex::new(r"([A-Z][a-z]?)([0-9]*)").unwrap();
}

/// Element symbol and count of a single compound in a formula
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormulaToken<'a> {
    symbol: &'a str,
    count: u64,
}

impl<'a> FormulaToken<'a> {
    /// Creates a new formula token
    ///
    /// # Arguments
    /// * `symbol` - Element symbol
    /// * `count` - Number of atoms
    ///
    pub fn new(symbol: &'a str, count: u64) -> Self {
        Self { symbol, count }
    }

    /// Returns the element symbol
    ///
    pub fn get_symbol(&self) -> &'a str {
        self.symbol
    }

    /// Returns the number of atoms
    ///
    pub fn get_count(&self) -> u64 {
        self.count
    }

    fn from_captures(captures: &Captures<'a>) -> Result<Self, MassCalculationError> {
        let symbol = captures.get(1).map(|group| group.as_str()).unwrap_or("");
        let digits = captures.get(2).map(|group| group.as_str()).unwrap_or("");
        // No count means a single atom
        let count = if digits.is_empty() {
            1
        } else {
            digits
                .parse::<u64>()
                .map_err(|_| MassCalculationError::InvalidCount(digits.to_owned()))?
        };
        Ok(Self::new(symbol, count))
    }
}

/// Lazy iterator over the tokens of a formula, in the order they appear.
/// Create it with [tokenize].
///
pub struct FormulaTokens<'a> {
    captures: CaptureMatches<'static, 'a>,
}

impl<'a> Iterator for FormulaTokens<'a> {
    type Item = Result<FormulaToken<'a>, MassCalculationError>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(match self.captures.next()? {
            Ok(captures) => FormulaToken::from_captures(&captures),
            Err(err) => Err(err.into()),
        })
    }
}

/// Splits the formula into its tokens.
/// Calling it again with the same formula starts over.
///
/// # Arguments
/// * `formula` - Chemical formula, e.g. `C34 H46 Cl N3 O10`
///
pub fn tokenize(formula: &str) -> FormulaTokens<'_> {
    FormulaTokens {
        captures: FORMULA_TOKEN_REGEX.captures_iter(formula),
    }
}

/// Calculates the mass of the given formula. Fails on the first element which is not
/// in the table.
///
/// # Arguments
/// * `formula` - Chemical formula, e.g. `C6 H12 O6`
/// * `table` - Element masses to use
///
pub fn compute_mass(formula: &str, table: &ElementMassTable) -> Result<f64, MassCalculationError> {
    let mut mass = 0.0;
    for token in tokenize(formula) {
        let token = token?;
        let element_mass = table
            .get_mass(token.get_symbol())
            .ok_or_else(|| MassCalculationError::UnknownElement(token.get_symbol().to_owned()))?;
        trace!(
            "{} x {} ({} Da)",
            token.get_count(),
            token.get_symbol(),
            element_mass
        );
        mass += element_mass * token.get_count() as f64;
    }
    Ok(mass)
}

/// Calculates the mass of the given formula with the built-in element masses.
///
/// # Arguments
/// * `formula` - Chemical formula, e.g. `H2 O`
///
pub fn compute_mass_with_builtin(formula: &str) -> Result<f64, MassCalculationError> {
    compute_mass(formula, &ELEMENT_MASSES)
}

#[cfg(test)]
mod test {
    use super::*;

    fn mass_of(symbol: &str) -> f64 {
        ELEMENT_MASSES.get_mass(symbol).unwrap()
    }

    #[test]
    fn test_tokenize() {
        let tokens: Vec<FormulaToken> = tokenize("C34 H46 Cl N3 O10")
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            tokens,
            vec![
                FormulaToken::new("C", 34),
                FormulaToken::new("H", 46),
                FormulaToken::new("Cl", 1),
                FormulaToken::new("N", 3),
                FormulaToken::new("O", 10),
            ]
        );
    }

    #[test]
    fn test_tokenize_without_delimiter() {
        let tokens: Vec<FormulaToken> = tokenize("NaCl").collect::<Result<_, _>>().unwrap();
        assert_eq!(
            tokens,
            vec![FormulaToken::new("Na", 1), FormulaToken::new("Cl", 1)]
        );
    }

    #[test]
    fn test_tokenize_skips_unmatched_characters() {
        // leading digits, lowercase letters without capital and punctuation do not match
        let tokens: Vec<FormulaToken> = tokenize("42 xy -H2, o O")
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            tokens,
            vec![FormulaToken::new("H", 2), FormulaToken::new("O", 1)]
        );
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize("123 abc").count(), 0);
    }

    #[test]
    fn test_tokenize_is_restartable() {
        let formula = "C6 H12 O6";
        let first: Vec<FormulaToken> = tokenize(formula).collect::<Result<_, _>>().unwrap();
        let second: Vec<FormulaToken> = tokenize(formula).collect::<Result<_, _>>().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_water() {
        let mass = compute_mass_with_builtin("H2 O").unwrap();
        assert_eq!(mass, 2.0 * mass_of("H") + mass_of("O"));
        assert!((mass - 18.015).abs() < 1e-9);
    }

    #[test]
    fn test_glucose() {
        let mass = compute_mass_with_builtin("C6 H12 O6").unwrap();
        assert_eq!(
            mass,
            6.0 * mass_of("C") + 12.0 * mass_of("H") + 6.0 * mass_of("O")
        );
    }

    #[test]
    fn test_count_defaults_to_one() {
        let mass = compute_mass_with_builtin("NaCl").unwrap();
        assert_eq!(mass, mass_of("Na") + mass_of("Cl"));
    }

    #[test]
    fn test_repeated_symbols_are_summed() {
        let mass = compute_mass_with_builtin("H O H").unwrap();
        assert_eq!(mass, mass_of("H") + mass_of("O") + mass_of("H"));
    }

    #[test]
    fn test_larger_compound() {
        let mass = compute_mass_with_builtin("C34 H46 Cl N3 O10").unwrap();
        assert!((mass - 692.203).abs() < 1e-9);
    }

    #[test]
    fn test_idempotence() {
        let first = compute_mass_with_builtin("C34 H46 Cl N3 O10").unwrap();
        let second = compute_mass_with_builtin("C34 H46 Cl N3 O10").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_formula() {
        assert_eq!(compute_mass_with_builtin("").unwrap(), 0.0);
        assert_eq!(compute_mass_with_builtin("  12 ").unwrap(), 0.0);
    }

    #[test]
    fn test_unknown_element() {
        let err = compute_mass_with_builtin("Xx2").unwrap_err();
        assert!(err.is_unknown_symbol());
        match err {
            MassCalculationError::UnknownElement(symbol) => assert_eq!(symbol, "Xx"),
            other => panic!("Unexpected error: {}", other),
        }
        // a single unknown element fails the whole formula
        assert!(compute_mass_with_builtin("H2 O Fe").is_err());
    }

    #[test]
    fn test_count_out_of_range() {
        let err = compute_mass_with_builtin("H99999999999999999999999").unwrap_err();
        assert!(matches!(err, MassCalculationError::InvalidCount(_)));
        assert!(!err.is_unknown_symbol());
    }

    #[test]
    fn test_custom_table() {
        let table = ElementMassTable::new(collection! {
            "H".to_owned() => 1.0,
            "O".to_owned() => 16.0,
        });
        assert_eq!(compute_mass("H2 O", &table).unwrap(), 18.0);
        assert!(compute_mass("C", &table).is_err());
    }
}
