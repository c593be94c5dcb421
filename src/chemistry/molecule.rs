/// Average mass of a water molecule, added once per sequence for the free termini
pub const WATER_MASS: f64 = 18.01528;

/// Average mass of hydrogen as used for the disulfide bridge correction
pub const HYDROGEN_MASS: f64 = 1.00784;
