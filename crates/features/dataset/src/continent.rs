//! Continent names used by the dataset.

pub const AFRICA: &str = "Africa";
pub const ANTARCTICA: &str = "Antarctica";
pub const ASIA: &str = "Asia";
pub const EUROPE: &str = "Europe";
pub const NORTH_AMERICA: &str = "North America";
pub const OCEANIA: &str = "Oceania";
pub const SOUTH_AMERICA: &str = "South America";

/// Every continent name, alphabetically.
pub const ALL: [&str; 7] =
    [AFRICA, ANTARCTICA, ASIA, EUROPE, NORTH_AMERICA, OCEANIA, SOUTH_AMERICA];
