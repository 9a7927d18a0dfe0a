//! Data models for the ZIP demographics endpoint

use serde::{Deserialize, Serialize};

/// Demographic statistics for a ZIP code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZipDemographics {
    /// The ZIP code the statistics describe
    pub zip: String,

    /// Place name (e.g. "Beverly Hills, CA")
    pub name: String,

    /// American Community Survey year the figures come from
    pub acs_year: i32,

    pub population: Population,
    pub income: Income,
    pub housing: Housing,
    pub education: Education,
    pub employment: Employment,
    pub race: RaceBreakdown,
}

/// Population counts and median age
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Population {
    pub total: i64,
    pub male: i64,
    pub female: i64,
    pub median_age: f64,
}

/// Household and per-capita income figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub median_household: i64,
    pub per_capita: i64,
}

/// Housing stock and occupancy figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Housing {
    pub median_home_value: i64,
    pub median_rent: i64,
    pub total_units: i64,
    pub occupied_units: i64,
    pub vacant_units: i64,
    pub owner_occupied: i64,
    pub renter_occupied: i64,
    pub home_ownership_rate: f64,
}

/// Educational attainment figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub college_educated_pct: f64,
    pub bachelors: i64,
    pub masters: i64,
    pub professional: i64,
    pub doctorate: i64,
}

/// Labor force participation figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employment {
    pub labor_force: i64,
    pub unemployed: i64,
    pub unemployment_rate: f64,
}

/// Racial composition, one [`RaceGroup`] per reported group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceBreakdown {
    pub white: RaceGroup,
    pub black: RaceGroup,
    pub asian: RaceGroup,
    pub hispanic: RaceGroup,
}

/// Count and share of the population for one racial group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceGroup {
    pub count: i64,
    pub percent: f64,
}
