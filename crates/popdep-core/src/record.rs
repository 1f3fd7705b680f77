//! # Department Records
//!
//! The nested shape served to clients:
//!
//! ```json
//! {
//!   "id": "01",
//!   "nom": "Ain",
//!   "ensemble": { "0_19": 165880, ..., "75_plus": 54953, "total": 652966 },
//!   "hommes":   { ... },
//!   "femmes":   { ... }
//! }
//! ```
//!
//! Records are built per request from the raw table row; see
//! [`crate::table::PopulationTable`].

use serde::Serialize;

/// Population group, i.e. the top-level header spanning six count columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopulationGroup {
    /// Whole population.
    Ensemble,
    /// Men.
    Hommes,
    /// Women.
    Femmes,
}

impl PopulationGroup {
    /// All groups, in source column order.
    pub const ALL: [PopulationGroup; 3] = [Self::Ensemble, Self::Hommes, Self::Femmes];

    /// Group label as written in the CSV header.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ensemble => "Ensemble",
            Self::Hommes => "Hommes",
            Self::Femmes => "Femmes",
        }
    }
}

/// Age bracket, i.e. the second-level header under each group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeBracket {
    Age0To19,
    Age20To39,
    Age40To59,
    Age60To74,
    Age75Plus,
    /// All ages.
    Total,
}

impl AgeBracket {
    /// All brackets, in source column order.
    pub const ALL: [AgeBracket; 6] = [
        Self::Age0To19,
        Self::Age20To39,
        Self::Age40To59,
        Self::Age60To74,
        Self::Age75Plus,
        Self::Total,
    ];

    /// Sub-label as written in the CSV header.
    pub fn label(self) -> &'static str {
        match self {
            Self::Age0To19 => "0-19",
            Self::Age20To39 => "20-39",
            Self::Age40To59 => "40-59",
            Self::Age60To74 => "60-74",
            Self::Age75Plus => "75+",
            Self::Total => "Total",
        }
    }

    /// Key used in the JSON breakdown object.
    pub fn key(self) -> &'static str {
        match self {
            Self::Age0To19 => "0_19",
            Self::Age20To39 => "20_39",
            Self::Age40To59 => "40_59",
            Self::Age60To74 => "60_74",
            Self::Age75Plus => "75_plus",
            Self::Total => "total",
        }
    }
}

/// Head counts of one population group by age bracket.
///
/// `None` means the source cell was missing or unparseable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AgeBreakdown {
    #[serde(rename = "0_19")]
    pub age_0_19: Option<u64>,
    #[serde(rename = "20_39")]
    pub age_20_39: Option<u64>,
    #[serde(rename = "40_59")]
    pub age_40_59: Option<u64>,
    #[serde(rename = "60_74")]
    pub age_60_74: Option<u64>,
    #[serde(rename = "75_plus")]
    pub age_75_plus: Option<u64>,
    pub total: Option<u64>,
}

impl AgeBreakdown {
    /// Count for one bracket.
    pub fn get(&self, bracket: AgeBracket) -> Option<u64> {
        *self.slot(bracket)
    }

    /// Mutable access to one bracket.
    pub fn get_mut(&mut self, bracket: AgeBracket) -> &mut Option<u64> {
        match bracket {
            AgeBracket::Age0To19 => &mut self.age_0_19,
            AgeBracket::Age20To39 => &mut self.age_20_39,
            AgeBracket::Age40To59 => &mut self.age_40_59,
            AgeBracket::Age60To74 => &mut self.age_60_74,
            AgeBracket::Age75Plus => &mut self.age_75_plus,
            AgeBracket::Total => &mut self.total,
        }
    }

    fn slot(&self, bracket: AgeBracket) -> &Option<u64> {
        match bracket {
            AgeBracket::Age0To19 => &self.age_0_19,
            AgeBracket::Age20To39 => &self.age_20_39,
            AgeBracket::Age40To59 => &self.age_40_59,
            AgeBracket::Age60To74 => &self.age_60_74,
            AgeBracket::Age75Plus => &self.age_75_plus,
            AgeBracket::Total => &self.total,
        }
    }
}

/// One department as served by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DepartmentRecord {
    /// Department code: `01`..`95`, `2A`, `2B`, `971`..`976`.
    pub id: String,
    /// Display name, empty when the source has no name column.
    #[serde(rename = "nom")]
    pub name: String,
    pub ensemble: AgeBreakdown,
    pub hommes: AgeBreakdown,
    pub femmes: AgeBreakdown,
}

impl DepartmentRecord {
    /// Breakdown for one population group.
    pub fn group(&self, group: PopulationGroup) -> &AgeBreakdown {
        match group {
            PopulationGroup::Ensemble => &self.ensemble,
            PopulationGroup::Hommes => &self.hommes,
            PopulationGroup::Femmes => &self.femmes,
        }
    }

    /// Mutable breakdown for one population group.
    pub fn group_mut(&mut self, group: PopulationGroup) -> &mut AgeBreakdown {
        match group {
            PopulationGroup::Ensemble => &mut self.ensemble,
            PopulationGroup::Hommes => &mut self.hommes,
            PopulationGroup::Femmes => &mut self.femmes,
        }
    }
}
