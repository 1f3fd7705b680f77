//! National totals built from the listed departments.

use crate::record::{AgeBracket, AgeBreakdown, DepartmentRecord, PopulationGroup};
use crate::table::PopulationTable;

/// Code of the national summary record.
pub const FRANCE_ID: &str = "FR";

/// Display name of the national summary record.
pub const FRANCE_NAME: &str = "France entière";

/// Sum records into a single national record.
///
/// Missing counts add zero, so every field of the result is `Some`.
pub fn aggregate<'a>(records: impl IntoIterator<Item = &'a DepartmentRecord>) -> DepartmentRecord {
    let zero = AgeBreakdown {
        age_0_19: Some(0),
        age_20_39: Some(0),
        age_40_59: Some(0),
        age_60_74: Some(0),
        age_75_plus: Some(0),
        total: Some(0),
    };
    let mut france = DepartmentRecord {
        id: FRANCE_ID.to_string(),
        name: FRANCE_NAME.to_string(),
        ensemble: zero.clone(),
        hommes: zero.clone(),
        femmes: zero,
    };

    for record in records {
        for group in PopulationGroup::ALL {
            let source = record.group(group);
            let target = france.group_mut(group);
            for bracket in AgeBracket::ALL {
                let add = source.get(bracket).unwrap_or(0);
                let slot = target.get_mut(bracket);
                *slot = Some(slot.unwrap_or(0).saturating_add(add));
            }
        }
    }

    france
}

impl PopulationTable {
    /// National totals over [`PopulationTable::list_departments`].
    pub fn france_summary(&self) -> DepartmentRecord {
        aggregate(&self.list_departments())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(values: [Option<u64>; 6]) -> AgeBreakdown {
        let mut b = AgeBreakdown::default();
        for (bracket, value) in AgeBracket::ALL.into_iter().zip(values) {
            *b.get_mut(bracket) = value;
        }
        b
    }

    #[test]
    fn empty_input_gives_zeroes() {
        let france = aggregate(std::iter::empty());
        assert_eq!(france.id, FRANCE_ID);
        assert_eq!(france.name, FRANCE_NAME);
        assert_eq!(france.ensemble.total, Some(0));
        assert_eq!(france.femmes.age_75_plus, Some(0));
    }

    #[test]
    fn sums_counts_treating_none_as_zero() {
        let a = DepartmentRecord {
            id: "01".into(),
            name: "A".into(),
            ensemble: breakdown([Some(1), Some(2), None, Some(4), Some(5), Some(12)]),
            hommes: AgeBreakdown::default(),
            femmes: breakdown([Some(1); 6]),
        };
        let b = DepartmentRecord {
            id: "02".into(),
            name: "B".into(),
            ensemble: breakdown([Some(10), None, Some(30), Some(40), Some(50), Some(130)]),
            hommes: breakdown([Some(7); 6]),
            femmes: breakdown([None; 6]),
        };

        let france = aggregate(&[a, b]);

        assert_eq!(france.ensemble.age_0_19, Some(11));
        assert_eq!(france.ensemble.age_20_39, Some(2));
        assert_eq!(france.ensemble.age_40_59, Some(30));
        assert_eq!(france.ensemble.total, Some(142));
        assert_eq!(france.hommes.total, Some(7));
        assert_eq!(france.femmes.age_60_74, Some(1));
    }
}
