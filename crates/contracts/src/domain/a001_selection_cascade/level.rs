use super::cascade::CascadeField;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Уровень владения записью (селектор `level`)
///
/// Controls which cascade fields are shown and required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnershipLevel {
    Unowned,
    Organization,
    Deployment,
    MooringEquipment,
}

/// Visibility and required-ness of one cascade field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPolicy {
    pub visible: bool,
    pub required: bool,
}

impl OwnershipLevel {
    pub const ALL: [OwnershipLevel; 4] = [
        OwnershipLevel::Unowned,
        OwnershipLevel::Organization,
        OwnershipLevel::Deployment,
        OwnershipLevel::MooringEquipment,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OwnershipLevel::Unowned => "unowned",
            OwnershipLevel::Organization => "organization",
            OwnershipLevel::Deployment => "deployment",
            OwnershipLevel::MooringEquipment => "mooring_equipment",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OwnershipLevel::Unowned => "Unowned",
            OwnershipLevel::Organization => "Organization",
            OwnershipLevel::Deployment => "Deployment",
            OwnershipLevel::MooringEquipment => "Mooring / Equipment",
        }
    }

    /// Number of cascade fields (from the top) shown at this level.
    /// Mooring and equipment are always toggled together.
    fn visible_fields(self) -> usize {
        match self {
            OwnershipLevel::Unowned => 0,
            OwnershipLevel::Organization => 1,
            OwnershipLevel::Deployment => 2,
            OwnershipLevel::MooringEquipment => 4,
        }
    }

    pub fn policy(self, field: CascadeField) -> FieldPolicy {
        let shown = field.depth() < self.visible_fields();
        FieldPolicy {
            visible: shown,
            required: shown,
        }
    }
}

impl fmt::Display for OwnershipLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OwnershipLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OwnershipLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("Unknown ownership level: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(level: OwnershipLevel) -> Vec<bool> {
        CascadeField::ALL
            .iter()
            .map(|&f| level.policy(f).visible)
            .collect()
    }

    #[test]
    fn test_unowned_hides_everything() {
        assert_eq!(visible(OwnershipLevel::Unowned), vec![false; 4]);
        assert!(CascadeField::ALL
            .iter()
            .all(|&f| !OwnershipLevel::Unowned.policy(f).required));
    }

    #[test]
    fn test_mooring_equipment_shows_everything() {
        assert_eq!(visible(OwnershipLevel::MooringEquipment), vec![true; 4]);
        assert!(CascadeField::ALL
            .iter()
            .all(|&f| OwnershipLevel::MooringEquipment.policy(f).required));
    }

    #[test]
    fn test_intermediate_levels() {
        assert_eq!(
            visible(OwnershipLevel::Organization),
            vec![true, false, false, false]
        );
        assert_eq!(
            visible(OwnershipLevel::Deployment),
            vec![true, true, false, false]
        );
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(
            "mooring_equipment".parse::<OwnershipLevel>(),
            Ok(OwnershipLevel::MooringEquipment)
        );
        assert!("everything".parse::<OwnershipLevel>().is_err());
    }
}
