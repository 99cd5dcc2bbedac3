use super::children_map::ChildrenMap;
use crate::domain::common::{OptionPool, SelectOption};
use serde::{Deserialize, Serialize};

/// One select field of the cascade, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CascadeField {
    Organization,
    Deployment,
    Mooring,
    Equipment,
}

impl CascadeField {
    pub const ALL: [CascadeField; 4] = [
        CascadeField::Organization,
        CascadeField::Deployment,
        CascadeField::Mooring,
        CascadeField::Equipment,
    ];

    /// id/name of the rendered `<select>`, expected by the server form handlers
    pub fn element_id(self) -> &'static str {
        match self {
            CascadeField::Organization => "organization_id",
            CascadeField::Deployment => "deployment_id",
            CascadeField::Mooring => "mooring_id",
            CascadeField::Equipment => "equipment_id",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CascadeField::Organization => "Organization",
            CascadeField::Deployment => "Deployment",
            CascadeField::Mooring => "Mooring",
            CascadeField::Equipment => "Equipment",
        }
    }

    pub(crate) fn depth(self) -> usize {
        match self {
            CascadeField::Organization => 0,
            CascadeField::Deployment => 1,
            CascadeField::Mooring => 2,
            CascadeField::Equipment => 3,
        }
    }

    pub fn parent(self) -> Option<CascadeField> {
        match self {
            CascadeField::Organization => None,
            CascadeField::Deployment => Some(CascadeField::Organization),
            CascadeField::Mooring => Some(CascadeField::Deployment),
            CascadeField::Equipment => Some(CascadeField::Mooring),
        }
    }

    pub fn child(self) -> Option<CascadeField> {
        match self {
            CascadeField::Organization => Some(CascadeField::Deployment),
            CascadeField::Deployment => Some(CascadeField::Mooring),
            CascadeField::Mooring => Some(CascadeField::Equipment),
            CascadeField::Equipment => None,
        }
    }
}

/// Current values of the four fields. Empty string = placeholder selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CascadeState {
    pub organization: String,
    pub deployment: String,
    pub mooring: String,
    pub equipment: String,
}

impl CascadeState {
    pub fn value(&self, field: CascadeField) -> &str {
        match field {
            CascadeField::Organization => &self.organization,
            CascadeField::Deployment => &self.deployment,
            CascadeField::Mooring => &self.mooring,
            CascadeField::Equipment => &self.equipment,
        }
    }

    pub fn set(&mut self, field: CascadeField, value: String) {
        match field {
            CascadeField::Organization => self.organization = value,
            CascadeField::Deployment => self.deployment = value,
            CascadeField::Mooring => self.mooring = value,
            CascadeField::Equipment => self.equipment = value,
        }
    }
}

/// Pools and parent→children maps of the cascade, as embedded in the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CascadeData {
    pub organizations: OptionPool,
    pub deployments: OptionPool,
    pub moorings: OptionPool,
    pub equipment: OptionPool,
    /// organization id → indices into `deployments`
    pub deployment_map: ChildrenMap,
    /// deployment id → indices into `moorings`
    pub mooring_map: ChildrenMap,
    /// mooring id → indices into `equipment`
    pub equipment_map: ChildrenMap,
}

impl CascadeData {
    pub fn pool(&self, field: CascadeField) -> &OptionPool {
        match field {
            CascadeField::Organization => &self.organizations,
            CascadeField::Deployment => &self.deployments,
            CascadeField::Mooring => &self.moorings,
            CascadeField::Equipment => &self.equipment,
        }
    }

    /// Map from the parent's ids to this field's pool; organizations have no parent.
    pub fn children_map(&self, field: CascadeField) -> Option<&ChildrenMap> {
        match field {
            CascadeField::Organization => None,
            CascadeField::Deployment => Some(&self.deployment_map),
            CascadeField::Mooring => Some(&self.mooring_map),
            CascadeField::Equipment => Some(&self.equipment_map),
        }
    }

    /// Real options (placeholder excluded) offered by `field` for the given state.
    ///
    /// Empty parent or a parent id missing from the map both yield no options.
    pub fn options(&self, field: CascadeField, state: &CascadeState) -> Vec<SelectOption> {
        let (Some(parent), Some(map)) = (field.parent(), self.children_map(field)) else {
            return self.organizations.0.clone();
        };
        let key = state.value(parent);
        if key.is_empty() {
            return Vec::new();
        }
        map.children(key)
            .map(|indices| self.pool(field).pick(indices))
            .unwrap_or_default()
    }

    /// Set `field` to `value` and rebuild every level below it.
    ///
    /// Each child is set to its first real option, or cleared when it has none,
    /// and the change carries on down to equipment.
    pub fn select(&self, field: CascadeField, value: &str, state: &CascadeState) -> CascadeState {
        let mut next = state.clone();
        next.set(field, value.to_string());

        let mut current = field;
        while let Some(child) = current.child() {
            let first = self
                .options(child, &next)
                .into_iter()
                .next()
                .map(|o| o.value)
                .unwrap_or_default();
            next.set(child, first);
            current = child;
        }
        next
    }

    /// Restore server-provided initial values.
    ///
    /// Values consistent with their parent are kept. From the first level whose
    /// value is not offered by its parent, the cascade is re-run as if that
    /// parent had just been selected.
    pub fn restore(&self, initial: &CascadeState) -> CascadeState {
        let organization = if self.organizations.contains_value(&initial.organization) {
            initial.organization.as_str()
        } else {
            ""
        };
        let mut state = CascadeState {
            organization: organization.to_string(),
            ..CascadeState::default()
        };
        if organization != initial.organization {
            return self.select(CascadeField::Organization, organization, &state);
        }

        let mut current = CascadeField::Organization;
        while let Some(child) = current.child() {
            let candidate = initial.value(child);
            let offered = self.options(child, &state);
            let valid = if candidate.is_empty() {
                true
            } else {
                offered.iter().any(|o| o.value == candidate)
            };
            if !valid {
                let parent_value = state.value(current).to_string();
                return self.select(current, &parent_value, &state);
            }
            state.set(child, candidate.to_string());
            current = child;
        }
        state
    }
}
