use contracts::domain::a001_selection_cascade::{
    CascadeData, CascadeField, CascadeState, FieldPolicy, OwnershipLevel,
};
use contracts::shared::page_data::CascadeSection;
use leptos::prelude::*;

/// ViewModel for the organization → deployment → mooring → equipment form
#[derive(Clone, Copy)]
pub struct CascadeFormViewModel {
    pub data: StoredValue<CascadeData>,
    pub state: RwSignal<CascadeState>,
    /// `None` when the page renders no level selector
    pub level: RwSignal<Option<OwnershipLevel>>,
}

impl CascadeFormViewModel {
    pub fn new(section: CascadeSection) -> Self {
        let state = section.data.restore(&section.initial);
        Self {
            data: StoredValue::new(section.data),
            state: RwSignal::new(state),
            level: RwSignal::new(section.level),
        }
    }

    pub fn has_level(&self) -> bool {
        self.level.get_untracked().is_some()
    }

    pub fn value(&self, field: CascadeField) -> String {
        self.state.with(|s| s.value(field).to_string())
    }

    /// (value, label) pairs offered by `field` for the current state
    pub fn options(&self, field: CascadeField) -> Vec<(String, String)> {
        self.state.with(|state| {
            self.data.with_value(|data| {
                data.options(field, state)
                    .iter()
                    .map(|o| o.as_pair())
                    .collect()
            })
        })
    }

    /// Without a level selector every field is shown and required.
    pub fn policy(&self, field: CascadeField) -> FieldPolicy {
        self.level
            .get()
            .map(|level| level.policy(field))
            .unwrap_or(FieldPolicy {
                visible: true,
                required: true,
            })
    }

    pub fn select_command(&self, field: CascadeField, value: String) {
        let data = self.data;
        self.state
            .update(|state| *state = data.with_value(|d| d.select(field, &value, state)));
    }

    /// Switch ownership level and re-run the cascade from the current organization.
    pub fn change_level_command(&self, raw: String) {
        match raw.parse::<OwnershipLevel>() {
            Ok(level) => {
                self.level.set(Some(level));
                let organization = self.state.with_untracked(|s| s.organization.clone());
                self.select_command(CascadeField::Organization, organization);
            }
            Err(e) => log::warn!("{}", e),
        }
    }

    pub fn level_options() -> Vec<(String, String)> {
        OwnershipLevel::ALL
            .iter()
            .map(|level| (level.as_str().to_string(), level.label().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::{OptionPool, SelectOption};

    fn pool(values: &[&str]) -> OptionPool {
        OptionPool::new(values.iter().map(|v| SelectOption::new(*v, v.to_uppercase())).collect())
    }

    fn section() -> CascadeSection {
        CascadeSection {
            data: CascadeData {
                organizations: pool(&["1", "2"]),
                deployments: pool(&["d1", "d2"]),
                moorings: pool(&["m1"]),
                equipment: pool(&["e1"]),
                deployment_map: [("1", vec![0, 1]), ("2", vec![])].into_iter().collect(),
                mooring_map: [("d1", vec![0])].into_iter().collect(),
                equipment_map: [("m1", vec![0])].into_iter().collect(),
            },
            level: Some(OwnershipLevel::Deployment),
            initial: CascadeState {
                organization: "1".into(),
                deployment: "d1".into(),
                ..CascadeState::default()
            },
            mount: "cascade_fields".into(),
        }
    }

    #[test]
    fn test_level_switch_reruns_organization_cascade() {
        let vm = CascadeFormViewModel::new(section());
        vm.select_command(CascadeField::Deployment, "d2".into());
        assert_eq!(vm.value(CascadeField::Deployment), "d2");
        assert_eq!(vm.value(CascadeField::Mooring), "");

        vm.change_level_command("mooring_equipment".into());
        assert_eq!(vm.level.get(), Some(OwnershipLevel::MooringEquipment));
        assert_eq!(vm.value(CascadeField::Organization), "1");
        assert_eq!(vm.value(CascadeField::Deployment), "d1");
        assert_eq!(vm.value(CascadeField::Mooring), "m1");
        assert_eq!(vm.value(CascadeField::Equipment), "e1");
        for field in CascadeField::ALL {
            assert!(vm.policy(field).visible && vm.policy(field).required);
        }
    }

    #[test]
    fn test_unowned_hides_and_unrequires_all_fields() {
        let vm = CascadeFormViewModel::new(section());
        vm.change_level_command("unowned".into());
        for field in CascadeField::ALL {
            let policy = vm.policy(field);
            assert!(!policy.visible);
            assert!(!policy.required);
        }
    }

    #[test]
    fn test_unknown_level_is_ignored() {
        let vm = CascadeFormViewModel::new(section());
        vm.change_level_command("everything".into());
        assert_eq!(vm.level.get(), Some(OwnershipLevel::Deployment));
    }

    #[test]
    fn test_organization_without_deployments_leaves_children_empty() {
        let vm = CascadeFormViewModel::new(section());
        vm.select_command(CascadeField::Organization, "2".into());
        assert!(vm.options(CascadeField::Deployment).is_empty());
        assert_eq!(vm.value(CascadeField::Deployment), "");
        assert_eq!(vm.value(CascadeField::Equipment), "");
    }
}
