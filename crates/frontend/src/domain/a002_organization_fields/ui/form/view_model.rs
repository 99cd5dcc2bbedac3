use contracts::domain::a002_organization_fields::OrganizationFieldList;
use contracts::domain::common::OptionPool;
use contracts::shared::page_data::OrganizationFieldsSection;
use leptos::prelude::*;

/// ViewModel for the primary organization selector and its additional copies
#[derive(Clone, Copy)]
pub struct OrganizationFieldsViewModel {
    pub pool: StoredValue<OptionPool>,
    pub list: RwSignal<OrganizationFieldList>,
}

impl OrganizationFieldsViewModel {
    pub fn new(section: OrganizationFieldsSection) -> Self {
        let list = section.field_list();
        Self {
            pool: StoredValue::new(section.pool),
            list: RwSignal::new(list),
        }
    }

    pub fn len(&self) -> usize {
        self.list.with(|l| l.len())
    }

    pub fn value(&self, index: usize) -> String {
        self.list
            .with(|l| l.values().get(index).cloned())
            .unwrap_or_default()
    }

    /// Pool entries not chosen by another selector, plus this selector's own choice
    pub fn options(&self, index: usize) -> Vec<(String, String)> {
        self.list.with(|list| {
            self.pool.with_value(|pool| {
                list.options_for(index, pool)
                    .iter()
                    .map(|o| o.as_pair())
                    .collect()
            })
        })
    }

    pub fn can_add(&self) -> bool {
        self.list.with(|list| self.pool.with_value(|pool| list.can_add(pool)))
    }

    pub fn can_remove(&self) -> bool {
        self.list.with(|list| list.additional_count() > 0)
    }

    pub fn add_command(&self) {
        let pool = self.pool;
        self.list.update(|list| {
            if !pool.with_value(|p| list.add(p)) {
                log::debug!("Every organization already has a selector");
            }
        });
    }

    pub fn remove_command(&self) {
        self.list.update(|list| {
            list.remove_last();
        });
    }

    pub fn set_command(&self, index: usize, value: String) {
        self.list.update(|list| list.set(index, value));
    }
}
