use crate::domain::common::{OptionPool, SelectOption};

/// Values of the primary organization selector followed by the additional ones.
///
/// Index 0 is `organization_id` and is never removed; index `i > 0` is
/// rendered as `organization_id{i}` inside `#additionalOrganizations`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationFieldList {
    values: Vec<String>,
}

impl Default for OrganizationFieldList {
    fn default() -> Self {
        Self {
            values: vec![String::new()],
        }
    }
}

impl OrganizationFieldList {
    /// Build from initial values; an empty list still gets the primary selector.
    pub fn new(values: Vec<String>) -> Self {
        if values.is_empty() {
            Self::default()
        } else {
            Self { values }
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn additional_count(&self) -> usize {
        self.values.len() - 1
    }

    /// Element id/name of the selector at `index`
    pub fn element_id(index: usize) -> String {
        if index == 0 {
            "organization_id".to_string()
        } else {
            format!("organization_id{}", index)
        }
    }

    /// A new selector only makes sense while the pool has more entries than selectors.
    pub fn can_add(&self, pool: &OptionPool) -> bool {
        pool.len() > self.values.len()
    }

    /// Append a selector on the placeholder. Returns `false` when nothing was added.
    pub fn add(&mut self, pool: &OptionPool) -> bool {
        if !self.can_add(pool) {
            return false;
        }
        self.values.push(String::new());
        true
    }

    /// Remove the most recently added selector, returning its value.
    pub fn remove_last(&mut self) -> Option<String> {
        if self.values.len() > 1 {
            self.values.pop()
        } else {
            None
        }
    }

    pub fn set(&mut self, index: usize, value: String) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value;
        }
    }

    fn chosen_elsewhere(&self, index: usize, value: &str) -> bool {
        self.values
            .iter()
            .enumerate()
            .any(|(i, v)| i != index && !v.is_empty() && v == value)
    }

    /// Pool options not chosen by any other selector, plus this selector's own choice,
    /// in pool order.
    pub fn options_for(&self, index: usize, pool: &OptionPool) -> Vec<SelectOption> {
        pool.iter()
            .filter(|o| !self.chosen_elsewhere(index, &o.value))
            .cloned()
            .collect()
    }
}
