use serde::{Deserialize, Serialize};

/// Один пункт выпадающего списка: (value, label)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// (value, label) tuple as consumed by the `Select` component
    pub fn as_pair(&self) -> (String, String) {
        (self.value.clone(), self.label.clone())
    }
}

impl From<(String, String)> for SelectOption {
    fn from((value, label): (String, String)) -> Self {
        Self { value, label }
    }
}

/// Static list of selectable options for one level of a form.
///
/// Pools are populated once from page data and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionPool(#[serde(deserialize_with = "deserialize_options")] pub Vec<SelectOption>);

impl OptionPool {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self(options)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        self.0.iter()
    }

    pub fn contains_value(&self, value: &str) -> bool {
        self.0.iter().any(|o| o.value == value)
    }

    /// Options at the given indices, in index order. Indices outside the pool are skipped.
    pub fn pick(&self, indices: &[usize]) -> Vec<SelectOption> {
        indices.iter().filter_map(|&i| self.0.get(i).cloned()).collect()
    }
}

/// Options may arrive from the page either as `{"value", "label"}` objects
/// or as `[value, label]` pairs.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawOption {
    Object { value: String, label: String },
    Pair(String, String),
}

fn deserialize_options<'de, D>(deserializer: D) -> Result<Vec<SelectOption>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Vec::<RawOption>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|o| match o {
            RawOption::Object { value, label } => SelectOption { value, label },
            RawOption::Pair(value, label) => SelectOption { value, label },
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_accepts_objects_and_pairs() {
        let pool: OptionPool =
            serde_json::from_str(r#"[{"value": "1", "label": "NOAA"}, ["2", "WHOI"]]"#).unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(0), Some(&SelectOption::new("1", "NOAA")));
        assert_eq!(pool.get(1), Some(&SelectOption::new("2", "WHOI")));
    }

    #[test]
    fn test_pick_skips_out_of_range() {
        let pool = OptionPool::new(vec![
            SelectOption::new("a", "A"),
            SelectOption::new("b", "B"),
        ]);
        let picked = pool.pick(&[1, 5, 0]);
        assert_eq!(picked, vec![SelectOption::new("b", "B"), SelectOption::new("a", "A")]);
    }
}
