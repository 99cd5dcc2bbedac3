use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    pub logging: LoggingSettings,
    pub page: PageSettings,
    pub forms: FormSettings,
    pub tables: TableSettings,
    pub maps: MapSettings,
    pub layout: LayoutSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `log` level name: error, warn, info, debug, trace
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSettings {
    /// id of the `<script type="application/json">` element holding the page data
    pub data_element_id: String,
    /// Class that hides an element (Bootstrap `d-none`)
    pub hidden_class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSettings {
    /// Label of the empty first entry of every select
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSettings {
    pub highlight_class: String,
    pub selectable_class: String,
    pub selected_class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSettings {
    /// roadmap | satellite | hybrid | terrain
    pub map_type_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSettings {
    pub navbar_id: String,
    pub banner_id: String,
    pub contents_id: String,
    pub resize_debounce_ms: u32,
}

/// Default settings embedded in the bundle
const DEFAULT_SETTINGS: &str = r#"
[logging]
level = "debug"

[page]
data_element_id = "page-data"
hidden_class = "d-none"

[forms]
placeholder = "Choose..."

[tables]
highlight_class = "highlight"
selectable_class = "selectable"
selected_class = "selected"

[maps]
map_type_id = "roadmap"

[layout]
navbar_id = "navbar"
banner_id = "banner"
contents_id = "contents"
resize_debounce_ms = 100
"#;

/// Load settings: embedded defaults, then the page's `settings` object merged on top.
///
/// Overrides may be partial, e.g. `{"forms": {"placeholder": "Select..."}}`.
pub fn load_settings(overrides: Option<&Value>) -> anyhow::Result<UiSettings> {
    let defaults: UiSettings = toml::from_str(DEFAULT_SETTINGS)?;
    let Some(overrides) = overrides else {
        return Ok(defaults);
    };
    let mut merged = serde_json::to_value(&defaults)?;
    merge(&mut merged, overrides);
    Ok(serde_json::from_value(merged)?)
}

impl Default for UiSettings {
    /// Same values as the embedded document; used when loading fails.
    fn default() -> Self {
        Self {
            logging: LoggingSettings {
                level: "debug".to_string(),
            },
            page: PageSettings {
                data_element_id: "page-data".to_string(),
                hidden_class: "d-none".to_string(),
            },
            forms: FormSettings {
                placeholder: "Choose...".to_string(),
            },
            tables: TableSettings {
                highlight_class: "highlight".to_string(),
                selectable_class: "selectable".to_string(),
                selected_class: "selected".to_string(),
            },
            maps: MapSettings {
                map_type_id: "roadmap".to_string(),
            },
            layout: LayoutSettings {
                navbar_id: "navbar".to_string(),
                banner_id: "banner".to_string(),
                contents_id: "contents".to_string(),
                resize_debounce_ms: 100,
            },
        }
    }
}

fn merge(base: &mut Value, overrides: &Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (slot, value) => *slot = value.clone(),
    }
}
