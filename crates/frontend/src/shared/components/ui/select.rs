use leptos::prelude::*;

/// Select component with label and placeholder support
///
/// `id` doubles as the `name` attribute so the surrounding server form
/// receives the value under the same key.
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// ID and name of the select element
    #[prop(into)]
    id: String,
    /// Current value; empty selects the placeholder
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Label of the empty first entry; `None` renders no placeholder
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// Required attribute
    #[prop(optional, into)]
    required: Signal<bool>,
    /// Hides the whole group with `hidden_class`
    #[prop(optional, into)]
    hidden: Signal<bool>,
    #[prop(optional, into)]
    hidden_class: String,
) -> impl IntoView {
    let label_for = id.clone();
    let group_class = move || {
        if hidden.get() && !hidden_class.is_empty() {
            format!("form__group {}", hidden_class)
        } else {
            "form__group".to_string()
        }
    };

    view! {
        <div class=group_class>
            {move || label.get().map(|l| view! {
                <label class="form__label" for=label_for.clone()>
                    {l}
                </label>
            })}
            <select
                id=id.clone()
                name=id
                class="form__select"
                required=move || required.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {placeholder.map(|text| view! {
                    <option value="" prop:selected=move || value.get().is_empty()>
                        {text}
                    </option>
                })}
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val prop:selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
