use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::estimators::Method;
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{FieldKind, field_specs, method_items, schema_for};

/// Asks for an estimation method from the menu of every [`Method`].
pub fn prompt_method<D: PromptDriver>(driver: &D) -> Result<Method> {
    let items = method_items();
    let labels: Vec<String> = items.iter().map(ToString::to_string).collect();
    let index = driver.ask_select(
        "Choose an estimation method:",
        "↑/↓ to navigate, ↵ to select",
        &labels,
    )?;
    items
        .get(index)
        .map(|item| item.method)
        .context("selected method index out of range")
}

/// Walks every scalar field of `T`'s schema, proposing the schema default
/// (or `T::default()`'s value) and building `T` from the answers.
pub fn prompt_parameters<T, D>(driver: &D) -> Result<T>
where
    T: JsonSchema + Serialize + DeserializeOwned + Default,
    D: PromptDriver,
{
    let schema = schema_for::<T>();
    let specs = field_specs(&schema)?;
    let defaults = serde_json::to_value(T::default())?;

    let mut params = Map::new();
    for s in specs {
        let init = s.default.clone().or_else(|| defaults.get(&s.name).cloned());
        let help = s.description.as_deref().unwrap_or("");

        let value = match s.kind {
            FieldKind::Boolean => {
                let def = init.and_then(|v| v.as_bool()).unwrap_or(false);
                Value::Bool(driver.ask_bool(&s.title, help, def)?)
            }
            FieldKind::String => {
                let def = init
                    .and_then(|v| v.as_str().map(|s| s.to_string()))
                    .unwrap_or_default();
                Value::String(driver.ask_string(&s.title, help, &def)?)
            }
            FieldKind::Integer => {
                let def = init.and_then(|v| v.as_u64()).unwrap_or(0);
                Value::from(driver.ask_u64(
                    &s.title,
                    help,
                    def,
                    s.min.map(|x| x as u64),
                    s.max.map(|x| x as u64),
                )?)
            }
            FieldKind::Number => {
                let def = init.and_then(|v| v.as_f64()).unwrap_or(0.0);
                Value::from(driver.ask_f64(&s.title, help, def, s.min, s.max)?)
            }
        };
        params.insert(s.name.clone(), value);
    }

    serde_json::from_value(Value::Object(params))
        .context("wizard answers do not form valid parameters")
}
