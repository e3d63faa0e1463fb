use anyhow::{Context, Result, anyhow};
use schemars::{Schema, schema_for};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Number,
    Boolean,
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

// Return the whole object schema for T
pub fn schema_for<T: schemars::JsonSchema>() -> Schema {
    schema_for!(T)
}

/// Prompt-ready description of every scalar property of an object schema,
/// in declaration order.
pub fn field_specs(root: &Schema) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;
    let obj = resolve_ref_obj(root_obj, root_obj).context("failed to resolve root $ref")?;

    let Some(props) = obj.get("properties").and_then(|v| v.as_object()) else {
        return Ok(vec![]);
    };

    let required: Vec<String> = obj
        .get("required")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    let mut out = Vec::with_capacity(props.len());
    for (name, field_schema) in props {
        let mut fs_obj = field_schema
            .as_object()
            .context("field schema not object")?;

        if fs_obj.get("$ref").is_some() {
            fs_obj = resolve_ref_obj(root_obj, fs_obj)
                .ok_or_else(|| anyhow!("failed to resolve field $ref for '{name}'"))?;
        }

        let title = fs_obj
            .get("title")
            .and_then(|v| v.as_str())
            .unwrap_or(name)
            .to_string();

        let description = fs_obj
            .get("description")
            .and_then(|v| v.as_str())
            .map(str::to_string);

        let default = fs_obj.get("default").cloned();

        let Some(kind) = detect_field_kind(fs_obj.get("type")) else {
            continue;
        };

        let min = fs_obj
            .get("minimum")
            .or_else(|| fs_obj.get("exclusiveMinimum"))
            .and_then(|v| v.as_f64());

        let max = fs_obj
            .get("maximum")
            .or_else(|| fs_obj.get("exclusiveMaximum"))
            .and_then(|v| v.as_f64());

        out.push(FieldSpec {
            name: name.clone(),
            title,
            description,
            required: required.iter().any(|r| r == name),
            kind,
            default,
            min,
            max,
        });
    }

    Ok(out)
}

/// Resolve a local $ref like "#/$defs/GeneratorParameters" against the root object.
/// Returns the referenced object map, or None if it can't be resolved.
fn resolve_ref_obj<'a>(
    root_obj: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    match obj.get("$ref") {
        Some(Value::String(r)) => {
            let path = r.strip_prefix("#/")?;
            let mut cur: &Map<String, Value> = root_obj;
            for raw_seg in path.split('/') {
                // JSON Pointer unescape (~1 => /, ~0 => ~)
                let seg = raw_seg.replace("~1", "/").replace("~0", "~");
                cur = cur.get(&seg)?.as_object()?;
            }
            Some(cur)
        }
        _ => Some(obj),
    }
}

fn detect_field_kind(ty: Option<&Value>) -> Option<FieldKind> {
    let kind_of = |s: &str| match s {
        "string" => Some(FieldKind::String),
        "integer" => Some(FieldKind::Integer),
        "number" => Some(FieldKind::Number),
        "boolean" => Some(FieldKind::Boolean),
        _ => None,
    };
    match ty {
        Some(Value::String(s)) => kind_of(s),
        // handle unions like ["null","integer"] for Option<T>
        Some(Value::Array(arr)) => arr.iter().filter_map(|v| v.as_str()).find_map(kind_of),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::GeneratorParameters;

    fn specs() -> Vec<FieldSpec> {
        field_specs(&schema_for::<GeneratorParameters>()).unwrap()
    }

    #[test]
    fn generator_fields_in_declaration_order() {
        let names: Vec<String> = specs().into_iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "x_mu",
                "x_sigma",
                "theta",
                "alpha_zero",
                "beta_zero",
                "epsilon_zero",
                "alpha_one",
                "beta_one",
                "epsilon_one",
                "data_num",
                "seed"
            ]
        );
    }

    #[test]
    fn kinds_titles_and_bounds() {
        let specs = specs();
        let sigma = specs.iter().find(|s| s.name == "x_sigma").unwrap();
        assert_eq!(sigma.kind, FieldKind::Number);
        assert_eq!(sigma.title, "x sigma");
        assert_eq!(sigma.min, Some(0.0));
        assert!(!sigma.required);

        let seed = specs.iter().find(|s| s.name == "seed").unwrap();
        assert_eq!(seed.kind, FieldKind::Integer);
        assert_eq!(seed.default, Some(Value::from(42u64)));
    }

    #[test]
    fn union_types_resolve_to_the_non_null_kind() {
        let ty = serde_json::json!(["null", "number"]);
        assert_eq!(detect_field_kind(Some(&ty)), Some(FieldKind::Number));
        assert_eq!(detect_field_kind(None), None);
    }
}
