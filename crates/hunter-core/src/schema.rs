//! Response schemas for the generation backend.
//!
//! The schemas are derived from the result types themselves, so the shape
//! the model is constrained to and the shape the parser expects come from
//! one definition. The derived JSON Schema is rewritten into the Gemini
//! `responseSchema` dialect (upper-case type names, inline objects, no
//! `$ref`, no null unions).

use schemars::gen::SchemaSettings;
use schemars::schema::{InstanceType, Schema, SchemaObject, SingleOrVec};
use schemars::JsonSchema;
use serde_json::{json, Map, Value};

use crate::analysis::model::SeoAnalysisResult;
use crate::post::model::BlogPostResult;

/// Schema for [`SeoAnalysisResult`].
pub fn analysis_schema() -> Value {
    response_schema_for::<SeoAnalysisResult>()
}

/// Schema for [`BlogPostResult`].
pub fn post_schema() -> Value {
    response_schema_for::<BlogPostResult>()
}

/// Build a Gemini response schema for any result type.
pub fn response_schema_for<T: JsonSchema>() -> Value {
    let settings = SchemaSettings::draft07().with(|s| {
        s.option_nullable = false;
        s.option_add_null_type = false;
        s.inline_subschemas = true;
    });
    let root = settings.into_generator().into_root_schema_for::<T>();
    convert(&root.schema)
}

/// Names of the required properties of an object schema, in schema order.
pub fn required_fields(schema: &Value) -> Vec<String> {
    schema["required"]
        .as_array()
        .map(|fields| {
            fields
                .iter()
                .filter_map(|f| f.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn convert(schema: &SchemaObject) -> Value {
    // A described field of struct type may be wrapped in a single-element allOf.
    if let Some(inner) = schema
        .subschemas
        .as_ref()
        .and_then(|s| s.all_of.as_ref())
        .filter(|all| all.len() == 1)
        .and_then(|all| as_object(&all[0]))
    {
        let mut value = convert(inner);
        if let Some(desc) = description(schema) {
            value["description"] = json!(desc);
        }
        return value;
    }

    let mut out = Map::new();

    if let Some(kind) = instance_type(schema) {
        out.insert("type".into(), json!(gemini_type(kind)));
    }
    if let Some(desc) = description(schema) {
        out.insert("description".into(), json!(desc));
    }
    if let Some(values) = &schema.enum_values {
        out.insert("type".into(), json!("STRING"));
        out.insert("enum".into(), Value::Array(values.clone()));
    }

    if let Some(object) = &schema.object {
        let properties: Map<String, Value> = object
            .properties
            .iter()
            .filter_map(|(name, prop)| as_object(prop).map(|p| (name.clone(), convert(p))))
            .collect();
        out.insert("properties".into(), Value::Object(properties));

        let required: Vec<Value> = object.required.iter().map(|r| json!(r)).collect();
        if !required.is_empty() {
            out.insert("required".into(), Value::Array(required));
        }
    }

    if let Some(array) = &schema.array {
        if let Some(SingleOrVec::Single(item)) = &array.items {
            if let Some(item) = as_object(item) {
                out.insert("items".into(), convert(item));
            }
        }
    }

    Value::Object(out)
}

fn as_object(schema: &Schema) -> Option<&SchemaObject> {
    match schema {
        Schema::Object(obj) => Some(obj),
        Schema::Bool(_) => None,
    }
}

fn description(schema: &SchemaObject) -> Option<&str> {
    schema.metadata.as_ref()?.description.as_deref()
}

fn instance_type(schema: &SchemaObject) -> Option<InstanceType> {
    match schema.instance_type.as_ref()? {
        SingleOrVec::Single(kind) => Some(**kind),
        SingleOrVec::Vec(kinds) => kinds.iter().copied().find(|k| *k != InstanceType::Null),
    }
}

fn gemini_type(kind: InstanceType) -> &'static str {
    match kind {
        InstanceType::Object => "OBJECT",
        InstanceType::Array => "ARRAY",
        InstanceType::String => "STRING",
        InstanceType::Integer => "INTEGER",
        InstanceType::Number => "NUMBER",
        InstanceType::Boolean => "BOOLEAN",
        InstanceType::Null => "NULL",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn test_analysis_required_fields() {
        let schema = analysis_schema();
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(
            sorted(required_fields(&schema)),
            sorted(
                [
                    "searchVolume",
                    "competitionRate",
                    "topExposureRecommendation",
                    "nicheKeywords",
                    "seoChecklist",
                    "relatedKeywords",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect()
            )
        );
        for optional in ["mainTheme", "pcSearchVolume", "mobileSearchVolume"] {
            assert!(schema["properties"].get(optional).is_some(), "{} declared", optional);
            assert!(!required_fields(&schema).contains(&optional.to_string()));
        }
    }

    #[test]
    fn test_analysis_nested_shapes() {
        let schema = analysis_schema();
        let props = &schema["properties"];

        assert_eq!(props["searchVolume"]["type"], "INTEGER");
        assert_eq!(props["mainTheme"]["type"], "STRING");

        let exposure = &props["topExposureRecommendation"];
        assert_eq!(exposure["type"], "OBJECT");
        assert_eq!(
            sorted(required_fields(exposure)),
            vec!["reason", "recommendedPostCount", "strategy"]
        );
        let count = &exposure["properties"]["recommendedPostCount"];
        assert_eq!(sorted(required_fields(count)), vec!["max", "min"]);

        let niche = &props["nicheKeywords"];
        assert_eq!(niche["type"], "ARRAY");
        assert_eq!(niche["items"]["type"], "OBJECT");
        assert_eq!(
            sorted(required_fields(&niche["items"])),
            vec!["competitionScore", "keyword", "reason", "searchVolume"]
        );

        let checklist = &props["seoChecklist"]["items"];
        assert_eq!(sorted(required_fields(checklist)), vec!["details", "task"]);

        assert_eq!(props["relatedKeywords"]["items"]["type"], "STRING");
    }

    #[test]
    fn test_competition_rate_enum() {
        let schema = analysis_schema();
        let rate = &schema["properties"]["competitionRate"];
        assert_eq!(rate["type"], "STRING");
        let values = rate["enum"].as_array().unwrap();
        assert_eq!(values.len(), 5);
        assert!(values.contains(&json!("중간")));
    }

    #[test]
    fn test_descriptions_reach_the_schema() {
        let schema = analysis_schema();
        let desc = schema["properties"]["relatedKeywords"]["description"]
            .as_str()
            .unwrap();
        assert!(desc.contains("10-15"));
    }

    #[test]
    fn test_post_schema() {
        let schema = post_schema();
        assert_eq!(sorted(required_fields(&schema)), vec!["content", "tags", "title"]);
        assert_eq!(schema["properties"]["tags"]["type"], "ARRAY");
        assert_eq!(schema["properties"]["tags"]["items"]["type"], "STRING");
    }

    #[test]
    fn test_no_refs_or_null_types() {
        let text = analysis_schema().to_string();
        assert!(!text.contains("$ref"));
        assert!(!text.contains("NULL"));
        assert!(!text.contains("definitions"));
    }
}
