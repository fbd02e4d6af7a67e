use once_cell::sync::Lazy;
use schemars::generate::SchemaSettings;
use serde_json::Value;

use crate::models::domain::AnalysisResult;

static ANALYSIS_RESPONSE_SCHEMA: Lazy<Value> = Lazy::new(|| {
    let generator = SchemaSettings::draft2020_12()
        .with(|settings| settings.inline_subschemas = true)
        .into_generator();
    let mut schema = generator.into_root_schema_for::<AnalysisResult>().to_value();
    strip_unsupported_keywords(&mut schema);
    schema
});

/// JSON schema for the structured output demanded of the generation backend.
pub fn analysis_response_schema() -> &'static Value {
    &ANALYSIS_RESPONSE_SCHEMA
}

// The backend rejects meta keywords and Rust integer formats such as "int64".
fn strip_unsupported_keywords(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.remove("$schema");
            if map.get("format").is_some_and(Value::is_string) {
                map.remove("format");
            }
            map.values_mut().for_each(strip_unsupported_keywords);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_unsupported_keywords),
        _ => {}
    }
}
