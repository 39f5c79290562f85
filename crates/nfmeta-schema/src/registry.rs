use crate::embedded::EmbeddedSchema;
use crate::versions::SCHEMA_WORKFLOW_0_0_1;

const WORKFLOW_SCHEMA: &str = include_str!("../schemas/workflow-0.0.1.schema.json");

pub fn get_json_schema(schema_id: &str) -> Option<EmbeddedSchema> {
    match schema_id {
        SCHEMA_WORKFLOW_0_0_1 => Some(EmbeddedSchema {
            id: SCHEMA_WORKFLOW_0_0_1,
            json: WORKFLOW_SCHEMA,
        }),
        _ => None,
    }
}

pub fn known_schema_ids() -> &'static [&'static str] {
    &[SCHEMA_WORKFLOW_0_0_1]
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
