use super::{get_json_schema, known_schema_ids};
use crate::versions::SCHEMA_WORKFLOW_0_0_1;

#[test]
fn workflow_schema_is_embedded() {
    let schema = get_json_schema(SCHEMA_WORKFLOW_0_0_1).expect("schema must exist");
    assert_eq!(schema.id, SCHEMA_WORKFLOW_0_0_1);
    assert!(schema.json.contains("\"const\": \"nfmeta-workflow/0.0.1\""));
}

#[test]
fn embedded_schemas_are_valid_json() {
    for id in known_schema_ids() {
        let schema = get_json_schema(id).expect("listed schema must exist");
        serde_json::from_str::<serde_json::Value>(schema.json).expect("embedded schema must parse");
    }
}

#[test]
fn unknown_schema_returns_none() {
    assert!(get_json_schema("nfmeta-workflow/9.9.9").is_none());
}
