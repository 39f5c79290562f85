use nfmeta_core::{FieldPath, StructuredIssue};
use serde_json::Value;

pub fn parse_json(input: &str) -> Result<Value, Vec<StructuredIssue>> {
    serde_json::from_str::<Value>(input).map_err(|err| {
        vec![StructuredIssue::error(
            "parse_error",
            FieldPath::root(),
            format!("json parse failed at line {} column {}: {err}", err.line(), err.column()),
            "json.parse_error",
        )]
    })
}
