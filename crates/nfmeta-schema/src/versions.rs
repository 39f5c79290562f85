pub const SCHEMA_WORKFLOW_0_0_1: &str = "nfmeta-workflow/0.0.1";
