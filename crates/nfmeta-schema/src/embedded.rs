/// A JSON Schema compiled into the binary, addressed by its schema id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedSchema {
    pub id: &'static str,
    pub json: &'static str,
}
