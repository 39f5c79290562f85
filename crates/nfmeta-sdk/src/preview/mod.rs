use crate::model::{ParameterDescriptor, PathParamKind, WorkflowMetadata};

/// Plain-text preview of the form a hosting platform would generate.
pub fn render_form_text(metadata: &WorkflowMetadata) -> String {
    let resources = metadata.runtime_resources();
    let mut lines = Vec::<String>::new();
    lines.push(metadata.display_name().to_string());
    lines.push(format!("author: {}", render_author(metadata)));
    lines.push(format!(
        "resources: cpus={} memory={}GiB storage={}GiB",
        resources.cpus, resources.memory_gib, resources.storage_gib
    ));
    lines.push(format!("log_dir: {}", metadata.log_dir()));

    for section in metadata.parameters().sections() {
        lines.push(String::new());
        lines.push(format!("[{}]", section.title.unwrap_or("Parameters")));
        for param in section.params {
            lines.push(format!("- {} ({})", param.key, render_type(param)));
            if !param.description.is_empty() {
                lines.push(format!("    {}", param.description));
            }
        }
    }

    lines.join("\n")
}

fn render_author(metadata: &WorkflowMetadata) -> String {
    let author = metadata.author();
    let mut out = author.name.clone();
    if let Some(email) = &author.email {
        out.push_str(&format!(" <{email}>"));
    }
    if let Some(github) = &author.github {
        out.push_str(&format!(" {github}"));
    }
    out
}

fn render_type(param: &ParameterDescriptor) -> String {
    let mut parts = vec![param.param_type.label().to_string()];
    match param.param_type.path_kind() {
        Some(PathParamKind::Input) => parts.push("input".to_string()),
        Some(PathParamKind::Output) => parts.push("output".to_string()),
        None => {}
    }
    match &param.default {
        Some(default) => parts.push(format!("default={default}")),
        None => parts.push("required".to_string()),
    }
    parts.join(", ")
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
