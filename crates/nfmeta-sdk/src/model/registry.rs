use super::param::ParameterDescriptor;
use crate::validate::validate_parameters;
use nfmeta_core::StructuredIssue;

/// Ordered, immutable mapping from parameter key to descriptor. Insertion
/// order is display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterRegistry {
    params: Vec<ParameterDescriptor>,
}

/// A run of consecutive parameters rendered under one heading.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    pub title: Option<&'a str>,
    pub params: Vec<&'a ParameterDescriptor>,
}

impl ParameterRegistry {
    pub fn builder() -> ParameterRegistryBuilder {
        ParameterRegistryBuilder::default()
    }

    pub fn get(&self, key: &str) -> Option<&ParameterDescriptor> {
        self.params.iter().find(|param| param.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.params.iter().position(|param| param.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|param| param.key.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParameterDescriptor> {
        self.params.iter()
    }

    pub fn as_slice(&self) -> &[ParameterDescriptor] {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Groups parameters for display. A titled parameter opens a new section
    /// and untitled ones join whichever section is open; parameters before the
    /// first title land in a leading section with no title.
    pub fn sections(&self) -> Vec<Section<'_>> {
        let mut sections: Vec<Section<'_>> = Vec::new();
        for param in &self.params {
            if param.section_title.is_none() {
                if let Some(open) = sections.last_mut() {
                    open.params.push(param);
                    continue;
                }
            }
            sections.push(Section {
                title: param.section_title.as_deref(),
                params: vec![param],
            });
        }
        sections
    }
}

impl<'a> IntoIterator for &'a ParameterRegistry {
    type Item = &'a ParameterDescriptor;
    type IntoIter = std::slice::Iter<'a, ParameterDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParameterRegistryBuilder {
    params: Vec<ParameterDescriptor>,
}

impl ParameterRegistryBuilder {
    pub fn param(mut self, descriptor: ParameterDescriptor) -> Self {
        self.params.push(descriptor);
        self
    }

    /// Fails with every issue found when any of them is an error, so a
    /// malformed declaration never yields a partial registry.
    pub fn build(self) -> Result<ParameterRegistry, Vec<StructuredIssue>> {
        let issues = validate_parameters(&self.params);
        if StructuredIssue::has_errors(&issues) {
            return Err(issues);
        }
        Ok(ParameterRegistry {
            params: self.params,
        })
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
