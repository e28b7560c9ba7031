use crate::core::types::{ProductFamily, DEFAULT_COLOR};

/// Identifies a factory and the variants it may build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryDescriptor {
    pub factory_name: String,
    /// Family every buildable variant must belong to
    pub family: ProductFamily,
    /// Ordered list of variant kinds
    pub buildable_variants: Vec<String>,
    pub default_color: String,
}

impl FactoryDescriptor {
    pub fn new(factory_name: &str, family: ProductFamily, buildable_variants: &[&str]) -> Self {
        Self {
            factory_name: factory_name.to_string(),
            family,
            buildable_variants: buildable_variants.iter().map(|kind| kind.to_string()).collect(),
            default_color: DEFAULT_COLOR.to_string(),
        }
    }

    pub fn with_default_color(mut self, color: &str) -> Self {
        self.default_color = color.to_string();
        self
    }
}
