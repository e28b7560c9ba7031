use crate::core::errors::FactoryError;
use crate::core::factories::descriptor::FactoryDescriptor;
use crate::core::factories::traits::PolygonFactory;
use crate::core::registry::VariantRegistry;
use crate::core::types::ProductFamily;
use log::info;
use std::sync::Arc;

/// Factory described at runtime by a [`FactoryDescriptor`]
///
/// The descriptor is validated against the registry when the factory is
/// created, so a catalog factory never fails on an empty or unknown list.
#[derive(Debug, Clone)]
pub struct CatalogFactory {
    descriptor: FactoryDescriptor,
    registry: Arc<VariantRegistry>,
}

impl CatalogFactory {
    pub fn new(
        descriptor: FactoryDescriptor,
        registry: Arc<VariantRegistry>,
    ) -> Result<Self, FactoryError> {
        registry.validate_descriptor(&descriptor)?;
        info!(
            "Created catalog factory '{}' for {} ({} variants)",
            descriptor.factory_name,
            descriptor.family.plural(),
            descriptor.buildable_variants.len()
        );
        Ok(Self {
            descriptor,
            registry,
        })
    }
}

impl PolygonFactory for CatalogFactory {
    fn name(&self) -> &str {
        &self.descriptor.factory_name
    }

    fn family(&self) -> ProductFamily {
        self.descriptor.family
    }

    fn buildable_variants(&self) -> Vec<&str> {
        self.descriptor
            .buildable_variants
            .iter()
            .map(String::as_str)
            .collect()
    }

    fn default_color(&self) -> &str {
        &self.descriptor.default_color
    }

    fn registry(&self) -> &VariantRegistry {
        &self.registry
    }

    fn descriptor(&self) -> FactoryDescriptor {
        self.descriptor.clone()
    }
}
