pub mod macros;
pub mod core;

// Re-export commonly used types
pub use crate::core::batch::{request_batch, request_batch_with, Factories, Product};
pub use crate::core::config::{BatchConfig, ConcurrencyMode};
pub use crate::core::errors::FactoryError;
pub use crate::core::factories::{
    factory_for, CatalogFactory, FactoryDescriptor, PolygonFactory, QuadrilateralFactory,
    TriangleFactory,
};
pub use crate::core::products::{Polygon, ProductBlueprint, Shape};
pub use crate::core::registry::VariantRegistry;
pub use crate::core::render::{render_batch, render_product, render_product_with, RenderOptions};
pub use crate::core::types::{ProductFamily, ProductState, DEFAULT_COLOR};
