pub mod builtin;
pub mod catalog;
pub mod descriptor;
pub mod traits;

// Re-export commonly used types
pub use builtin::{factory_for, QuadrilateralFactory, TriangleFactory};
pub use catalog::CatalogFactory;
pub use descriptor::FactoryDescriptor;
pub use traits::PolygonFactory;
