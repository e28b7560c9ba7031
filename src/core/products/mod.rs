pub mod blueprint;
pub mod family;
pub mod traits;
pub mod variants;

// Re-export commonly used types
pub use blueprint::{CustomPolygon, ProductBlueprint, VariantSpec};
pub use family::FamilyDefaults;
pub use traits::{Polygon, Shape};
pub use variants::{ConvexQuadrilateral, Equilateral, Isosceles, Rectangle, Scalene, Square};
