use crate::core::errors::FactoryError;
use crate::core::factories::traits::PolygonFactory;
use crate::core::products::variants::{
    ConvexQuadrilateral, Equilateral, Isosceles, Rectangle, Scalene, Square,
};

crate::polygon_factory! {
    /// Builds equilateral, isosceles and scalene triangles
    pub struct TriangleFactory {
        family: Triangle,
        variants: [Equilateral, Isosceles, Scalene],
    }
}

crate::polygon_factory! {
    /// Builds squares, rectangles and convex quadrilaterals
    pub struct QuadrilateralFactory {
        family: Quadrilateral,
        variants: [Square, Rectangle, ConvexQuadrilateral],
    }
}

/// Look up a built-in factory by label
///
/// Accepts the family name or the factory type name, case-insensitively.
pub fn factory_for(label: &str) -> Result<Box<dyn PolygonFactory>, FactoryError> {
    match label.trim().to_ascii_lowercase().as_str() {
        "triangle" | "triangles" | "trianglefactory" => Ok(Box::new(TriangleFactory)),
        "quadrilateral" | "quadrilaterals" | "quadrilateralfactory" => {
            Ok(Box::new(QuadrilateralFactory))
        }
        _ => Err(FactoryError::InvalidRequest(format!(
            "no factory matches '{}'",
            label
        ))),
    }
}
