//! Built-in product variants
//!
//! Each variant overrides only the formulas that differ from its family.

crate::polygon_variant! {
    /// Triangle with three equal sides
    pub struct Equilateral, "Equilateral", {
        family: Triangle,
        perimeter: "3a",
    }
}

crate::polygon_variant! {
    /// Triangle with two equal sides
    pub struct Isosceles, "Isosceles", {
        family: Triangle,
        perimeter: "2a+b",
    }
}

crate::polygon_variant! {
    pub struct Scalene, "Scalene", {
        family: Triangle,
    }
}

crate::polygon_variant! {
    pub struct Square, "Square", {
        family: Quadrilateral,
        perimeter: "4a",
        area: "a*a",
    }
}

crate::polygon_variant! {
    pub struct Rectangle, "Rectangle", {
        family: Quadrilateral,
        perimeter: "2a+2b",
        area: "base*height",
    }
}

crate::polygon_variant! {
    /// General convex quadrilateral, uses the family formulas
    pub struct ConvexQuadrilateral, "ConvexQuadrilateral", {
        family: Quadrilateral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::products::traits::{Polygon, Shape};
    use crate::core::types::{ProductFamily, ProductState};

    fn build<T: Shape>() -> T {
        T::from_state(ProductState::manufactured_by("TestFactory"))
    }

    #[test]
    fn test_equilateral_overrides_perimeter_only() {
        let triangle = build::<Equilateral>();
        assert_eq!(triangle.perimeter(), "3a");
        assert_eq!(triangle.area(), "base*height/2");
        assert_eq!(triangle.family(), ProductFamily::Triangle);
    }

    #[test]
    fn test_scalene_uses_family_defaults() {
        let triangle = build::<Scalene>();
        assert_eq!(triangle.perimeter(), "a+b+c");
        assert_eq!(triangle.area(), "base*height/2");
    }

    #[test]
    fn test_quadrilateral_overrides() {
        let square = build::<Square>();
        assert_eq!(square.perimeter(), "4a");
        assert_eq!(square.area(), "a*a");

        let rectangle = build::<Rectangle>();
        assert_eq!(rectangle.perimeter(), "2a+2b");
        assert_eq!(rectangle.area(), "base*height");

        let convex = build::<ConvexQuadrilateral>();
        assert_eq!(convex.perimeter(), "a+b+c+d");
        assert_eq!(convex.area(), "Bretschneider's formula");
        assert_eq!(convex.family(), ProductFamily::Quadrilateral);
    }

    #[test]
    fn test_describe_default_equilateral() {
        let triangle = build::<Equilateral>();
        assert_eq!(
            triangle.describe(),
            "black Equilateral manufactured by TestFactory (perimeter: 3a; area: base*height/2)"
        );
    }

    #[test]
    fn test_color_and_manufacturer_are_mutable() {
        let mut square = build::<Square>();
        square.set_color("red");
        square.set_manufactured_by("Workshop");
        assert_eq!(square.color(), "red");
        assert_eq!(square.manufactured_by(), "Workshop");
        assert_eq!(square.kind(), "Square");
    }

    #[test]
    fn test_hierarchy_chain() {
        let isosceles = build::<Isosceles>();
        let chain = isosceles.hierarchy();
        assert_eq!(chain.len(), 3);
        assert!(chain[0].ends_with("Isosceles"));
        assert_eq!(chain[1], "Triangle");
        assert_eq!(chain[2], "Polygon");
    }
}
