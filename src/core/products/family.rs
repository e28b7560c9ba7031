use crate::core::types::ProductFamily;

/// Formula defaults shared by every variant of a family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyDefaults {
    pub perimeter: &'static str,
    pub area: &'static str,
}

impl FamilyDefaults {
    pub const TRIANGLE: FamilyDefaults = FamilyDefaults {
        perimeter: "a+b+c",
        area: "base*height/2",
    };

    pub const QUADRILATERAL: FamilyDefaults = FamilyDefaults {
        perimeter: "a+b+c+d",
        area: "Bretschneider's formula",
    };

    /// Look up the defaults for a family
    pub const fn for_family(family: ProductFamily) -> FamilyDefaults {
        match family {
            ProductFamily::Triangle => Self::TRIANGLE,
            ProductFamily::Quadrilateral => Self::QUADRILATERAL,
        }
    }
}
