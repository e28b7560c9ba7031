use std::fmt;

/// Color given to every product before a factory or caller repaints it
pub const DEFAULT_COLOR: &str = "black";

/// Product family enumeration
///
/// The family decides which formula defaults a variant falls back to and
/// which factory is allowed to build it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProductFamily {
    /// Three-sided polygons
    Triangle,
    /// Four-sided polygons
    Quadrilateral,
}

impl ProductFamily {
    /// All families, in declaration order
    pub const ALL: [ProductFamily; 2] = [ProductFamily::Triangle, ProductFamily::Quadrilateral];

    /// Singular family name
    pub fn name(&self) -> &'static str {
        match self {
            ProductFamily::Triangle => "Triangle",
            ProductFamily::Quadrilateral => "Quadrilateral",
        }
    }

    /// Plural family label ("Triangles", "Quadrilaterals")
    pub fn plural(&self) -> &'static str {
        match self {
            ProductFamily::Triangle => "Triangles",
            ProductFamily::Quadrilateral => "Quadrilaterals",
        }
    }
}

impl fmt::Display for ProductFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mutable per-instance state shared by every product
///
/// Identity (kind and family) lives on the variant type; only the finish
/// applied by factories and callers lives here. State is only created by
/// factories, so products cannot be built outside a manufacture call:
///
/// ```compile_fail
/// let state = polyfab::ProductState::manufactured_by("NotAFactory");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductState {
    pub(crate) color: String,
    pub(crate) manufactured_by: String,
}

impl ProductState {
    /// Create state for a product built by the named factory
    pub(crate) fn manufactured_by(factory_name: &str) -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            manufactured_by: factory_name.to_string(),
        }
    }

    /// Current color
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Name of the factory that built the product
    pub fn manufacturer(&self) -> &str {
        &self.manufactured_by
    }
}
