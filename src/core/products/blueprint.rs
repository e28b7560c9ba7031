use crate::core::errors::FactoryError;
use crate::core::products::family::FamilyDefaults;
use crate::core::products::traits::Polygon;
use crate::core::types::{ProductFamily, ProductState};
use std::sync::Arc;

/// Runtime description of an extra variant
///
/// Built-in variants are checked by the compiler; blueprints are checked by
/// [`ProductBlueprint::finish`] when they are registered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductBlueprint {
    kind: String,
    family: Option<ProductFamily>,
    perimeter: Option<String>,
    area: Option<String>,
}

impl ProductBlueprint {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            ..Self::default()
        }
    }

    pub fn with_family(mut self, family: ProductFamily) -> Self {
        self.family = Some(family);
        self
    }

    pub fn with_perimeter(mut self, formula: &str) -> Self {
        self.perimeter = Some(formula.to_string());
        self
    }

    pub fn with_area(mut self, formula: &str) -> Self {
        self.area = Some(formula.to_string());
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Resolve the blueprint into a complete variant spec
    ///
    /// Without a family there are no defaults to fall back on, so every
    /// missing capability is reported at once.
    pub fn finish(self) -> Result<VariantSpec, FactoryError> {
        if self.kind.trim().is_empty() {
            return Err(FactoryError::IncompleteImplementation(
                "blueprint has no variant kind".to_string(),
            ));
        }

        let family = match self.family {
            Some(family) => family,
            None => {
                let mut missing = vec!["family"];
                if self.perimeter.is_none() {
                    missing.push("perimeter");
                }
                if self.area.is_none() {
                    missing.push("area");
                }
                return Err(FactoryError::IncompleteImplementation(format!(
                    "variant '{}' does not provide {}",
                    self.kind,
                    missing.join(", ")
                )));
            }
        };

        let defaults = FamilyDefaults::for_family(family);
        Ok(VariantSpec {
            kind: self.kind,
            family,
            perimeter: self.perimeter.unwrap_or_else(|| defaults.perimeter.to_string()),
            area: self.area.unwrap_or_else(|| defaults.area.to_string()),
        })
    }
}

/// Complete, validated variant description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSpec {
    pub kind: String,
    pub family: ProductFamily,
    pub perimeter: String,
    pub area: String,
}

/// Product built from a registered blueprint
#[derive(Debug, Clone)]
pub struct CustomPolygon {
    spec: Arc<VariantSpec>,
    state: ProductState,
}

impl CustomPolygon {
    pub(crate) fn new(spec: Arc<VariantSpec>, state: ProductState) -> Self {
        Self { spec, state }
    }
}

impl Polygon for CustomPolygon {
    fn kind(&self) -> &str {
        &self.spec.kind
    }

    fn family(&self) -> ProductFamily {
        self.spec.family
    }

    fn perimeter(&self) -> &str {
        &self.spec.perimeter
    }

    fn area(&self) -> &str {
        &self.spec.area
    }

    fn color(&self) -> &str {
        &self.state.color
    }

    fn set_color(&mut self, color: &str) {
        self.state.color = color.to_string();
    }

    fn manufactured_by(&self) -> &str {
        &self.state.manufactured_by
    }

    fn set_manufactured_by(&mut self, factory_name: &str) {
        self.state.manufactured_by = factory_name.to_string();
    }

    fn hierarchy(&self) -> Vec<&str> {
        vec![
            self.spec.kind.as_str(),
            std::any::type_name::<Self>(),
            self.spec.family.name(),
            "Polygon",
        ]
    }
}
