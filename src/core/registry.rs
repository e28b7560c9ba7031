use crate::core::errors::FactoryError;
use crate::core::factories::descriptor::FactoryDescriptor;
use crate::core::products::blueprint::{CustomPolygon, ProductBlueprint};
use crate::core::products::traits::{Polygon, Shape};
use crate::core::products::variants::{
    ConvexQuadrilateral, Equilateral, Isosceles, Rectangle, Scalene, Square,
};
use crate::core::types::{ProductFamily, ProductState};
use log::{debug, warn};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Builds a product around freshly manufactured state
pub type Constructor = Arc<dyn Fn(ProductState) -> Box<dyn Polygon> + Send + Sync>;

/// Registered variant: its family plus the function that builds it
#[derive(Clone)]
pub struct VariantEntry {
    family: ProductFamily,
    constructor: Constructor,
}

impl VariantEntry {
    fn of<T: Shape>() -> Self {
        Self {
            family: T::FAMILY,
            constructor: Arc::new(|state| Box::new(T::from_state(state)) as Box<dyn Polygon>),
        }
    }

    pub fn family(&self) -> ProductFamily {
        self.family
    }
}

/// Maps variant kinds to their constructors
///
/// Factories look variants up here by name. The built-in registry is
/// populated once per process; custom registries can add blueprints.
pub struct VariantRegistry {
    variants: HashMap<String, VariantEntry>,
}

static BUILTIN: OnceLock<VariantRegistry> = OnceLock::new();

impl VariantRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            variants: HashMap::new(),
        }
    }

    /// Create a registry holding the six built-in variants
    pub fn with_builtin_variants() -> Self {
        let variants = [
            (Equilateral::KIND, VariantEntry::of::<Equilateral>()),
            (Isosceles::KIND, VariantEntry::of::<Isosceles>()),
            (Scalene::KIND, VariantEntry::of::<Scalene>()),
            (Square::KIND, VariantEntry::of::<Square>()),
            (Rectangle::KIND, VariantEntry::of::<Rectangle>()),
            (ConvexQuadrilateral::KIND, VariantEntry::of::<ConvexQuadrilateral>()),
        ]
        .into_iter()
        .map(|(kind, entry)| (kind.to_string(), entry))
        .collect();

        Self { variants }
    }

    /// Shared built-in registry, initialised on first use
    pub fn builtin() -> &'static VariantRegistry {
        BUILTIN.get_or_init(|| {
            debug!("Initialising built-in variant registry");
            VariantRegistry::with_builtin_variants()
        })
    }

    /// Register a compile-time variant
    pub fn register<T: Shape>(&mut self) -> Result<(), FactoryError> {
        self.insert(T::KIND.to_string(), VariantEntry::of::<T>())
    }

    /// Validate and register a runtime blueprint
    pub fn register_blueprint(&mut self, blueprint: ProductBlueprint) -> Result<(), FactoryError> {
        let spec = blueprint.finish().map_err(|err| {
            warn!("Rejected blueprint ({}): {}", err.kind(), err);
            err
        })?;
        let kind = spec.kind.clone();
        let family = spec.family;
        let spec = Arc::new(spec);

        let entry = VariantEntry {
            family,
            constructor: Arc::new(move |state| {
                Box::new(CustomPolygon::new(Arc::clone(&spec), state)) as Box<dyn Polygon>
            }),
        };
        self.insert(kind, entry)
    }

    fn insert(&mut self, kind: String, entry: VariantEntry) -> Result<(), FactoryError> {
        if self.variants.contains_key(&kind) {
            let err = FactoryError::DuplicateVariant(kind);
            warn!("Rejected variant ({}): {}", err.kind(), err);
            return Err(err);
        }
        debug!("Registered variant '{}' ({})", kind, entry.family);
        self.variants.insert(kind, entry);
        Ok(())
    }

    /// Construct a variant by kind
    pub fn create(
        &self,
        kind: &str,
        state: ProductState,
    ) -> Result<Box<dyn Polygon>, FactoryError> {
        let entry = self
            .variants
            .get(kind)
            .ok_or_else(|| FactoryError::UnknownVariant(kind.to_string()))?;
        Ok((entry.constructor)(state))
    }

    /// Check if a variant kind is registered
    pub fn has_variant(&self, kind: &str) -> bool {
        self.variants.contains_key(kind)
    }

    /// Get the family of a registered variant
    pub fn family_of(&self, kind: &str) -> Option<ProductFamily> {
        self.variants.get(kind).map(VariantEntry::family)
    }

    /// All registered kinds, sorted
    pub fn variant_kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.variants.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Registered kinds of one family, sorted
    pub fn variants_in_family(&self, family: ProductFamily) -> Vec<&str> {
        let mut kinds: Vec<&str> = self
            .variants
            .iter()
            .filter(|(_, entry)| entry.family == family)
            .map(|(kind, _)| kind.as_str())
            .collect();
        kinds.sort_unstable();
        kinds
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Check a factory descriptor against this registry
    ///
    /// The buildable list must be non-empty, every kind must be registered,
    /// and every kind must belong to the descriptor's family.
    pub fn validate_descriptor(&self, descriptor: &FactoryDescriptor) -> Result<(), FactoryError> {
        if descriptor.buildable_variants.is_empty() {
            return Err(FactoryError::IncompleteImplementation(format!(
                "factory '{}' declares no buildable variants",
                descriptor.factory_name
            )));
        }

        for kind in &descriptor.buildable_variants {
            let family = self
                .family_of(kind)
                .ok_or_else(|| FactoryError::UnknownVariant(kind.clone()))?;
            if family != descriptor.family {
                return Err(FactoryError::FamilyMismatch {
                    variant: kind.clone(),
                    expected: descriptor.family,
                    found: family,
                });
            }
        }

        Ok(())
    }
}

impl Default for VariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VariantRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantRegistry")
            .field("variants", &self.variant_kinds())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::polygon_variant! {
        struct Kite, "Kite", {
            family: Quadrilateral,
            area: "p*q/2",
        }
    }

    #[test]
    fn test_builtin_registry_contents() {
        let registry = VariantRegistry::builtin();
        assert_eq!(registry.len(), 6);
        assert_eq!(
            registry.variants_in_family(ProductFamily::Triangle),
            vec!["Equilateral", "Isosceles", "Scalene"]
        );
        assert_eq!(
            registry.variants_in_family(ProductFamily::Quadrilateral),
            vec!["ConvexQuadrilateral", "Rectangle", "Square"]
        );
    }

    #[test]
    fn test_create_tags_manufacturer() {
        let registry = VariantRegistry::with_builtin_variants();
        let polygon = registry
            .create("Square", ProductState::manufactured_by("QuadrilateralFactory"))
            .unwrap();
        assert_eq!(polygon.kind(), "Square");
        assert_eq!(polygon.manufactured_by(), "QuadrilateralFactory");
    }

    #[test]
    fn test_create_unknown_variant() {
        let registry = VariantRegistry::with_builtin_variants();
        let err = registry
            .create("Pentagon", ProductState::manufactured_by("Nobody"))
            .unwrap_err();
        assert_eq!(err, FactoryError::UnknownVariant("Pentagon".to_string()));
    }

    #[test]
    fn test_register_compile_time_variant() {
        let mut registry = VariantRegistry::new();
        assert!(registry.is_empty());
        registry.register::<Kite>().unwrap();
        assert_eq!(registry.family_of("Kite"), Some(ProductFamily::Quadrilateral));

        let kite = registry
            .create("Kite", ProductState::manufactured_by("KiteWorks"))
            .unwrap();
        assert_eq!(kite.perimeter(), "a+b+c+d");
        assert_eq!(kite.area(), "p*q/2");
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = VariantRegistry::with_builtin_variants();
        let err = registry.register::<Equilateral>().unwrap_err();
        assert_eq!(err, FactoryError::DuplicateVariant("Equilateral".to_string()));

        let err = registry
            .register_blueprint(
                ProductBlueprint::new("Square").with_family(ProductFamily::Quadrilateral),
            )
            .unwrap_err();
        assert_eq!(err, FactoryError::DuplicateVariant("Square".to_string()));
    }

    #[test]
    fn test_incomplete_blueprint_not_registered() {
        let mut registry = VariantRegistry::new();
        let err = registry
            .register_blueprint(ProductBlueprint::new("Mystery"))
            .unwrap_err();
        assert!(matches!(err, FactoryError::IncompleteImplementation(_)));
        assert!(!registry.has_variant("Mystery"));
    }

    #[test]
    fn test_validate_descriptor() {
        let registry = VariantRegistry::with_builtin_variants();

        let ok = FactoryDescriptor::new("Tri", ProductFamily::Triangle, &["Scalene"]);
        assert!(registry.validate_descriptor(&ok).is_ok());

        let empty = FactoryDescriptor::new("Empty", ProductFamily::Triangle, &[]);
        assert!(matches!(
            registry.validate_descriptor(&empty),
            Err(FactoryError::IncompleteImplementation(_))
        ));

        let unknown = FactoryDescriptor::new("Odd", ProductFamily::Triangle, &["Pentagon"]);
        assert_eq!(
            registry.validate_descriptor(&unknown),
            Err(FactoryError::UnknownVariant("Pentagon".to_string()))
        );

        let mixed =
            FactoryDescriptor::new("Mixed", ProductFamily::Triangle, &["Scalene", "Square"]);
        assert!(matches!(
            registry.validate_descriptor(&mixed),
            Err(FactoryError::FamilyMismatch { .. })
        ));
    }
}
