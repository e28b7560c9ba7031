use crate::core::errors::FactoryError;
use crate::core::factories::descriptor::FactoryDescriptor;
use crate::core::products::traits::Polygon;
use crate::core::registry::VariantRegistry;
use crate::core::types::{ProductFamily, ProductState, DEFAULT_COLOR};
use log::debug;
use rand::seq::SliceRandom;
use rand::RngCore;

/// Capability set every factory exposes
///
/// Factories are stateless: a factory is fully described by its name, its
/// family and its buildable list, so any number of them may be used from
/// any thread.
pub trait PolygonFactory: Send + Sync {
    /// Name stamped on every product this factory builds
    fn name(&self) -> &str;

    /// Family this factory is declared to produce
    fn family(&self) -> ProductFamily;

    /// Variant kinds this factory may build, in a fixed order
    ///
    /// Must be non-empty; an empty list fails on first use.
    fn buildable_variants(&self) -> Vec<&str>;

    /// Informational default color
    fn default_color(&self) -> &str {
        DEFAULT_COLOR
    }

    /// Registry used to resolve variant kinds
    fn registry(&self) -> &VariantRegistry {
        VariantRegistry::builtin()
    }

    /// Build one product, picked uniformly at random from the buildable list
    ///
    /// Selection is with replacement across calls. When `color` is given it
    /// replaces the product's own color.
    fn manufacture(
        &self,
        rng: &mut dyn RngCore,
        color: Option<&str>,
    ) -> Result<Box<dyn Polygon>, FactoryError> {
        let variants = self.buildable_variants();
        let kind = *variants.choose(rng).ok_or_else(|| {
            FactoryError::IncompleteImplementation(format!(
                "factory '{}' declares no buildable variants",
                self.name()
            ))
        })?;

        let mut polygon = self
            .registry()
            .create(kind, ProductState::manufactured_by(self.name()))?;

        if polygon.family() != self.family() {
            return Err(FactoryError::FamilyMismatch {
                variant: kind.to_string(),
                expected: self.family(),
                found: polygon.family(),
            });
        }

        if let Some(color) = color {
            polygon.set_color(color);
        }

        debug!("[{}] Manufactured {}", self.name(), polygon.describe());
        Ok(polygon)
    }

    /// Build one product using the thread-local RNG
    fn make(&self, color: Option<&str>) -> Result<Box<dyn Polygon>, FactoryError> {
        self.manufacture(&mut rand::thread_rng(), color)
    }

    /// Snapshot of this factory's identity
    fn descriptor(&self) -> FactoryDescriptor {
        FactoryDescriptor::new(self.name(), self.family(), &self.buildable_variants())
            .with_default_color(self.default_color())
    }
}

macro_rules! forward_polygon_factory {
    ($($handle:ty),+) => {
        $(
            impl<F: PolygonFactory + ?Sized> PolygonFactory for $handle {
                fn name(&self) -> &str {
                    (**self).name()
                }

                fn family(&self) -> ProductFamily {
                    (**self).family()
                }

                fn buildable_variants(&self) -> Vec<&str> {
                    (**self).buildable_variants()
                }

                fn default_color(&self) -> &str {
                    (**self).default_color()
                }

                fn registry(&self) -> &VariantRegistry {
                    (**self).registry()
                }

                fn manufacture(
                    &self,
                    rng: &mut dyn RngCore,
                    color: Option<&str>,
                ) -> Result<Box<dyn Polygon>, FactoryError> {
                    (**self).manufacture(rng, color)
                }

                fn descriptor(&self) -> FactoryDescriptor {
                    (**self).descriptor()
                }
            }
        )+
    };
}

// Borrowed and boxed handles, including `&dyn PolygonFactory`, are factories too
forward_polygon_factory!(&F, Box<F>);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct EmptyFactory;

    impl PolygonFactory for EmptyFactory {
        fn name(&self) -> &str {
            "EmptyFactory"
        }

        fn family(&self) -> ProductFamily {
            ProductFamily::Triangle
        }

        fn buildable_variants(&self) -> Vec<&str> {
            Vec::new()
        }
    }

    struct PentagonFactory;

    impl PolygonFactory for PentagonFactory {
        fn name(&self) -> &str {
            "PentagonFactory"
        }

        fn family(&self) -> ProductFamily {
            ProductFamily::Quadrilateral
        }

        fn buildable_variants(&self) -> Vec<&str> {
            vec!["Pentagon"]
        }
    }

    struct MislabeledFactory;

    impl PolygonFactory for MislabeledFactory {
        fn name(&self) -> &str {
            "MislabeledFactory"
        }

        fn family(&self) -> ProductFamily {
            ProductFamily::Triangle
        }

        fn buildable_variants(&self) -> Vec<&str> {
            vec!["Square"]
        }

        fn default_color(&self) -> &str {
            "white"
        }
    }

    #[test]
    fn test_empty_buildable_list_is_incomplete() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = EmptyFactory.manufacture(&mut rng, None).unwrap_err();
        assert_eq!(
            err,
            FactoryError::IncompleteImplementation(
                "factory 'EmptyFactory' declares no buildable variants".to_string()
            )
        );
    }

    #[test]
    fn test_unregistered_variant_is_unknown() {
        let err = PentagonFactory.make(None).unwrap_err();
        assert_eq!(err, FactoryError::UnknownVariant("Pentagon".to_string()));
    }

    #[test]
    fn test_wrong_family_is_rejected() {
        let err = MislabeledFactory.make(Some("red")).unwrap_err();
        assert_eq!(
            err,
            FactoryError::FamilyMismatch {
                variant: "Square".to_string(),
                expected: ProductFamily::Triangle,
                found: ProductFamily::Quadrilateral,
            }
        );
    }

    #[test]
    fn test_boxed_handle_forwards_overrides() {
        let boxed: Box<dyn PolygonFactory> = Box::new(MislabeledFactory);
        assert_eq!(boxed.name(), "MislabeledFactory");
        assert_eq!(boxed.default_color(), "white");

        let borrowed: &dyn PolygonFactory = &PentagonFactory;
        let handle = &borrowed;
        assert_eq!(handle.buildable_variants(), vec!["Pentagon"]);
        assert_eq!(
            handle.make(None).unwrap_err(),
            FactoryError::UnknownVariant("Pentagon".to_string())
        );
    }

    #[test]
    fn test_descriptor_snapshot() {
        let descriptor = MislabeledFactory.descriptor();
        assert_eq!(descriptor.factory_name, "MislabeledFactory");
        assert_eq!(descriptor.buildable_variants, vec!["Square".to_string()]);
        assert_eq!(descriptor.default_color, "white");
    }
}
