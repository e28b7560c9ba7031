use crate::core::products::family::FamilyDefaults;
use crate::core::types::{ProductFamily, ProductState};
use std::fmt;

/// Capability set every manufactured product exposes
///
/// Products are handed out as `Box<dyn Polygon>` so callers never depend on
/// a concrete variant type. Identity (`kind`, `family`) is fixed for the
/// lifetime of the product; color and manufacturer tag may be reassigned.
pub trait Polygon: fmt::Debug + Send {
    /// Variant identifier, e.g. "Equilateral"
    fn kind(&self) -> &str;

    /// Family this variant belongs to
    fn family(&self) -> ProductFamily;

    /// Symbolic perimeter formula
    fn perimeter(&self) -> &str;

    /// Symbolic area formula
    fn area(&self) -> &str;

    fn color(&self) -> &str;

    fn set_color(&mut self, color: &str);

    /// Name of the factory that built this product
    fn manufactured_by(&self) -> &str;

    fn set_manufactured_by(&mut self, factory_name: &str);

    /// Type/family chain, most specific first
    fn hierarchy(&self) -> Vec<&str>;

    /// Human-readable one-line description
    fn describe(&self) -> String {
        format!(
            "{} {} manufactured by {} (perimeter: {}; area: {})",
            self.color(),
            self.kind(),
            self.manufactured_by(),
            self.perimeter(),
            self.area()
        )
    }
}

/// Compile-time variant definition
///
/// `KIND` and `FAMILY` are required, so a variant that forgets to declare
/// its family does not compile. Formulas left as `None` fall back to the
/// family defaults. Every `Shape` is a [`Polygon`] through the blanket impl
/// below; use the `polygon_variant!` macro rather than implementing this by hand.
pub trait Shape: fmt::Debug + Send + Sized + 'static {
    const KIND: &'static str;
    const FAMILY: ProductFamily;
    const PERIMETER: Option<&'static str> = None;
    const AREA: Option<&'static str> = None;

    /// Build the variant around freshly manufactured state
    ///
    /// Only factories create [`ProductState`], so this is reached through
    /// the registry during a manufacture call.
    fn from_state(state: ProductState) -> Self;

    fn state(&self) -> &ProductState;

    fn state_mut(&mut self) -> &mut ProductState;

    /// Family defaults this variant composes
    fn defaults() -> FamilyDefaults {
        FamilyDefaults::for_family(Self::FAMILY)
    }
}

impl<T: Shape> Polygon for T {
    fn kind(&self) -> &str {
        T::KIND
    }

    fn family(&self) -> ProductFamily {
        T::FAMILY
    }

    fn perimeter(&self) -> &str {
        T::PERIMETER.unwrap_or(T::defaults().perimeter)
    }

    fn area(&self) -> &str {
        T::AREA.unwrap_or(T::defaults().area)
    }

    fn color(&self) -> &str {
        &self.state().color
    }

    fn set_color(&mut self, color: &str) {
        self.state_mut().color = color.to_string();
    }

    fn manufactured_by(&self) -> &str {
        &self.state().manufactured_by
    }

    fn set_manufactured_by(&mut self, factory_name: &str) {
        self.state_mut().manufactured_by = factory_name.to_string();
    }

    fn hierarchy(&self) -> Vec<&str> {
        vec![std::any::type_name::<T>(), T::FAMILY.name(), "Polygon"]
    }
}
