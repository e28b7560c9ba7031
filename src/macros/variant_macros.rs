//! Variant definition macros
//!
//! These macros generate the struct and the `Shape` implementation for a
//! product variant, so a variant only states what differs from its family.

/// Macro for defining a product variant with simplified syntax
///
/// `family` is mandatory; `perimeter` and `area` are optional overrides that
/// replace the family defaults.
///
/// # Example
/// ```rust,ignore
/// polygon_variant! {
///     /// Triangle with three equal sides
///     pub struct Equilateral, "Equilateral", {
///         family: Triangle,
///         perimeter: "3a",
///     }
/// }
/// ```
#[macro_export]
macro_rules! polygon_variant {
    (
        $(#[$meta:meta])*
        $vis:vis struct $struct_name:ident, $kind:expr, {
            family: $family:ident
            $(, perimeter: $perimeter:expr)?
            $(, area: $area:expr)?
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis struct $struct_name {
            state: $crate::core::types::ProductState,
        }

        impl $crate::core::products::traits::Shape for $struct_name {
            const KIND: &'static str = $kind;
            const FAMILY: $crate::core::types::ProductFamily =
                $crate::core::types::ProductFamily::$family;
            $(const PERIMETER: Option<&'static str> = Some($perimeter);)?
            $(const AREA: Option<&'static str> = Some($area);)?

            fn from_state(state: $crate::core::types::ProductState) -> Self {
                Self { state }
            }

            fn state(&self) -> &$crate::core::types::ProductState {
                &self.state
            }

            fn state_mut(&mut self) -> &mut $crate::core::types::ProductState {
                &mut self.state
            }
        }
    };
}
