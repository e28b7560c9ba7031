//! Factory definition macros
//!
//! A built-in factory is a stateless unit struct; its buildable list is a
//! list of variant types, so a factory cannot name a variant that does not exist.

/// Macro for defining a stateless factory over a fixed set of variant types
///
/// The factory name reported to products is the struct name.
///
/// # Example
/// ```rust,ignore
/// polygon_factory! {
///     /// Builds triangles
///     pub struct TriangleFactory {
///         family: Triangle,
///         variants: [Equilateral, Isosceles, Scalene],
///     }
/// }
/// ```
#[macro_export]
macro_rules! polygon_factory {
    (
        $(#[$meta:meta])*
        $vis:vis struct $struct_name:ident {
            family: $family:ident,
            variants: [$($variant:ty),+ $(,)?]
            $(, default_color: $color:expr)?
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        $vis struct $struct_name;

        impl $crate::core::factories::traits::PolygonFactory for $struct_name {
            fn name(&self) -> &str {
                stringify!($struct_name)
            }

            fn family(&self) -> $crate::core::types::ProductFamily {
                $crate::core::types::ProductFamily::$family
            }

            fn buildable_variants(&self) -> Vec<&str> {
                vec![$(<$variant as $crate::core::products::traits::Shape>::KIND),+]
            }

            $(
                fn default_color(&self) -> &str {
                    $color
                }
            )?
        }
    };
}
