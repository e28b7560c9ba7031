use crate::core::products::traits::Polygon;
use std::io::{self, Write};

/// Switches for [`render_product_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Also write the `Debug` form of the product
    pub show_repr: bool,
    /// Also write the type/family chain
    pub show_hierarchy: bool,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repr(mut self, show: bool) -> Self {
        self.show_repr = show;
        self
    }

    pub fn with_hierarchy(mut self, show: bool) -> Self {
        self.show_hierarchy = show;
        self
    }
}

/// Write a product's description, plus its hierarchy chain when `show_details` is set
pub fn render_product<W: Write + ?Sized>(
    out: &mut W,
    polygon: &dyn Polygon,
    show_details: bool,
) -> io::Result<()> {
    render_product_with(out, polygon, &RenderOptions::new().with_hierarchy(show_details))
}

pub fn render_product_with<W: Write + ?Sized>(
    out: &mut W,
    polygon: &dyn Polygon,
    options: &RenderOptions,
) -> io::Result<()> {
    writeln!(out, "{}", polygon.describe())?;
    if options.show_repr {
        writeln!(out, "{:?}", polygon)?;
    }
    if options.show_hierarchy {
        writeln!(out, "{}", polygon.hierarchy().join(" -> "))?;
    }
    Ok(())
}

/// Render every product of a batch in order
pub fn render_batch<W: Write + ?Sized>(
    out: &mut W,
    batch: &[Box<dyn Polygon>],
    options: &RenderOptions,
) -> io::Result<()> {
    for polygon in batch {
        render_product_with(out, polygon.as_ref(), options)?;
    }
    Ok(())
}
