use polyfab::{render_product, request_batch, TriangleFactory};
use std::error::Error;
use std::io::Write;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Swap the factory to change the whole product family
    let triangles = request_batch(&TriangleFactory, None)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for triangle in &triangles {
        render_product(&mut out, triangle.as_ref(), false)?;
    }
    out.flush()?;

    Ok(())
}
