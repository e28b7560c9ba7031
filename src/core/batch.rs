use crate::core::config::{BatchConfig, ConcurrencyMode};
use crate::core::errors::FactoryError;
use crate::core::factories::traits::PolygonFactory;
use crate::core::products::traits::Polygon;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rayon::prelude::*;

/// A manufactured product, owned by the caller
pub type Product = Box<dyn Polygon>;

/// One factory or a collection of factories to request a batch from
///
/// Any factory handle converts into a lone factory: `&TriangleFactory`,
/// `&dyn PolygonFactory`, `Box<dyn PolygonFactory>`. Vectors, slices and
/// arrays of `&dyn PolygonFactory` convert into a collection.
pub enum Factories<'a> {
    One(Box<dyn PolygonFactory + 'a>),
    Many(Vec<&'a dyn PolygonFactory>),
}

impl<'a> Factories<'a> {
    /// Normalise into a list, a lone factory becoming a one-element list
    pub fn as_list(&self) -> Vec<&dyn PolygonFactory> {
        match self {
            Factories::One(factory) => vec![factory.as_ref()],
            Factories::Many(factories) => factories.clone(),
        }
    }
}

impl<'a, F: PolygonFactory + 'a> From<F> for Factories<'a> {
    fn from(factory: F) -> Self {
        Factories::One(Box::new(factory))
    }
}

impl<'a> From<Vec<&'a dyn PolygonFactory>> for Factories<'a> {
    fn from(factories: Vec<&'a dyn PolygonFactory>) -> Self {
        Factories::Many(factories)
    }
}

impl<'a> From<&[&'a dyn PolygonFactory]> for Factories<'a> {
    fn from(factories: &[&'a dyn PolygonFactory]) -> Self {
        Factories::Many(factories.to_vec())
    }
}

impl<'a, const N: usize> From<[&'a dyn PolygonFactory; N]> for Factories<'a> {
    fn from(factories: [&'a dyn PolygonFactory; N]) -> Self {
        Factories::Many(factories.to_vec())
    }
}

/// Ask one or more factories for a random batch of products
///
/// Uses the default configuration (5 to 10 products per factory, sequential)
/// and the thread-local RNG.
pub fn request_batch<'a>(
    factories: impl Into<Factories<'a>>,
    color: Option<&str>,
) -> Result<Vec<Product>, FactoryError> {
    request_batch_with(factories, color, &BatchConfig::default(), &mut rand::thread_rng())
}

/// Ask one or more factories for a random batch with explicit settings
///
/// Each factory draws its batch size from the configured range and is asked
/// that many times. Sub-batches keep their call order and are concatenated
/// in factory order. Every factory gets its own RNG seeded from `rng`, so
/// sequential and parallel runs with the same seed return the same batch.
pub fn request_batch_with<'a>(
    factories: impl Into<Factories<'a>>,
    color: Option<&str>,
    config: &BatchConfig,
    rng: &mut dyn RngCore,
) -> Result<Vec<Product>, FactoryError> {
    config.validate()?;

    let factories = factories.into();
    let jobs: Vec<(&dyn PolygonFactory, u64)> = factories
        .as_list()
        .into_iter()
        .map(|factory| (factory, rng.next_u64()))
        .collect();

    if jobs.is_empty() {
        debug!("Batch requested from no factories");
        return Ok(Vec::new());
    }

    let sub_batches = match config.concurrency_mode {
        ConcurrencyMode::Sequential => jobs
            .iter()
            .map(|(factory, seed)| fill_sub_batch(*factory, *seed, color, config))
            .collect::<Result<Vec<_>, _>>()?,
        ConcurrencyMode::Rayon => fill_parallel(&jobs, color, config)?,
    };

    let products: Vec<Product> = sub_batches.into_iter().flatten().collect();
    info!(
        "Batch of {} products from {} factories ({:?})",
        products.len(),
        jobs.len(),
        config.concurrency_mode
    );
    Ok(products)
}

fn fill_sub_batch(
    factory: &dyn PolygonFactory,
    seed: u64,
    color: Option<&str>,
    config: &BatchConfig,
) -> Result<Vec<Product>, FactoryError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let size = rng.gen_range(config.min_batch..=config.max_batch);
    debug!("[{}] Drawing {} products", factory.name(), size);

    (0..size)
        .map(|_| factory.manufacture(&mut rng, color))
        .collect()
}

fn fill_parallel(
    jobs: &[(&dyn PolygonFactory, u64)],
    color: Option<&str>,
    config: &BatchConfig,
) -> Result<Vec<Vec<Product>>, FactoryError> {
    let work = || {
        jobs.par_iter()
            .map(|(factory, seed)| fill_sub_batch(*factory, *seed, color, config))
            .collect::<Result<Vec<_>, _>>()
    };

    match config.thread_pool_size {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|err| {
                    FactoryError::InvalidRequest(format!("failed to build thread pool: {}", err))
                })?;
            pool.install(work)
        }
        None => work(),
    }
}
