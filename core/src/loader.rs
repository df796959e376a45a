use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::future::Future;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LoaderConfig {
    /// How many categories to ask the service for before sampling.
    pub pool_size: u16,
    /// Attempts per request, network failures only.
    pub max_attempts: u8,
}

impl LoaderConfig {
    pub const DEFAULT_POOL_SIZE: u16 = 100;

    pub fn new(pool_size: u16, max_attempts: u8) -> Self {
        Self {
            pool_size: pool_size.max(CATEGORY_COUNT as u16),
            max_attempts: max_attempts.max(1),
        }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_POOL_SIZE, 1)
    }
}

/// Distinct category ids in random order, drawn without replacement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryPool {
    // drawn from the back
    ids: Vec<CategoryId>,
}

impl CategoryPool {
    /// De-duplicates `ids` and shuffles them with a seeded rng.
    pub fn shuffled(ids: impl IntoIterator<Item = CategoryId>, seed: u64) -> Self {
        use rand::prelude::*;

        let mut seen = BTreeSet::new();
        let mut ids: Vec<_> = ids.into_iter().filter(|id| seen.insert(*id)).collect();
        let mut rng = SmallRng::seed_from_u64(seed);
        ids.shuffle(&mut rng);
        Self { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn next_id(&mut self) -> Option<CategoryId> {
        self.ids.pop()
    }

    /// Takes `count` ids, or fewer when the pool runs dry.
    pub fn draw(&mut self, count: usize) -> Vec<CategoryId> {
        let split = self.ids.len().saturating_sub(count);
        let mut drawn = self.ids.split_off(split);
        drawn.reverse();
        drawn
    }
}

/// Runs `op` until it succeeds, fails with a non-network error, or runs out of attempts.
async fn with_retry<T, F, Fut>(max_attempts: u8, mut op: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Err(err) if err.is_network() && attempt < max_attempts => {
                log::warn!("attempt {}/{} failed: {}", attempt, max_attempts, err);
                attempt += 1;
            }
            result => return result,
        }
    }
}

/// Fetches the category listing and turns it into a shuffled pool.
pub async fn fetch_category_pool<S: TriviaService>(
    service: &S,
    config: &LoaderConfig,
    seed: u64,
) -> Result<CategoryPool> {
    let summaries =
        with_retry(config.max_attempts, || service.categories(config.pool_size)).await?;
    let pool = CategoryPool::shuffled(summaries.iter().map(|summary| summary.id), seed);
    log::debug!(
        "category pool: {} distinct of {} listed",
        pool.len(),
        summaries.len()
    );

    if pool.len() < CATEGORY_COUNT {
        return Err(TriviaError::NotEnoughCategories {
            found: pool.len(),
            needed: CATEGORY_COUNT,
        });
    }
    Ok(pool)
}

/// Picks [`CATEGORY_COUNT`] distinct category ids at random.
///
/// One-shot form of the draw [`load_board`] starts from; the board loader
/// keeps the rest of the pool for replacements.
pub async fn fetch_category_ids<S: TriviaService>(
    service: &S,
    config: &LoaderConfig,
    seed: u64,
) -> Result<Vec<CategoryId>> {
    let mut pool = fetch_category_pool(service, config, seed).await?;
    Ok(pool.draw(CATEGORY_COUNT))
}

pub async fn fetch_category<S: TriviaService>(
    service: &S,
    config: &LoaderConfig,
    id: CategoryId,
) -> Result<Category> {
    let records = with_retry(config.max_attempts, || service.clues(id)).await?;
    let category = Category::from_records(id, &records)?;
    log::debug!(
        "category {} \"{}\": {} clues",
        id,
        category.title(),
        category.clues().len()
    );
    Ok(category)
}

/// Builds a full board, replacing malformed categories with fresh draws.
///
/// Categories are fetched one after another and land on the board in the
/// order they resolve. Any network failure aborts the whole load.
pub async fn load_board<S: TriviaService>(
    service: &S,
    config: &LoaderConfig,
    seed: u64,
) -> Result<Board> {
    let mut pool = fetch_category_pool(service, config, seed).await?;
    let mut drawn = pool.draw(CATEGORY_COUNT).into_iter();
    let mut categories = Vec::with_capacity(CATEGORY_COUNT);

    while categories.len() < CATEGORY_COUNT {
        let Some(id) = drawn.next().or_else(|| pool.next_id()) else {
            log::error!("ran out of categories after {} usable", categories.len());
            return Err(TriviaError::NotEnoughCategories {
                found: categories.len(),
                needed: CATEGORY_COUNT,
            });
        };

        match fetch_category(service, config, id).await {
            Ok(category) => categories.push(category),
            Err(err) if err.is_malformed() => {
                log::warn!("skipping category {}: {}", id, err);
            }
            Err(err) => return Err(err),
        }
    }

    Board::new(categories)
}
