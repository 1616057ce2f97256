//! Boundary to the outside world: batch execution and the indexer.
//!
//! Implementations own retries, caching and timeouts; nothing in this crate
//! retries a failed batch.

use alloy_primitives::Address;
use anyhow::{Context, Result};
use ens_multicall::{BatchPlan, BatchResults, RawCallResult};

use crate::subnames::{IndexedSubname, TreeLimits};

/// Executes read batches.
#[async_trait::async_trait]
pub trait CallTransport: Send + Sync {
    /// One result per request of `plan`, in plan order. A reverting call is a
    /// [`RawCallResult::Failure`] entry; `Err` means the whole batch was lost.
    async fn execute(&self, plan: &BatchPlan) -> Result<Vec<RawCallResult>>;
}

/// Structural subname data and fallback ownership from an indexer.
#[async_trait::async_trait]
pub trait IndexerSource: Send + Sync {
    /// Subdomains of `name`: page `page` (zero-based) of its direct children,
    /// each with nested subdomains down to `limits.max_depth`.
    async fn subnames(
        &self,
        name: &str,
        page: usize,
        limits: TreeLimits,
    ) -> Result<Vec<IndexedSubname>>;

    /// Registrant of a .eth second-level name, for when `ownerOf` reverts.
    async fn registrant(&self, name: &str) -> Result<Option<Address>>;
}

#[async_trait::async_trait]
impl<'a, T: CallTransport + ?Sized> CallTransport for &'a T {
    async fn execute(&self, plan: &BatchPlan) -> Result<Vec<RawCallResult>> {
        (**self).execute(plan).await
    }
}

#[async_trait::async_trait]
impl<'a, I: IndexerSource + ?Sized> IndexerSource for &'a I {
    async fn subnames(
        &self,
        name: &str,
        page: usize,
        limits: TreeLimits,
    ) -> Result<Vec<IndexedSubname>> {
        (**self).subnames(name, page, limits).await
    }

    async fn registrant(&self, name: &str) -> Result<Option<Address>> {
        (**self).registrant(name).await
    }
}

/// An indexer with no data.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIndexer;

#[async_trait::async_trait]
impl IndexerSource for NoIndexer {
    async fn subnames(&self, _name: &str, _page: usize, _limits: TreeLimits) -> Result<Vec<IndexedSubname>> {
        Ok(Vec::new())
    }

    async fn registrant(&self, _name: &str) -> Result<Option<Address>> {
        Ok(None)
    }
}

/// Execute `plan` and key its results. Empty plans never reach the transport.
pub async fn execute_plan<T: CallTransport + ?Sized>(
    transport: &T,
    plan: &BatchPlan,
) -> Result<BatchResults> {
    if plan.is_empty() {
        return Ok(BatchResults::default());
    }
    let raw = transport
        .execute(plan)
        .await
        .with_context(|| format!("executing batch of {} calls", plan.len()))?;
    let results = BatchResults::from_positional(plan, raw)?;
    Ok(results)
}
