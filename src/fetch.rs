use std::collections::HashSet;
use std::future::Future;
use std::sync::Mutex;

use futures::future::try_join_all;
use tokio::sync::Semaphore;

use crate::client::DevOpsClient;
use crate::config::{Config, DuplicatePolicy, ParentLinking};
use crate::error::{OutlineError, OutlineResult};
use crate::logging::{log_debug, log_error, log_info};
use crate::models::{WorkItemDetail, WorkItemMap, WorkItemRelation};

/// Ids whose details have already been fetched during this run.
#[derive(Debug, Default)]
pub struct FetchedIds {
    seen: Mutex<HashSet<u32>>,
}

impl FetchedIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id`, returning `false` if it was already recorded.
    pub fn record(&self, id: u32) -> bool {
        match self.seen.lock() {
            Ok(mut seen) => seen.insert(id),
            Err(poisoned) => poisoned.into_inner().insert(id),
        }
    }

    pub fn len(&self) -> usize {
        match self.seen.lock() {
            Ok(seen) => seen.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FanOutOptions {
    pub concurrency: usize,
    pub on_duplicate: DuplicatePolicy,
    pub parent_linking: ParentLinking,
}

impl From<&Config> for FanOutOptions {
    fn from(config: &Config) -> Self {
        Self {
            concurrency: config.concurrency,
            on_duplicate: config.on_duplicate,
            parent_linking: config.parent_linking,
        }
    }
}

impl Default for FanOutOptions {
    fn default() -> Self {
        FanOutOptions::from(&Config::default())
    }
}

/// Fetch the target of every relation through `client`.
pub async fn fetch_all(
    client: &DevOpsClient,
    relations: &[WorkItemRelation],
    options: FanOutOptions,
) -> OutlineResult<WorkItemMap> {
    fetch_all_with(relations, options, |id| client.fetch_work_item(id)).await
}

/// Schedule one fetch per relation, at most `options.concurrency` in flight,
/// and collect the successful ones keyed by id in relation order.
///
/// Under [`DuplicatePolicy::Abort`] the first id fetched twice fails the
/// whole fan-out with [`OutlineError::DuplicateWorkItem`] and the remaining
/// fetches are dropped.
pub async fn fetch_all_with<F, Fut>(
    relations: &[WorkItemRelation],
    options: FanOutOptions,
    fetch: F,
) -> OutlineResult<WorkItemMap>
where
    F: Fn(u32) -> Fut,
    Fut: Future<Output = OutlineResult<Option<WorkItemDetail>>>,
{
    let semaphore = Semaphore::new(options.concurrency.max(1));
    let fetched = FetchedIds::new();

    let tasks: Vec<_> = relations
        .iter()
        .map(|relation| {
            log_info(&format!("Fetching details for work item ID: {}", relation.target));
            fetch_one(*relation, &fetch, &semaphore, &fetched, options)
        })
        .collect();

    log_info("Fetching all work item details...");
    let results = try_join_all(tasks).await?;

    Ok(results.into_iter().flatten().collect())
}

async fn fetch_one<F, Fut>(
    relation: WorkItemRelation,
    fetch: &F,
    semaphore: &Semaphore,
    fetched: &FetchedIds,
    options: FanOutOptions,
) -> OutlineResult<Option<WorkItemDetail>>
where
    F: Fn(u32) -> Fut,
    Fut: Future<Output = OutlineResult<Option<WorkItemDetail>>>,
{
    let id = relation.target;

    let result = {
        let _permit = semaphore
            .acquire()
            .await
            .map_err(|e| OutlineError::Unknown(format!("Fetch limiter closed: {}", e)))?;
        fetch(id).await
    };

    let detail = match result {
        Ok(Some(detail)) => detail,
        Ok(None) => return Ok(None),
        Err(e) => {
            log_error(&format!("Failed to fetch item details for ID: {} ({})", id, e));
            return Ok(None);
        }
    };

    if !fetched.record(id) {
        return match options.on_duplicate {
            DuplicatePolicy::Abort => {
                log_debug(&format!("Duplicate ID found: {}. Aborting fan-out.", id));
                Err(OutlineError::DuplicateWorkItem(id))
            }
            DuplicatePolicy::Skip => {
                log_info(&format!("Skipping duplicate work item ID: {}", id));
                Ok(None)
            }
        };
    }

    log_info(&format!("Successfully fetched work item ID: {}", id));

    let parent_id = match options.parent_linking {
        ParentLinking::Relations => relation.source,
        ParentLinking::Flat => None,
    };

    Ok(Some(WorkItemDetail { id, ..detail }.with_parent(parent_id)))
}
