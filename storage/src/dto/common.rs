use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Limit/offset window taken verbatim from the query string.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams, ToSchema)]
pub struct LimitOffsetParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default = "default_offset")]
    pub offset: u32,
}

fn default_limit() -> u32 {
    50
}

fn default_offset() -> u32 {
    0
}

/// One window of an already-materialized result set, alongside the size of
/// the unsliced set and the window that produced it.
#[derive(Debug, Serialize, ToSchema)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
}

impl<T> Page<T> {
    /// Slice `items[offset .. offset + limit]`. An offset past the end
    /// yields an empty window while `total` still reports the full size.
    pub fn paginate(items: Vec<T>, params: LimitOffsetParams) -> Self {
        let total = items.len() as u64;
        let items = items
            .into_iter()
            .skip(params.offset as usize)
            .take(params.limit as usize)
            .collect();

        Self {
            items,
            total,
            limit: params.limit,
            offset: params.offset,
        }
    }
}
