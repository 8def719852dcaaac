//! Tab management for route-based multi-tab navigation
//!
//! This module provides the core tab infrastructure including:
//! - `TabRecord`: One open tab, bound to a route target
//! - `TabCollection`: Ordered, key-unique storage plus the derived cache sets
//! - `TabManager`: Lifecycle operations (add, close, pin, reorder, refresh)
//!   coordinating the collection with the router

mod cache;
mod collection;
mod key;
mod manager;
mod observer;
mod record;
mod refresh;

pub use cache::compute_cached_names;
pub use collection::TabCollection;
pub use key::{PAGE_KEY_PARAM, decode_key, resolve_tab_key};
pub use manager::{BulkCloseOutcome, CloseOutcome, TabManager};
pub use observer::{SubscriptionId, TabEvent};
pub use record::{TabMeta, TabRecord, TabTitle};
pub use refresh::{LoadingIndicator, NoopIndicator, REFRESH_SETTLE_DELAY, RefreshTarget};
