//! Page-details state: the per-strategy result cache and its controller

pub mod page_details;
pub mod result_cache;
pub mod view;

pub use page_details::{PageDetails, PageDetailsState, Selection};
pub use result_cache::{ResultCache, SlotState, StrategySlot};
pub use view::{PageDetailsView, PublishBadge};
