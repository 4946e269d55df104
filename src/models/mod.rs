//! Data models for companies, analysis modules, metrics and action items.

pub mod competitor;
pub mod metrics;
pub mod module;
pub mod task;

pub use competitor::{Competitor, USER_COMPANY_ID};
pub use metrics::CompanyMetricsBundle;
pub use module::{ALL_MODULES, AnalysisModule, ModuleId};
pub use task::{SortOrder, Task, TaskId, TaskList};
