mod execute;
mod expand;
mod run;

pub use execute::ExecuteSubQueryUseCase;
pub use expand::{expand_query, LookupRequest, PlannedQuery, QueryPlan};
pub use run::{LookupOutcome, RunLookupUseCase};
