pub mod lookup;

pub use lookup::{
    expand_query, ExecuteSubQueryUseCase, LookupOutcome, LookupRequest, PlannedQuery, QueryPlan,
    RunLookupUseCase,
};
