//! Search module.
//!
//! Contains catalog queries, search submission, search session state, and
//! the one-shot search handoff.

mod handoff;
mod query;
mod state;
mod submit;

pub use handoff::{
    stage_in_store, take_from_store, HandoffSlot, HandoffStore, MemoryStore, SearchHandoff,
    RESULTS_KEY, TERM_KEY,
};
pub use query::{filter_by_category, highlight_matches, search, validate_term};
pub use state::{SearchEvent, SearchState};
pub use submit::{submit_search, SearchOutcome};
