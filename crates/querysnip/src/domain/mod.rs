//! Console domain constants.
//!
//! The catalog of enumerations the console shares across its views: search
//! filter operators, tree node kinds and their nesting rules, and resource
//! state badges. These used to live in a single frozen lookup table; here
//! each concept is its own enum.

mod operator;
mod state;
mod tree;

pub use operator::{FilterOperator, UnknownOperator};
pub use state::{CollectMode, CollectorState, MemberState, ServerState, StateColor};
pub use tree::TreeNodeKind;
