//! Startup argument classification.
//!
//! ```text
//! argv[0] + argv[1..] → Lookup (registry) → Classify → LoginDecision
//! ```
//!
//! Only the subset of the shell's flags that decides the login question is
//! modelled here; full option parsing happens after startup.

mod classifier;
mod registry;

pub use classifier::{classify, DecisionReason, LoginDecision};
pub use registry::{lookup, param_registry, ParamArity, ParamDef, ParamDisposition};
