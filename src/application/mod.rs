//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CheckUseCase` - Extracts and reconciles every configured pair
//! - `optional_fields` - Backend fields declared optional
//! - `parse_side` - Extracted and flattened declarations of one side
//! - `render_config` / `write_config` - Config scaffolding for `init`

pub mod check;
pub mod init;
pub mod optional;
pub mod parse;

pub use check::{run_check, CheckOptions, CheckResult, CheckUseCase, PairOutcome, ADHOC_PAIR};
pub use init::{render_config, write_config};
pub use optional::{optional_fields, OptionalField};
pub use parse::{parse_side, ParsedSide};
