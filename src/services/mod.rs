//! Service layer: validation, normalization, report assembly, and the
//! public lookup facade.
//!
//! The leaf modules are pure and never fail; all-or-nothing decisions
//! (invalid input, empty results, transport faults) are made in [`lookup`].

pub mod lookup;
pub mod normalize;
pub mod report;
pub mod validation;

pub use lookup::ScoreService;
pub use normalize::{normalize_student, reconcile_subjects};
pub use report::{assemble_distribution, assemble_leaderboard};
pub use validation::is_valid_student_id;
