//! `benefika-tenancy` — the two-level tenant hierarchy.
//!
//! A [`Division`] owns zero-or-more [`Financer`]s; each financer belongs to
//! exactly one division. Entities needing isolation reference a financer, a
//! division, or both. Users attach to financers through
//! [`FinancerMembership`] records; only *active* memberships confer access.

pub mod directory;
pub mod hierarchy;
pub mod membership;

pub use directory::{FinancerDirectory, InMemoryDirectory, resolve_scope};
pub use hierarchy::{Division, Financer};
pub use membership::FinancerMembership;
