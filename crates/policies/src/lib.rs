//! `benefika-policies` — per-entity authorization decisions.
//!
//! One stateless policy per entity type. Every decision method is a pure
//! function of the actor, the request's [`AuthorizationContext`], and the
//! target entity: no I/O, no side effects, and a deny is a `false`, never an
//! error. The request layer converts denials to HTTP 403 through
//! [`benefika_auth::ensure`].
//!
//! The common shape is permission gate first, scoping check second: a missing
//! grant denies immediately; a held grant is then narrowed to the financers
//! and divisions the context was hydrated with.
//!
//! [`AuthorizationContext`]: benefika_auth::AuthorizationContext

pub mod division;
pub mod financer;
pub mod invoice;
pub mod segment;
pub mod tag;
pub mod topic;
pub mod user;

pub use division::DivisionPolicy;
pub use financer::FinancerPolicy;
pub use invoice::InvoicePolicy;
pub use segment::SegmentPolicy;
pub use tag::TagPolicy;
pub use topic::NotificationTopicPolicy;
pub use user::UserPolicy;
