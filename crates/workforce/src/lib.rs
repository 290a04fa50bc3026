//! `benefika-workforce` — employee-facing entities policies decide over.
//!
//! User profiles carry the membership records tenant isolation is computed
//! from; tags, segments, and notification topics are the HR configuration
//! entities scoped to financers and/or divisions.

pub mod segment;
pub mod tag;
pub mod topic;
pub mod user;

pub use segment::Segment;
pub use tag::Tag;
pub use topic::{NotificationTopic, TopicScope};
pub use user::{UserProfile, UserStatus};
