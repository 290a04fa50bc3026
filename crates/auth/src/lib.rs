//! `benefika-auth` — the authorization core (zero-trust boundary).
//!
//! This crate is intentionally decoupled from HTTP and storage. The
//! request-handling layer resolves an [`Actor`], hydrates one
//! [`AuthorizationContext`] per request, and threads it **explicitly** through
//! every downstream call — there is no process-wide context and no
//! cross-request sharing.

pub mod actor;
pub mod claims;
pub mod context;
pub mod error;
pub mod mode;
pub mod permission;
pub mod role;

pub use actor::{Actor, Capabilities};
pub use claims::{AccessClaims, TokenValidationError, validate_claims};
pub use context::{AuthorizationContext, HydrationError};
pub use error::{AuthzError, ensure, require_permission};
pub use mode::AuthorizationMode;
pub use permission::Permission;
pub use role::{Role, RoleTier};
