/// Router Module Index
///
/// Organizes the routing surface into security-segregated modules so the
/// accepted role set of every endpoint is fixed at registration time:
/// anonymous probes, user-facing loan submission/listing, and the admin
/// review surface.

/// Routes accessible anonymously (service banner, health probe).
pub mod public;

/// Loan submission and owner listing; requires an authenticated session.
pub mod user;

/// Routes restricted to the 'admin' role: review, moderation, statistics.
pub mod admin;
