// View models: page-local state derived from resource-client results plus UI flags.
// No rendering here; pages own output.

pub mod auth;
pub mod candidate;
pub mod hr;
pub mod overview;
