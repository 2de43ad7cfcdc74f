//! Shared constants

/// Domain under which system credentials are stored.
///
/// Jenkins keeps system-scope credentials in a single unnamed domain.
pub const SYSTEM_DOMAIN: &str = "_";

/// Path root of the system credential store, relative to the server base URL.
pub const SYSTEM_STORE_ROOT: &str = "credentials/store/system";
