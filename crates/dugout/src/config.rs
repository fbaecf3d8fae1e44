//! Configuration constants for the dugout core

/// Application metadata
pub mod app {
    /// Application name (used for logging targets, user agent, etc.)
    pub const NAME: &str = "dugout";
}

/// Network-related configuration
pub mod network {
    /// User agent for HTTP requests
    pub const USER_AGENT: &str = concat!("Dugout/", env!("CARGO_PKG_VERSION"));

    /// Connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Read timeout in seconds
    pub const READ_TIMEOUT_SECS: u64 = 30;

    /// Total attempts per request (1 initial + retries on transient failures)
    pub const RETRY_ATTEMPTS: u32 = 3;

    /// Base delay between retries in milliseconds (doubles each attempt)
    pub const RETRY_BASE_DELAY_MS: u64 = 250;
}

/// Upstream provider configuration
pub mod provider {
    /// Default MLB Stats API base URL
    pub const DEFAULT_BASE_URL: &str = "https://statsapi.mlb.com/api/v1";

    /// American League id in the MLB Stats API
    pub const AMERICAN_LEAGUE_ID: u32 = 103;

    /// National League id in the MLB Stats API
    pub const NATIONAL_LEAGUE_ID: u32 = 104;

    /// Both league ids, in the order standings are assembled
    pub const LEAGUE_IDS: [u32; 2] = [AMERICAN_LEAGUE_ID, NATIONAL_LEAGUE_ID];
}

/// Season bounds
pub mod seasons {
    /// First National League season with usable records
    pub const FIRST_SEASON: i32 = 1877;
}
