//! Per-call configuration for the verification service

/// Default number of digits in a code
pub const DEFAULT_TOKEN_LENGTH: u32 = 6;

/// Default HOTP look-ahead window (counters `last + 1 ..= last + window`)
pub const DEFAULT_HOTP_WINDOW: u64 = 3;

/// Default TOTP window (one step before and one after the current step)
pub const DEFAULT_TOTP_WINDOW: u64 = 1;

/// Default TOTP interval length in seconds
pub const DEFAULT_INTERVAL_SECONDS: u64 = 30;

/// Options for a single verification attempt. Never persisted.
#[derive(Debug, Clone)]
pub struct VerifyOptions {
    /// Number of digits expected in the code
    pub token_length: u32,
    /// Acceptance window; `None` picks the per-path default
    /// (3 counters ahead for HOTP, 1 step either side for TOTP)
    pub window: Option<u64>,
    /// TOTP time-step length in seconds; ignored on the HOTP path
    pub interval_seconds: u64,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            token_length: DEFAULT_TOKEN_LENGTH,
            window: None,
            interval_seconds: DEFAULT_INTERVAL_SECONDS,
        }
    }
}

impl VerifyOptions {
    /// Effective window on the HOTP path
    pub fn hotp_window(&self) -> u64 {
        self.window.unwrap_or(DEFAULT_HOTP_WINDOW)
    }

    /// Effective window on the TOTP path
    pub fn totp_window(&self) -> u64 {
        self.window.unwrap_or(DEFAULT_TOTP_WINDOW)
    }
}
