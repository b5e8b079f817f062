//! Trait for OTP codec integration
//!
//! Code generation and comparison are external capabilities, assumed correct
//! and constant-time. The verifier only asks the codec one question: which
//! counter or time-step, if any, inside a bounded window produces the
//! candidate code.

/// Parameters for a counter-based (HOTP) check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterCheck {
    /// Last counter the server accepted; matching starts at `last + 1`
    pub last: u64,
    /// Number of counters ahead of `last` to test, inclusive
    pub window: u64,
    /// Expected number of digits in the code
    pub token_length: u32,
}

/// Parameters for a time-based (TOTP) check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeCheck {
    /// Unix timestamp (seconds) the check is evaluated at
    pub timestamp: u64,
    /// Steps either side of `timestamp / interval_seconds` to test
    pub window: u64,
    /// Length of one time-step in seconds
    pub interval_seconds: u64,
    /// Expected number of digits in the code
    pub token_length: u32,
}

/// Trait for OTP codec integration
pub trait OtpCodec: Send + Sync {
    /// Test a candidate code against counters
    /// `[check.last + 1, check.last + check.window]`
    ///
    /// Returns the matched counter, or `None` if no counter in the window
    /// produces the code.
    fn check_counter_code(&self, code: &str, secret: &[u8], check: &CounterCheck)
        -> Option<u64>;

    /// Test a candidate code against time-steps
    /// `[timestamp/interval - window, timestamp/interval + window]`
    ///
    /// Returns the matched step, or `None` if no step in the window produces
    /// the code.
    fn check_time_code(&self, code: &str, secret: &[u8], check: &TimeCheck) -> Option<u64>;
}
