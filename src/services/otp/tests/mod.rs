//! Unit tests for the OTP verification service
