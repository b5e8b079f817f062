//! Account record store module.

mod r#trait;
pub use r#trait::{AccountLease, AccountPatch, AccountStore};

mod mock;
pub use mock::MockAccountStore;
