//! Session identity: who is signed in, and under which role.

mod directory;
mod store;
mod types;

pub use directory::IdentityDirectory;
pub use store::{IdentityError, IdentityStore};
pub use types::{Identity, Role};
