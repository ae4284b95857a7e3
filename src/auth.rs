mod client;
mod credentials;
mod error;
mod slot;


pub use client::{AccessToken, TokenClient, TokenResponse};
pub use credentials::ClientCredentials;
pub use error::{AuthError, Result};
pub use slot::{TokenSlot, TokenState};
