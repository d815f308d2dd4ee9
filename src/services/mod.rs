pub mod client;
pub mod credentials;

pub use client::{ClientFactory, DefaultClientFactory};
pub use credentials::{CredentialsResolver, EnvSource, ProcessEnv};
