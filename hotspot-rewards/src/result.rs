pub type Result<T = ()> = anyhow::Result<T>;
pub use anyhow::Context;
