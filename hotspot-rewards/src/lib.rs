pub mod cmd;
pub mod result;
