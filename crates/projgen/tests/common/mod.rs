#![allow(dead_code)]
pub mod test_env;

pub use test_env::{TestEnv, tmp_root};
