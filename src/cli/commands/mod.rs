//! CLI command implementations

pub mod calc;
pub mod common;
pub mod completions;
pub mod init;
pub mod mtrs;
pub mod pnl;
pub mod print;
pub mod swgr;
pub mod validate;
pub mod xfmr;
