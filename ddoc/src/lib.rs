//! Library side of the ddoc binary, exposed for the xtask and integration
//! tests. Not intended as a stable API.
pub mod cli;
pub mod commands;
pub mod page;
