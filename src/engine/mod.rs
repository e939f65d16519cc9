pub(crate) mod config;
pub(crate) mod handwriting;
pub(crate) mod options;
