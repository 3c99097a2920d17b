//! Library half of the `seo-audit` command line.

pub mod logging;
pub mod settings;
