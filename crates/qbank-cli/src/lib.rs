//! CLI library components for the Question Bank Import Toolkit.

pub mod logging;
