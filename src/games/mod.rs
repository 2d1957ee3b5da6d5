//! Game implementations built on the core engine.

pub mod science_lab;
