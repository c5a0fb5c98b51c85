//! File-based configuration loading
//!
//! - [`parser`] - Read and validate notification rules files
//! - [`build_file`] - Read build result files (TOML or JSON)

pub mod build_file;
pub mod parser;

pub use build_file::{BuildFile, load_build, parse_build_json, parse_build_toml};
pub use parser::{
    ConverterEntry, GroupEntry, RulesFile, SubjectEntry, UserEntry, load_rules, parse_rules,
};
