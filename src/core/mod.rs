//! Core building blocks: the release parser, the parsed `Release` record, and
//! output parameters. These are consumed by the high-level `api` module.
pub mod params;
pub mod parsing;
pub mod release;
