//! CLI command handlers. Each command is in its own file.

mod constants;
mod host_style;
mod normalize;
mod parse;
mod retarget;
mod sas;

pub use constants::run_constants;
pub use host_style::run_host_style;
pub use normalize::run_normalize;
pub use parse::run_parse;
pub use retarget::{run_with_snapshot, run_with_version};
pub use sas::run_sas;

#[cfg(test)]
pub(crate) use constants::render_constants;
#[cfg(test)]
pub(crate) use host_style::render_host_style;
#[cfg(test)]
pub(crate) use normalize::render_normalized;
#[cfg(test)]
pub(crate) use parse::render_parts;
#[cfg(test)]
pub(crate) use sas::render_sas;
