//! Reference chains that span more than one record.

mod requirements;
mod universal;

pub use requirements::resolve_requirements;
pub use universal::{plugin_name, reconstruct_key_from_indirect, resolve_direct_or_indirect};
