//! Pure formatting primitives shared by the default rules.
//!
//! Everything here is deterministic for a given [`Colors`] palette. The only
//! environment-dependent function is [`format_date_time`], which renders in
//! the local time zone.

mod colors;
mod highlight;
mod size;
mod text;
mod time;
mod value;

pub use colors::{ColorName, Colors};
pub use highlight::format_error;
pub use size::format_size;
pub use text::{
    ChunkIdDirection, format_chunk_id, format_filename, format_flag, format_layer,
    format_module_id, indent, map_lines, module_name, more_count, plural, resource_name,
};
pub use time::{format_date_time, format_time};
pub use value::{as_number, display_number, display_value, is_non_empty_array, is_truthy, is_valid_id};
