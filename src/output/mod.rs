pub mod formatter;
pub mod json;

pub use formatter::{
    format_bonus, format_match_result, format_signed, should_use_colors,
};
pub use json::{to_json, write_json_file};
