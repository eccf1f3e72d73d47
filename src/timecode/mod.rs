mod types;
mod utils;

pub use types::TimeCode;
pub use utils::{parse_fields, parse_offset, TIMECODE_LEN};
