mod validate;
mod verdict;

pub use validate::check_response;
pub use verdict::{parse_status, raw_status};
