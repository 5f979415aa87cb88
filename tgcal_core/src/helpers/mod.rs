pub mod dates;
pub mod utils;
