mod io_utils;
mod readers;
mod util;

pub use io_utils::derive_output_path;
pub use readers::read_input;
pub use util::{handle_error_and_exit, MarkerError, Result};
