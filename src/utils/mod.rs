pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::{DATA_DIR_ENV, resolve_data_dir};
pub use paths::{format_count, join_result_path, normalize_separators};
pub use terminal::sanitize_for_terminal;
