pub mod logs;

pub use logs::{
    log_error_banner, log_init, log_scoring, print_disclaimer, print_result, render_result,
};
