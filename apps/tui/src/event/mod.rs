mod loop_handler;

pub use loop_handler::{
    build_headless_report, render_headless_text, run, run_headless, HeadlessOptions,
    HeadlessReport,
};
