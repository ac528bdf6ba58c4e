//! HTML report rendering.

pub mod html;

pub use html::render_html_report;
