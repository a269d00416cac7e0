//! Presentation: turn report data into text or a standalone HTML page.

pub mod html;
pub mod text;

pub use html::render_html_report;
pub use text::render_text_report;
