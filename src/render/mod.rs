mod html;

pub use html::{ReportData, build_report_data, render_html_report};
