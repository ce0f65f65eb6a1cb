//! Custom widget components

mod dashboard;
mod footer;
mod header;
mod input_form;
mod loading;
pub mod markdown;
mod report_view;

pub use dashboard::Dashboard;
pub use footer::KeyHints;
pub use header::MainHeader;
pub use input_form::InputForm;
pub use loading::LoadingView;
pub use report_view::ReportView;
