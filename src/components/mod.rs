pub mod analysis_dialog;
pub mod error_banner;
pub mod loader;
pub mod metrics_chart;
pub mod metrics_grid;
pub mod post_card;
pub mod post_grid;
pub mod search_bar;

pub use analysis_dialog::AnalysisDialog;
pub use error_banner::ErrorBanner;
pub use loader::Loader;
pub use post_grid::PostGrid;
pub use search_bar::SearchBar;
