pub mod use_analysis;
pub mod use_fetch;
pub mod use_posts;
