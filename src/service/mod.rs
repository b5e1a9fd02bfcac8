pub mod analysis;
pub mod keywords;
pub mod legal;
pub mod prompts;
pub mod validate;

pub use analysis::AnalysisService;
