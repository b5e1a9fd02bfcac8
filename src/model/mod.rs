pub mod classification;
pub mod config;

pub use classification::{
    AnalyzeRequest, ClassificationResult, KeywordClassification, LawSection, LegalInfo,
    PunishmentRange, Severity,
};
pub use config::{Config, ProviderConfig};
