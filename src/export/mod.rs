pub mod translator;

pub use translator::GitExportTranslator;
