pub mod config;
pub mod generator;
pub mod markdown;
pub mod nav;
pub mod scanner;
pub mod template;
pub mod writer;

// Re-export main types
pub use config::{Config, ConfigError, SiteConfig, TemplateKind};
pub use generator::{GenerateError, Generator};
pub use markdown::{ParsedDocument, parse_document, slugify};
pub use nav::{MenuItem, NavContext, build_nav};
pub use scanner::{Category, ContentScanner, ScanError};
pub use template::{TemplateError, TemplateRenderer};
