//! Stateless CSS helpers used by the panels: selector specificity, rule
//! text, export code, layout lint and value parsing for the preview.

mod export;
mod rule;
mod specificity;
pub mod values;
mod warnings;

pub use export::{build_code, ExportMode};
pub use rule::{inline_declarations, rule_markup};
pub use specificity::{specificity, Specificity};
pub use warnings::{collect_warnings, Warning};
