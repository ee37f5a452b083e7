//! i18n-resolver
//!
//! Locale-keyed translation tables with fallback-locale resolution, `@name`
//! placeholder substitution and singular/plural selection.

pub mod config;
pub mod ext;
pub mod indexer;
pub mod input;
pub mod interpolate;
pub mod plural;
pub mod resolver;
pub mod types;

pub use ext::Translate;
pub use plural::PluralMode;
pub use resolver::{
    SharedResolver,
    TranslationResolver,
};
pub use types::{
    Locale,
    LocaleKey,
    LocaleParseError,
    TextDirection,
    TranslationTable,
};
