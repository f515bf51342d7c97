pub mod contact;
pub mod content;
pub mod formatting;
pub mod preview;
pub mod selection;
pub mod styles;

// Re-export key types for easier usage
pub use contact::{ContactError, ContactField, ContactForm};
pub use content::{Catalog, CatalogError, CodeSamples, ContentItem, Language, Section, StaticPage};
pub use formatting::{BlockKey, FormattedBlock, KeyedBlock, format, format_blocks};
pub use preview::{LivePreviewSources, MapView, PreviewAssets};
pub use selection::{Lookup, NavigationRequest, Selection, SelectionState};
