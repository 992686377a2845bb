pub mod loader;
pub mod locale;
pub mod source;
pub mod trie;
pub mod wordlists;

pub use loader::{DictionaryLoader, LoadState};
pub use locale::{Locale, LocaleRegistry};
pub use source::{BundledSource, FileSource, HttpSource, PayloadSource, WordlistVariant};
pub use trie::canonicalize;
