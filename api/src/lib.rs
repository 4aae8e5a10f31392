//! Quran verse search and word lookup
//!
//! Romanized Arabic input is normalized to Arabic script, then either matched
//! against the verse store or sent to a translation provider. Arabic results
//! get a Latin pronunciation guide.

pub mod translit;
pub mod error;
pub mod schema;
pub mod verses;
pub mod translate;
pub mod config;
pub mod state;
pub mod routes;

pub use config::ServerConfig;
pub use error::QuranError;
pub use routes::router;
pub use state::AppState;
pub use translate::{lookup_word, GoogleTranslator, TranslationResult, Translator, WordLookup};
pub use translit::{arabic_to_phonetic, romanized_to_arabic};
pub use verses::{Surah, Verse, VerseRepository, VerseResult};
