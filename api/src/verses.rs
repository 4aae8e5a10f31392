//! Read-only access to the surah/verse store

use crate::error::QuranError;
use crate::translit::arabic_to_phonetic;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Row};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surah {
    pub id: i64,
    pub name: String,
    pub transliteration: String,
    pub translation: String,
    /// "meccan" or "medinan"
    #[serde(rename = "type")]
    pub surah_type: String,
    pub total_verses: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Verse number, unique only within its surah
    pub id: i64,
    pub surah_id: i64,
    pub text: String,
    pub translation: String,
}

/// One search hit, shaped for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseResult {
    pub surah_name: String,
    pub surah_number: i64,
    pub verse_number: i64,
    pub arabic: String,
    pub translation: String,
    pub pronunciation: String,
}

/// SQLite refuses LIKE patterns longer than this many bytes
/// (`SQLITE_MAX_LIKE_PATTERN_LENGTH`)
const MAX_LIKE_PATTERN_BYTES: usize = 50_000;

const SURAH_COLUMNS: &str = "id, name, transliteration, translation, type, total_verses";

fn row_to_surah(row: &Row) -> rusqlite::Result<Surah> {
    Ok(Surah {
        id: row.get(0)?,
        name: row.get(1)?,
        transliteration: row.get(2)?,
        translation: row.get(3)?,
        surah_type: row.get(4)?,
        total_verses: row.get(5)?,
    })
}

/// Escape LIKE metacharacters so the term matches literally
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Verse store handle.
///
/// Owns its connection; dropping the repository closes it, so a handler that
/// opens one per request releases it on every exit path.
pub struct VerseRepository {
    conn: Connection,
}

impl VerseRepository {
    /// Open an existing store read-only
    pub fn open(path: &Path) -> Result<Self, QuranError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| QuranError::StoreUnavailable(format!("{}: {}", path.display(), e)))?;
        Ok(Self { conn })
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Verses whose Arabic text or English translation contains `term`.
    ///
    /// The term is matched as a literal substring. SQLite folds ASCII case in
    /// `LIKE`, so "allah" finds "Allah"; Arabic is compared exactly. An empty
    /// term matches every verse. Results follow surah then verse order.
    /// A term too long for a LIKE pattern is longer than any verse, so it
    /// yields no hits.
    pub fn search_verses(&self, term: &str) -> Result<Vec<VerseResult>, QuranError> {
        let pattern = format!("%{}%", escape_like(term));
        if pattern.len() > MAX_LIKE_PATTERN_BYTES {
            tracing::debug!(bytes = pattern.len(), "search pattern over LIKE limit");
            return Ok(Vec::new());
        }

        let mut stmt = self.conn.prepare(
            r#"SELECT surahs.name, surahs.id, verses.id, verses.text, verses.translation
               FROM verses
               JOIN surahs ON verses.surah_id = surahs.id
               WHERE verses.text LIKE ?1 ESCAPE '\' OR verses.translation LIKE ?1 ESCAPE '\'
               ORDER BY verses.surah_id, verses.id"#,
        )?;

        let results = stmt
            .query_map(params![pattern], |row| {
                let arabic: String = row.get(3)?;
                Ok(VerseResult {
                    surah_name: row.get(0)?,
                    surah_number: row.get(1)?,
                    verse_number: row.get(2)?,
                    pronunciation: arabic_to_phonetic(&arabic),
                    arabic,
                    translation: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(term, hits = results.len(), "verse search");
        Ok(results)
    }

    pub fn get_surah(&self, id: i64) -> Result<Option<Surah>, QuranError> {
        let surah = self
            .conn
            .query_row(
                &format!("SELECT {} FROM surahs WHERE id = ?1", SURAH_COLUMNS),
                params![id],
                row_to_surah,
            )
            .optional()?;
        Ok(surah)
    }

    pub fn get_verse(&self, surah_id: i64, verse_id: i64) -> Result<Option<Verse>, QuranError> {
        let verse = self
            .conn
            .query_row(
                "SELECT id, surah_id, text, translation FROM verses WHERE surah_id = ?1 AND id = ?2",
                params![surah_id, verse_id],
                |row| {
                    Ok(Verse {
                        id: row.get(0)?,
                        surah_id: row.get(1)?,
                        text: row.get(2)?,
                        translation: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(verse)
    }

    pub fn count_verses(&self) -> Result<usize, QuranError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM verses", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
