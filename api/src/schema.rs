//! Store schema and the one-shot JSON import

use crate::error::QuranError;
use rusqlite::{params, Connection};
use serde::Deserialize;

/// Surah entry as it appears in `quran_en.json`
#[derive(Debug, Clone, Deserialize)]
pub struct SurahRecord {
    pub id: i64,
    pub name: String,
    pub transliteration: String,
    pub translation: String,
    #[serde(rename = "type")]
    pub surah_type: String,
    pub total_verses: i64,
    #[serde(default)]
    pub verses: Vec<VerseRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerseRecord {
    pub id: i64,
    pub text: String,
    pub translation: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub surahs: usize,
    pub verses: usize,
    pub roots: usize,
}

/// Sample word/root/definition rows; nothing queries them yet
const SAMPLE_ROOTS: &[(&str, &str, &str)] = &[
    ("المكتبة", "كتب", "To write"),
    ("العلم", "علم", "Knowledge or to know"),
    ("القراءة", "قرأ", "To read"),
    ("الصلاة", "صل", "To pray or connection"),
];

/// Create the surahs, verses and roots tables if missing
pub fn create_schema(conn: &Connection) -> Result<(), QuranError> {
    conn.execute_batch(
        r#"
        PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS surahs (
            id INTEGER PRIMARY KEY,
            name TEXT,
            transliteration TEXT,
            translation TEXT,
            type TEXT,
            total_verses INTEGER
        );

        -- Verse numbers restart in every surah
        CREATE TABLE IF NOT EXISTS verses (
            id INTEGER,
            surah_id INTEGER,
            text TEXT,
            translation TEXT,
            PRIMARY KEY (id, surah_id),
            FOREIGN KEY (surah_id) REFERENCES surahs (id)
        );

        CREATE TABLE IF NOT EXISTS roots (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            word TEXT,
            root TEXT,
            definition TEXT
        );
        "#,
    )?;
    Ok(())
}

/// Parse the `quran_en.json` surah list
pub fn parse_surahs(json: &str) -> Result<Vec<SurahRecord>, QuranError> {
    serde_json::from_str(json).map_err(|e| QuranError::Import(format!("invalid surah JSON: {}", e)))
}

/// Copy surahs, their verses and the sample roots into the store.
///
/// Runs in a single transaction. Existing surah and verse keys are left
/// untouched, so re-importing the same file adds nothing.
pub fn import_surahs(conn: &mut Connection, surahs: &[SurahRecord]) -> Result<ImportStats, QuranError> {
    create_schema(conn)?;

    let tx = conn.transaction()?;
    let mut stats = ImportStats::default();
    {
        let mut insert_surah = tx.prepare(
            "INSERT OR IGNORE INTO surahs (id, name, transliteration, translation, type, total_verses)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;
        let mut insert_verse = tx.prepare(
            "INSERT OR IGNORE INTO verses (id, surah_id, text, translation)
             VALUES (?1, ?2, ?3, ?4)",
        )?;

        for surah in surahs {
            stats.surahs += insert_surah.execute(params![
                surah.id,
                surah.name,
                surah.transliteration,
                surah.translation,
                surah.surah_type,
                surah.total_verses,
            ])?;

            for verse in &surah.verses {
                stats.verses += insert_verse.execute(params![
                    verse.id,
                    surah.id,
                    verse.text,
                    verse.translation,
                ])?;
            }
        }

        // roots has no natural key, seed it once
        let existing: i64 = tx.query_row("SELECT COUNT(*) FROM roots", [], |row| row.get(0))?;
        if existing == 0 {
            let mut insert_root =
                tx.prepare("INSERT INTO roots (word, root, definition) VALUES (?1, ?2, ?3)")?;
            for &(word, root, definition) in SAMPLE_ROOTS {
                stats.roots += insert_root.execute(params![word, root, definition])?;
            }
        }
    }
    tx.commit()?;

    tracing::info!(
        surahs = stats.surahs,
        verses = stats.verses,
        roots = stats.roots,
        "import finished"
    );
    Ok(stats)
}
