use serde::Serialize;

/// One manifest entry. Struct field order is the field order in the JSON.
#[derive(Serialize, Debug, Clone)]
pub(crate) struct EssayRecord {
    /// Bare filename inside the essays directory.
    pub file: String,
    pub title: String,
    pub excerpt: String,
    pub lang: String,
    /// `YYYY-MM-DD` of the commit that added the file (or mtime fallback).
    pub published: String,
    /// `YYYY-MM-DD` of the last commit touching the file (or mtime fallback).
    pub updated: String,
}
