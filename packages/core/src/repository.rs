//! Read-only queries over the `entries` table.
//!
//! Each method opens its own connection via [`Database::connect`], runs a
//! single statement and closes the connection before returning.

use serde::{Deserialize, Serialize};
use sqlx::{Connection, Row};

use crate::db::Database;

/// Separator the ingestion process uses when joining author names.
pub const AUTHOR_SEPARATOR: &str = ", ";

/// Number of entries recorded for one (country, year) pair.
///
/// `country` and `year` are `None` for the group of rows where the column
/// is NULL; they serialize as JSON `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCount {
    pub country: Option<String>,
    pub year: Option<i64>,
    pub count: i64,
}

/// Detail view of a single entry. NULL `title`/`doi` come back as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    pub title: Option<String>,
    pub doi: Option<String>,
    pub authors: Vec<String>,
}

/// Split a stored author string into names.
///
/// An empty string yields `[""]`, not `[]`; the front-end page renders that
/// shape as a blank author line.
pub fn split_authors(raw: &str) -> Vec<String> {
    raw.split(AUTHOR_SEPARATOR).map(str::to_string).collect()
}

/// Repository for reading paper metadata from SQLite.
#[derive(Debug, Clone)]
pub struct EntryRepository {
    db: Database,
}

impl EntryRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Count entries per distinct (country, year). Row order is whatever
    /// SQLite returns for the GROUP BY.
    pub async fn country_counts(&self) -> Result<Vec<CountryCount>, sqlx::Error> {
        let mut conn = self.db.connect().await?;

        let rows = sqlx::query(
            "SELECT country, year, COUNT(*) AS count
             FROM entries
             GROUP BY country, year",
        )
        .fetch_all(&mut conn)
        .await?;

        conn.close().await?;

        let counts = rows
            .into_iter()
            .map(|row| -> Result<CountryCount, sqlx::Error> {
                Ok(CountryCount {
                    country: row.try_get("country")?,
                    year: row.try_get("year")?,
                    count: row.try_get("count")?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(groups = counts.len(), "Loaded country counts");
        Ok(counts)
    }

    /// Fetch every entry matching both `country` and `year` exactly.
    ///
    /// A row with NULL `authors` has no author list to split and fails the
    /// whole query with [`sqlx::Error::ColumnDecode`].
    pub async fn papers_by_country_and_year(
        &self,
        country: &str,
        year: i64,
    ) -> Result<Vec<Paper>, sqlx::Error> {
        let mut conn = self.db.connect().await?;

        let rows = sqlx::query(
            "SELECT title, doi, authors
             FROM entries
             WHERE country = ? AND year = ?",
        )
        .bind(country)
        .bind(year)
        .fetch_all(&mut conn)
        .await?;

        conn.close().await?;

        let papers = rows
            .into_iter()
            .map(|row| -> Result<Paper, sqlx::Error> {
                let authors: Option<String> = row.try_get("authors")?;
                let authors = authors.ok_or_else(|| sqlx::Error::ColumnDecode {
                    index: "authors".to_string(),
                    source: "unexpected NULL in authors column".into(),
                })?;
                Ok(Paper {
                    title: row.try_get("title")?,
                    doi: row.try_get("doi")?,
                    authors: split_authors(&authors),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(country, year, papers = papers.len(), "Loaded papers");
        Ok(papers)
    }
}
