//! Registry search: LIKE-based multi-column OR queries over the
//! business/affiliate join.
//!
//! Search columns are validated against the live catalog before they reach
//! SQL text; search terms are always bound as parameters.

use crate::error::SearchError;
use connectors::sqlite::{connection::SqliteConnection, metadata};
use model::{core::value::Value, records::row::RowData};
use planner::query::{
    alias,
    ast::{common::TableRef, expr::Expr},
    builder::select::SelectBuilder,
    eq, like, qualified,
    renderer::{Render, Renderer},
    value,
};
use serde::Serialize;
use std::collections::HashSet;
use tracing::info;

pub const BUSINESS_TABLE: &str = "organizations_old";
pub const AFFILIATE_TABLE: &str = "affiliates";

const DEFAULT_BUSINESS_COLUMNS: &[&str] = &[
    "organization_id",
    "rcNumber",
    "approvedName",
    "natureOfBusinessFk",
    "classificationFk",
    "address",
];
const DEFAULT_AFFILIATE_COLUMNS: &[&str] = &["surname", "firstname", "otherName", "email"];

/// One joined business/affiliate row.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub business_id: Option<i64>,
    pub business_name: Option<String>,
    pub business_number: Option<String>,
    pub address: Option<String>,
    pub affiliate_id: Option<i64>,
    pub surname: Option<String>,
    pub firstname: Option<String>,
    pub other_name: Option<String>,
    pub email: Option<String>,
}

impl SearchHit {
    fn from_row(row: &RowData) -> Self {
        Self {
            business_id: row.get("business_id").and_then(Value::as_i64),
            business_name: field(row, "business_name"),
            business_number: field(row, "business_number"),
            address: field(row, "address"),
            affiliate_id: row.get("affiliate_id").and_then(Value::as_i64),
            surname: field(row, "surname"),
            firstname: field(row, "firstname"),
            other_name: field(row, "other_name"),
            email: field(row, "email"),
        }
    }
}

/// A business with every affiliate attached to it.
#[derive(Debug, Clone, Serialize)]
pub struct BusinessProfile {
    pub business_id: i64,
    pub business_name: Option<String>,
    pub business_number: Option<String>,
    pub address: Option<String>,
    pub affiliates: Vec<AffiliateRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AffiliateRecord {
    pub affiliate_id: i64,
    pub surname: Option<String>,
    pub firstname: Option<String>,
    pub other_name: Option<String>,
    pub email: Option<String>,
}

/// OR-LIKE search over business columns, affiliates joined in.
pub fn search_businesses(
    conn: &SqliteConnection,
    term: &str,
    columns: Option<&[String]>,
    limit: Option<i64>,
) -> Result<Vec<SearchHit>, SearchError> {
    let columns = resolve_columns(conn, BUSINESS_TABLE, columns, DEFAULT_BUSINESS_COLUMNS)?;
    let hits = run_search(conn, term, "b", &columns, limit)?;
    info!(term, hits = hits.len(), "business search complete");
    Ok(hits)
}

/// OR-LIKE search over affiliate columns, same join.
pub fn search_affiliates(
    conn: &SqliteConnection,
    term: &str,
    columns: Option<&[String]>,
    limit: Option<i64>,
) -> Result<Vec<SearchHit>, SearchError> {
    let columns = resolve_columns(conn, AFFILIATE_TABLE, columns, DEFAULT_AFFILIATE_COLUMNS)?;
    let hits = run_search(conn, term, "a", &columns, limit)?;
    info!(term, hits = hits.len(), "affiliate search complete");
    Ok(hits)
}

/// Union of business and affiliate searches, deduplicated by
/// `(business_id, affiliate_id)`, first occurrence wins.
pub fn search_combined(
    conn: &SqliteConnection,
    term: &str,
    limit: Option<i64>,
) -> Result<Vec<SearchHit>, SearchError> {
    let business_hits = search_businesses(conn, term, None, limit)?;
    let affiliate_hits = search_affiliates(conn, term, None, limit)?;

    let mut seen = HashSet::new();
    let mut merged = Vec::new();
    for hit in business_hits.into_iter().chain(affiliate_hits) {
        if seen.insert((hit.business_id, hit.affiliate_id)) {
            merged.push(hit);
        }
    }
    Ok(merged)
}

/// One business by id, with all of its affiliates.
pub fn business_profile(
    conn: &SqliteConnection,
    business_id: i64,
) -> Result<Option<BusinessProfile>, SearchError> {
    let select = SelectBuilder::from(TableRef::new(BUSINESS_TABLE), Some("b"))
        .columns(hit_columns())
        .left_join(TableRef::new(AFFILIATE_TABLE), "a", join_condition())
        .filter(eq(qualified("b", "id"), value(Value::Int(business_id))))
        .order_by(qualified("a", "id"), None)
        .build();

    let (sql, params) = render(&select);
    let rows = conn.query(&sql, &params)?;

    let Some(first) = rows.first() else {
        return Ok(None);
    };

    let affiliates = rows
        .iter()
        .filter_map(|row| {
            let affiliate_id = row.get("affiliate_id").and_then(Value::as_i64)?;
            Some(AffiliateRecord {
                affiliate_id,
                surname: field(row, "surname"),
                firstname: field(row, "firstname"),
                other_name: field(row, "other_name"),
                email: field(row, "email"),
            })
        })
        .collect();

    Ok(Some(BusinessProfile {
        business_id,
        business_name: field(first, "business_name"),
        business_number: field(first, "business_number"),
        address: field(first, "address"),
        affiliates,
    }))
}

fn run_search(
    conn: &SqliteConnection,
    term: &str,
    qualifier: &str,
    columns: &[String],
    limit: Option<i64>,
) -> Result<Vec<SearchHit>, SearchError> {
    let mut builder = SelectBuilder::from(TableRef::new(BUSINESS_TABLE), Some("b"))
        .columns(hit_columns())
        .left_join(TableRef::new(AFFILIATE_TABLE), "a", join_condition())
        .filter(or_like(qualifier, columns, term))
        .order_by(qualified("b", "id"), None)
        .order_by(qualified("a", "id"), None);
    if let Some(n) = limit {
        builder = builder.limit(n);
    }

    let (sql, params) = render(&builder.build());
    let rows = conn.query(&sql, &params)?;
    Ok(rows.iter().map(SearchHit::from_row).collect())
}

fn resolve_columns(
    conn: &SqliteConnection,
    table: &str,
    requested: Option<&[String]>,
    defaults: &[&str],
) -> Result<Vec<String>, SearchError> {
    let columns: Vec<String> = match requested {
        Some(columns) => columns.to_vec(),
        None => defaults.iter().map(|s| s.to_string()).collect(),
    };

    let known: HashSet<String> = metadata::table_columns(conn, table)?
        .into_iter()
        .map(|col| col.name)
        .collect();
    for column in &columns {
        if !known.contains(column) {
            return Err(SearchError::UnknownColumn {
                table: table.to_string(),
                column: column.clone(),
            });
        }
    }
    Ok(columns)
}

fn hit_columns() -> Vec<Expr> {
    vec![
        alias(qualified("b", "id"), "business_id"),
        alias(qualified("b", "approvedName"), "business_name"),
        alias(qualified("b", "rcNumber"), "business_number"),
        alias(qualified("b", "address"), "address"),
        alias(qualified("a", "id"), "affiliate_id"),
        alias(qualified("a", "surname"), "surname"),
        alias(qualified("a", "firstname"), "firstname"),
        alias(qualified("a", "otherName"), "other_name"),
        alias(qualified("a", "email"), "email"),
    ]
}

fn join_condition() -> Expr {
    eq(
        qualified("b", "organization_id"),
        qualified("a", "organization_id"),
    )
}

fn or_like(qualifier: &str, columns: &[String], term: &str) -> Expr {
    let pattern = format!("%{term}%");
    Expr::Or(
        columns
            .iter()
            .map(|column| {
                like(
                    qualified(qualifier, column),
                    value(Value::Text(pattern.clone())),
                )
            })
            .collect(),
    )
}

fn field(row: &RowData, name: &str) -> Option<String> {
    row.get(name).filter(|v| !v.is_null()).and_then(Value::as_string)
}

fn render(node: &impl Render) -> (String, Vec<Value>) {
    let mut renderer = Renderer::new();
    node.render(&mut renderer);
    renderer.finish()
}
