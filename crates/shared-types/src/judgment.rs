use serde::{Deserialize, Serialize};

use crate::AppError;

/// Field used to order lookup results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Relevance,
    Date,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Request body for the content service's judgment lookup endpoint.
///
/// The endpoint is a search endpoint; fetching a single judgment is a search
/// pinned to one identifier with an empty query and a page of one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JudgmentLookupRequest {
    pub id: i64,
    pub query: String,
    pub page_size: u32,
    pub page: u32,
    #[serde(rename = "sortBy")]
    pub sort_field: SortField,
    #[serde(rename = "sortOrder")]
    pub sort_direction: SortDirection,
}

impl JudgmentLookupRequest {
    pub fn for_id(id: i64) -> Self {
        Self {
            id,
            query: String::new(),
            page_size: 1,
            page: 0,
            sort_field: SortField::Relevance,
            sort_direction: SortDirection::Desc,
        }
    }
}

/// A judgment as delivered by the content service. Every field is optional on
/// the wire; presence of `id` is what marks a record as found.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct JudgmentRecord {
    pub id: Option<i64>,
    pub citation: Option<String>,
    pub court: Option<String>,
    pub appellant: Option<String>,
    pub respondent: Option<String>,
    pub case_no: Option<String>,
    pub date: Option<String>,
    pub issue: Option<String>,
    pub law_points: Option<String>,
    pub headnotes: Option<String>,
    pub held: Option<String>,
    pub facts: Option<String>,
    #[serde(alias = "partiesContentions")]
    pub contentions: Option<String>,
    pub disposition: Option<String>,
    #[serde(alias = "judgment")]
    pub judgment_text: Option<String>,
    #[serde(alias = "summary")]
    pub case_notes: Option<String>,
}

/// Lookup endpoint response envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct JudgmentLookupResponse {
    #[serde(default)]
    pub results: Vec<JudgmentRecord>,
    #[serde(default)]
    pub total: u64,
}

impl JudgmentLookupResponse {
    /// Take the first result, requiring its key field.
    ///
    /// An empty page and a record without `id` are both reported as
    /// `NotFound`; callers treat them the same as a transport failure.
    pub fn into_judgment(self) -> Result<Judgment, AppError> {
        let record = self
            .results
            .into_iter()
            .next()
            .ok_or_else(|| AppError::not_found("Judgment not found"))?;
        let id = record
            .id
            .ok_or_else(|| AppError::not_found("Judgment not found"))?;
        Ok(Judgment { id, record })
    }
}

/// A judgment whose key field has been verified.
#[derive(Debug, Clone, PartialEq)]
pub struct Judgment {
    pub id: i64,
    pub record: JudgmentRecord,
}

/// Parse a route segment into a judgment identifier.
pub fn parse_judgment_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::bad_request(format!("'{}' is not a valid judgment number", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_request_defaults() {
        let req = JudgmentLookupRequest::for_id(4521);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 4521,
                "query": "",
                "pageSize": 1,
                "page": 0,
                "sortBy": "relevance",
                "sortOrder": "desc"
            })
        );
    }

    #[test]
    fn record_accepts_partial_payload() {
        let record: JudgmentRecord =
            serde_json::from_str(r#"{"id": 7, "citation": "2019 SCC 112"}"#).unwrap();
        assert_eq!(record.id, Some(7));
        assert_eq!(record.citation.as_deref(), Some("2019 SCC 112"));
        assert!(record.facts.is_none());
    }

    #[test]
    fn record_accepts_legacy_field_names() {
        let record: JudgmentRecord = serde_json::from_str(
            r#"{"id": 7, "caseNo": "CA 11/2020", "partiesContentions": "x", "judgment": "full", "summary": "."}"#,
        )
        .unwrap();
        assert_eq!(record.case_no.as_deref(), Some("CA 11/2020"));
        assert_eq!(record.contentions.as_deref(), Some("x"));
        assert_eq!(record.judgment_text.as_deref(), Some("full"));
        assert_eq!(record.case_notes.as_deref(), Some("."));
    }

    #[test]
    fn into_judgment_requires_key_field() {
        let missing_id = JudgmentLookupResponse {
            results: vec![JudgmentRecord {
                citation: Some("AIR 1973 SC 1461".into()),
                ..Default::default()
            }],
            total: 1,
        };
        let err = missing_id.into_judgment().unwrap_err();
        assert_eq!(err.kind, crate::AppErrorKind::NotFound);

        let empty = JudgmentLookupResponse::default();
        assert!(empty.into_judgment().is_err());
    }

    #[test]
    fn into_judgment_takes_first_result() {
        let resp = JudgmentLookupResponse {
            results: vec![
                JudgmentRecord {
                    id: Some(1),
                    ..Default::default()
                },
                JudgmentRecord {
                    id: Some(2),
                    ..Default::default()
                },
            ],
            total: 2,
        };
        assert_eq!(resp.into_judgment().unwrap().id, 1);
    }

    #[test]
    fn parse_judgment_id_rejects_garbage() {
        assert_eq!(parse_judgment_id("42").unwrap(), 42);
        assert_eq!(parse_judgment_id(" 42 ").unwrap(), 42);
        assert!(parse_judgment_id("abc").is_err());
        assert!(parse_judgment_id("0").is_err());
        assert!(parse_judgment_id("-3").is_err());
    }
}
