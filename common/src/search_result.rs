//! Search responses as the crawl service sends them, plus the normalized
//! in-memory result model.

use serde::{Deserialize, Serialize};

/// One category or time slice of an aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub key: String,
    pub count: u64,
}

/// Read-only aggregation input for the facet components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BucketAggregation {
    pub buckets: Vec<Bucket>,
    /// Results that did not fit into the returned buckets.
    #[serde(rename = "otherResults", default)]
    pub other_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Aggregations {
    pub kinds: Option<BucketAggregation>,
    pub timeseries: Option<BucketAggregation>,
}

/// A refinement emitted by a facet, consumed exactly once by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSelection {
    pub field: String,
    pub value: String,
}

impl FacetSelection {
    pub fn as_term(&self) -> String {
        format!("{}={}", self.field, self.value)
    }
}

/// One indexed kustomization file, normalized for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub repository_url: String,
    pub file_path: String,
    pub branch: String,
    pub snippet: String,
    pub created_at: String,
    pub highlighted_values: Vec<String>,
    pub kinds: Vec<String>,
}

impl SearchHit {
    /// Link to the file inside its repository.
    pub fn file_url(&self) -> String {
        format!("{}/blob/{}/{}", self.repository_url, self.branch, self.file_path)
    }
}

/// Normalized server response. Owned by the controller for one query cycle
/// and replaced wholesale on each new result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SearchResult {
    pub total_hits: u64,
    pub hits: Vec<SearchHit>,
    pub aggregations: Aggregations,
}

// Wire shapes, field for field what the crawl service emits.

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct SearchResponse {
    pub hits: Option<HitsEnvelope>,
    pub aggregations: Option<Aggregations>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct HitsEnvelope {
    pub total: u64,
    pub hits: Vec<HitEnvelope>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct HitEnvelope {
    pub id: String,
    pub result: HitDocument,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct HitDocument {
    pub repository_url: String,
    pub file_path: String,
    pub default_branch: String,
    pub document: String,
    pub creation_time: String,
    pub values: Vec<String>,
    pub kinds: Vec<String>,
}

const SNIPPET_MAX_CHARS: usize = 280;

impl From<SearchResponse> for SearchResult {
    fn from(response: SearchResponse) -> Self {
        let (total_hits, hits) = match response.hits {
            None => (0, Vec::new()),
            Some(envelope) => {
                let hits = envelope
                    .hits
                    .into_iter()
                    .map(|hit| SearchHit {
                        id: hit.id,
                        repository_url: hit.result.repository_url,
                        file_path: hit.result.file_path,
                        branch: hit.result.default_branch,
                        snippet: snippet_of(&hit.result.document),
                        created_at: hit.result.creation_time,
                        highlighted_values: hit.result.values,
                        kinds: hit.result.kinds,
                    })
                    .collect();
                (envelope.total, hits)
            }
        };
        SearchResult {
            total_hits,
            hits,
            aggregations: response.aggregations.unwrap_or_default(),
        }
    }
}

fn snippet_of(document: &str) -> String {
    if document.chars().count() <= SNIPPET_MAX_CHARS {
        return document.to_string();
    }
    let cut: String = document.chars().take(SNIPPET_MAX_CHARS).collect();
    format!("{cut}…")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_a_full_response() {
        let body = serde_json::json!({
            "hits": {
                "total": 42,
                "hits": [{
                    "id": "abc",
                    "result": {
                        "repositoryUrl": "https://github.com/org/repo",
                        "filePath": "base/kustomization.yaml",
                        "defaultBranch": "master",
                        "document": "resources:\n- deployment.yaml\n",
                        "creationTime": "2019-04-02T10:00:00Z",
                        "values": ["deployment.yaml"],
                        "kinds": ["Kustomization"]
                    }
                }]
            },
            "aggregations": {
                "kinds": {
                    "buckets": [{"key": "Deployment", "count": 7}],
                    "otherResults": 3
                },
                "timeseries": {
                    "buckets": [{"key": "2019-04-02", "count": 1}]
                }
            }
        });
        let response: SearchResponse = serde_json::from_value(body).expect("decode");
        let result = SearchResult::from(response);

        assert_eq!(result.total_hits, 42);
        assert_eq!(result.hits.len(), 1);
        let hit = &result.hits[0];
        assert_eq!(hit.branch, "master");
        assert_eq!(
            hit.file_url(),
            "https://github.com/org/repo/blob/master/base/kustomization.yaml"
        );
        let kinds = result.aggregations.kinds.expect("kinds aggregation");
        assert_eq!(kinds.other_count, 3);
        let timeseries = result.aggregations.timeseries.expect("timeseries");
        assert_eq!(timeseries.other_count, 0);
    }

    #[test]
    fn aggregation_only_response_has_no_hits() {
        let body = serde_json::json!({
            "aggregations": {
                "kinds": {"buckets": [], "otherResults": 0}
            }
        });
        let response: SearchResponse = serde_json::from_value(body).expect("decode");
        let result = SearchResult::from(response);
        assert_eq!(result.total_hits, 0);
        assert!(result.hits.is_empty());
    }

    #[test]
    fn long_documents_are_cut_to_a_snippet() {
        let long = "x".repeat(1000);
        let snippet = snippet_of(&long);
        assert!(snippet.chars().count() <= SNIPPET_MAX_CHARS + 1);
        assert!(snippet.ends_with('…'));
    }
}
