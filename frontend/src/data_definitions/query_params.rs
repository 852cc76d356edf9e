//! Navigable query parameters for the search route.

use std::collections::BTreeMap;
use std::fmt::Display;

use common::search_query::ParamValue;

/// The raw `?q=...&q=...&from=...` parameters of the search route, resolved
/// into the scalar-or-sequence shape the codec consumes. The URL built from
/// this is the only durable search state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchParams(pub BTreeMap<String, ParamValue>);

// Parsed from the raw query string by the router. Parsing never fails;
// whatever is malformed simply decodes to the default query downstream.
impl From<&str> for SearchParams {
    fn from(query: &str) -> Self {
        let mut map: BTreeMap<String, ParamValue> = BTreeMap::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let key = key.into_owned();
            let value = value.into_owned();
            match map.get_mut(&key) {
                None => {
                    map.insert(key, ParamValue::Single(value));
                }
                Some(existing) => {
                    let mut values = existing.values();
                    values.push(value);
                    *existing = ParamValue::Multiple(values);
                }
            }
        }
        SearchParams(map)
    }
}

// Display the parameters in a way that parses back to the same map.
impl Display for SearchParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.0 {
            match value {
                ParamValue::Single(v) => {
                    serializer.append_pair(key, v);
                }
                ParamValue::Multiple(vs) => {
                    for v in vs {
                        serializer.append_pair(key, v);
                    }
                }
            }
        }
        write!(f, "{}", serializer.finish())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_keys_collect_into_a_sequence() {
        let params = SearchParams::from("q=foo&q=kind%3DService&from=10");
        assert_eq!(
            params.0.get("q"),
            Some(&ParamValue::Multiple(vec![
                "foo".to_string(),
                "kind=Service".to_string()
            ]))
        );
        assert_eq!(
            params.0.get("from"),
            Some(&ParamValue::Single("10".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        let params = SearchParams::from("from=0&q=foo&q=kind%3DService");
        let reparsed = SearchParams::from(params.to_string().as_str());
        assert_eq!(params, reparsed);
    }

    #[test]
    fn empty_query_string_parses_to_no_params() {
        assert_eq!(SearchParams::from(""), SearchParams::default());
    }
}
