//! Wire-format parameter flattening.
//!
//! RPC operations take their parameters as a flat `key=value` set, but the
//! request types model nested config naturally. This module converts a
//! serialized request into the flat form: nested objects become dotted
//! keys (`HealthCheckConfig.HealthCheckEnabled`), repeated elements are
//! 1-indexed (`ZoneMappings.1.ZoneId`), and unset optional fields are
//! omitted entirely.
//!
//! A few fields are exceptions and travel as a single JSON-encoded string
//! parameter instead; those are marked on the request types with
//! [`json_string_field`] so the flattener only ever sees a string.

use serde::Serialize;
use serde_json::Value;

use crate::error::Error;

/// Serialize a request type and flatten it into wire parameters.
pub(crate) fn to_params<T: Serialize>(request: &T) -> Result<Vec<(String, String)>, Error> {
    let value = serde_json::to_value(request).map_err(|e| Error::Deserialization {
        message: format!("failed to serialize request: {e}"),
        body: String::new(),
    })?;

    let mut params = Vec::new();
    flatten("", &value, &mut params);
    Ok(params)
}

fn flatten(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (key, child) in map {
                let key = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&key, child, out);
            }
        }
        Value::Array(items) => {
            for (idx, child) in items.iter().enumerate() {
                flatten(&format!("{prefix}.{}", idx + 1), child, out);
            }
        }
        Value::String(s) => out.push((prefix.to_owned(), s.clone())),
        Value::Bool(b) => out.push((prefix.to_owned(), b.to_string())),
        Value::Number(n) => out.push((prefix.to_owned(), n.to_string())),
    }
}

/// `serialize_with` helper: emit an optional nested struct as one
/// JSON-encoded string parameter. The string content equals marshaling the
/// nested struct directly.
pub fn json_string_field<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: serde::Serializer,
{
    match value {
        Some(inner) => {
            let rendered = serde_json::to_string(inner).map_err(serde::ser::Error::custom)?;
            serializer.serialize_str(&rendered)
        }
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Mapping {
        zone_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        v_switch_id: Option<String>,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Req {
        region_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        dry_run: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        cps: Option<i32>,
        zone_mappings: Vec<Mapping>,
    }

    #[test]
    fn arrays_are_one_indexed_and_dotted() {
        let req = Req {
            region_id: "cn-hangzhou".into(),
            dry_run: Some(true),
            cps: Some(1000),
            zone_mappings: vec![
                Mapping {
                    zone_id: "cn-hangzhou-a".into(),
                    v_switch_id: Some("vsw-1".into()),
                },
                Mapping {
                    zone_id: "cn-hangzhou-b".into(),
                    v_switch_id: None,
                },
            ],
        };

        let mut params = to_params(&req).unwrap();
        params.sort();
        assert_eq!(
            params,
            vec![
                ("Cps".to_owned(), "1000".to_owned()),
                ("DryRun".to_owned(), "true".to_owned()),
                ("RegionId".to_owned(), "cn-hangzhou".to_owned()),
                ("ZoneMappings.1.VSwitchId".to_owned(), "vsw-1".to_owned()),
                ("ZoneMappings.1.ZoneId".to_owned(), "cn-hangzhou-a".to_owned()),
                ("ZoneMappings.2.ZoneId".to_owned(), "cn-hangzhou-b".to_owned()),
            ]
        );
    }

    #[test]
    fn unset_optionals_are_omitted() {
        let req = Req {
            region_id: "cn-shanghai".into(),
            dry_run: None,
            cps: None,
            zone_mappings: Vec::new(),
        };

        let params = to_params(&req).unwrap();
        assert_eq!(params, vec![("RegionId".to_owned(), "cn-shanghai".to_owned())]);
    }

    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Shrunk {
        #[serde(
            skip_serializing_if = "Option::is_none",
            serialize_with = "json_string_field"
        )]
        proxy_protocol_v2_config: Option<Inner>,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Inner {
        ppv2_vpc_id_enabled: bool,
    }

    #[test]
    fn json_string_field_matches_direct_marshal() {
        let inner = Inner {
            ppv2_vpc_id_enabled: true,
        };
        let direct = serde_json::to_string(&inner).unwrap();

        let req = Shrunk {
            proxy_protocol_v2_config: Some(Inner {
                ppv2_vpc_id_enabled: true,
            }),
        };
        let params = to_params(&req).unwrap();
        assert_eq!(
            params,
            vec![("ProxyProtocolV2Config".to_owned(), direct)]
        );
    }
}
