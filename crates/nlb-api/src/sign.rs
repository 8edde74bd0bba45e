//! RPC-style request signing (signature version 1.0).
//!
//! Every request carries the common parameters (`Format`, `Version`,
//! `AccessKeyId`, `SignatureMethod`, `SignatureVersion`, `SignatureNonce`,
//! `Timestamp`) plus the operation parameters. The whole set is
//! canonicalized, signed with HMAC-SHA1 keyed by `{secret}&`, and the
//! base64 signature is appended as the `Signature` parameter.
//!
//! The percent-encoding rules differ from plain form encoding: space is
//! `%20` (never `+`), `*` is `%2A`, and `~` stays literal.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use hmac::{Hmac, Mac};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use secrecy::ExposeSecret;
use sha1::Sha1;
use uuid::Uuid;

use crate::credential::Credential;
use crate::error::Error;

type HmacSha1 = Hmac<Sha1>;

/// Characters kept literal: RFC 3986 unreserved.
const UNRESERVED: percent_encoding::AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode one key or value per the signature rules.
pub(crate) fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, &UNRESERVED).to_string()
}

/// Sort by key (byte order) and join `k=v` pairs with `&`, encoding both
/// sides. The service signs exactly this string, so ordering and encoding
/// must match on both ends.
pub(crate) fn canonicalized_query(params: &[(String, String)]) -> String {
    let mut sorted: Vec<&(String, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    sorted
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// `{METHOD}&{encode("/")}&{encode(canonicalizedQuery)}`.
pub(crate) fn string_to_sign(method: &str, canonical: &str) -> String {
    format!("{method}&{}&{}", percent_encode("/"), percent_encode(canonical))
}

/// HMAC-SHA1 over the string-to-sign, keyed with `{secret}&`, base64-encoded.
pub(crate) fn compute_signature(to_sign: &str, access_key_secret: &str) -> Result<String, Error> {
    let key = format!("{access_key_secret}&");
    let mut mac = HmacSha1::new_from_slice(key.as_bytes())
        .map_err(|e| Error::Signing(format!("invalid HMAC key: {e}")))?;
    mac.update(to_sign.as_bytes());
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

/// The current UTC time in the `2006-01-02T15:04:05Z` shape the signature
/// scheme expects.
fn timestamp_now() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Add the common parameters and the `Signature` to an operation's
/// parameter set, consuming fresh nonce and timestamp values.
pub(crate) fn sign_request(
    method: &str,
    action: &str,
    api_version: &str,
    credential: &Credential,
    mut params: Vec<(String, String)>,
) -> Result<Vec<(String, String)>, Error> {
    sign_request_at(
        method,
        action,
        api_version,
        credential,
        &mut params,
        &timestamp_now(),
        &Uuid::new_v4().to_string(),
    )?;
    Ok(params)
}

/// Deterministic core of [`sign_request`]; split out so tests can pin the
/// timestamp and nonce.
pub(crate) fn sign_request_at(
    method: &str,
    action: &str,
    api_version: &str,
    credential: &Credential,
    params: &mut Vec<(String, String)>,
    timestamp: &str,
    nonce: &str,
) -> Result<(), Error> {
    params.push(("Action".into(), action.into()));
    params.push(("Version".into(), api_version.into()));
    params.push(("Format".into(), "JSON".into()));
    params.push(("AccessKeyId".into(), credential.access_key_id.clone()));
    params.push(("SignatureMethod".into(), "HMAC-SHA1".into()));
    params.push(("SignatureVersion".into(), "1.0".into()));
    params.push(("SignatureNonce".into(), nonce.into()));
    params.push(("Timestamp".into(), timestamp.into()));

    if let Some(token) = &credential.security_token {
        params.push(("SecurityToken".into(), token.expose_secret().to_owned()));
    }

    let canonical = canonicalized_query(params);
    let to_sign = string_to_sign(method, &canonical);
    let signature =
        compute_signature(&to_sign, credential.access_key_secret.expose_secret())?;
    params.push(("Signature".into(), signature));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // The worked example from the Alibaba Cloud RPC signature documentation.
    fn doc_example_params() -> Vec<(String, String)> {
        vec![
            ("Action".into(), "DescribeRegions".into()),
            ("Version".into(), "2014-05-26".into()),
            ("Format".into(), "XML".into()),
            ("AccessKeyId".into(), "testid".into()),
            ("SignatureMethod".into(), "HMAC-SHA1".into()),
            ("SignatureVersion".into(), "1.0".into()),
            (
                "SignatureNonce".into(),
                "3ee8c1b8-83d3-44af-a94f-4e0ad82fd6cf".into(),
            ),
            ("Timestamp".into(), "2016-02-23T12:46:24Z".into()),
        ]
    }

    #[test]
    fn percent_encoding_rules() {
        assert_eq!(percent_encode("a b"), "a%20b");
        assert_eq!(percent_encode("a+b"), "a%2Bb");
        assert_eq!(percent_encode("a*b"), "a%2Ab");
        assert_eq!(percent_encode("a~b"), "a~b");
        assert_eq!(percent_encode("2016-02-23T12:46:24Z"), "2016-02-23T12%3A46%3A24Z");
    }

    #[test]
    fn canonical_query_sorts_by_byte_order() {
        let params = vec![
            ("Timestamp".into(), "t".into()),
            ("Action".into(), "a".into()),
            ("AccessKeyId".into(), "k".into()),
        ];
        let canonical = canonicalized_query(&params);
        assert_eq!(canonical, "AccessKeyId=k&Action=a&Timestamp=t");
    }

    #[test]
    fn doc_example_string_to_sign() {
        let canonical = canonicalized_query(&doc_example_params());
        let to_sign = string_to_sign("GET", &canonical);
        assert_eq!(
            to_sign,
            "GET&%2F&AccessKeyId%3Dtestid%26Action%3DDescribeRegions%26Format%3DXML\
             %26SignatureMethod%3DHMAC-SHA1%26SignatureNonce%3D3ee8c1b8-83d3-44af-a94f-4e0ad82fd6cf\
             %26SignatureVersion%3D1.0%26Timestamp%3D2016-02-23T12%253A46%253A24Z\
             %26Version%3D2014-05-26"
        );
    }

    #[test]
    fn doc_example_signature() {
        let canonical = canonicalized_query(&doc_example_params());
        let to_sign = string_to_sign("GET", &canonical);
        let signature = compute_signature(&to_sign, "testsecret").unwrap();
        assert_eq!(signature, "CT9X0VtwR86fNWSnsc6v8YGOjuE=");
    }

    #[test]
    fn sign_request_appends_signature_and_common_params() {
        let cred = crate::credential::Credential::new("testid", "testsecret");
        let mut params = vec![("RegionId".into(), "cn-hangzhou".into())];
        sign_request_at(
            "POST",
            "ListLoadBalancers",
            "2022-04-30",
            &cred,
            &mut params,
            "2024-06-01T00:00:00Z",
            "nonce",
        )
        .unwrap();

        let keys: Vec<&str> = params.iter().map(|(k, _)| k.as_str()).collect();
        assert!(keys.contains(&"Signature"));
        assert!(keys.contains(&"Action"));
        assert!(keys.contains(&"Timestamp"));
        // Signing twice with the same inputs is deterministic.
        let mut again = vec![("RegionId".into(), "cn-hangzhou".into())];
        sign_request_at(
            "POST",
            "ListLoadBalancers",
            "2022-04-30",
            &cred,
            &mut again,
            "2024-06-01T00:00:00Z",
            "nonce",
        )
        .unwrap();
        assert_eq!(params, again);
    }

    #[test]
    fn security_token_is_signed() {
        let cred = crate::credential::Credential::new("testid", "testsecret")
            .with_security_token("sts-token");
        let mut params = Vec::new();
        sign_request_at(
            "POST",
            "ListLoadBalancers",
            "2022-04-30",
            &cred,
            &mut params,
            "2024-06-01T00:00:00Z",
            "nonce",
        )
        .unwrap();
        assert!(params.iter().any(|(k, v)| k == "SecurityToken" && v == "sts-token"));
    }
}
