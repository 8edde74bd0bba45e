// Integration tests for `Client` using wiremock.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nlb_api::types::common::{AddressType, ListenerProtocol};
use nlb_api::types::listener::{CreateListenerRequest, ProxyProtocolV2Config};
use nlb_api::types::load_balancer::{
    CreateLoadBalancerRequest, GetLoadBalancerAttributeRequest, ListLoadBalancersRequest,
};
use nlb_api::{Client, Credential, Endpoint, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let client = Client::from_reqwest(
        reqwest::Client::new(),
        Credential::new("test-ak", "test-secret"),
        Endpoint::custom(&server.uri()).unwrap(),
    )
    .unwrap();
    (server, client)
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_load_balancers() {
    let (server, client) = setup().await;

    let body = json!({
        "RequestId": "2198BD6D-0A95-5DB3-9E7A-1234567890AB",
        "MaxResults": 20,
        "TotalCount": 1,
        "NextToken": null,
        "LoadBalancers": [{
            "LoadBalancerId": "nlb-83ckzc8d4xlp8o",
            "LoadBalancerName": "edge-ingress",
            "LoadBalancerType": "Network",
            "LoadBalancerStatus": "Active",
            "LoadBalancerBusinessStatus": "Normal",
            "AddressType": "Internet",
            "AddressIpVersion": "Ipv4",
            "DNSName": "nlb-83ckzc8d4xlp8o.cn-hangzhou.nlb.aliyuncs.com",
            "VpcId": "vpc-bp1b49rqrybk45nio",
            "RegionId": "cn-hangzhou",
            "CrossZoneEnabled": true,
            "ZoneMappings": [{
                "ZoneId": "cn-hangzhou-a",
                "VSwitchId": "vsw-bp1rmcrwg3erh1fh8",
                "Status": "Active",
                "LoadBalancerAddresses": [{
                    "EniId": "eni-bp12f1xhs5yal61a",
                    "PrivateIPv4Address": "192.168.3.32",
                    "PublicIPv4Address": "120.26.xx.xx"
                }]
            }]
        }]
    });

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("Action=ListLoadBalancers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let page = client
        .list_load_balancers(&ListLoadBalancersRequest::default())
        .await
        .unwrap();

    assert_eq!(page.total_count, Some(1));
    assert_eq!(page.load_balancers.len(), 1);

    let lb = &page.load_balancers[0];
    assert_eq!(lb.load_balancer_id.as_deref(), Some("nlb-83ckzc8d4xlp8o"));
    assert_eq!(lb.load_balancer_status.as_deref(), Some("Active"));
    assert_eq!(
        lb.dns_name.as_deref(),
        Some("nlb-83ckzc8d4xlp8o.cn-hangzhou.nlb.aliyuncs.com")
    );
    assert_eq!(lb.zone_mappings[0].zone_id.as_deref(), Some("cn-hangzhou-a"));
    assert_eq!(
        lb.zone_mappings[0].load_balancer_addresses[0]
            .private_ipv4_address
            .as_deref(),
        Some("192.168.3.32")
    );
}

#[tokio::test]
async fn test_request_carries_signature_params() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(body_string_contains("Action=GetLoadBalancerAttribute"))
        .and(body_string_contains("Version=2022-04-30"))
        .and(body_string_contains("Format=JSON"))
        .and(body_string_contains("AccessKeyId=test-ak"))
        .and(body_string_contains("SignatureMethod=HMAC-SHA1"))
        .and(body_string_contains("SignatureVersion=1.0"))
        .and(body_string_contains("Signature="))
        .and(body_string_contains("LoadBalancerId=nlb-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "RequestId": "r-1",
            "LoadBalancerId": "nlb-1",
            "LoadBalancerStatus": "Active"
        })))
        .mount(&server)
        .await;

    let resp = client
        .get_load_balancer_attribute(&GetLoadBalancerAttributeRequest::new("nlb-1"))
        .await
        .unwrap();

    assert_eq!(resp.request_id, "r-1");
    assert_eq!(resp.load_balancer.load_balancer_id.as_deref(), Some("nlb-1"));
}

#[tokio::test]
async fn test_unset_optionals_stay_off_the_wire() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "RequestId": "r-2",
            "LoadBalancers": []
        })))
        .mount(&server)
        .await;

    client
        .list_load_balancers(&ListLoadBalancersRequest::default())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let sent = String::from_utf8(requests[0].body.clone()).unwrap();
    assert!(!sent.contains("DryRun"), "unset DryRun leaked: {sent}");
    assert!(!sent.contains("NextToken"), "unset NextToken leaked: {sent}");
    assert!(!sent.contains("RegionId"), "unset RegionId leaked: {sent}");
}

#[tokio::test]
async fn test_create_listener_shrinks_proxy_protocol_config() {
    let (server, client) = setup().await;

    // The nested config must travel as one JSON-string parameter whose
    // content equals marshaling the struct directly.
    let expected = serde_json::to_string(&ProxyProtocolV2Config {
        ppv2_vpc_id_enabled: Some(true),
        ..ProxyProtocolV2Config::default()
    })
    .unwrap();
    assert_eq!(expected, r#"{"Ppv2VpcIdEnabled":true}"#);

    Mock::given(method("POST"))
        .and(body_string_contains("Action=CreateListener"))
        .and(body_string_contains(
            "ProxyProtocolV2Config=%7B%22Ppv2VpcIdEnabled%22%3Atrue%7D",
        ))
        .and(body_string_contains("ListenerProtocol=TCPSSL"))
        .and(body_string_contains("ListenerPort=443"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "RequestId": "r-3",
            "ListenerId": "lsn-bp1bpn0kn908w4nbw",
            "JobId": "72dcd26b-f12d-4c27-b3af-18f6aed5"
        })))
        .mount(&server)
        .await;

    let mut req = CreateListenerRequest::new(
        "nlb-83ckzc8d4xlp8o",
        "sgp-ppdpc14gdm3x4o",
        ListenerProtocol::TcpSsl,
        443,
    );
    req.proxy_protocol_v2_config = Some(ProxyProtocolV2Config {
        ppv2_vpc_id_enabled: Some(true),
        ..ProxyProtocolV2Config::default()
    });

    let resp = client.create_listener(&req).await.unwrap();
    assert_eq!(resp.listener_id.as_deref(), Some("lsn-bp1bpn0kn908w4nbw"));
    assert!(resp.job_id.is_some());
}

#[tokio::test]
async fn test_nested_zone_mappings_flatten_with_indexes() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(body_string_contains("Action=CreateLoadBalancer"))
        .and(body_string_contains("ZoneMappings.1.ZoneId=cn-hangzhou-a"))
        .and(body_string_contains("ZoneMappings.1.VSwitchId=vsw-1"))
        .and(body_string_contains("ZoneMappings.2.ZoneId=cn-hangzhou-b"))
        .and(body_string_contains("AddressType=Intranet"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "RequestId": "r-4",
            "LoadbalancerId": "nlb-new",
            "OrderId": 20230001
        })))
        .mount(&server)
        .await;

    use nlb_api::types::load_balancer::ZoneMappingRequest;
    let req = CreateLoadBalancerRequest::new(
        AddressType::Intranet,
        "vpc-1",
        vec![
            ZoneMappingRequest::new("cn-hangzhou-a", "vsw-1"),
            ZoneMappingRequest::new("cn-hangzhou-b", "vsw-2"),
        ],
    );

    let resp = client.create_load_balancer(&req).await.unwrap();
    assert_eq!(resp.load_balancer_id.as_deref(), Some("nlb-new"));
    assert_eq!(resp.order_id, Some(20230001));
}

// ── Pagination ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_paginate_all_drains_every_page() {
    let (server, client) = setup().await;

    let page1 = json!({
        "RequestId": "r-5",
        "NextToken": "tok-2",
        "TotalCount": 3,
        "LoadBalancers": [
            { "LoadBalancerId": "nlb-1" },
            { "LoadBalancerId": "nlb-2" },
        ]
    });
    let page2 = json!({
        "RequestId": "r-6",
        "NextToken": "",
        "TotalCount": 3,
        "LoadBalancers": [
            { "LoadBalancerId": "nlb-3" },
        ]
    });

    // First call gets page 1 (mock expires after one use), second gets
    // page 2.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&page1))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("NextToken=tok-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&page2))
        .mount(&server)
        .await;

    let all = client
        .paginate_all(|token| async {
            let req = ListLoadBalancersRequest {
                next_token: token,
                ..ListLoadBalancersRequest::default()
            };
            let page = client.list_load_balancers(&req).await?;
            Ok((page.load_balancers, page.next_token))
        })
        .await
        .unwrap();

    assert_eq!(all.len(), 3);
    assert_eq!(all[2].load_balancer_id.as_deref(), Some("nlb-3"));
}

// ── Job polling ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_wait_for_job_polls_until_succeeded() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(body_string_contains("Action=GetJobStatus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "RequestId": "r-7",
            "Status": "Processing"
        })))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("Action=GetJobStatus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "RequestId": "r-8",
            "Status": "Succeeded"
        })))
        .mount(&server)
        .await;

    client
        .wait_for_job(
            "72dcd26b-f12d-4c27-b3af-18f6aed5",
            Duration::from_millis(5),
            Duration::from_secs(5),
        )
        .await
        .unwrap();

    let polls = server.received_requests().await.unwrap().len();
    assert_eq!(polls, 3);
}

#[tokio::test]
async fn test_wait_for_job_surfaces_failure() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(body_string_contains("Action=GetJobStatus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "RequestId": "r-9",
            "Status": "Failed",
            "ErrorCode": "ResourceNotFound.listener",
            "ErrorMessage": "listener was deleted mid-flight"
        })))
        .mount(&server)
        .await;

    let err = client
        .wait_for_job("job-1", Duration::from_millis(5), Duration::from_secs(1))
        .await
        .unwrap_err();

    match err {
        Error::JobFailed { job_id, message } => {
            assert_eq!(job_id, "job-1");
            assert_eq!(message, "listener was deleted mid-flight");
        }
        other => panic!("expected JobFailed, got: {other:?}"),
    }
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_envelope_is_parsed() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "RequestId": "59B56B05-B1E1-51A7-8545-67AD1AD1D33A",
            "Code": "ResourceNotFound.loadBalancer",
            "Message": "The specified resource of loadbalancer is not found."
        })))
        .mount(&server)
        .await;

    let err = client
        .get_load_balancer_attribute(&GetLoadBalancerAttributeRequest::new("nlb-missing"))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.api_error_code(), Some("ResourceNotFound.loadBalancer"));
    assert_eq!(err.request_id(), Some("59B56B05-B1E1-51A7-8545-67AD1AD1D33A"));
    match err {
        Error::Api { status, .. } => assert_eq!(status, 404),
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_dry_run_success_is_recognizable() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(body_string_contains("DryRun=true"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "RequestId": "r-10",
            "Code": "DryRunOperation",
            "Message": "Request validation has been passed with DryRun flag set."
        })))
        .mount(&server)
        .await;

    let mut req = GetLoadBalancerAttributeRequest::new("nlb-1");
    req.dry_run = Some(true);

    let err = client.get_load_balancer_attribute(&req).await.unwrap_err();
    assert!(err.is_dry_run_ok());
    assert!(!err.is_transient());
}

#[tokio::test]
async fn test_throttling_is_transient() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "RequestId": "r-11",
            "Code": "Throttling.User",
            "Message": "Request was denied due to user flow control."
        })))
        .mount(&server)
        .await;

    let err = client
        .list_load_balancers(&ListLoadBalancersRequest::default())
        .await
        .unwrap_err();

    assert!(err.is_transient());
}

#[tokio::test]
async fn test_validation_failure_sends_nothing() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let req = CreateLoadBalancerRequest::new(AddressType::Intranet, "vpc-1", Vec::new());
    let err = client.create_load_balancer(&req).await.unwrap_err();

    match err {
        Error::Validation { field, .. } => assert_eq!(field, "ZoneMappings"),
        other => panic!("expected Validation error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_deserialization_error_keeps_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client
        .list_load_balancers(&ListLoadBalancersRequest::default())
        .await
        .unwrap_err();

    match err {
        Error::Deserialization { body, .. } => assert_eq!(body, "not json"),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}
