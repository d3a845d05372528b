//! Integration tests for the Docker adapter against a mock Engine API

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use reqwest::Client;
    use rmcp::model::{CallToolResult, JsonObject, RawContent};
    use serde_json::{Value, json};
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::core::config::Config;
    use crate::domains::tools::adapter::DockerAdapter;
    use crate::domains::tools::definitions;

    fn create_test_adapter(base_url: &str) -> DockerAdapter {
        create_adapter_with(Config::with_base_url(base_url))
    }

    fn create_adapter_with(config: Config) -> DockerAdapter {
        let http_client = Client::builder()
            .no_proxy()
            .build()
            .expect("Failed to create HTTP client");
        DockerAdapter::with_client(Arc::new(config), http_client)
    }

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().expect("arguments must be an object")
    }

    fn text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(t) => &t.text,
            other => panic!("expected text content, got {:?}", other),
        }
    }

    async fn call(adapter: &DockerAdapter, tool: &str, arguments: Value) -> CallToolResult {
        let endpoint = definitions::find(tool).expect("unknown tool");
        adapter.invoke(endpoint, args(arguments)).await
    }

    // ========================================================================
    // URL assembly
    // ========================================================================

    #[tokio::test]
    async fn test_query_lists_provided_keys_in_declared_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/containers/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let adapter = create_test_adapter(&mock_server.uri());
        let result = call(&adapter, "get_containers_json", json!({"limit": 5, "all": true})).await;
        assert_ne!(result.is_error, Some(true));

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.query(), Some("all=true&limit=5"));
    }

    #[tokio::test]
    async fn test_no_query_string_without_optional_arguments() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/containers/abc123/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Id": "abc123"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let adapter = create_test_adapter(&mock_server.uri());
        let result = call(&adapter, "get_containers_id_json", json!({"id": "abc123"})).await;
        assert_ne!(result.is_error, Some(true));

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.path(), "/containers/abc123/json");
        assert_eq!(requests[0].url.query(), None);
        assert_eq!(
            requests[0].headers.get("accept").unwrap().to_str().unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_base_url_path_prefix_is_kept() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1.43/info"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Containers": 3})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let adapter = create_test_adapter(&format!("{}/v1.43/", mock_server.uri()));
        let result = call(&adapter, "get_info", json!({})).await;
        assert_ne!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_query_values_are_raw_by_default() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/images/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&mock_server)
            .await;

        let adapter = create_test_adapter(&mock_server.uri());
        call(&adapter, "get_images_search", json!({"term": "nginx", "limit": 3})).await;

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("term=nginx&limit=3"));
    }

    #[tokio::test]
    async fn test_query_values_encoded_when_enabled() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/containers/json"))
            .and(query_param("filters", r#"{"status":["paused"]}"#))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut config = Config::with_base_url(mock_server.uri());
        config.docker.encode_query = true;
        let adapter = create_adapter_with(config);

        let result = call(
            &adapter,
            "get_containers_json",
            json!({"filters": {"status": ["paused"]}}),
        )
        .await;
        assert_ne!(result.is_error, Some(true));

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(
            requests[0].url.query(),
            Some("filters=%7B%22status%22%3A%5B%22paused%22%5D%7D")
        );
    }

    // ========================================================================
    // Invocation errors (no network traffic)
    // ========================================================================

    #[tokio::test]
    async fn test_missing_path_parameter_makes_no_call() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&mock_server)
            .await;

        let adapter = create_test_adapter(&mock_server.uri());
        let result = call(&adapter, "post_containers_id_update", json!({"Memory": 1024})).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(text(&result), "Missing required path parameter: id");
    }

    #[tokio::test]
    async fn test_mistyped_path_parameter_makes_no_call() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let adapter = create_test_adapter(&mock_server.uri());
        let result = call(&adapter, "get_containers_id_json", json!({"id": 42})).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(text(&result), "Invalid path parameter: id");
    }

    #[tokio::test]
    async fn test_missing_required_query_makes_no_call() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let adapter = create_test_adapter(&mock_server.uri());
        let result = call(&adapter, "get_images_search", json!({"limit": 5})).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(text(&result), "Missing required parameter: term");
    }

    #[tokio::test]
    async fn test_uncoercible_body_makes_no_call() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&mock_server)
            .await;

        let adapter = create_test_adapter(&mock_server.uri());
        let result = call(&adapter, "post_volumes_create", json!({"Labels": "not-a-map"})).await;

        assert_eq!(result.is_error, Some(true));
        assert!(text(&result).starts_with("Failed to convert arguments to request type:"));
    }

    // ========================================================================
    // Response shaping
    // ========================================================================

    #[tokio::test]
    async fn test_api_error_returns_raw_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/containers/missing/json"))
            .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"message":"not found"}"#))
            .mount(&mock_server)
            .await;

        let adapter = create_test_adapter(&mock_server.uri());
        let result = call(&adapter, "get_containers_id_json", json!({"id": "missing"})).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(text(&result), r#"API error: {"message":"not found"}"#);
    }

    #[tokio::test]
    async fn test_success_is_pretty_printed() {
        let mock_server = MockServer::start().await;
        let body = json!({"Id": "abc123", "State": {"Running": true, "Pid": 4242}});

        Mock::given(method("GET"))
            .and(path("/containers/abc123/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&mock_server)
            .await;

        let adapter = create_test_adapter(&mock_server.uri());
        let result = call(&adapter, "get_containers_id_json", json!({"id": "abc123"})).await;

        assert_eq!(result.is_error, Some(false));
        assert_eq!(text(&result), serde_json::to_string_pretty(&body).unwrap());
    }

    #[tokio::test]
    async fn test_non_json_success_returns_raw_text() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/_ping"))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .mount(&mock_server)
            .await;

        let adapter = create_test_adapter(&mock_server.uri());
        let result = call(&adapter, "get__ping", json!({})).await;

        assert_eq!(result.is_error, Some(false));
        assert_eq!(text(&result), "OK");
    }

    #[tokio::test]
    async fn test_typed_response_is_normalized() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/commit"))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({"Id": "sha256:feed", "Extra": 1})),
            )
            .mount(&mock_server)
            .await;

        let adapter = create_test_adapter(&mock_server.uri());
        let result = call(
            &adapter,
            "post_commit",
            json!({"container": "web", "repo": "snap"}),
        )
        .await;

        assert_eq!(result.is_error, Some(false));
        assert_eq!(text(&result), "{\n  \"Id\": \"sha256:feed\"\n}");

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("container=web&repo=snap"));
        let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(sent, json!({}));
    }

    #[tokio::test]
    async fn test_transport_failure_is_error_result() {
        // Nothing listens on port 1.
        let adapter = create_test_adapter("http://127.0.0.1:1");
        let result = call(&adapter, "get_info", json!({})).await;

        assert_eq!(result.is_error, Some(true));
        assert!(text(&result).starts_with("Request failed:"));
    }

    #[tokio::test]
    async fn test_configured_timeout_is_error_result() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/info"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"ID": "slow"}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&mock_server)
            .await;

        let mut config = Config::with_base_url(mock_server.uri());
        config.docker.timeout_secs = Some(1);
        let adapter = DockerAdapter::new(Arc::new(config)).expect("Failed to create adapter");

        let result = call(&adapter, "get_info", json!({})).await;

        assert_eq!(result.is_error, Some(true));
        assert!(text(&result).starts_with("Request failed:"));
    }

    // ========================================================================
    // Request bodies and headers
    // ========================================================================

    #[tokio::test]
    async fn test_body_excludes_routed_arguments() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/containers/create"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"Image": "alpine:3.20", "Cmd": ["sleep", "60"]})))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({"Id": "c0ffee", "Warnings": []})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let adapter = create_test_adapter(&mock_server.uri());
        let result = call(
            &adapter,
            "post_containers_create",
            json!({"name": "sleeper", "Image": "alpine:3.20", "Cmd": ["sleep", "60"]}),
        )
        .await;
        assert_eq!(result.is_error, Some(false));

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("name=sleeper"));
    }

    #[tokio::test]
    async fn test_typed_body_drops_unknown_fields() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/volumes/create"))
            .and(body_json(json!({"Name": "data", "Driver": "local"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "Name": "data",
                "Driver": "local",
                "Mountpoint": "/var/lib/docker/volumes/data/_data",
                "Scope": "local"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let adapter = create_test_adapter(&mock_server.uri());
        let result = call(
            &adapter,
            "post_volumes_create",
            json!({"Name": "data", "Driver": "local", "Bogus": true}),
        )
        .await;
        assert_eq!(result.is_error, Some(false));
        assert!(text(&result).contains("\"Mountpoint\""));
    }

    #[tokio::test]
    async fn test_field_body_sends_single_argument() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/plugins/vieux/sshfs/set"))
            .and(body_json(json!(["DEBUG=1"])))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let adapter = create_test_adapter(&mock_server.uri());
        let result = call(
            &adapter,
            "post_plugins_name_set",
            json!({"name": "vieux/sshfs", "settings": ["DEBUG=1"]}),
        )
        .await;

        // 204 has an empty body: returned verbatim.
        assert_eq!(result.is_error, Some(false));
        assert_eq!(text(&result), "");
    }

    #[tokio::test]
    async fn test_registry_auth_forwarded_from_arguments() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/images/create"))
            .and(header("X-Registry-Auth", "caller-token"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"status\":\"Pulling\"}\n"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut config = Config::with_base_url(mock_server.uri());
        config.credentials.registry_auth = Some("configured-token".to_string());
        let adapter = create_adapter_with(config);

        let result = call(
            &adapter,
            "post_images_create",
            json!({"fromImage": "alpine", "tag": "3.20", "X-Registry-Auth": "caller-token"}),
        )
        .await;
        assert_eq!(result.is_error, Some(false));

        let requests = mock_server.received_requests().await.unwrap();
        assert!(requests[0].body.is_empty());
        assert!(requests[0].headers.get("content-type").is_none());
    }

    #[tokio::test]
    async fn test_configured_registry_auth_and_bearer_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/images/alpine/push"))
            .and(header("X-Registry-Auth", "configured-token"))
            .and(header("Authorization", "Bearer proxy-secret"))
            .respond_with(ResponseTemplate::new(200).set_body_string("pushed"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut config = Config::with_base_url(mock_server.uri());
        config.credentials.registry_auth = Some("configured-token".to_string());
        config.credentials.bearer_token = Some("proxy-secret".to_string());
        let adapter = create_adapter_with(config);

        let result = call(&adapter, "post_images_name_push", json!({"name": "alpine"})).await;
        assert_eq!(result.is_error, Some(false));
        assert_eq!(text(&result), "pushed");
    }
}
