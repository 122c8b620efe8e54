#[cfg(test)]
mod test {
    use httpmock::Method::{DELETE, GET, POST};
    use httpmock::MockServer;
    use serde_json::json;

    use crate::tests::common::{build_client, mock_sensitive_auth, mock_standard_auth, SENSITIVE_TOKEN, STANDARD_TOKEN};

    #[tokio::test]
    async fn cancel_voids_amount_with_standard_token() {
        let server = MockServer::start_async().await;
        mock_standard_auth(&server, STANDARD_TOKEN, Some(3600)).await;
        let void = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v1/transaction/void/tx123")
                    .header("Authorization", "Bearer std-token")
                    .json_body(json!({"amount": 500}));
                then.status(200).json_body(json!({"status": "canceled"}));
            })
            .await;

        let client = build_client(&server);
        let response = client.transactions().cancel("tx123", 500).await.unwrap();

        void.assert_async().await;
        assert_eq!(response.body.get("status"), Some(&json!("canceled")));
    }

    #[tokio::test]
    async fn transaction_routes_use_standard_scope() {
        let server = MockServer::start_async().await;
        mock_standard_auth(&server, STANDARD_TOKEN, Some(3600)).await;
        let sensitive_auth = mock_sensitive_auth(&server, SENSITIVE_TOKEN, Some(3600)).await;

        let create = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v1/transaction/new/c1")
                    .header("Authorization", "Bearer std-token")
                    .json_body(json!({"amount": 1990, "payment_type": "pix"}));
                then.status(201).json_body(json!({"id": "tx1"}));
            })
            .await;
        let capture = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v1/transaction/capture/tx1")
                    .header("Authorization", "Bearer std-token")
                    .json_body(json!({"amount": 1000}));
                then.status(200);
            })
            .await;
        let get = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/transaction/get/tx1")
                    .header("Authorization", "Bearer std-token");
                then.status(200);
            })
            .await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/transaction/list")
                    .query_param("page", "2")
                    .query_param("status", "succeeded")
                    .header("Authorization", "Bearer std-token");
                then.status(200).json_body(json!({"data": []}));
            })
            .await;

        let client = build_client(&server);
        let transactions = client.transactions();
        let created = transactions
            .create("c1", &json!({"amount": 1990, "payment_type": "pix"}))
            .await
            .unwrap();
        assert_eq!(created.status, 201);
        transactions.capture("tx1", 1000).await.unwrap();
        transactions.get("tx1").await.unwrap();
        transactions.get_all(&json!({"page": 2, "status": "succeeded"})).await.unwrap();

        create.assert_async().await;
        capture.assert_async().await;
        get.assert_async().await;
        list.assert_async().await;
        assert_eq!(sensitive_auth.hits_async().await, 0);
    }

    #[tokio::test]
    async fn customer_routes_pick_scope_per_operation() {
        let server = MockServer::start_async().await;
        mock_standard_auth(&server, STANDARD_TOKEN, Some(3600)).await;
        mock_sensitive_auth(&server, SENSITIVE_TOKEN, Some(3600)).await;

        let create = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v1/customer/new")
                    .header("Authorization", "Bearer std-token")
                    .json_body(json!({"first_name": "Ana", "email": "ana@example.com"}));
                then.status(200).json_body(json!({"id": "c1"}));
            })
            .await;
        let get = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/customer/get/c1")
                    .header("Authorization", "Bearer std-token");
                then.status(200);
            })
            .await;
        let associate = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v1/card/associate_token_with_customer")
                    .header("Authorization", "Bearer card-token")
                    .json_body(json!({"id_customer": "c1", "token": "tok1"}));
                then.status(200);
            })
            .await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/card/list/c1")
                    .header("Authorization", "Bearer card-token");
                then.status(200);
            })
            .await;
        let set_default = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v1/card/set_default/c1")
                    .header("Authorization", "Bearer card-token")
                    .json_body(json!({"id_card": "card1"}));
                then.status(200);
            })
            .await;
        let delete = server
            .mock_async(|when, then| {
                when.method(DELETE)
                    .path("/api/v1/card/delete/c1/card1")
                    .header("Authorization", "Bearer card-token");
                then.status(200);
            })
            .await;
        let delete_all = server
            .mock_async(|when, then| {
                when.method(DELETE)
                    .path("/api/v1/card/delete_all/c1")
                    .header("Authorization", "Bearer card-token");
                then.status(200);
            })
            .await;

        let client = build_client(&server);
        let customers = client.customers();
        customers
            .create(&json!({"first_name": "Ana", "email": "ana@example.com"}))
            .await
            .unwrap();
        customers.get("c1").await.unwrap();
        customers.associate_card_token("c1", "tok1").await.unwrap();
        customers.list_cards("c1").await.unwrap();
        customers.set_default_card("c1", "card1").await.unwrap();
        customers.delete_card("c1", "card1").await.unwrap();
        customers.delete_all_cards("c1").await.unwrap();

        for mock in [&create, &get, &associate, &list, &set_default, &delete, &delete_all] {
            mock.assert_async().await;
        }
    }

    #[tokio::test]
    async fn tokenize_card_uses_sensitive_token() {
        let server = MockServer::start_async().await;
        let standard_auth = mock_standard_auth(&server, STANDARD_TOKEN, Some(3600)).await;
        mock_sensitive_auth(&server, SENSITIVE_TOKEN, Some(3600)).await;
        let card = json!({
            "holder_name": "ANA SILVA",
            "card_number": "4111111111111111",
            "expiration_month": "12",
            "expiration_year": "2030",
            "security_code": "123"
        });
        let tokenize = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v1/card/tokenize/token")
                    .header("Authorization", "Bearer card-token")
                    .json_body(card.clone());
                then.status(200).json_body(json!({"id": "tok1"}));
            })
            .await;

        let client = build_client(&server);
        let response = client.tokenize().card(&card).await.unwrap();

        tokenize.assert_async().await;
        assert_eq!(response.body.get("id"), Some(&json!("tok1")));
        assert_eq!(standard_auth.hits_async().await, 0);
    }

    #[tokio::test]
    async fn list_sends_nested_filters_in_bracket_form() {
        let server = MockServer::start_async().await;
        mock_standard_auth(&server, STANDARD_TOKEN, Some(3600)).await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v1/transaction/list")
                    .query_param("page", "1")
                    .query_param("filter[status]", "paid")
                    .query_param("filter[payment_type][0]", "pix")
                    .header("Authorization", "Bearer std-token");
                then.status(200).json_body(json!({"data": []}));
            })
            .await;

        let client = build_client(&server);
        let response = client
            .transactions()
            .get_all(&json!({"page": 1, "filter": {"status": "paid", "payment_type": ["pix"]}}))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        list.assert_async().await;
    }

    #[tokio::test]
    async fn requests_carry_user_agent() {
        let server = MockServer::start_async().await;
        let auth = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/auth/login")
                    .header("User-Agent", concat!("iopay-client/", env!("CARGO_PKG_VERSION")));
                then.status(200).json_body(json!({"access_token": "std-token", "expires_in": 3600}));
            })
            .await;

        let client = build_client(&server);
        client.api_token().await.unwrap();
        auth.assert_async().await;
    }
}
