//! # Receiver, Blockchain and IPFS Mocks
//!
//! Deterministic lookups must give the same answer on every call; random
//! endpoints only have to return well-formed identifiers.

#[cfg(test)]
mod tests {
    use super::super::harness::{is_address, Gateway, DEMO_TOKEN};
    use axum::http::StatusCode;
    use serde_json::json;
    use shared_identifiers::IdentifierKind;

    const SAMPLE_ADDRESS: &str = "0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

    // =============================================================================
    // RECEIVER
    // =============================================================================

    #[tokio::test]
    async fn test_receiver_find_is_deterministic() {
        let gw = Gateway::new().await;
        let uri = format!("/receiver/find/{}", SAMPLE_ADDRESS);

        let first = gw.get(&uri, None).await;
        let second = gw.get(&uri, None).await;
        assert_eq!(first.status, StatusCode::OK);
        assert_eq!(first.json["message"], "Address verified successfully");
        // 0xAAAAAAAA = 2863311530
        assert_eq!(first.json["data"]["username"], "User_530");
        assert_eq!(first.json["data"]["blockchainAddress"], SAMPLE_ADDRESS);
        assert_eq!(first.json["blockchainAddress"], SAMPLE_ADDRESS);
        assert_eq!(first.json, second.json);
    }

    #[tokio::test]
    async fn test_receiver_find_malformed_address() {
        let gw = Gateway::new().await;
        let reply = gw.get("/receiver/find/not-an-address", None).await;
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.json["data"]["username"], "User_0");
    }

    #[tokio::test]
    async fn test_receiver_generate() {
        let gw = Gateway::new().await;
        let reply = gw.post("/receiver/generate", None, json!({})).await;
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.json["message"], "New blockchain address generated");
        assert!(is_address(&reply.json["address"]));
        assert_eq!(reply.json["data"]["blockchainAddress"], reply.json["address"]);
    }

    #[tokio::test]
    async fn test_address_helpers() {
        let gw = Gateway::new().await;
        for uri in ["/user/address", "/user/generateAddress", "/address", "/blockchain/address"] {
            let reply = gw.get(uri, None).await;
            assert_eq!(reply.status, StatusCode::OK, "{}", uri);
            assert!(is_address(&reply.json["address"]), "{}", uri);
        }
    }

    // =============================================================================
    // BLOCKCHAIN
    // =============================================================================

    #[tokio::test]
    async fn test_verify_address_shape() {
        let gw = Gateway::new().await;
        let good = gw
            .post("/blockchain/verify", None, json!({"address": SAMPLE_ADDRESS}))
            .await;
        assert_eq!(good.json["valid"], true);

        let bad = gw.post("/blockchain/verify", None, json!({"address": "0x12"})).await;
        assert_eq!(bad.json["valid"], false);

        let empty = gw.post("/blockchain/verify", None, json!({})).await;
        assert_eq!(empty.json["valid"], false);
    }

    #[tokio::test]
    async fn test_chain_status() {
        let gw = Gateway::new().await;
        let reply = gw.get("/blockchain/status", None).await;
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.json["connected"], true);
        assert!(reply.json["block"].as_u64().unwrap() < 10_000_000);
    }

    #[tokio::test]
    async fn test_create_transaction() {
        let gw = Gateway::new().await;
        let reply = gw
            .post("/blockchain/transaction", Some(DEMO_TOKEN), json!({"fileId": "42"}))
            .await;
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.json["message"], "Transaction created successfully");
        let hash = reply.json["transaction"]["hash"].as_str().unwrap();
        assert!(IdentifierKind::TxHash.matches(hash));
    }

    #[tokio::test]
    async fn test_verify_ownership() {
        let gw = Gateway::new().await;
        let (bob, _, _) = gw.register("bob", "b@x.com").await;
        let upload = gw.post("/files/upload", Some(DEMO_TOKEN), json!({})).await;
        let file_id = upload.json["file"]["id"].clone();

        let owner = gw
            .post("/blockchain/verify-ownership", Some(DEMO_TOKEN), json!({"fileId": file_id}))
            .await;
        assert_eq!(owner.status, StatusCode::OK);
        assert_eq!(owner.json["isOwner"], true);
        assert_eq!(owner.json["verified"], true);

        let other = gw
            .post("/blockchain/verify-ownership", Some(&bob), json!({"fileId": file_id}))
            .await;
        assert_eq!(other.json["isOwner"], false);

        let missing = gw
            .post("/blockchain/verify-ownership", Some(DEMO_TOKEN), json!({}))
            .await;
        assert_eq!(missing.status, StatusCode::BAD_REQUEST);
        assert_eq!(missing.json["message"], "Please provide fileId");

        let unknown = gw
            .post("/blockchain/verify-ownership", Some(DEMO_TOKEN), json!({"fileId": "nope"}))
            .await;
        assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_transaction_history_is_deterministic() {
        let gw = Gateway::new().await;
        let first = gw.get("/blockchain/transactions/1700000000123", Some(DEMO_TOKEN)).await;
        let second = gw.get("/blockchain/transactions/1700000000123", Some(DEMO_TOKEN)).await;
        assert_eq!(first.status, StatusCode::OK);
        assert_eq!(first.json["fileId"], "1700000000123");

        let txs = first.json["transactions"].as_array().unwrap();
        assert!((2..=3).contains(&txs.len()));
        let hashes: Vec<_> = txs.iter().map(|t| t["hash"].clone()).collect();
        let again: Vec<_> = second.json["transactions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["hash"].clone())
            .collect();
        assert_eq!(hashes, again);
    }

    // =============================================================================
    // IPFS
    // =============================================================================

    #[tokio::test]
    async fn test_ipfs_detail() {
        let gw = Gateway::new().await;
        let reply = gw.get("/ipfs/detail/1700000000123", Some(DEMO_TOKEN)).await;
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.json["pinned"], true);

        let hash = reply.json["ipfsHash"].as_str().unwrap();
        assert!(IdentifierKind::ContentHash.matches(hash));
        for gateway in reply.json["gateways"].as_array().unwrap() {
            assert!(gateway.as_str().unwrap().ends_with(hash));
        }

        let size = reply.json["size"].as_u64().unwrap();
        assert!((1024..=1024 * 1024).contains(&size));
    }

    #[tokio::test]
    async fn test_ipfs_requires_token() {
        let gw = Gateway::new().await;
        let reply = gw.get("/ipfs/detail/1", None).await;
        assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
    }
}
