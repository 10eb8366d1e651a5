use pipedrive_api_client::Endpoint;
use serde_json::Value;
use tracing::instrument;

use crate::endpoint::{Deals, Resource};
use crate::types::{Deal, DealFlowEntry, DealMatch, MergeOptions};
use crate::Result;

use super::ResourceClient;

fn deal_path(id: u64, rest: &str) -> String {
    format!("{}/{id}{rest}", Deals::PATH)
}

/// Deal-only endpoints.
impl ResourceClient<'_, Deals> {
    /// Update history of a deal.
    #[instrument(skip(self))]
    pub async fn list_updates(&self, id: u64) -> Result<Vec<DealFlowEntry>> {
        let endpoint = Endpoint::get(deal_path(id, "/flow"));
        Ok(self.client.fetch(&endpoint).await?.into_data())
    }

    /// Copy a deal. Returns the new deal.
    #[instrument(skip(self))]
    pub async fn duplicate(&self, id: u64) -> Result<Deal> {
        let endpoint = Endpoint::post(deal_path(id, "/duplicate"));
        Ok(self.client.fetch(&endpoint).await?.into_data())
    }

    /// Merge deal `id` into `merge_with_id`.
    #[instrument(skip(self))]
    pub async fn merge(&self, id: u64, merge_with_id: u64) -> Result<Deal> {
        let endpoint = Endpoint::put(deal_path(id, "/merge"));
        let body = MergeOptions { merge_with_id };
        Ok(self.client.call(&endpoint, Some(&body)).await?.into_data())
    }

    #[instrument(skip(self))]
    pub async fn delete_follower(&self, id: u64, follower_id: u64) -> Result<()> {
        self.delete_sub(deal_path(id, &format!("/followers/{follower_id}")))
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_participant(&self, id: u64, participant_id: u64) -> Result<()> {
        self.delete_sub(deal_path(id, &format!("/participants/{participant_id}")))
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_attached_product(&self, id: u64, product_attachment_id: u64) -> Result<()> {
        self.delete_sub(deal_path(id, &format!("/products/{product_attachment_id}")))
            .await
    }

    /// Find deals by title.
    #[instrument(skip(self))]
    pub async fn find(&self, term: &str) -> Result<Vec<DealMatch>> {
        let endpoint = Endpoint::get(format!("{}/find", Deals::PATH)).query("term", term);
        Ok(self.client.fetch(&endpoint).await?.into_data())
    }

    async fn delete_sub(&self, path: String) -> Result<()> {
        self.client.fetch::<Value>(&Endpoint::delete(path)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::{client, TOKEN};
    use crate::types::{Deal, DealStatus, Reference, SearchOptions, VisibleTo};
    use crate::ErrorKind;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CUSTOM_KEY: &str = "f68bc64c61ed5be74939265930336b9424d7c39b";

    fn created_deal() -> serde_json::Value {
        json!({
            "success": true,
            "data": {
                "id": 5,
                "creator_user_id": {"id": 11535881, "name": "Tom", "email": "tom@example.com", "has_pic": false, "pic_hash": null, "active_flag": true, "value": 11535881},
                "user_id": {"id": 11535881, "name": "Tom", "email": "tom@example.com", "has_pic": false, "pic_hash": null, "active_flag": true, "value": 11535881},
                "person_id": {"active_flag": true, "name": "testtest", "email": [{"value": "", "primary": true}], "phone": [{"value": "", "primary": true}], "value": 3},
                "org_id": null,
                "stage_id": 1,
                "title": "test 456",
                "value": 0,
                "currency": "AUD",
                "add_time": "2020-06-01 03:13:34",
                "update_time": "2020-06-01 03:13:34",
                "stage_change_time": null,
                "active": true,
                "deleted": false,
                "status": "open",
                "probability": null,
                "next_activity_date": null,
                "lost_reason": null,
                "visible_to": "3",
                "close_time": null,
                "pipeline_id": 1,
                "won_time": null,
                "first_won_time": null,
                "lost_time": null,
                "products_count": 0,
                "expected_close_date": null,
                "weighted_value": 0,
                "formatted_weighted_value": "A$0",
                "person_name": "testtest",
                "org_name": null,
                "owner_name": "Tom",
                "cc_email": "example+deal5@pipedrivemail.com",
                "label": null,
                "f68bc64c61ed5be74939265930336b9424d7c39b": "custom"
            },
            "related_objects": {"user": {"11535881": {"id": 11535881, "name": "Tom"}}}
        })
    }

    #[tokio::test]
    async fn test_create_deal() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/deals"))
            .and(query_param("api_token", TOKEN))
            .and(body_json(json!({"title": "test 456", "person_id": 3})))
            .respond_with(ResponseTemplate::new(201).set_body_json(created_deal()))
            .expect(1)
            .mount(&server)
            .await;

        let payload = Deal {
            person_id: Some(Reference::Id(3)),
            ..Deal::new("test 456")
        };
        let deal = client(&server).deals().create(&payload).await.unwrap();

        assert_eq!(deal.id, Some(5));
        assert_eq!(deal.title.as_deref(), Some("test 456"));
        assert_eq!(deal.status, Some(DealStatus::Open));
        assert_eq!(deal.visible_to, Some(VisibleTo::EntireCompany));
        assert_eq!(deal.person_id.as_ref().map(Reference::id), Some(Some(3)));
        assert_eq!(deal.org_id, None);
        assert_eq!(deal.custom_fields.get(CUSTOM_KEY), Some(&json!("custom")));
    }

    #[tokio::test]
    async fn test_create_deal_invalid_field() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/deals"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "success": false,
                "error": "Invalid field(s) in the payload: asdasdasd",
                "error_info": "Please check developers.pipedrive.com for more information about Pipedrive API.",
                "data": null,
                "additional_data": null
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .deals()
            .create(&json!({"title": "x", "asdasdasd": 1}))
            .await
            .unwrap_err();

        assert_eq!(err.message(), Some("Invalid field(s) in the payload: asdasdasd"));
        match err.kind {
            ErrorKind::Api { status, error_info, .. } => {
                assert_eq!(status, 400);
                assert_eq!(
                    error_info.as_deref(),
                    Some("Please check developers.pipedrive.com for more information about Pipedrive API.")
                );
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_deal_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/deals/404"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({"success": false, "error": "Deal not found"})),
            )
            .mount(&server)
            .await;

        let err = client(&server).deals().get(404).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.message(), Some("Deal not found"));
    }

    #[tokio::test]
    async fn test_delete_deals_in_bulk() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/deals"))
            .and(query_param("ids", "69,70"))
            .and(query_param("api_token", TOKEN))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "data": {"id": [69, 70]}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let result = client(&server).deals().delete_many(&[69, 70]).await.unwrap();

        assert_eq!(result.deleted, vec![69, 70]);
        assert!(result.is_complete());
    }

    #[tokio::test]
    async fn test_delete_deals_in_bulk_rejected_is_error() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/deals"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "success": false,
                "error": "Please provide at least one item to delete",
                "error_info": "Please check developers.pipedrive.com for more information about Pipedrive API."
            })))
            .mount(&server)
            .await;

        let err = client(&server).deals().delete_many(&[]).await.unwrap_err();
        assert_eq!(err.message(), Some("Please provide at least one item to delete"));
    }

    #[tokio::test]
    async fn test_delete_deal() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/deals/67"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "data": {"id": 67}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        client(&server).deals().delete(67).await.unwrap();
    }

    #[tokio::test]
    async fn test_search_deals() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/deals/search"))
            .and(query_param("term", "test 456"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {"items": [{
                    "result_score": 1.1688,
                    "item": {
                        "id": 5, "type": "deal", "title": "test 456", "value": 0, "currency": "AUD",
                        "status": "open", "visible_to": 3,
                        "owner": {"id": 11535881},
                        "stage": {"id": 1, "name": "Qualified"},
                        "person": {"id": 3, "name": "testtest"},
                        "organization": null,
                        "custom_fields": ["custom"],
                        "notes": []
                    }
                }]},
                "additional_data": {"pagination": {"start": 0, "limit": 100, "more_items_in_collection": false}}
            })))
            .mount(&server)
            .await;

        let page = client(&server)
            .deals()
            .search(&SearchOptions::new("test 456"))
            .await
            .unwrap();

        let hit = &page.items[0];
        assert!((hit.result_score - 1.1688).abs() < f64::EPSILON);
        assert_eq!(hit.item.title, "test 456");
        assert_eq!(hit.item.stage.as_ref().and_then(|s| s.name.as_deref()), Some("Qualified"));
        assert_eq!(hit.item.custom_fields, vec![json!("custom")]);
        assert!(!page.has_more());
    }

    #[tokio::test]
    async fn test_search_deals_empty_term() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/deals/search"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "success": false,
                "error": {
                    "message": "ServerError [ERR_INVALID_INPUT]: Invalid input: \"term\" is not allowed to be empty",
                    "code": 400,
                    "failed_fields": ["term"]
                }
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .deals()
            .search(&SearchOptions::new(""))
            .await
            .unwrap_err();

        assert!(err
            .message()
            .is_some_and(|m| m.contains("\"term\" is not allowed to be empty")));
        match err.kind {
            ErrorKind::Api { code, failed_fields, .. } => {
                assert_eq!(code, Some(400));
                assert_eq!(failed_fields, vec!["term"]);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_deal_extras() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/deals/5/flow"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": [{"object": "dealChange", "timestamp": "2020-06-01 03:13:34", "data": {"field_key": "title"}}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/deals/5/duplicate"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"success": true, "data": {"id": 6, "title": "test 456"}})),
            )
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/deals/5/merge"))
            .and(body_json(json!({"merge_with_id": 7})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "data": {"id": 7, "title": "merged"}})),
            )
            .mount(&server)
            .await;
        for sub in ["/deals/5/followers/2", "/deals/5/participants/3", "/deals/5/products/4"] {
            Mock::given(method("DELETE"))
                .and(path(sub))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(json!({"success": true, "data": {"id": 1}})),
                )
                .expect(1)
                .mount(&server)
                .await;
        }
        Mock::given(method("GET"))
            .and(path("/deals/find"))
            .and(query_param("term", "test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": [{"id": 5, "title": "test 456", "person_id": 3, "person_name": "testtest", "visible_to": "3"}]
            })))
            .mount(&server)
            .await;

        let client = client(&server);
        let deals = client.deals();

        let flow = deals.list_updates(5).await.unwrap();
        assert_eq!(flow[0].object, "dealChange");
        assert!(flow[0].timestamp.is_some());

        assert_eq!(deals.duplicate(5).await.unwrap().id, Some(6));
        assert_eq!(deals.merge(5, 7).await.unwrap().title.as_deref(), Some("merged"));

        deals.delete_follower(5, 2).await.unwrap();
        deals.delete_participant(5, 3).await.unwrap();
        deals.delete_attached_product(5, 4).await.unwrap();

        let matches = deals.find("test").await.unwrap();
        assert_eq!(matches[0].id, 5);
        assert_eq!(matches[0].person_name.as_deref(), Some("testtest"));
    }
}
