// restkit
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! API to add an item to the list.

use crate::driver::Driver;
use crate::model::TodoItem;
use axum::extract::State;
use axum::{Json, http};
use restkit_core::rest::{JsonBody, RestResult};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    JsonBody(item): JsonBody<TodoItem>,
) -> RestResult<(http::StatusCode, Json<TodoItem>)> {
    let item = driver.create_todo(item).await?;
    Ok((http::StatusCode::CREATED, Json(item)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use crate::rest::testutils::*;
    use restkit_core::rest::testutils::*;
    use serde_json::json;

    fn route() -> (http::Method, String) {
        (http::Method::POST, "/todo".to_owned())
    }

    #[tokio::test]
    async fn test_create() {
        let context = TestContext::setup();

        let request = json!({"id": 1, "name": "Test", "description": "Test ToDo"});
        let response = OneShotBuilder::new(context.app(), route())
            .send_json(&request)
            .await
            .expect_status(http::StatusCode::CREATED)
            .expect_json::<serde_json::Value>()
            .await;
        assert_eq!(request, response);

        let exp_item = TodoItem::new(TodoId::from(1), "Test".to_owned(), "Test ToDo".to_owned());
        assert_eq!(vec![exp_item], context.get_todos().await);
    }

    #[tokio::test]
    async fn test_create_appends() {
        let mut context = TestContext::setup();

        context.add_todo(5, "existing", "first").await;

        let request = TodoItem::new(TodoId::from(5), "dup".to_owned(), "second".to_owned());
        let response = OneShotBuilder::new(context.app(), route())
            .send_json(&request)
            .await
            .expect_status(http::StatusCode::CREATED)
            .expect_json::<TodoItem>()
            .await;
        assert_eq!(request, response);

        let exp_items = vec![
            TodoItem::new(TodoId::from(5), "existing".to_owned(), "first".to_owned()),
            TodoItem::new(TodoId::from(5), "dup".to_owned(), "second".to_owned()),
        ];
        assert_eq!(exp_items, context.get_todos().await);
    }

    #[tokio::test]
    async fn test_missing_field() {
        let context = TestContext::setup();

        OneShotBuilder::new(context.app(), route())
            .send_json(json!({"id": 1, "name": "Test"}))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("missing field `description`")
            .await;

        assert!(context.get_todos().await.is_empty());
    }

    #[tokio::test]
    async fn test_bad_id_type() {
        let context = TestContext::setup();

        OneShotBuilder::new(context.app(), route())
            .send_json(json!({"id": "one", "name": "Test", "description": "Test ToDo"}))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("invalid type")
            .await;

        assert!(context.get_todos().await.is_empty());
    }

    test_payload_must_be_json!(TestContext::setup().into_app(), route());
}
