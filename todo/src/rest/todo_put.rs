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

//! API to replace one item in the list.

use crate::driver::Driver;
use crate::model::{TodoId, TodoItem};
use axum::Json;
use axum::extract::State;
use restkit_core::rest::{JsonBody, PathParam, RestResult};

/// API handler.
///
/// The identifier in the body replaces the one in the path: the two are not required to match.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    PathParam(id): PathParam<TodoId>,
    JsonBody(item): JsonBody<TodoItem>,
) -> RestResult<Json<TodoItem>> {
    let item = driver.update_todo(id, item).await?;
    Ok(Json(item))
}

#[cfg(test)]
mod tests {
    use crate::model::*;
    use crate::rest::testutils::*;
    use axum::http;
    use restkit_core::rest::testutils::*;
    use serde_json::json;

    fn route(id: &str) -> (http::Method, String) {
        (http::Method::PUT, format!("/todo/{}", id))
    }

    #[tokio::test]
    async fn test_ok() {
        let mut context = TestContext::setup();

        context.add_todo(1, "first", "a").await;
        context.add_todo(2, "second", "b").await;

        let request = TodoItem::new(TodoId::from(1), "renamed".to_owned(), "c".to_owned());
        let response = OneShotBuilder::new(context.app(), route("1"))
            .send_json(&request)
            .await
            .expect_json::<TodoItem>()
            .await;
        assert_eq!(request, response);

        let exp_items = vec![
            TodoItem::new(TodoId::from(1), "renamed".to_owned(), "c".to_owned()),
            TodoItem::new(TodoId::from(2), "second".to_owned(), "b".to_owned()),
        ];
        assert_eq!(exp_items, context.get_todos().await);
    }

    #[tokio::test]
    async fn test_body_id_differs_from_path_id() {
        let mut context = TestContext::setup();

        context.add_todo(1, "first", "a").await;
        context.add_todo(2, "second", "b").await;

        let request = TodoItem::new(TodoId::from(7), "moved".to_owned(), "c".to_owned());
        let response = OneShotBuilder::new(context.app(), route("1"))
            .send_json(&request)
            .await
            .expect_json::<TodoItem>()
            .await;
        assert_eq!(request, response);

        let exp_items = vec![
            TodoItem::new(TodoId::from(7), "moved".to_owned(), "c".to_owned()),
            TodoItem::new(TodoId::from(2), "second".to_owned(), "b".to_owned()),
        ];
        assert_eq!(exp_items, context.get_todos().await);
    }

    #[tokio::test]
    async fn test_missing() {
        let mut context = TestContext::setup();

        context.add_todo(1, "first", "a").await;

        OneShotBuilder::new(context.app(), route("2"))
            .send_json(json!({"id": 2, "name": "x", "description": "y"}))
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("^Todo not found$")
            .await;

        let exp_items = vec![TodoItem::new(TodoId::from(1), "first".to_owned(), "a".to_owned())];
        assert_eq!(exp_items, context.get_todos().await);
    }

    #[tokio::test]
    async fn test_missing_field() {
        let mut context = TestContext::setup();

        context.add_todo(1, "first", "a").await;

        OneShotBuilder::new(context.app(), route("1"))
            .send_json(json!({"id": 1, "description": "y"}))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("missing field `name`")
            .await;

        let exp_items = vec![TodoItem::new(TodoId::from(1), "first".to_owned(), "a".to_owned())];
        assert_eq!(exp_items, context.get_todos().await);
    }

    test_payload_must_be_json!(TestContext::setup().into_app(), route("1"));
}
