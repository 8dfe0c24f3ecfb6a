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

//! Entry point to the REST server.

use crate::driver::Driver;
use axum::Router;

mod root_get;
#[cfg(test)]
mod testutils;
mod todo_delete;
mod todo_get;
mod todo_post;
mod todo_put;
mod todos_get;

/// Creates the router for the application.
pub(crate) fn app(driver: Driver) -> Router {
    use axum::routing::get;
    Router::new()
        .route("/", get(root_get::handler))
        .route("/todo", get(todos_get::handler).post(todo_post::handler))
        .route(
            "/todo/:id",
            get(todo_get::handler).put(todo_put::handler).delete(todo_delete::handler),
        )
        .with_state(driver)
}
