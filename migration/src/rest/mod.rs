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

use axum::Router;

mod migrate_post;
mod root_get;

/// Creates the router for the application.
pub(crate) fn app() -> Router {
    use axum::routing::{get, post};
    Router::new()
        .route("/", get(root_get::handler))
        .route("/migrate", post(migrate_post::handler))
}
