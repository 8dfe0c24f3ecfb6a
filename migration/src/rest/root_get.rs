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

//! API to greet clients and confirm the service is up.

use axum::Json;
use restkit_core::rest::{EmptyBody, MessageResponse, RestResult};

/// Greeting returned by this API.
const WELCOME_MESSAGE: &str = "Welcome to the Tableau Migration API";

/// API handler.
pub(crate) async fn handler(_: EmptyBody) -> RestResult<Json<MessageResponse>> {
    Ok(Json(MessageResponse::new(WELCOME_MESSAGE)))
}
