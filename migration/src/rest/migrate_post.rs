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

//! API to request the migration of a dashboard.

use crate::driver;
use crate::model::{MigrationRequest, MigrationResult};
use axum::Json;
use restkit_core::rest::{JsonBody, RestResult};

/// API handler.
///
/// Validation of the request happens while decoding the body, so any problem with the input is
/// reported as a bad request before reaching the driver.
pub(crate) async fn handler(
    JsonBody(request): JsonBody<MigrationRequest>,
) -> RestResult<Json<MigrationResult>> {
    Ok(Json(driver::simulate(&request)))
}
