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

//! Business logic for the service.
//!
//! Migrations are simulated: no source or destination system is ever contacted, so the only
//! work done here is to describe what would have happened.

use crate::model::{MigrationRequest, MigrationResult, MigrationStatus};

/// Simulates the migration described by `request` and reports its outcome.
///
/// This never fails because `request` has already been validated by the time it gets here.
pub(crate) fn simulate(request: &MigrationRequest) -> MigrationResult {
    let message = format!(
        "Migration of dashboard '{}' from '{}' to '{}' simulated successfully.",
        request.dashboard_name().as_str(),
        request.source_path().as_str(),
        request.destination_path().as_str(),
    );
    log::info!("{}", message);
    MigrationResult::new(MigrationStatus::Success, message)
}
