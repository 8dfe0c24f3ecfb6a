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

//! High-level data types.
//!
//! `MigrationRequest` is the one and only definition of what a valid request looks like: its
//! fields can only be built through constructors that validate their input, and deserialization
//! goes through those same constructors.

use derive_getters::Getters;
use derive_more::Constructor;
use restkit_core::model::{ModelError, ModelResult};
use serde::de::Visitor;
use serde::{Deserialize, Serialize};

/// Maximum length of a dashboard name, in characters.
pub(crate) const MAX_DASHBOARD_NAME_LENGTH: usize = 255;

/// The character that all paths must start with.
const PATH_ROOT: char = '/';

/// Represents the name of a dashboard to migrate.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub(crate) struct DashboardName(String);

impl DashboardName {
    /// Creates a new dashboard name from an untrusted string `s`, making sure it is valid.
    pub(crate) fn new<S: Into<String>>(s: S) -> ModelResult<Self> {
        let s = s.into();

        if s.is_empty() {
            return Err(ModelError("Dashboard name cannot be empty".to_owned()));
        }
        if s.chars().count() > MAX_DASHBOARD_NAME_LENGTH {
            return Err(ModelError("Dashboard name is too long".to_owned()));
        }

        Ok(Self(s))
    }

    /// Returns a string view of the dashboard name.
    pub(crate) fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// A deserialization visitor for a `DashboardName`.
struct DashboardNameVisitor;

impl Visitor<'_> for DashboardNameVisitor {
    type Value = DashboardName;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        DashboardName::new(v).map_err(|e| E::custom(e.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        DashboardName::new(v).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for DashboardName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_string(DashboardNameVisitor)
    }
}

/// Represents the location of a dashboard in a source or destination system.
///
/// The only requirement is that the path is rooted, which means it starts with a `/`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub(crate) struct ResourcePath(String);

impl ResourcePath {
    /// Creates a new path from an untrusted string `s`, making sure it is valid.
    pub(crate) fn new<S: Into<String>>(s: S) -> ModelResult<Self> {
        let s = s.into();

        if !s.starts_with(PATH_ROOT) {
            return Err(ModelError(format!("Path must start with a \"{}\"", PATH_ROOT)));
        }

        Ok(Self(s))
    }

    /// Returns a string view of the path.
    pub(crate) fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// A deserialization visitor for a `ResourcePath`.
struct ResourcePathVisitor;

impl Visitor<'_> for ResourcePathVisitor {
    type Value = ResourcePath;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        ResourcePath::new(v).map_err(|e| E::custom(e.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        ResourcePath::new(v).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for ResourcePath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_string(ResourcePathVisitor)
    }
}

/// A request to migrate one dashboard.
#[derive(Constructor, Deserialize, Getters, Serialize)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub(crate) struct MigrationRequest {
    /// Name of the dashboard to migrate.
    dashboard_name: DashboardName,

    /// Where the dashboard currently lives.
    source_path: ResourcePath,

    /// Where the dashboard should end up.
    destination_path: ResourcePath,
}

/// Outcome of a migration.
#[derive(Clone, Copy, Deserialize, Serialize)]
#[cfg_attr(test, derive(Debug, PartialEq))]
#[serde(rename_all = "lowercase")]
pub(crate) enum MigrationStatus {
    /// The migration completed.
    Success,
}

/// Details about a migration once it has been processed.
#[derive(Constructor, Deserialize, Getters, Serialize)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub(crate) struct MigrationResult {
    /// Outcome of the migration.
    status: MigrationStatus,

    /// Human-readable description of what happened.
    message: String,
}
