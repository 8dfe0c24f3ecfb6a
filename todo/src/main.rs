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

//! Entry point to the ToDo service.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use restkit_core::env::get_optional_var;
use restkit_todo::serve;
use std::net::{IpAddr, Ipv4Addr};

/// Prefix of the environment variables that configure this service.
const ENV_PREFIX: &str = "TODO";

/// Port to listen on when none is configured.
const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() {
    env_logger::init();

    let address: IpAddr = get_optional_var(ENV_PREFIX, "ADDRESS")
        .unwrap()
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    let port: u16 = get_optional_var(ENV_PREFIX, "PORT").unwrap().unwrap_or(DEFAULT_PORT);

    serve((address, port)).await.unwrap()
}
