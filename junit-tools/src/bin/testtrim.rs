// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::process::exit;

use junit_tools::commands::trim::Trim;
use junit_tools::commands::TRIM_BIN;
use junit_tools::report::errors::Error;
use junit_tools::utils::{init_logging, run_standalone};

fn main() -> Result<(), Error> {
    init_logging()?;
    exit(run_standalone(TRIM_BIN, &Trim::new()))
}
