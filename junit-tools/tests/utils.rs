// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use junit_tools::command::Command;
use junit_tools::utils;
use junit_tools::utils::writer::{WriteBuffer::Vec as WBVec, Writer};

#[non_exhaustive]
pub struct StatusCode;

const REPORT_TEST_APP_NAME: &str = "junit-tools-test";

#[allow(dead_code)]
impl StatusCode {
    pub const SUCCESS: i32 = 0;
    pub const INTERNAL_FAILURE: i32 = -1;
}

#[allow(dead_code)]
pub fn read_from_resource_file(path: &str) -> String {
    let mut content = String::new();
    let mut reader = BufReader::new(File::open(get_full_path_for_resource_file(path)).unwrap());
    reader.read_to_string(&mut content).unwrap();

    content
}

pub fn get_full_path_for_resource_file(path: &str) -> String {
    let mut resource = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    resource.push(path);
    resource.display().to_string()
}

pub fn new_writer() -> Writer {
    Writer::new(WBVec(vec![]), WBVec(vec![]))
}

pub trait CommandTestRunner {
    fn build_args(&self) -> Vec<String>;

    fn commands(&self) -> Vec<Box<dyn Command>> {
        utils::get_report_commands()
    }

    fn run(&self, writer: &mut Writer) -> i32 {
        let mut app = clap::Command::new(REPORT_TEST_APP_NAME);

        let command_options = self.build_args().into_iter().fold(
            vec![String::from(REPORT_TEST_APP_NAME)],
            |mut res, arg| {
                res.push(arg);
                res
            },
        );

        let commands = self.commands();

        let mappings = commands.iter().map(|s| (s.name(), s)).fold(
            HashMap::with_capacity(commands.len()),
            |mut map, entry| {
                map.insert(entry.0, entry.1.as_ref());
                map
            },
        );

        for each in &commands {
            app = app.subcommand(each.command());
        }

        let app = app.get_matches_from(command_options);

        match app.subcommand() {
            Some((name, value)) => match mappings.get(name) {
                Some(command) => utils::run_command(*command, value, writer),
                None => StatusCode::INTERNAL_FAILURE,
            },
            None => StatusCode::INTERNAL_FAILURE,
        }
    }
}

#[macro_export]
macro_rules! assert_output_from_str_eq {
    ($expected_output: expr, $actual_output_writer: expr) => {{
        let (actual_output, _) = $actual_output_writer.into_strings().unwrap();
        pretty_assertions::assert_eq!($expected_output, actual_output)
    }};
}
