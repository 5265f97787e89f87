// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

mod command;

use clap::Parser;
use color_eyre::Result;
use command::QmApp;

fn main() -> Result<()> {
    let app = QmApp::parse();
    app.exec()
}
