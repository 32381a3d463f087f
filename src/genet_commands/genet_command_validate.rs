use anyhow::{Context, anyhow};
use clap::{Arg, ArgAction, value_parser};
use std::path::PathBuf;

use crate::genet_framework::{
    genet_command::GenetCommand,
    genet_input::{self, GenetInput, GenetInputType},
    genet_output::{GenetOutput, GenetOutputType},
};

pub const GENET_VALIDATE: GenetCommand = GenetCommand::Command {
    name_short: "vali",
    name_long: Some("validate"),
    explanation_short: "Attempt to parse a file as the given type, and return a parsing error if necessary.
        If you do not know the type the file should have, try `Genet info`.",
    explanation_long: None,
    cli_command: Some(|command| {
        command.arg(
            Arg::new("file")
                .action(ArgAction::Set)
                .value_name("FILE")
                .help("The file to be parsed.")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
    }),
    input_types: &[&[&GenetInputType::FileHandler]],
    input_names: &["TYPE"],
    input_helps: &["The type for which parsing should be attempted."],
    execute: |mut inputs, cli_matches| {
        let file_handler = match inputs.remove(0) {
            GenetInput::FileHandler(file_handler) => file_handler,
            _ => unreachable!(),
        };

        if let Some(file) = cli_matches.unwrap().get_one::<PathBuf>("file") {
            let mut reader =
                genet_input::get_reader_file(file).context("Could not get reader for file.")?;
            genet_input::validate_object_of(&mut reader, &file_handler)
                .with_context(|| "validating the file")?;
            return Ok(GenetOutput::String(format!(
                "Object is a valid {}.",
                file_handler.name
            )));
        } else {
            return Err(anyhow!("no input file given"));
        }
    },
    output_type: &GenetOutputType::String,
};
