use std::io::Write;

use crate::genet_framework::{
    genet_command::GenetCommand,
    genet_input::{GenetInput, GenetInputType},
    genet_output::{GenetOutput, GenetOutputType},
    infoable::Infoable,
};

pub const GENET_INFO: GenetCommand = GenetCommand::Command {
    name_short: "info",
    name_long: None,
    explanation_short: "Show information about a file.",
    explanation_long: None,
    cli_command: None,
    input_types: &[&[&GenetInputType::AnyObject]],
    input_names: &["FILE"],
    input_helps: &["Any file supported by Genet."],
    execute: |mut inputs, _| {
        if let GenetInput::Object(object, file_handler) = inputs.remove(0) {
            let mut f = vec![];
            writeln!(
                f,
                "Object was recognised as {} {} (.{}).",
                object.get_type().get_article(),
                object.get_type(),
                file_handler.file_extension
            )?;
            object.info(&mut f)?;

            return Ok(GenetOutput::String(String::from_utf8(f).unwrap()));
        }
        unreachable!()
    },
    output_type: &GenetOutputType::String,
};
