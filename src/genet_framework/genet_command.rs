use anyhow::{Context, Result, anyhow};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use std::{fmt::Display, path::PathBuf};

use crate::genet_commands::{
    genet_command_info, genet_command_penalty, genet_command_sample, genet_command_validate,
    genet_command_visualise,
};

use super::{
    genet_file_handler::GenetFileHandler,
    genet_input::{self, GenetInput, GenetInputType},
    genet_output::{self, GenetExporter, GenetOutput, GenetOutputType},
};

pub const GENET_COMMANDS: GenetCommand = GenetCommand::Group {
    name_short: "Genet",
    name_long: None,
    explanation_short: "Genet: genetic discovery of business processes.",
    explanation_long: None,
    children: &[
        &genet_command_info::GENET_INFO,
        &genet_command_penalty::GENET_PENALTY,
        &genet_command_sample::GENET_SAMPLE,
        &genet_command_validate::GENET_VALIDATE,
        &genet_command_visualise::GENET_VISUALISE,
    ],
};

pub const ARG_SHORT_OUTPUT: char = 'o';
pub const ARG_ID_OUTPUT: &str = "output";

pub enum GenetCommand {
    Group {
        name_short: &'static str,
        name_long: Option<&'static str>,
        explanation_short: &'static str,
        explanation_long: Option<&'static str>,
        children: &'static [&'static GenetCommand],
    },
    Command {
        name_short: &'static str,
        name_long: Option<&'static str>,
        explanation_short: &'static str,
        explanation_long: Option<&'static str>,
        cli_command: Option<fn(command: Command) -> Command>, //create the cli command. An output -o argument is always added

        input_types: &'static [&'static [&'static GenetInputType]], //for each fixed-position input parameter, the input types that are accepted
        input_names: &'static [&'static str],
        input_helps: &'static [&'static str],

        execute: fn(inputs: Vec<GenetInput>, cli_matches: Option<&ArgMatches>) -> Result<GenetOutput>, //the cli_matches are provided only when cli_command is set to Some(_).
        output_type: &'static GenetOutputType,
    },
}

impl GenetCommand {
    pub fn build_cli(&self) -> Command {
        let mut command;
        match self {
            GenetCommand::Group {
                name_short,
                name_long,
                explanation_short,
                explanation_long,
                children,
            } => {
                let name = if let Some(x) = name_long { x } else { name_short };
                command = Command::new(name)
                    .about(explanation_short)
                    .subcommand_required(true)
                    .allow_external_subcommands(false);

                if name_long.is_some() {
                    command = command.alias(name_short);
                }

                if let Some(l) = explanation_long {
                    command = command.long_about(l);
                }

                for child in children.iter() {
                    let subcommand = child.build_cli();
                    command = command.subcommand(subcommand);
                }
            }
            GenetCommand::Command {
                name_short,
                name_long,
                explanation_short,
                explanation_long,
                cli_command,
                input_types,
                input_helps: input_help,
                input_names,
                ..
            } => {
                let name = if let Some(x) = name_long { x } else { name_short };
                command = Command::new(name).about(explanation_short);

                if name_long.is_some() {
                    command = command.alias(name_short);
                }

                if let Some(l) = explanation_long {
                    command = command.long_about(l);
                }

                for (i, (input_name, (input_type, input_help))) in input_names
                    .iter()
                    .zip(input_types.iter().zip(input_help.iter()))
                    .enumerate()
                {
                    let arg = Arg::new(format!("{}x{}", input_name, i))
                        .action(ArgAction::Set)
                        .value_name(input_name)
                        .help(input_help)
                        .required(true)
                        .value_parser(GenetInputType::get_parser_of_list(input_type))
                        .long_help(GenetInputType::possible_inputs_as_strings_with_articles(
                            input_type, " and ",
                        ));

                    command = command.arg(arg);
                }

                if let Some(f) = cli_command {
                    command = (f)(command);
                }

                command = command.arg(
                    Arg::new(ARG_ID_OUTPUT)
                        .short(ARG_SHORT_OUTPUT)
                        .long(ARG_ID_OUTPUT)
                        .action(ArgAction::Set)
                        .value_name("FILE")
                        .help("Saves the result to a file.")
                        .required(false)
                        .value_parser(value_parser!(PathBuf)),
                );
            }
        };
        return command;
    }

    pub fn short_name(&self) -> &str {
        match self {
            GenetCommand::Group { name_short, .. } => name_short,
            GenetCommand::Command { name_short, .. } => name_short,
        }
    }

    pub fn long_name(&self) -> &str {
        match self {
            GenetCommand::Group {
                name_short,
                name_long,
                ..
            } => match name_long {
                Some(x) => x,
                None => &name_short,
            },
            GenetCommand::Command {
                name_short,
                name_long,
                ..
            } => match name_long {
                Some(x) => x,
                None => &name_short,
            },
        }
    }

    pub fn explanation_long(&self) -> &str {
        match self {
            GenetCommand::Group {
                explanation_short,
                explanation_long,
                ..
            } => match explanation_long {
                Some(x) => x,
                None => &explanation_short,
            },
            GenetCommand::Command {
                explanation_short,
                explanation_long,
                ..
            } => match explanation_long {
                Some(x) => x,
                None => &explanation_short,
            },
        }
    }

    pub fn execute(&self, cli_matches: &ArgMatches) -> Result<()> {
        match self {
            GenetCommand::Group { children, .. } => {
                for child in children.iter() {
                    if let Some(sub_matches) = cli_matches.subcommand_matches(child.long_name()) {
                        return child.execute(sub_matches);
                    }
                }
            }
            GenetCommand::Command {
                input_types: input_typess,
                execute,
                output_type,
                input_names,
                ..
            } => {
                //read the inputs
                let mut inputs = vec![];
                for (i, (input_types, input_name)) in
                    input_typess.iter().zip(input_names.iter()).enumerate()
                {
                    let cli_id = format!("{}x{}", input_name, i);

                    //read input
                    log::info!("Reading {}", input_name);
                    let input = Self::attempt_parse(input_types, cli_matches, &cli_id)
                        .with_context(|| format!("Reading parameter {}.", input_name))?;
                    inputs.push(input);
                }

                log::info!("Starting {}", self.long_name());

                let result = (execute)(inputs, Some(cli_matches))?;

                if &&result.get_type() != output_type {
                    return Err(anyhow!(
                        "Output type {} does not match the declared output of {}.",
                        result.get_type(),
                        output_type
                    ));
                }

                let exporter = Self::select_exporter(output_type);
                if let Some(to_file) = cli_matches.get_one::<PathBuf>(ARG_ID_OUTPUT) {
                    //write result to file
                    log::info!(
                        "Writing result to {:?} as {} {}",
                        to_file,
                        exporter.get_article(),
                        exporter
                    );
                    genet_output::export_object(to_file, result, exporter)?;
                } else {
                    //write result to STDOUT
                    log::info!(
                        "Writing result as {} {}",
                        exporter.get_article(),
                        exporter
                    );
                    println!("{}", genet_output::export_to_string(result, exporter)?);
                }

                return Ok(());
            }
        }
        Err(anyhow!("command not recognised"))
    }

    pub fn select_exporter(output_type: &GenetOutputType) -> GenetExporter {
        //each Genet output type has a single exporter
        output_type.get_exporters().into_iter().next().unwrap()
    }

    /**
     * Attempt to parse an input as any of the given input types. Returns the last error if unsuccessful.
     */
    pub fn attempt_parse(
        input_types: &[&GenetInputType],
        cli_matches: &ArgMatches,
        cli_id: &str,
    ) -> Result<GenetInput> {
        //an input may be of several types; go through each of them
        let mut error = None;
        for input_type in input_types.iter() {
            //try to parse the input as this type
            match input_type {
                GenetInputType::Object(etype) => {
                    //try to parse a specific object
                    match genet_input::get_reader(cli_matches, cli_id).context("Getting reader.") {
                        Ok(mut reader) => {
                            match genet_input::read_as_object(etype, &mut reader)
                                .with_context(|| format!("Parsing as the object type `{}`.", etype))
                            {
                                Ok((object, file_handler)) => {
                                    return Ok(GenetInput::Object(object, file_handler));
                                }
                                Err(e) => error = Some(e),
                            }
                        }
                        Err(e) => error = Some(e),
                    }
                }
                GenetInputType::AnyObject => {
                    match genet_input::get_reader(cli_matches, cli_id).context("Getting reader.") {
                        Ok(mut reader) => {
                            match genet_input::read_as_any_object(&mut reader)
                                .context("Parsing as any object.")
                            {
                                Ok((object, file_handler)) => {
                                    return Ok(GenetInput::Object(object, file_handler));
                                }
                                Err(e) => error = Some(e),
                            }
                        }
                        Err(e) => error = Some(e),
                    }
                }
                GenetInputType::FileHandler => {
                    if let Some(value) = cli_matches.get_one::<GenetFileHandler>(cli_id) {
                        return Ok(GenetInput::FileHandler(value.clone()));
                    }
                }
                GenetInputType::Usize => {
                    if let Some(value) = cli_matches.get_one::<usize>(cli_id) {
                        return Ok(GenetInput::Usize(value.clone()));
                    }
                }
            }
        }

        match error {
            Some(e) => Err(e),
            None => Err(anyhow!("argument was not given")),
        }
    }
}

impl Display for GenetCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

#[cfg(test)]
mod tests {
    use crate::genet_framework::genet_command::GENET_COMMANDS;

    #[test]
    fn cli_structure() {
        let command = GENET_COMMANDS.build_cli();
        let subcommands: Vec<&str> = command.get_subcommands().map(|c| c.get_name()).collect();
        assert_eq!(
            subcommands,
            vec!["info", "penalty", "sample", "validate", "visualise"]
        );
    }

    #[test]
    fn cli_parses_sample() {
        let command = GENET_COMMANDS.build_cli();
        let result = command.try_get_matches_from(vec![
            "Genet",
            "sample",
            "testfiles/loan.cat",
            "10",
            "42",
        ]);
        assert!(result.is_ok());
    }
}
