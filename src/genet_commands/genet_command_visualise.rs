use anyhow::{Result, anyhow};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

use crate::{
    genet_framework::{
        genet_command::GenetCommand,
        genet_input::{GenetInput, GenetInputType},
        genet_object::{GenetObject, GenetObjectType},
        genet_output::{GenetOutput, GenetOutputType},
        graphable,
    },
    genet_objects::{process_net::ProcessNet, transition_table::TransitionTable},
};

pub const GENET_VISUALISE: GenetCommand = GenetCommand::Group {
    name_short: "vis",
    name_long: Some("visualise"),
    explanation_short: "Visualise a chromosome of a population.",
    explanation_long: None,
    children: &[
        &GENET_VISUALISE_PDF,
        &GENET_VISUALISE_SVG,
        &GENET_VISUALISE_TEXT,
    ],
};

pub const GENET_VISUALISE_PDF: GenetCommand = GenetCommand::Command {
    name_short: "pdf",
    name_long: None,
    explanation_short: "Visualise a chromosome of a population as portable document format.",
    explanation_long: None,
    cli_command: Some(index_arg),
    input_types: &[
        &[&GenetInputType::Object(GenetObjectType::TransitionCatalog)],
        &[&GenetInputType::Object(GenetObjectType::Population)],
    ],
    input_names: &["CATALOG", "POPULATION"],
    input_helps: &["The transition catalog.", "The population of chromosomes."],
    execute: |inputs, cli_matches| {
        let net = visualised_net(inputs, cli_matches)?;
        let svg = graphable::to_svg_string(&net)?;
        Ok(GenetOutput::PDF(graphable::svg_to_pdf(&svg)?))
    },
    output_type: &GenetOutputType::PDF,
};

pub const GENET_VISUALISE_SVG: GenetCommand = GenetCommand::Command {
    name_short: "svg",
    name_long: None,
    explanation_short: "Visualise a chromosome of a population as scalable vector graphics.",
    explanation_long: None,
    cli_command: Some(index_arg),
    input_types: &[
        &[&GenetInputType::Object(GenetObjectType::TransitionCatalog)],
        &[&GenetInputType::Object(GenetObjectType::Population)],
    ],
    input_names: &["CATALOG", "POPULATION"],
    input_helps: &["The transition catalog.", "The population of chromosomes."],
    execute: |inputs, cli_matches| {
        let net = visualised_net(inputs, cli_matches)?;
        Ok(GenetOutput::SVG(graphable::to_svg_string(&net)?))
    },
    output_type: &GenetOutputType::SVG,
};

pub const GENET_VISUALISE_TEXT: GenetCommand = GenetCommand::Command {
    name_short: "txt",
    name_long: Some("text"),
    explanation_short: "Visualise a chromosome of a population as text.",
    explanation_long: None,
    cli_command: Some(index_arg),
    input_types: &[
        &[&GenetInputType::Object(GenetObjectType::TransitionCatalog)],
        &[&GenetInputType::Object(GenetObjectType::Population)],
    ],
    input_names: &["CATALOG", "POPULATION"],
    input_helps: &["The transition catalog.", "The population of chromosomes."],
    execute: |inputs, cli_matches| {
        let net = visualised_net(inputs, cli_matches)?;
        Ok(GenetOutput::String(net.to_string()))
    },
    output_type: &GenetOutputType::String,
};

fn index_arg(command: Command) -> Command {
    command.arg(
        Arg::new("index")
            .short('i')
            .long("index")
            .action(ArgAction::Set)
            .value_name("INDEX")
            .help("The chromosome to visualise; the first one if not given.")
            .required(false)
            .value_parser(value_parser!(usize)),
    )
}

fn visualised_net(
    mut inputs: Vec<GenetInput>,
    cli_matches: Option<&ArgMatches>,
) -> Result<ProcessNet> {
    let catalog = match inputs.remove(0) {
        GenetInput::Object(GenetObject::TransitionCatalog(catalog), _) => catalog,
        _ => unreachable!(),
    };
    let population = match inputs.remove(0) {
        GenetInput::Object(GenetObject::Population(population), _) => population,
        _ => unreachable!(),
    };
    let index = match cli_matches.and_then(|cli_matches| cli_matches.get_one::<usize>("index")) {
        Some(index) => *index,
        None => 0,
    };

    if index >= population.get_number_of_chromosomes() {
        return Err(anyhow!(
            "population has {} chromosomes, but chromosome {} was requested",
            population.get_number_of_chromosomes(),
            index
        ));
    }

    let table = TransitionTable::decode(population.get_chromosome(index), &catalog)?;
    ProcessNet::from_table(&table, &catalog)
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use crate::genet_framework::{
        genet_command::{GENET_COMMANDS, GenetCommand},
        genet_file_handler::GenetFileHandler,
        genet_input::{GenetInput, MultipleReader},
        genet_object::GenetObjectType,
        genet_output::GenetOutput,
    };

    use super::{GENET_VISUALISE_SVG, GENET_VISUALISE_TEXT};

    fn object_from(file: &str, etype: &GenetObjectType) -> GenetInput {
        let mut reader = MultipleReader::from_file(File::open(file).unwrap());
        let (object, file_handler) =
            crate::genet_framework::genet_input::read_as_object(etype, &mut reader).unwrap();
        GenetInput::Object(object, file_handler)
    }

    #[test]
    fn visualise_as_text() {
        let catalog = object_from("testfiles/loan.cat", &GenetObjectType::TransitionCatalog);
        let population = object_from("testfiles/linear.pop", &GenetObjectType::Population);
        if let GenetCommand::Command { execute, .. } = GENET_VISUALISE_TEXT {
            let output = (execute)(vec![catalog, population], None).unwrap();
            if let GenetOutput::String(string) = output {
                assert!(string.contains("process net"));
                return;
            }
        }
        unreachable!()
    }

    #[test]
    fn visualise_as_svg() {
        let catalog = object_from("testfiles/loan.cat", &GenetObjectType::TransitionCatalog);
        let population = object_from("testfiles/linear.pop", &GenetObjectType::Population);
        if let GenetCommand::Command { execute, .. } = GENET_VISUALISE_SVG {
            let output = (execute)(vec![catalog, population], None).unwrap();
            if let GenetOutput::SVG(string) = output {
                assert!(string.contains("svg"));
                return;
            }
        }
        unreachable!()
    }

    #[test]
    fn visualise_index_out_of_range() {
        let command = GENET_COMMANDS.build_cli();
        let cli_matches = command
            .try_get_matches_from(vec![
                "Genet",
                "visualise",
                "text",
                "testfiles/loan.cat",
                "testfiles/linear.pop",
                "--index",
                "5",
            ])
            .unwrap();
        assert!(GENET_COMMANDS.execute(&cli_matches).is_err());
    }

    #[test]
    #[should_panic]
    fn unreachable_usize() {
        if let GenetCommand::Command { execute, .. } = GENET_VISUALISE_TEXT {
            let _ = (execute)(vec![GenetInput::Usize(10), GenetInput::Usize(10)], None);
        }
    }

    #[test]
    #[should_panic]
    fn unreachable_filehandler() {
        let file_handler: GenetFileHandler =
            crate::genet_objects::transition_catalog::GENET_TRANSITION_CATALOG;
        if let GenetCommand::Command { execute, .. } = GENET_VISUALISE_TEXT {
            let _ = (execute)(vec![GenetInput::FileHandler(file_handler)], None);
        }
    }
}
