use anyhow::Context;
use std::io::Write;

use crate::{
    genet_framework::{
        genet_command::GenetCommand,
        genet_input::{GenetInput, GenetInputType},
        genet_object::{GenetObject, GenetObjectType},
        genet_output::{GenetOutput, GenetOutputType},
    },
    genet_objects::transition_table::TransitionTable,
    techniques::structural_penalty::StructuralPenalty,
};

pub const GENET_PENALTY: GenetCommand = GenetCommand::Command {
    name_short: "pen",
    name_long: Some("penalty"),
    explanation_short: "Compute the structural penalty of each chromosome of a population.",
    explanation_long: Some(
        "Compute the structural penalty of each chromosome of a population. \
        The penalty is the number of arrivals to the initial place, departures from the final place, self-loops, \
        and backward transitions, where a transition may be counted in several categories.",
    ),
    cli_command: None,
    input_types: &[
        &[&GenetInputType::Object(GenetObjectType::TransitionCatalog)],
        &[&GenetInputType::Object(GenetObjectType::Population)],
    ],
    input_names: &["CATALOG", "POPULATION"],
    input_helps: &["The transition catalog.", "The population of chromosomes."],
    execute: |mut inputs, _| {
        let catalog = match inputs.remove(0) {
            GenetInput::Object(GenetObject::TransitionCatalog(catalog), _) => catalog,
            _ => unreachable!(),
        };
        let population = match inputs.remove(0) {
            GenetInput::Object(GenetObject::Population(population), _) => population,
            _ => unreachable!(),
        };

        let mut f = vec![];
        for (pos, chromosome) in population.iter().enumerate() {
            let table = TransitionTable::decode(chromosome, &catalog)
                .with_context(|| format!("decoding chromosome {}", pos))?;
            writeln!(f, "chromosome {}\t{}", pos, table.penalty_breakdown(&catalog))?;
        }

        Ok(GenetOutput::String(String::from_utf8(f).unwrap()))
    },
    output_type: &GenetOutputType::String,
};

#[cfg(test)]
mod tests {
    use std::fs::File;

    use crate::genet_framework::{
        genet_command::GenetCommand,
        genet_input::{GenetInput, MultipleReader},
        genet_object::GenetObjectType,
        genet_output::GenetOutput,
    };

    use super::GENET_PENALTY;

    fn object_from(file: &str, etype: &GenetObjectType) -> GenetInput {
        let mut reader = MultipleReader::from_file(File::open(file).unwrap());
        let (object, file_handler) =
            crate::genet_framework::genet_input::read_as_object(etype, &mut reader).unwrap();
        GenetInput::Object(object, file_handler)
    }

    #[test]
    fn penalty_of_population() {
        let catalog = object_from("testfiles/loan.cat", &GenetObjectType::TransitionCatalog);
        let population = object_from("testfiles/linear.pop", &GenetObjectType::Population);
        if let GenetCommand::Command { execute, .. } = GENET_PENALTY {
            let output = (execute)(vec![catalog, population], None).unwrap();
            if let GenetOutput::String(string) = output {
                assert!(string.contains("chromosome 0\t0 ("));
                assert!(string.contains("chromosome 1\t24 ("));
                return;
            }
        }
        unreachable!()
    }

    #[test]
    #[should_panic]
    fn unreachable_usize() {
        if let GenetCommand::Command { execute, .. } = GENET_PENALTY {
            let _ = (execute)(vec![GenetInput::Usize(10), GenetInput::Usize(10)], None);
        }
    }

    #[test]
    #[should_panic]
    fn unreachable_wrong_object() {
        let catalog = object_from("testfiles/loan.cat", &GenetObjectType::TransitionCatalog);
        let also_catalog = object_from("testfiles/loan.cat", &GenetObjectType::TransitionCatalog);
        if let GenetCommand::Command { execute, .. } = GENET_PENALTY {
            let _ = (execute)(vec![catalog, also_catalog], None);
        }
    }
}
