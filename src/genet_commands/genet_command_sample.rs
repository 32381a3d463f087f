use crate::{
    genet_framework::{
        genet_command::GenetCommand,
        genet_input::{GenetInput, GenetInputType},
        genet_object::{GenetObject, GenetObjectType},
        genet_output::{GenetOutput, GenetOutputType},
    },
    techniques::sample::SamplePopulation,
};

pub const GENET_SAMPLE: GenetCommand = GenetCommand::Command {
    name_short: "sam",
    name_long: Some("sample"),
    explanation_short: "Sample a random population of chromosomes for a catalog.",
    explanation_long: Some(
        "Sample a random population of chromosomes for a catalog. \
        Each gene is a uniformly chosen place, and the same seed yields the same population.",
    ),
    cli_command: None,
    input_types: &[
        &[&GenetInputType::Object(GenetObjectType::TransitionCatalog)],
        &[&GenetInputType::Usize],
        &[&GenetInputType::Usize],
    ],
    input_names: &["CATALOG", "NUMBER_OF_CHROMOSOMES", "SEED"],
    input_helps: &[
        "The transition catalog.",
        "The number of chromosomes to be sampled.",
        "The seed of the random generator.",
    ],
    execute: |mut inputs, _| {
        let catalog = match inputs.remove(0) {
            GenetInput::Object(GenetObject::TransitionCatalog(catalog), _) => catalog,
            _ => unreachable!(),
        };
        let number_of_chromosomes = match inputs.remove(0) {
            GenetInput::Usize(number_of_chromosomes) => number_of_chromosomes,
            _ => unreachable!(),
        };
        let seed = match inputs.remove(0) {
            GenetInput::Usize(seed) => seed,
            _ => unreachable!(),
        };

        let population = catalog.sample(number_of_chromosomes, seed as u64)?;

        Ok(GenetOutput::Object(GenetObject::Population(population)))
    },
    output_type: &GenetOutputType::ObjectType(GenetObjectType::Population),
};

#[cfg(test)]
mod tests {
    use std::fs::File;

    use crate::genet_framework::{
        genet_command::GenetCommand,
        genet_input::{GenetInput, MultipleReader},
        genet_object::{GenetObject, GenetObjectType},
        genet_output::GenetOutput,
    };

    use super::GENET_SAMPLE;

    #[test]
    fn sample_population() {
        let mut reader = MultipleReader::from_file(File::open("testfiles/loan.cat").unwrap());
        let (object, file_handler) = crate::genet_framework::genet_input::read_as_object(
            &GenetObjectType::TransitionCatalog,
            &mut reader,
        )
        .unwrap();
        if let GenetCommand::Command { execute, .. } = GENET_SAMPLE {
            let output = (execute)(
                vec![
                    GenetInput::Object(object, file_handler),
                    GenetInput::Usize(10),
                    GenetInput::Usize(42),
                ],
                None,
            )
            .unwrap();
            if let GenetOutput::Object(GenetObject::Population(population)) = output {
                assert_eq!(population.get_number_of_chromosomes(), 10);
                assert_eq!(population.get_chromosome(0).len(), 24);
                return;
            }
        }
        unreachable!()
    }

    #[test]
    #[should_panic]
    fn unreachable_usize() {
        if let GenetCommand::Command { execute, .. } = GENET_SAMPLE {
            let _ = (execute)(
                vec![
                    GenetInput::Usize(10),
                    GenetInput::Usize(10),
                    GenetInput::Usize(42),
                ],
                None,
            );
        }
    }
}
