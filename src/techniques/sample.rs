use anyhow::{Result, anyhow};
use rand::Rng;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

use crate::genet_objects::{population::Population, transition_catalog::TransitionCatalog};

pub trait SamplePopulation {
    fn sample(&self, number_of_chromosomes: usize, seed: u64) -> Result<Population>;
}

impl SamplePopulation for TransitionCatalog {
    /// Draws uniform random chromosomes for this catalog. Every gene is a
    /// valid place index, so every sampled chromosome decodes into a net.
    /// The same seed yields the same population.
    fn sample(&self, number_of_chromosomes: usize, seed: u64) -> Result<Population> {
        if number_of_chromosomes == 0 {
            return Err(anyhow!("cannot sample an empty population"));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut chromosomes = vec![];
        chromosomes.reserve_exact(number_of_chromosomes);
        for _ in 0..number_of_chromosomes {
            let chromosome = (0..self.get_genome_length())
                .map(|_| rng.gen_range(0..self.get_number_of_places()))
                .collect::<Vec<usize>>();
            chromosomes.push(chromosome);
        }

        Ok(Population::from(chromosomes))
    }
}
