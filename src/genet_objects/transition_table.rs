use anyhow::{Result, anyhow};
use ndarray::Array2;

use super::transition_catalog::TransitionCatalog;

/// A chromosome, reshaped. Row `i` holds the source and target place of
/// transition `i` of the catalog.
pub struct TransitionTable {
    pub(crate) table: Array2<usize>,
}

impl TransitionTable {
    /// Reshapes a flat chromosome into a table with one row per transition.
    /// Fails iff the chromosome does not have two genes per catalog transition;
    /// gene values are not validated here.
    pub fn decode(genome: &[usize], catalog: &TransitionCatalog) -> Result<Self> {
        if genome.len() != catalog.get_genome_length() {
            return Err(anyhow!(
                "chromosome has {} genes, but the catalog needs {}",
                genome.len(),
                catalog.get_genome_length()
            ));
        }

        let table =
            Array2::from_shape_vec((catalog.get_number_of_transitions(), 2), genome.to_vec())?;
        Ok(Self { table: table })
    }

    /// The inverse of decoding: the flat chromosome, row-major.
    pub fn flatten(&self) -> Vec<usize> {
        self.table.iter().cloned().collect()
    }

    pub fn get_number_of_transitions(&self) -> usize {
        self.table.nrows()
    }

    pub fn get_source(&self, transition: usize) -> usize {
        self.table[[transition, 0]]
    }

    pub fn get_target(&self, transition: usize) -> usize {
        self.table[[transition, 1]]
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::genet_objects::{
        transition_catalog::TransitionCatalog, transition_table::TransitionTable,
    };

    #[test]
    fn decode_flatten() {
        let fin = fs::read_to_string("testfiles/loan.cat").unwrap();
        let catalog = fin.parse::<TransitionCatalog>().unwrap();

        let genome: Vec<usize> = (0..24).map(|g| g % 9).collect();
        let table = TransitionTable::decode(&genome, &catalog).unwrap();

        assert_eq!(table.get_number_of_transitions(), 12);
        assert_eq!(table.get_source(0), genome[0]);
        assert_eq!(table.get_target(0), genome[1]);
        assert_eq!(table.get_source(11), genome[22]);
        assert_eq!(table.get_target(11), genome[23]);
        assert_eq!(table.flatten(), genome);
    }

    #[test]
    fn decode_wrong_length() {
        let fin = fs::read_to_string("testfiles/loan.cat").unwrap();
        let catalog = fin.parse::<TransitionCatalog>().unwrap();

        assert!(TransitionTable::decode(&[], &catalog).is_err());
        assert!(TransitionTable::decode(&vec![0; 23], &catalog).is_err());
        assert!(TransitionTable::decode(&vec![0; 25], &catalog).is_err());
    }
}
