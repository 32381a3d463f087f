use anyhow::{Context, Error, Result, anyhow};
use fnv::FnvBuildHasher;
use itertools::Itertools;
use std::{
    collections::HashSet,
    fmt::Display,
    io::{self, BufRead, Write},
    str::FromStr,
};

use crate::{
    genet_framework::{
        exportable::Exportable,
        genet_file_handler::GenetFileHandler,
        genet_input::{self, GenetObjectImporter},
        genet_object::GenetObject,
        genet_output::{GenetObjectExporter, GenetOutput},
        importable::Importable,
        infoable::Infoable,
    },
    line_reader::LineReader,
};

pub const HEADER: &str = "population";

/// A list of chromosomes. Each chromosome is a flat list of genes on a single
/// line, separated by spaces; whether a chromosome fits a catalog is only
/// decided when it is decoded.
pub const GENET_POPULATION: GenetFileHandler = GenetFileHandler {
    name: "population",
    article: "a",
    file_extension: "pop",
    validator: genet_input::validate::<Population>,
    object_importers: &[GenetObjectImporter::Population(Population::import_as_object)],
    object_exporters: &[GenetObjectExporter::Population(Population::export_from_object)],
};

#[derive(Clone)]
pub struct Population {
    pub(crate) chromosomes: Vec<Vec<usize>>,
}

impl Population {
    pub fn get_number_of_chromosomes(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn get_chromosome(&self, index: usize) -> &Vec<usize> {
        &self.chromosomes[index]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<usize>> {
        self.chromosomes.iter()
    }
}

impl From<Vec<Vec<usize>>> for Population {
    fn from(value: Vec<Vec<usize>>) -> Self {
        Self { chromosomes: value }
    }
}

impl Importable for Population {
    fn import_as_object(reader: &mut dyn BufRead) -> Result<GenetObject> {
        Ok(GenetObject::Population(Self::import(reader)?))
    }

    fn import(reader: &mut dyn BufRead) -> Result<Self> {
        let mut lreader = LineReader::new(reader);

        let head = lreader
            .next_line_string()
            .with_context(|| format!("failed to read header, which should be `{}`", HEADER))?;
        if head != HEADER {
            return Err(anyhow!(
                "first line should be exactly `{}`, but found `{}`",
                HEADER,
                head
            ));
        }

        let number_of_chromosomes = lreader
            .next_line_index()
            .context("failed to read number of chromosomes")?;
        if number_of_chromosomes == 0 {
            return Err(anyhow!("population is empty"));
        }

        let mut chromosomes = vec![];
        chromosomes.reserve_exact(number_of_chromosomes);
        for chromosome_i in 0..number_of_chromosomes {
            let line = lreader.next_line_string().with_context(|| {
                format!(
                    "failed to read chromosome {} at line {}",
                    chromosome_i,
                    lreader.get_last_line_number()
                )
            })?;

            let mut genes = vec![];
            for gene in line.split_whitespace() {
                genes.push(gene.parse::<usize>().with_context(|| {
                    format!(
                        "failed to read gene `{}` of chromosome {} at line {}",
                        gene,
                        chromosome_i,
                        lreader.get_last_line_number()
                    )
                })?);
            }

            if genes.is_empty() {
                return Err(anyhow!(
                    "chromosome {} at line {} has no genes",
                    chromosome_i,
                    lreader.get_last_line_number()
                ));
            }

            chromosomes.push(genes);
        }

        Ok(Self {
            chromosomes: chromosomes,
        })
    }
}

impl FromStr for Population {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut reader = io::Cursor::new(s);
        Self::import(&mut reader)
    }
}

impl Exportable for Population {
    fn export_from_object(object: GenetOutput, f: &mut dyn Write) -> Result<()> {
        match object {
            GenetOutput::Object(GenetObject::Population(population)) => population.export(f),
            _ => unreachable!(),
        }
    }

    fn export(&self, f: &mut dyn Write) -> Result<()> {
        Ok(write!(f, "{}", self)?)
    }
}

impl Infoable for Population {
    fn info(&self, f: &mut impl Write) -> Result<()> {
        writeln!(f, "Number of chromosomes\t{}", self.chromosomes.len())?;
        writeln!(
            f,
            "Number of genes\t\t{}",
            self.chromosomes.iter().map(|c| c.len()).sum::<usize>()
        )?;

        let distinct: HashSet<&Vec<usize>, FnvBuildHasher> =
            self.chromosomes.iter().collect();
        writeln!(f, "Distinct chromosomes\t{}", distinct.len())?;

        Ok(write!(f, "")?)
    }
}

impl Display for Population {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", HEADER)?;
        writeln!(f, "# number of chromosomes\n{}", self.chromosomes.len())?;

        for (pos, chromosome) in self.chromosomes.iter().enumerate() {
            writeln!(f, "# chromosome {}", pos)?;
            writeln!(f, "{}", chromosome.iter().join(" "))?;
        }

        write!(f, "")
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::genet_framework::infoable::Infoable;
    use crate::genet_objects::population::Population;

    #[test]
    fn population_import() {
        let fin = fs::read_to_string("testfiles/linear.pop").unwrap();
        let population = fin.parse::<Population>().unwrap();

        assert_eq!(population.get_number_of_chromosomes(), 2);
        assert_eq!(population.get_chromosome(0).len(), 24);
        assert_eq!(population.get_chromosome(0)[1], 1);
        assert_eq!(population.get_chromosome(1), &vec![0; 24]);
    }

    #[test]
    fn population_export_import() {
        let fin = fs::read_to_string("testfiles/linear.pop").unwrap();
        let population = fin.parse::<Population>().unwrap();

        let again = population.to_string().parse::<Population>().unwrap();
        assert_eq!(
            again.get_number_of_chromosomes(),
            population.get_number_of_chromosomes()
        );
        assert_eq!(again.get_chromosome(0), population.get_chromosome(0));
    }

    #[test]
    fn population_invalid() {
        //empty population
        let fin = "population\n0\n";
        assert!(fin.parse::<Population>().is_err());

        //missing chromosome
        let fin = "population\n2\n0 1 2\n";
        assert!(fin.parse::<Population>().is_err());

        //non-numeric gene
        let fin = "population\n1\n0 1 x\n";
        assert!(fin.parse::<Population>().is_err());

        //chromosome without genes is rejected by the importer
        let fin = "population\n1\n\n";
        assert!(fin.parse::<Population>().is_err());
    }

    #[test]
    fn population_info() {
        let population = Population::from(vec![vec![0, 1], vec![0, 1], vec![1, 2]]);

        let mut info = vec![];
        population.info(&mut info).unwrap();
        let info = String::from_utf8(info).unwrap();
        assert!(info.contains("Number of chromosomes\t3"));
        assert!(info.contains("Distinct chromosomes\t2"));
    }
}
