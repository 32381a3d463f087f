use rayon::prelude::*;

use crate::{
    genet_objects::{
        event_log::EventLog, process_net::ProcessNet, transition_catalog::TransitionCatalog,
        transition_table::TransitionTable,
    },
    genet_traits::trace_aligner::TraceAligner,
};

use super::structural_penalty::StructuralPenalty;

/// Alignment score of a net that the engine refused to align.
pub const ALIGNMENT_FAILURE_SCORE: f64 = -1.0;

/// Fitness of a chromosome that does not decode into a net.
pub const WORST_FITNESS: f64 = f64::NEG_INFINITY;

/// Scores chromosomes for a GA driver: the alignment fitness of the decoded
/// net on the log, minus the structural penalty of the table. The catalog and
/// the log are fixed for the lifetime of the evaluator.
pub struct FitnessEvaluator<A: TraceAligner> {
    catalog: TransitionCatalog,
    log: EventLog,
    aligner: A,
}

impl<A: TraceAligner> FitnessEvaluator<A> {
    pub fn new(catalog: TransitionCatalog, log: EventLog, aligner: A) -> Self {
        Self {
            catalog: catalog,
            log: log,
            aligner: aligner,
        }
    }

    /// Total over chromosomes: a chromosome that cannot be evaluated gets the
    /// worst fitness, an engine failure the sentinel score. Never fails.
    pub fn fitness(&self, genome: &[usize]) -> f64 {
        let table = match TransitionTable::decode(genome, &self.catalog) {
            Ok(table) => table,
            Err(e) => {
                log::debug!("chromosome cannot be decoded: {}", e);
                return WORST_FITNESS;
            }
        };

        let penalty = table.penalty(&self.catalog);

        let net = match ProcessNet::from_table(&table, &self.catalog) {
            Ok(net) => net,
            Err(e) => {
                log::debug!("chromosome does not decode into a net: {}", e);
                return WORST_FITNESS;
            }
        };

        let score = match self.aligner.align_log(&net, &self.log) {
            Ok(summary) => summary.average_trace_fitness,
            Err(e) => {
                log::debug!("alignment failed: {}", e);
                ALIGNMENT_FAILURE_SCORE
            }
        };

        score - penalty as f64
    }

    /// Evaluates a whole population in parallel. The order of the results
    /// matches the order of the chromosomes.
    pub fn fitness_population(&self, population: &[Vec<usize>]) -> Vec<f64> {
        population
            .par_iter()
            .map(|genome| self.fitness(genome))
            .collect()
    }
}
