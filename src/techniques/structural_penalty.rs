use std::fmt::Display;

use crate::genet_objects::{
    transition_catalog::TransitionCatalog, transition_table::TransitionTable,
};

/// How far backwards an invisible transition may jump before it is counted as
/// a violation.
pub const INVISIBLE_BACKWARD_TOLERANCE: usize = 2;

/// Counts structural defects of a transition table without touching the event
/// log. The categories are independent: a row may be counted several times.
pub trait StructuralPenalty {
    /// Rows whose target is the initial place.
    fn count_arrivals_to_initial_place(&self) -> usize;

    /// Rows whose source is the final place.
    fn count_departures_from_final_place(&self, catalog: &TransitionCatalog) -> usize;

    /// Rows whose source and target coincide.
    fn count_self_loops(&self) -> usize;

    /// Invisible rows that jump backwards further than the tolerance.
    fn count_backward_invisible(&self, catalog: &TransitionCatalog) -> usize;

    /// Visible rows that jump backwards at all.
    fn count_backward_visible(&self, catalog: &TransitionCatalog) -> usize;

    fn penalty_breakdown(&self, catalog: &TransitionCatalog) -> PenaltyBreakdown {
        PenaltyBreakdown {
            arrivals_to_initial_place: self.count_arrivals_to_initial_place(),
            departures_from_final_place: self.count_departures_from_final_place(catalog),
            self_loops: self.count_self_loops(),
            backward_invisible: self.count_backward_invisible(catalog),
            backward_visible: self.count_backward_visible(catalog),
        }
    }

    fn penalty(&self, catalog: &TransitionCatalog) -> usize {
        self.penalty_breakdown(catalog).total()
    }
}

pub struct PenaltyBreakdown {
    pub arrivals_to_initial_place: usize,
    pub departures_from_final_place: usize,
    pub self_loops: usize,
    pub backward_invisible: usize,
    pub backward_visible: usize,
}

impl PenaltyBreakdown {
    pub fn total(&self) -> usize {
        self.arrivals_to_initial_place
            + self.departures_from_final_place
            + self.self_loops
            + self.backward_invisible
            + self.backward_visible
    }
}

impl Display for PenaltyBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (arrivals to initial place {}, departures from final place {}, self-loops {}, backward invisible {}, backward visible {})",
            self.total(),
            self.arrivals_to_initial_place,
            self.departures_from_final_place,
            self.self_loops,
            self.backward_invisible,
            self.backward_visible
        )
    }
}

impl StructuralPenalty for TransitionTable {
    fn count_arrivals_to_initial_place(&self) -> usize {
        self.table
            .column(1)
            .iter()
            .filter(|target| **target == 0)
            .count()
    }

    fn count_departures_from_final_place(&self, catalog: &TransitionCatalog) -> usize {
        let final_place = catalog.get_number_of_places() - 1;
        self.table
            .column(0)
            .iter()
            .filter(|source| **source == final_place)
            .count()
    }

    fn count_self_loops(&self) -> usize {
        self.table
            .rows()
            .into_iter()
            .filter(|row| row[0] == row[1])
            .count()
    }

    fn count_backward_invisible(&self, catalog: &TransitionCatalog) -> usize {
        self.table
            .rows()
            .into_iter()
            .take(catalog.get_number_of_invisible())
            .filter(|row| row[0] > row[1] + INVISIBLE_BACKWARD_TOLERANCE)
            .count()
    }

    fn count_backward_visible(&self, catalog: &TransitionCatalog) -> usize {
        self.table
            .rows()
            .into_iter()
            .skip(catalog.get_number_of_invisible())
            .filter(|row| row[0] > row[1])
            .count()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::genet_objects::{
        transition_catalog::TransitionCatalog, transition_table::TransitionTable,
    };
    use crate::techniques::structural_penalty::StructuralPenalty;

    fn loan_catalog() -> TransitionCatalog {
        let fin = fs::read_to_string("testfiles/loan.cat").unwrap();
        fin.parse::<TransitionCatalog>().unwrap()
    }

    const LINEAR_GENOME: [usize; 24] = [
        0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 0, 2, 2, 4, 4, 6, 6, 8,
    ];

    #[test]
    fn penalty_zero_witness() {
        let catalog = loan_catalog();
        let table = TransitionTable::decode(&LINEAR_GENOME, &catalog).unwrap();
        assert_eq!(table.penalty(&catalog), 0);
    }

    #[test]
    fn penalty_counts_rows_several_times() {
        let catalog = loan_catalog();

        //every row is (0, 0): a self-loop that also arrives at the initial place
        let table = TransitionTable::decode(&vec![0; 24], &catalog).unwrap();
        let breakdown = table.penalty_breakdown(&catalog);
        assert_eq!(breakdown.arrivals_to_initial_place, 12);
        assert_eq!(breakdown.departures_from_final_place, 0);
        assert_eq!(breakdown.self_loops, 12);
        assert_eq!(breakdown.backward_invisible, 0);
        assert_eq!(breakdown.backward_visible, 0);
        assert_eq!(breakdown.total(), 24);
        assert_eq!(table.penalty(&catalog), 24);
    }

    #[test]
    fn penalty_backward_invisible() {
        let catalog = loan_catalog();

        //invisible transition 0 jumps from the final place back to the start
        let mut genome = LINEAR_GENOME.to_vec();
        genome[0] = 8;
        genome[1] = 0;
        let table = TransitionTable::decode(&genome, &catalog).unwrap();
        let breakdown = table.penalty_breakdown(&catalog);
        assert_eq!(breakdown.backward_invisible, 1);
        assert_eq!(breakdown.arrivals_to_initial_place, 1);
        assert_eq!(breakdown.departures_from_final_place, 1);
        assert_eq!(table.penalty(&catalog), 3);
    }

    #[test]
    fn penalty_backward_invisible_tolerance() {
        let catalog = loan_catalog();

        //a jump of exactly the tolerance is allowed for invisible transitions
        let mut genome = LINEAR_GENOME.to_vec();
        genome[0] = 3;
        genome[1] = 1;
        let table = TransitionTable::decode(&genome, &catalog).unwrap();
        assert_eq!(table.penalty_breakdown(&catalog).backward_invisible, 0);
        assert_eq!(table.penalty(&catalog), 0);

        //one further is not
        genome[0] = 4;
        let table = TransitionTable::decode(&genome, &catalog).unwrap();
        assert_eq!(table.penalty_breakdown(&catalog).backward_invisible, 1);
        assert_eq!(table.penalty(&catalog), 1);
    }

    #[test]
    fn penalty_backward_visible() {
        let catalog = loan_catalog();

        //visible transition 2 jumps backwards; no tolerance applies
        let mut genome = LINEAR_GENOME.to_vec();
        genome[4] = 5;
        genome[5] = 3;
        let table = TransitionTable::decode(&genome, &catalog).unwrap();
        let breakdown = table.penalty_breakdown(&catalog);
        assert_eq!(breakdown.backward_visible, 1);
        assert_eq!(table.penalty(&catalog), 1);
    }

    #[test]
    fn penalty_breakdown_display() {
        let catalog = loan_catalog();
        let table = TransitionTable::decode(&vec![0; 24], &catalog).unwrap();
        let breakdown = table.penalty_breakdown(&catalog);
        assert!(breakdown.to_string().starts_with("24 ("));
        assert!(breakdown.to_string().contains("self-loops 12"));
    }
}
