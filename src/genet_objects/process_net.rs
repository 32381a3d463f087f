use anyhow::{Result, anyhow};
use layout::topo::layout::VisualGraph;
use std::fmt;

use crate::{
    genet_framework::{
        activity_key::{Activity, ActivityKey},
        graphable::Graphable,
        infoable::Infoable,
    },
    marking::Marking,
};

use super::{transition_catalog::TransitionCatalog, transition_table::TransitionTable};

pub const HEADER: &str = "process net";

/// A decoded chromosome: a Petri net in which every transition has exactly one
/// input and one output place. The initial marking puts one token on place 0,
/// the final marking one token on the last place.
pub struct ProcessNet {
    pub(crate) activity_key: ActivityKey,
    pub(crate) number_of_places: usize,
    pub(crate) labels: Vec<Option<Activity>>,
    pub(crate) transition2input_place: Vec<usize>,
    pub(crate) transition2output_place: Vec<usize>,
    pub(crate) initial_marking: Marking,
    pub(crate) final_marking: Marking,
}

impl ProcessNet {
    pub fn from_table(table: &TransitionTable, catalog: &TransitionCatalog) -> Result<Self> {
        let number_of_places = catalog.get_number_of_places();

        let mut labels = vec![];
        let mut transition2input_place = vec![];
        let mut transition2output_place = vec![];
        for transition in 0..table.get_number_of_transitions() {
            let source = table.get_source(transition);
            if source >= number_of_places {
                return Err(anyhow!(
                    "non-existing place {} referenced as source of transition {}, while there are {}",
                    source,
                    transition,
                    number_of_places
                ));
            }
            let target = table.get_target(transition);
            if target >= number_of_places {
                return Err(anyhow!(
                    "non-existing place {} referenced as target of transition {}, while there are {}",
                    target,
                    transition,
                    number_of_places
                ));
            }

            labels.push(if catalog.is_invisible(transition) {
                None
            } else {
                Some(catalog.get_activity(transition))
            });
            transition2input_place.push(source);
            transition2output_place.push(target);
        }

        let mut initial_marking = Marking::new(number_of_places);
        initial_marking.increase(0, 1)?;
        let mut final_marking = Marking::new(number_of_places);
        final_marking.increase(number_of_places - 1, 1)?;

        Ok(Self {
            activity_key: catalog.get_activity_key().clone(),
            number_of_places: number_of_places,
            labels: labels,
            transition2input_place: transition2input_place,
            transition2output_place: transition2output_place,
            initial_marking: initial_marking,
            final_marking: final_marking,
        })
    }

    pub fn get_number_of_places(&self) -> usize {
        self.number_of_places
    }

    pub fn get_number_of_transitions(&self) -> usize {
        self.labels.len()
    }

    pub fn get_transition_label(&self, transition: usize) -> Option<Activity> {
        self.labels[transition]
    }

    pub fn is_transition_silent(&self, transition: usize) -> bool {
        self.labels[transition].is_none()
    }

    pub fn get_input_place(&self, transition: usize) -> usize {
        self.transition2input_place[transition]
    }

    pub fn get_output_place(&self, transition: usize) -> usize {
        self.transition2output_place[transition]
    }

    pub fn get_initial_marking(&self) -> &Marking {
        &self.initial_marking
    }

    pub fn get_final_marking(&self) -> &Marking {
        &self.final_marking
    }

    pub fn get_activity_key(&self) -> &ActivityKey {
        &self.activity_key
    }
}

impl Infoable for ProcessNet {
    fn info(&self, f: &mut impl std::io::Write) -> Result<()> {
        writeln!(f, "Number of places\t\t{}", self.get_number_of_places())?;
        writeln!(
            f,
            "Number of transitions\t\t{}",
            self.get_number_of_transitions()
        )?;
        writeln!(
            f,
            "Number of silent transitions\t{}",
            (0..self.get_number_of_transitions())
                .into_iter()
                .filter(|transition| self.is_transition_silent(*transition))
                .count()
        )?;
        writeln!(f, "Initial marking\t\t\t{}", self.initial_marking)?;
        writeln!(f, "Final marking\t\t\t{}", self.final_marking)?;

        Ok(write!(f, "")?)
    }
}

impl fmt::Display for ProcessNet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", HEADER)?;
        writeln!(f, "# number of places\n{}", self.get_number_of_places())?;

        writeln!(f, "# initial marking")?;
        for place in self.initial_marking.get_place2token() {
            writeln!(f, "{}", place)?;
        }

        writeln!(f, "# final marking")?;
        for place in self.final_marking.get_place2token() {
            writeln!(f, "{}", place)?;
        }

        writeln!(
            f,
            "# number of transitions\n{}",
            self.get_number_of_transitions()
        )?;

        for transition in 0..self.get_number_of_transitions() {
            writeln!(f, "# transition {}", transition)?;

            if let Some(activity) = self.get_transition_label(transition) {
                writeln!(f, "label {}", self.activity_key.get_activity_label(&activity))?;
            } else {
                writeln!(f, "silent")?;
            }

            writeln!(f, "# input place\n{}", self.transition2input_place[transition])?;
            writeln!(f, "# output place\n{}", self.transition2output_place[transition])?;
        }

        write!(f, "")
    }
}

impl Graphable for ProcessNet {
    fn to_dot(&self) -> Result<VisualGraph> {
        let mut graph = VisualGraph::new(layout::core::base::Orientation::LeftToRight);

        let mut places = vec![];
        for place in 0..self.get_number_of_places() {
            let label = if let Some(marked) = self.initial_marking.place2token.get(place) {
                if marked > &0 {
                    marked.to_string()
                } else {
                    "".to_string()
                }
            } else {
                "".to_string()
            };

            places.push(<dyn Graphable>::create_place(&mut graph, &label));
        }

        for transition in 0..self.get_number_of_transitions() {
            let node = if let Some(activity) = self.get_transition_label(transition) {
                <dyn Graphable>::create_transition(
                    &mut graph,
                    self.activity_key.get_activity_label(&activity),
                )
            } else {
                <dyn Graphable>::create_silent_transition(&mut graph)
            };

            let source = places[self.transition2input_place[transition]];
            <dyn Graphable>::create_edge(&mut graph, &source, &node);

            let target = places[self.transition2output_place[transition]];
            <dyn Graphable>::create_edge(&mut graph, &node, &target);
        }

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::genet_framework::{graphable::Graphable, infoable::Infoable};
    use crate::genet_objects::{
        process_net::ProcessNet, transition_catalog::TransitionCatalog,
        transition_table::TransitionTable,
    };

    fn loan_catalog() -> TransitionCatalog {
        let fin = fs::read_to_string("testfiles/loan.cat").unwrap();
        fin.parse::<TransitionCatalog>().unwrap()
    }

    const LINEAR_GENOME: [usize; 24] = [
        0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 0, 2, 2, 4, 4, 6, 6, 8,
    ];

    #[test]
    fn net_from_table() {
        let catalog = loan_catalog();
        let table = TransitionTable::decode(&LINEAR_GENOME, &catalog).unwrap();
        let net = ProcessNet::from_table(&table, &catalog).unwrap();

        assert_eq!(net.get_number_of_places(), 9);
        assert_eq!(net.get_number_of_transitions(), 12);
        assert!(net.is_transition_silent(0));
        assert!(net.is_transition_silent(1));
        assert!(!net.is_transition_silent(2));
        assert_eq!(net.get_input_place(0), 0);
        assert_eq!(net.get_output_place(0), 1);
        assert_eq!(net.get_initial_marking().to_string(), "{0:1}");
        assert_eq!(net.get_final_marking().to_string(), "{8:1}");
    }

    #[test]
    fn net_rejects_missing_place() {
        let catalog = loan_catalog();

        //place 9 does not exist
        let mut genome = LINEAR_GENOME.to_vec();
        genome[1] = 9;
        let table = TransitionTable::decode(&genome, &catalog).unwrap();
        assert!(ProcessNet::from_table(&table, &catalog).is_err());

        let mut genome = LINEAR_GENOME.to_vec();
        genome[22] = 100;
        let table = TransitionTable::decode(&genome, &catalog).unwrap();
        assert!(ProcessNet::from_table(&table, &catalog).is_err());
    }

    #[test]
    fn net_display() {
        let catalog = loan_catalog();
        let table = TransitionTable::decode(&LINEAR_GENOME, &catalog).unwrap();
        let net = ProcessNet::from_table(&table, &catalog).unwrap();

        let fout = net.to_string();
        assert!(fout.starts_with("process net\n"));
        assert!(fout.contains("silent"));
        assert!(fout.contains("label Receiving Request"));

        let mut info = vec![];
        net.info(&mut info).unwrap();
        let info = String::from_utf8(info).unwrap();
        assert!(info.contains("Number of places"));
        assert!(info.contains("{8:1}"));
    }

    #[test]
    fn net_to_dot() {
        let catalog = loan_catalog();
        let table = TransitionTable::decode(&LINEAR_GENOME, &catalog).unwrap();
        let net = ProcessNet::from_table(&table, &catalog).unwrap();

        let graph = net.to_dot().unwrap();
        assert_eq!(graph.num_nodes(), 9 + 12);
    }
}
