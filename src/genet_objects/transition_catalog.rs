use anyhow::{Context, Error, Result, anyhow};
use std::{
    fmt::Display,
    io::{self, BufRead, Write},
    str::FromStr,
};

use crate::{
    genet_framework::{
        activity_key::{Activity, ActivityKey},
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

pub const HEADER: &str = "transition catalog";

/// The fixed alphabet of a discovery run: an ordered list of transition names,
/// of which the first ones are invisible, and the number of places of the nets
/// that chromosomes decode into. A chromosome has two genes per transition.
pub const GENET_TRANSITION_CATALOG: GenetFileHandler = GenetFileHandler {
    name: "transition catalog",
    article: "a",
    file_extension: "cat",
    validator: genet_input::validate::<TransitionCatalog>,
    object_importers: &[GenetObjectImporter::TransitionCatalog(
        TransitionCatalog::import_as_object,
    )],
    object_exporters: &[GenetObjectExporter::TransitionCatalog(
        TransitionCatalog::export_from_object,
    )],
};

#[derive(Clone)]
pub struct TransitionCatalog {
    pub(crate) activity_key: ActivityKey,
    pub(crate) transitions: Vec<Activity>,
    pub(crate) number_of_places: usize,
    pub(crate) number_of_invisible: usize,
}

impl TransitionCatalog {
    pub fn new(
        names: Vec<String>,
        number_of_places: usize,
        number_of_invisible: usize,
    ) -> Result<Self> {
        if names.is_empty() {
            return Err(anyhow!("catalog has no transitions"));
        }
        if number_of_places < 2 {
            return Err(anyhow!(
                "catalog needs at least an initial and a final place, but has {} places",
                number_of_places
            ));
        }
        if number_of_invisible > names.len() {
            return Err(anyhow!(
                "catalog declares {} invisible transitions, but has only {} transitions",
                number_of_invisible,
                names.len()
            ));
        }

        let mut activity_key = ActivityKey::new();
        let mut transitions = vec![];
        for name in &names {
            let activity = activity_key.process_activity(name);
            if transitions.contains(&activity) {
                return Err(anyhow!("transition `{}` appears twice in catalog", name));
            }
            transitions.push(activity);
        }

        Ok(Self {
            activity_key: activity_key,
            transitions: transitions,
            number_of_places: number_of_places,
            number_of_invisible: number_of_invisible,
        })
    }

    pub fn get_number_of_transitions(&self) -> usize {
        self.transitions.len()
    }

    pub fn get_number_of_places(&self) -> usize {
        self.number_of_places
    }

    pub fn get_number_of_invisible(&self) -> usize {
        self.number_of_invisible
    }

    /// The length of the chromosomes this catalog decodes: two genes per transition.
    pub fn get_genome_length(&self) -> usize {
        2 * self.transitions.len()
    }

    pub fn is_invisible(&self, transition: usize) -> bool {
        transition < self.number_of_invisible
    }

    pub fn get_activity(&self, transition: usize) -> Activity {
        self.transitions[transition]
    }

    pub fn get_transition_name(&self, transition: usize) -> &str {
        self.activity_key.get_activity_label(&self.transitions[transition])
    }

    pub fn get_activity_key(&self) -> &ActivityKey {
        &self.activity_key
    }
}

impl Importable for TransitionCatalog {
    fn import_as_object(reader: &mut dyn BufRead) -> Result<GenetObject> {
        Ok(GenetObject::TransitionCatalog(Self::import(reader)?))
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

        let number_of_places = lreader
            .next_line_index()
            .context("failed to read number of places")?;
        if number_of_places < 2 {
            return Err(anyhow!(
                "catalog needs at least an initial and a final place, but has {} places",
                number_of_places
            ));
        }

        let number_of_transitions = lreader
            .next_line_index()
            .context("failed to read number of transitions")?;
        if number_of_transitions == 0 {
            return Err(anyhow!("catalog has no transitions"));
        }

        let number_of_invisible = lreader
            .next_line_index()
            .context("failed to read number of invisible transitions")?;
        if number_of_invisible > number_of_transitions {
            return Err(anyhow!(
                "catalog declares {} invisible transitions, but has only {} transitions",
                number_of_invisible,
                number_of_transitions
            ));
        }

        let mut activity_key = ActivityKey::new();
        let mut transitions = vec![];
        transitions.reserve_exact(number_of_transitions);
        for transition_i in 0..number_of_transitions {
            let name = lreader.next_line_string().with_context(|| {
                format!(
                    "failed to read name of transition {} at line {}",
                    transition_i,
                    lreader.get_last_line_number()
                )
            })?;

            let activity = activity_key.process_activity(&name);
            if transitions.contains(&activity) {
                return Err(anyhow!(
                    "transition `{}` at line {} appears twice in catalog",
                    name,
                    lreader.get_last_line_number()
                ));
            }
            transitions.push(activity);
        }

        Ok(Self {
            activity_key: activity_key,
            transitions: transitions,
            number_of_places: number_of_places,
            number_of_invisible: number_of_invisible,
        })
    }
}

impl FromStr for TransitionCatalog {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut reader = io::Cursor::new(s);
        Self::import(&mut reader)
    }
}

impl Exportable for TransitionCatalog {
    fn export_from_object(object: GenetOutput, f: &mut dyn Write) -> Result<()> {
        match object {
            GenetOutput::Object(GenetObject::TransitionCatalog(catalog)) => catalog.export(f),
            _ => unreachable!(),
        }
    }

    fn export(&self, f: &mut dyn Write) -> Result<()> {
        Ok(write!(f, "{}", self)?)
    }
}

impl Infoable for TransitionCatalog {
    fn info(&self, f: &mut impl Write) -> Result<()> {
        writeln!(f, "Number of places\t{}", self.number_of_places)?;
        writeln!(f, "Number of transitions\t{}", self.transitions.len())?;
        writeln!(
            f,
            "Number of invisible transitions\t{}",
            self.number_of_invisible
        )?;
        writeln!(f, "Chromosome length\t{}", self.get_genome_length())?;

        Ok(write!(f, "")?)
    }
}

impl Display for TransitionCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", HEADER)?;
        writeln!(f, "# number of places\n{}", self.number_of_places)?;
        writeln!(f, "# number of transitions\n{}", self.transitions.len())?;
        writeln!(
            f,
            "# number of invisible transitions\n{}",
            self.number_of_invisible
        )?;

        writeln!(f, "# transitions, invisible first")?;
        for activity in &self.transitions {
            writeln!(f, "{}", self.activity_key.get_activity_label(activity))?;
        }

        write!(f, "")
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::genet_objects::transition_catalog::TransitionCatalog;

    #[test]
    fn catalog_import() {
        let fin = fs::read_to_string("testfiles/loan.cat").unwrap();
        let catalog = fin.parse::<TransitionCatalog>().unwrap();

        assert_eq!(catalog.get_number_of_places(), 9);
        assert_eq!(catalog.get_number_of_transitions(), 12);
        assert_eq!(catalog.get_number_of_invisible(), 2);
        assert_eq!(catalog.get_genome_length(), 24);
        assert!(catalog.is_invisible(0));
        assert!(catalog.is_invisible(1));
        assert!(!catalog.is_invisible(2));
        assert_eq!(catalog.get_transition_name(2), "Receiving Request");
    }

    #[test]
    fn catalog_export_import() {
        let fin = fs::read_to_string("testfiles/loan.cat").unwrap();
        let catalog = fin.parse::<TransitionCatalog>().unwrap();

        let again = catalog.to_string().parse::<TransitionCatalog>().unwrap();
        assert_eq!(
            again.get_number_of_transitions(),
            catalog.get_number_of_transitions()
        );
        assert_eq!(again.get_transition_name(11), catalog.get_transition_name(11));
    }

    #[test]
    fn catalog_invalid() {
        //no transitions
        let fin = "transition catalog\n2\n0\n0\n";
        assert!(fin.parse::<TransitionCatalog>().is_err());

        //too few places
        let fin = "transition catalog\n1\n1\n0\na\n";
        assert!(fin.parse::<TransitionCatalog>().is_err());

        //more invisible transitions than transitions
        let fin = "transition catalog\n2\n1\n2\na\n";
        assert!(fin.parse::<TransitionCatalog>().is_err());

        //duplicate name
        let fin = "transition catalog\n2\n2\n0\na\na\n";
        assert!(fin.parse::<TransitionCatalog>().is_err());

        //wrong header
        let fin = "place catalog\n2\n1\n0\na\n";
        assert!(fin.parse::<TransitionCatalog>().is_err());
    }

    #[test]
    fn catalog_new() {
        let catalog = TransitionCatalog::new(
            vec!["tau".to_string(), "a".to_string(), "b".to_string()],
            4,
            1,
        )
        .unwrap();
        assert_eq!(catalog.get_number_of_places(), 4);
        assert!(catalog.is_invisible(0));
        assert!(!catalog.is_invisible(1));

        assert!(TransitionCatalog::new(vec![], 4, 0).is_err());
        assert!(TransitionCatalog::new(vec!["a".to_string()], 4, 2).is_err());
    }
}
