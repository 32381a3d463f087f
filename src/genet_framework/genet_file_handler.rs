use anyhow::{Error, Result, anyhow};
use std::{fmt::Display, hash::Hash, io::BufRead, str::FromStr};

use crate::genet_objects::{
    compressed_event_log::GENET_COMPRESSED_EVENT_LOG,
    event_log::{GENET_EVENT_LOG, GENET_EVENT_LOG_XES},
    population::GENET_POPULATION,
    transition_catalog::GENET_TRANSITION_CATALOG,
};

use super::{genet_input::GenetObjectImporter, genet_output::GenetObjectExporter};

/**
 * The order of this list is important: for the "any object" input type,
 * importers are attempted in order. Thus, the more restrictive formats should come first.
 * In particular, nearly every text file parses as a plain event log, so that one goes last.
 */
pub const GENET_FILE_HANDLERS: &'static [GenetFileHandler] = &[
    GENET_COMPRESSED_EVENT_LOG,
    GENET_TRANSITION_CATALOG,
    GENET_POPULATION,
    GENET_EVENT_LOG_XES,
    GENET_EVENT_LOG,
];

#[derive(Clone, Debug)]
pub struct GenetFileHandler {
    pub name: &'static str,
    pub article: &'static str, //a or an
    pub file_extension: &'static str,
    pub validator: fn(&mut dyn BufRead) -> Result<()>,
    pub object_importers: &'static [GenetObjectImporter],
    pub object_exporters: &'static [GenetObjectExporter],
}

impl FromStr for GenetFileHandler {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        for file_handler in GENET_FILE_HANDLERS {
            if file_handler.name == s || file_handler.file_extension == s {
                return Ok(file_handler.clone());
            }
        }
        return Err(anyhow!("{} is not a Genet file handler.", s));
    }
}

impl Eq for GenetFileHandler {}

impl PartialEq for GenetFileHandler {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl PartialOrd for GenetFileHandler {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.name.partial_cmp(other.name)
    }
}

impl Ord for GenetFileHandler {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.name.cmp(&other.name)
    }
}

impl Hash for GenetFileHandler {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Display for GenetFileHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (.{})", self.name, self.file_extension)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::genet_objects::{
        population::GENET_POPULATION, transition_catalog::GENET_TRANSITION_CATALOG,
    };

    use super::GenetFileHandler;

    #[test]
    fn file_handlers() {
        assert_eq!(
            GenetFileHandler::from_str("cat").unwrap(),
            GENET_TRANSITION_CATALOG
        );
        assert_eq!(
            GenetFileHandler::from_str("population").unwrap(),
            GENET_POPULATION
        );
        assert!(GenetFileHandler::from_str("blablabla44252435").is_err());

        assert!(GENET_POPULATION.cmp(&GENET_TRANSITION_CATALOG).is_lt());
        assert_eq!(GENET_POPULATION.to_string(), "population (.pop)");
    }
}
