use anyhow::Result;
use std::fmt::Display;

use crate::genet_objects::{
    event_log::EventLog, population::Population, transition_catalog::TransitionCatalog,
};

use super::{
    genet_file_handler::{GENET_FILE_HANDLERS, GenetFileHandler},
    infoable::Infoable,
};

#[derive(PartialEq, Clone, Hash, Debug)]
pub enum GenetObjectType {
    EventLog,
    Population,
    TransitionCatalog,
}

impl GenetObjectType {
    pub fn get_article(&self) -> &str {
        match self {
            GenetObjectType::EventLog => "an",
            GenetObjectType::Population => "a",
            GenetObjectType::TransitionCatalog => "a",
        }
    }

    pub fn get_file_handlers(&self) -> Vec<&'static GenetFileHandler> {
        let mut result = vec![];
        for file_handler in GENET_FILE_HANDLERS.iter() {
            for importer in file_handler.object_importers {
                if &importer.get_type() == self {
                    result.push(file_handler);
                    break;
                }
            }
        }
        result
    }
}

impl Eq for GenetObjectType {}

impl Display for GenetObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                GenetObjectType::EventLog => "event log",
                GenetObjectType::Population => "population",
                GenetObjectType::TransitionCatalog => "transition catalog",
            }
        )
    }
}

#[derive(Clone)]
pub enum GenetObject {
    EventLog(EventLog),
    Population(Population),
    TransitionCatalog(TransitionCatalog),
}

impl GenetObject {
    pub fn get_type(&self) -> GenetObjectType {
        match self {
            GenetObject::EventLog(_) => GenetObjectType::EventLog,
            GenetObject::Population(_) => GenetObjectType::Population,
            GenetObject::TransitionCatalog(_) => GenetObjectType::TransitionCatalog,
        }
    }
}

impl Display for GenetObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenetObject::EventLog(o) => write!(f, "{}", o),
            GenetObject::Population(o) => write!(f, "{}", o),
            GenetObject::TransitionCatalog(o) => write!(f, "{}", o),
        }
    }
}

impl Infoable for GenetObject {
    fn info(&self, f: &mut impl std::io::Write) -> Result<()> {
        match self {
            GenetObject::EventLog(o) => o.info(f),
            GenetObject::Population(o) => o.info(f),
            GenetObject::TransitionCatalog(o) => o.info(f),
        }
    }
}
