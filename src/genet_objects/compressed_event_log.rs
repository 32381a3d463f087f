use anyhow::Result;
use flate2::bufread::GzDecoder;
use std::io::{BufRead, BufReader};

use crate::genet_framework::{
    genet_file_handler::GenetFileHandler,
    genet_input::{self, GenetObjectImporter},
    genet_object::GenetObject,
    importable::Importable,
};

use super::event_log::{EventLog, XesEventLog};

pub const GENET_COMPRESSED_EVENT_LOG: GenetFileHandler = GenetFileHandler {
    name: "compressed XES event log",
    article: "a",
    file_extension: "xes.gz",
    validator: genet_input::validate::<CompressedEventLog>,
    object_importers: &[GenetObjectImporter::EventLog(
        CompressedEventLog::import_as_object,
    )],
    object_exporters: &[],
};

pub struct CompressedEventLog {
    pub(crate) log: EventLog,
}

impl Importable for CompressedEventLog {
    fn import_as_object(reader: &mut dyn BufRead) -> Result<GenetObject> {
        Ok(GenetObject::EventLog(Self::import(reader)?.log))
    }

    fn import(reader: &mut dyn BufRead) -> Result<Self>
    where
        Self: Sized,
    {
        let dec = GzDecoder::new(reader);
        let mut reader2 = BufReader::new(dec);
        let log = XesEventLog::import(&mut reader2)?;
        Ok(Self { log: log.log })
    }
}
