use anyhow::{Context, Error, Result, anyhow};
use chrono::{DateTime, Duration, Utc};
use core::fmt;
use fnv::FnvBuildHasher;
use process_mining::{XESImportOptions, event_log::event_log_struct::EventLogClassifier};
use std::{
    collections::HashSet,
    io::{self, BufRead, Write},
    str::FromStr,
};

use crate::genet_framework::{
    activity_key::{Activity, ActivityKey},
    exportable::Exportable,
    genet_file_handler::GenetFileHandler,
    genet_input::{self, GenetObjectImporter},
    genet_object::GenetObject,
    genet_output::{GenetObjectExporter, GenetOutput},
    importable::Importable,
    infoable::Infoable,
};

/// The native format: one case per line, activity names separated by `, `.
/// There is no header, so almost any text file parses as an event log.
pub const GENET_EVENT_LOG: GenetFileHandler = GenetFileHandler {
    name: "event log",
    article: "an",
    file_extension: "txt",
    validator: genet_input::validate::<EventLog>,
    object_importers: &[GenetObjectImporter::EventLog(EventLog::import_as_object)],
    object_exporters: &[GenetObjectExporter::EventLog(EventLog::export_from_object)],
};

pub const GENET_EVENT_LOG_XES: GenetFileHandler = GenetFileHandler {
    name: "XES event log",
    article: "an",
    file_extension: "xes",
    validator: genet_input::validate::<XesEventLog>,
    object_importers: &[GenetObjectImporter::EventLog(XesEventLog::import_as_object)],
    object_exporters: &[],
};

#[derive(Clone)]
pub struct EventLog {
    pub(crate) activity_key: ActivityKey,
    pub(crate) traces: Vec<Vec<Activity>>,
    pub(crate) timestamps: Vec<DateTime<Utc>>,
}

impl EventLog {
    pub fn get_number_of_traces(&self) -> usize {
        self.traces.len()
    }

    pub fn get_number_of_events(&self) -> usize {
        self.traces.iter().map(|t| t.len()).sum::<usize>()
    }

    pub fn get_trace(&self, case: usize) -> &Vec<Activity> {
        &self.traces[case]
    }

    /// Synthetic timestamp of a case. Alignment engines may require events to
    /// carry timestamps; the native format has none, so each case is stamped
    /// one hour after the previous one.
    pub fn get_timestamp(&self, case: usize) -> DateTime<Utc> {
        self.timestamps[case]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<Activity>> {
        self.traces.iter()
    }

    pub fn get_activity_key(&self) -> &ActivityKey {
        &self.activity_key
    }
}

impl From<Vec<Vec<String>>> for EventLog {
    fn from(value: Vec<Vec<String>>) -> Self {
        let mut activity_key = ActivityKey::new();
        let traces: Vec<Vec<Activity>> = value
            .iter()
            .map(|trace| activity_key.process_trace(trace))
            .collect();
        let timestamps = (0..traces.len())
            .map(|case| DateTime::<Utc>::UNIX_EPOCH + Duration::hours(case as i64))
            .collect();
        Self {
            activity_key: activity_key,
            traces: traces,
            timestamps: timestamps,
        }
    }
}

impl Importable for EventLog {
    fn import_as_object(reader: &mut dyn BufRead) -> Result<GenetObject> {
        Ok(GenetObject::EventLog(Self::import(reader)?))
    }

    fn import(reader: &mut dyn BufRead) -> Result<Self> {
        let mut traces = vec![];
        for (case, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("failed to read case {}", case))?;
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }

            traces.push(
                line.split(", ")
                    .map(|activity| activity.to_string())
                    .collect::<Vec<String>>(),
            );
        }

        if traces.is_empty() {
            return Err(anyhow!("event log is empty"));
        }

        Ok(Self::from(traces))
    }
}

impl FromStr for EventLog {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut reader = io::Cursor::new(s);
        Self::import(&mut reader)
    }
}

impl Exportable for EventLog {
    fn export_from_object(object: GenetOutput, f: &mut dyn Write) -> Result<()> {
        match object {
            GenetOutput::Object(GenetObject::EventLog(log)) => log.export(f),
            _ => unreachable!(),
        }
    }

    fn export(&self, f: &mut dyn Write) -> Result<()> {
        Ok(write!(f, "{}", self)?)
    }
}

impl fmt::Display for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for trace in &self.traces {
            writeln!(f, "{}", self.activity_key.deprocess_trace(trace).join(", "))?;
        }
        write!(f, "")
    }
}

impl Infoable for EventLog {
    fn info(&self, f: &mut impl Write) -> Result<()> {
        writeln!(f, "Number of traces\t\t{}", self.traces.len())?;
        writeln!(f, "Number of events\t\t{}", self.get_number_of_events())?;
        writeln!(
            f,
            "Number of activities\t\t{}",
            self.activity_key.get_number_of_activities()
        )?;

        let distinct: HashSet<&Vec<Activity>, FnvBuildHasher> = self.traces.iter().collect();
        writeln!(f, "Number of distinct traces\t{}", distinct.len())?;

        Ok(write!(f, "")?)
    }
}

/// An event log read from an IEEE XES file. Only the `concept:name` classifier
/// is used; timestamps are re-synthesised like for the native format.
pub struct XesEventLog {
    pub(crate) log: EventLog,
}

impl Importable for XesEventLog {
    fn import_as_object(reader: &mut dyn BufRead) -> Result<GenetObject> {
        Ok(GenetObject::EventLog(Self::import(reader)?.log))
    }

    fn import(reader: &mut dyn BufRead) -> Result<Self> {
        let log =
            process_mining::event_log::import_xes::import_xes(reader, XESImportOptions::default());
        if log.is_err() {
            return Err(anyhow!("{}", log.err().unwrap()));
        }
        let log = log.unwrap();
        let classifier = EventLogClassifier {
            name: "concept:name".to_string(),
            keys: vec!["concept:name".to_string()],
        };

        let mut traces = vec![];
        for trace in &log.traces {
            traces.push(
                trace
                    .events
                    .iter()
                    .map(|event| classifier.get_class_identity(event))
                    .collect::<Vec<String>>(),
            );
        }

        if traces.is_empty() {
            return Err(anyhow!("event log is empty"));
        }

        Ok(Self {
            log: EventLog::from(traces),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use std::{fs, io};

    use crate::genet_framework::{importable::Importable, infoable::Infoable};

    use super::{EventLog, XesEventLog};

    #[test]
    fn log_import() {
        let fin = fs::read_to_string("testfiles/loan.txt").unwrap();
        let log = fin.parse::<EventLog>().unwrap();

        assert_eq!(log.get_number_of_traces(), 4);
        assert_eq!(
            log.activity_key.deprocess_trace(log.get_trace(0))[0],
            "Receiving Request"
        );
    }

    #[test]
    fn log_empty() {
        assert!("".parse::<EventLog>().is_err());
        assert!("\n\n".parse::<EventLog>().is_err());
    }

    #[test]
    fn log_export_import() {
        let fin = fs::read_to_string("testfiles/loan.txt").unwrap();
        let log = fin.parse::<EventLog>().unwrap();

        let again = log.to_string().parse::<EventLog>().unwrap();
        assert_eq!(again.get_number_of_traces(), log.get_number_of_traces());
        assert_eq!(again.get_number_of_events(), log.get_number_of_events());
    }

    #[test]
    fn log_timestamps() {
        let fin = fs::read_to_string("testfiles/loan.txt").unwrap();
        let log = fin.parse::<EventLog>().unwrap();

        assert_eq!(
            log.get_timestamp(1) - log.get_timestamp(0),
            Duration::hours(1)
        );
        assert_eq!(
            log.get_timestamp(3) - log.get_timestamp(0),
            Duration::hours(3)
        );
    }

    #[test]
    fn log_info() {
        let log = "a, b\na, b\nb".parse::<EventLog>().unwrap();

        let mut info = vec![];
        log.info(&mut info).unwrap();
        let info = String::from_utf8(info).unwrap();
        assert!(info.contains("Number of traces\t\t3"));
        assert!(info.contains("Number of distinct traces\t2"));
    }

    #[test]
    fn log_import_xes() {
        let fin = fs::read_to_string("testfiles/a-b.xes").unwrap();
        let mut reader = io::Cursor::new(fin);
        let log = XesEventLog::import(&mut reader).unwrap();

        assert_eq!(log.log.get_number_of_traces(), 2);
        assert_eq!(log.log.get_activity_key().get_number_of_activities(), 2);
    }

    #[test]
    fn log_xes_rejects_text() {
        let fin = fs::read_to_string("testfiles/loan.txt").unwrap();
        let mut reader = io::Cursor::new(fin);
        assert!(XesEventLog::import(&mut reader).is_err());
    }
}
