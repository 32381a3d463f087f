use anyhow::{Context, Result, anyhow};
use clap::{ArgMatches, builder::ValueParser, value_parser};
use std::{
    collections::HashSet,
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader, Cursor, Read, Seek},
    path::PathBuf,
};

use super::{
    genet_file_handler::{GENET_FILE_HANDLERS, GenetFileHandler},
    genet_object::{GenetObject, GenetObjectType},
    importable::Importable,
};

pub enum GenetInput {
    Object(GenetObject, &'static GenetFileHandler),
    Usize(usize),
    FileHandler(GenetFileHandler),
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum GenetInputType {
    Object(GenetObjectType),
    AnyObject,
    FileHandler,
    Usize,
}

impl GenetInputType {
    pub fn get_article(&self) -> &str {
        match self {
            GenetInputType::Object(o) => o.get_article(),
            GenetInputType::AnyObject => "an",
            GenetInputType::FileHandler => "a",
            GenetInputType::Usize => "an",
        }
    }

    pub fn get_parser_of_list(traits: &[&GenetInputType]) -> ValueParser {
        match traits[0] {
            GenetInputType::Object(_) => value_parser!(PathBuf),
            GenetInputType::AnyObject => value_parser!(PathBuf),
            GenetInputType::FileHandler => value_parser!(GenetFileHandler).into(),
            GenetInputType::Usize => value_parser!(usize).into(),
        }
    }

    pub fn get_possible_inputs(traits: &[&GenetInputType]) -> Vec<String> {
        let mut result = HashSet::new();

        for input_type in traits {
            match input_type {
                GenetInputType::Object(o) => {
                    result.extend(Self::show_file_handlers(o.get_file_handlers()));
                }
                GenetInputType::AnyObject => {
                    result.extend(Self::show_file_handlers(
                        GENET_FILE_HANDLERS.iter().collect(),
                    ));
                }
                GenetInputType::FileHandler => {
                    let extensions: Vec<String> = GENET_FILE_HANDLERS
                        .iter()
                        .map(|file_type| file_type.file_extension.to_string())
                        .collect();
                    result.insert(
                        "the file extension of any file type supported by Genet (".to_owned()
                            + extensions.join(", ").as_str()
                            + ")",
                    );
                }
                GenetInputType::Usize => {
                    result.insert("integer".to_string());
                }
            };
        }

        result.into_iter().collect::<Vec<_>>()
    }

    pub fn show_file_handlers(file_handlers: Vec<&'static GenetFileHandler>) -> Vec<String> {
        file_handlers
            .into_iter()
            .map(|file_handler| format!("{} {}", file_handler.article, file_handler))
            .collect()
    }

    pub fn possible_inputs_as_strings_with_articles(
        traits: &[&GenetInputType],
        last_connector: &str,
    ) -> String {
        let mut list = Self::get_possible_inputs(traits);
        if list.len() == 1 {
            return list.remove(0);
        }
        match list.split_last() {
            Some((last, list)) => format!("{} {} {}", list.join(", "), last_connector, last),
            None => String::new(),
        }
    }
}

impl Display for GenetInputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenetInputType::Object(o) => o.fmt(f),
            GenetInputType::AnyObject => Display::fmt(&"object", f),
            GenetInputType::FileHandler => Display::fmt(&"file type", f),
            GenetInputType::Usize => Display::fmt(&"integer", f),
        }
    }
}

#[derive(Debug)]
pub enum GenetObjectImporter {
    EventLog(fn(&mut dyn BufRead) -> Result<GenetObject>),
    Population(fn(&mut dyn BufRead) -> Result<GenetObject>),
    TransitionCatalog(fn(&mut dyn BufRead) -> Result<GenetObject>),
}

impl GenetObjectImporter {
    pub fn get_type(&self) -> GenetObjectType {
        match self {
            GenetObjectImporter::EventLog(_) => GenetObjectType::EventLog,
            GenetObjectImporter::Population(_) => GenetObjectType::Population,
            GenetObjectImporter::TransitionCatalog(_) => GenetObjectType::TransitionCatalog,
        }
    }

    pub fn get_importer(&self) -> fn(&mut dyn BufRead) -> Result<GenetObject> {
        match self {
            GenetObjectImporter::EventLog(importer) => *importer,
            GenetObjectImporter::Population(importer) => *importer,
            GenetObjectImporter::TransitionCatalog(importer) => *importer,
        }
    }
}

impl Display for GenetObjectImporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get_type().to_string())
    }
}

pub fn validate<X: Importable>(reader: &mut dyn BufRead) -> Result<()> {
    match X::import(reader) {
        Ok(_) => Ok(()),
        Err(x) => Err(x),
    }
}

pub enum MultipleReader {
    String(String),
    File(File),
    Bytes(Vec<u8>),
}

impl MultipleReader {
    pub fn from_stdin() -> Result<Self> {
        let stdin = io::stdin();
        let mut reader = stdin.lock();
        if cfg!(windows) {
            //windows does not support reading bytes from STDIN, so read it as text
            let mut buf = String::new();
            reader.read_to_string(&mut buf).context(
                "Could not read text from STDIN (on Windows, reading bytes from STDIN is not supported).",
            )?;
            log::info!("read from stdin in text mode with length {}", buf.len());
            return Ok(Self::String(buf));
        } else {
            let mut buf = Vec::new();
            reader.read_to_end(&mut buf)?;
            log::info!("read from stdin in binary mode with length {}", buf.len());
            return Ok(Self::Bytes(buf));
        }
    }

    pub fn from_file(file: File) -> Self {
        return Self::File(file);
    }

    pub fn get(&mut self) -> Result<Box<dyn BufRead + '_>> {
        match self {
            MultipleReader::String(s) => Ok(Box::new(Cursor::new(s))),
            MultipleReader::File(file) => {
                file.seek(io::SeekFrom::Start(0))?;
                return Ok(Box::new(BufReader::new(file)));
            }
            MultipleReader::Bytes(b) => Ok(Box::new(Cursor::new(b))),
        }
    }
}

pub fn get_reader_file(from_file: &PathBuf) -> Result<MultipleReader> {
    if from_file.as_os_str() == "-" {
        return MultipleReader::from_stdin();
    } else {
        let file = File::open(from_file)
            .with_context(|| format!("Could not read file `{}`.", from_file.display()))?;
        return Ok(MultipleReader::from_file(file));
    }
}

pub fn get_reader(cli_matches: &ArgMatches, cli_id: &str) -> Result<MultipleReader> {
    if let Some(from_file) = cli_matches.try_get_one::<PathBuf>(cli_id)? {
        if from_file.as_os_str() == "-" {
            return MultipleReader::from_stdin();
        } else {
            let file = File::open(from_file)
                .with_context(|| format!("Could not read file `{}`.", from_file.display()))?;
            return Ok(MultipleReader::from_file(file));
        }
    } else {
        return Err(anyhow!(
            "No argument given, or it could not be parsed as a path."
        ));
    }
}

pub fn read_as_object(
    etype: &GenetObjectType,
    reader: &mut MultipleReader,
) -> Result<(GenetObject, &'static GenetFileHandler)> {
    for file_handler in GENET_FILE_HANDLERS {
        for importer in file_handler.object_importers {
            if &importer.get_type() == etype {
                //attempt to import
                if let Ok(object) =
                    (importer.get_importer())(reader.get().context("Could not obtain reader.")?.as_mut())
                {
                    //object parsed; return it
                    return Ok((object, file_handler));
                }
            }
        }
    }
    Err(anyhow!("File could not be recognised."))
}

pub fn read_as_any_object(
    reader: &mut MultipleReader,
) -> Result<(GenetObject, &'static GenetFileHandler)> {
    for file_handler in GENET_FILE_HANDLERS {
        //attempt to import
        for importer in file_handler.object_importers {
            if let Ok(object) =
                (importer.get_importer())(reader.get().context("Could not obtain reader.")?.as_mut())
            {
                //object parsed; return it
                return Ok((object, file_handler));
            }
        }
    }
    Err(anyhow!("File could not be recognised."))
}

pub fn validate_object_of(
    reader: &mut MultipleReader,
    file_handler: &GenetFileHandler,
) -> Result<()> {
    let result = (file_handler.validator)(reader.get()?.as_mut());
    return result;
}

#[cfg(test)]
mod tests {
    use std::{fs::File, path::PathBuf};

    use crate::genet_framework::{
        genet_input::{self, MultipleReader},
        genet_object::GenetObjectType,
    };

    #[test]
    fn read_any_object() {
        let mut reader = MultipleReader::from_file(File::open("testfiles/loan.cat").unwrap());
        let (object, file_handler) = genet_input::read_as_any_object(&mut reader).unwrap();
        assert_eq!(object.get_type(), GenetObjectType::TransitionCatalog);
        assert_eq!(file_handler.file_extension, "cat");
    }

    #[test]
    fn read_object_rejects_mismatch() {
        let mut reader = MultipleReader::from_file(File::open("testfiles/loan.cat").unwrap());
        assert!(genet_input::read_as_object(&GenetObjectType::Population, &mut reader).is_err());
    }

    #[test]
    fn reader_of_missing_file() {
        assert!(genet_input::get_reader_file(&PathBuf::from("testfiles/does-not-exist.cat")).is_err());
    }
}
