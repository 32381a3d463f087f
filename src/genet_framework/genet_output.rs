use anyhow::{Context, Result};
use std::{
    fmt::{self, Display},
    fs::File,
    io::Write,
    path::PathBuf,
};

use super::{
    exportable::Exportable,
    genet_file_handler::{GENET_FILE_HANDLERS, GenetFileHandler},
    genet_object::{GenetObject, GenetObjectType},
};

pub enum GenetOutput {
    Object(GenetObject),
    String(String),
    Usize(usize),
    SVG(String),
    PDF(Vec<u8>),
}

impl GenetOutput {
    pub fn get_type(&self) -> GenetOutputType {
        match self {
            GenetOutput::Object(o) => GenetOutputType::ObjectType(o.get_type()),
            GenetOutput::String(_) => GenetOutputType::String,
            GenetOutput::Usize(_) => GenetOutputType::Usize,
            GenetOutput::SVG(_) => GenetOutputType::SVG,
            GenetOutput::PDF(_) => GenetOutputType::PDF,
        }
    }
}

#[derive(PartialEq, Eq)]
pub enum GenetOutputType {
    ObjectType(GenetObjectType),
    String,
    Usize,
    SVG,
    PDF,
}

impl GenetOutputType {
    /**
     * Returns all exporters that can handle this output type.
     */
    pub fn get_exporters(&self) -> Vec<GenetExporter> {
        match self {
            GenetOutputType::ObjectType(etype) => {
                let mut result = vec![];
                for file_handler in GENET_FILE_HANDLERS {
                    for exporter in file_handler.object_exporters {
                        if &exporter.get_type() == etype {
                            result.push(GenetExporter::Object(exporter, file_handler))
                        }
                    }
                }
                result
            }
            GenetOutputType::String => vec![GenetExporter::String],
            GenetOutputType::Usize => vec![GenetExporter::Usize],
            GenetOutputType::SVG => vec![GenetExporter::SVG],
            GenetOutputType::PDF => vec![GenetExporter::PDF],
        }
    }
}

impl Display for GenetOutputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenetOutputType::ObjectType(t) => t.fmt(f),
            GenetOutputType::String => Display::fmt(&"text", f),
            GenetOutputType::Usize => Display::fmt(&"integer", f),
            GenetOutputType::SVG => Display::fmt(&"scalable vector graphics", f),
            GenetOutputType::PDF => Display::fmt(&"portable document format", f),
        }
    }
}

#[derive(Debug, Clone)]
pub enum GenetExporter {
    Object(&'static GenetObjectExporter, &'static GenetFileHandler),
    String,
    Usize,
    SVG,
    PDF,
}

impl GenetExporter {
    pub fn export_from_object(&self, output: GenetOutput, f: &mut dyn std::io::Write) -> Result<()> {
        match (self, output) {
            (GenetExporter::Object(exporter, _), object) => exporter.export(object, f),
            (GenetExporter::String, GenetOutput::String(object)) => object.export(f),
            (GenetExporter::String, _) => unreachable!(),
            (GenetExporter::Usize, GenetOutput::Usize(object)) => object.export(f),
            (GenetExporter::Usize, _) => unreachable!(),
            (GenetExporter::SVG, GenetOutput::SVG(object)) => object.export(f),
            (GenetExporter::SVG, _) => unreachable!(),
            (GenetExporter::PDF, GenetOutput::PDF(object)) => Ok(f.write_all(&object)?),
            (GenetExporter::PDF, _) => unreachable!(),
        }
    }

    pub fn get_article(&self) -> &str {
        match self {
            GenetExporter::Object(_, file_handler) => file_handler.article,
            GenetExporter::String => "",
            GenetExporter::Usize => "an",
            GenetExporter::SVG => "a",
            GenetExporter::PDF => "a",
        }
    }
}

impl Display for GenetExporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenetExporter::Object(_, file_handler) => Display::fmt(file_handler, f),
            GenetExporter::String => Display::fmt(&"text", f),
            GenetExporter::Usize => Display::fmt(&"integer", f),
            GenetExporter::SVG => Display::fmt(&"scalable vector graphics", f),
            GenetExporter::PDF => Display::fmt(&"portable document format", f),
        }
    }
}

#[derive(Debug)]
pub enum GenetObjectExporter {
    EventLog(fn(object: GenetOutput, &mut dyn std::io::Write) -> Result<()>),
    Population(fn(object: GenetOutput, &mut dyn std::io::Write) -> Result<()>),
    TransitionCatalog(fn(object: GenetOutput, &mut dyn std::io::Write) -> Result<()>),
}

impl GenetObjectExporter {
    pub fn get_type(&self) -> GenetObjectType {
        match self {
            GenetObjectExporter::EventLog(_) => GenetObjectType::EventLog,
            GenetObjectExporter::Population(_) => GenetObjectType::Population,
            GenetObjectExporter::TransitionCatalog(_) => GenetObjectType::TransitionCatalog,
        }
    }

    pub fn export(&self, object: GenetOutput, f: &mut dyn std::io::Write) -> Result<()> {
        match self {
            GenetObjectExporter::EventLog(exporter) => (exporter)(object, f),
            GenetObjectExporter::Population(exporter) => (exporter)(object, f),
            GenetObjectExporter::TransitionCatalog(exporter) => (exporter)(object, f),
        }
    }
}

pub fn export_object(to_file: &PathBuf, object: GenetOutput, exporter: GenetExporter) -> Result<()> {
    let file = File::create(to_file).with_context(|| format!("Writing result to file {:?}.", to_file))?;
    let mut writer = std::io::BufWriter::new(&file);
    exporter
        .export_from_object(object, &mut writer)
        .with_context(|| format!("Writing result to file {:?}.", to_file))?;
    return writer
        .flush()
        .with_context(|| format!("writing result to file {:?}", to_file));
}

pub fn export_to_string(object: GenetOutput, exporter: GenetExporter) -> Result<String> {
    let mut f = vec![];
    exporter.export_from_object(object, &mut f)?;
    Ok(String::from_utf8(f)?)
}
