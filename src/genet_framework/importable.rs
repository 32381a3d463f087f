use anyhow::Result;
use std::io::BufRead;

use super::genet_object::GenetObject;

pub trait Importable {
    fn import_as_object(reader: &mut dyn BufRead) -> Result<GenetObject>;
    fn import(reader: &mut dyn BufRead) -> Result<Self>
    where
        Self: Sized;
}
