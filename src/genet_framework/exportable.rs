use anyhow::Result;

use super::genet_output::GenetOutput;

pub trait Exportable {
    fn export_from_object(object: GenetOutput, f: &mut dyn std::io::Write) -> Result<()>;

    fn export(&self, f: &mut dyn std::io::Write) -> Result<()>;
}

impl Exportable for String {
    fn export_from_object(_: GenetOutput, _: &mut dyn std::io::Write) -> Result<()> {
        unreachable!()
    }

    fn export(&self, f: &mut dyn std::io::Write) -> Result<()> {
        Ok(writeln!(f, "{}", self)?)
    }
}

impl Exportable for usize {
    fn export_from_object(_: GenetOutput, _: &mut dyn std::io::Write) -> Result<()> {
        unreachable!()
    }

    fn export(&self, f: &mut dyn std::io::Write) -> Result<()> {
        Ok(writeln!(f, "{}", self)?)
    }
}
