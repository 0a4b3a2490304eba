//! The `certmentor list-certs` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use certmentor_core::model::Certification;

pub fn execute() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Code", "Certification"]);
    for cert in Certification::ALL {
        table.add_row(vec![Cell::new(cert.code()), Cell::new(cert.title())]);
    }
    println!("{table}");
    Ok(())
}
