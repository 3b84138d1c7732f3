// A diff-style front end: every positional argument is echoed as it is
// parsed, options are reported at the end.

use std::io::{self, Write};

use argdemo::error::{fail, Result};
use argtable::{callback, count, insert, store, store_true, Opt, OptionTable};

fn main() {
    argdemo::init_logging();
    if let Err(e) = run() {
        fail("argdiff", &e);
    }
}

fn run() -> Result<()> {
    let mut program = String::from("diff");
    let mut dry_run = false;
    let mut int = 0i32;
    let mut verbose = 0u32;
    let mut extra: Vec<String> = Vec::new();

    OptionTable::new()
        .option(Opt::value("program", store(&mut program)).short('p'))
        .option(Opt::flag("dry-run", store_true(&mut dry_run)).short('n'))
        .option(Opt::value("int", store(&mut int)).short('i'))
        .option(Opt::flag("verbose", count(&mut verbose)).short('v'))
        .option(Opt::value("push_back", insert(&mut extra)).short('P'))
        .option(Opt::remainder(
            "ARG",
            callback(|arg| {
                if let Some(arg) = arg {
                    println!("arg: {}", arg);
                }
                Ok(())
            }),
        ))
        .parse_env()?;

    let mut out = io::stdout().lock();
    writeln!(out, "program = {}", program)?;
    writeln!(out, "dry-run = {}", dry_run)?;
    writeln!(out, "i = {}", int)?;
    writeln!(out, "verbose = {}", verbose)?;
    for s in &extra {
        writeln!(out, "{}", s)?;
    }
    Ok(())
}
