// Exercises every action and scalar kind the parser ships with.

use std::collections::BTreeSet;
use std::io::{self, Write};

use argdemo::error::{fail, Result};
use argtable::{count, insert, store, store_false, store_true, toggle, Opt, OptionTable};
use tracing::{debug, info};

struct Settings {
    verbose: u32,
    version: bool,
    int8: i8,
    int16: i16,
    int32: i32,
    int64: i64,
    uint8: u8,
    uint16: u16,
    uint32: u32,
    uint64: u64,
    float: f32,
    double: f64,
    toggled: bool,
    enabled: bool,
    disabled: bool,
    vec_str: Vec<String>,
    set_str: BTreeSet<String>,
    infile: String,
    outfile: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            verbose: 0,
            version: false,
            int8: 0,
            int16: 0,
            int32: 0,
            int64: 0,
            uint8: 0,
            uint16: 0,
            uint32: 0,
            uint64: 0,
            float: 0.0,
            double: 0.0,
            toggled: false,
            enabled: false,
            disabled: true,
            vec_str: Vec::new(),
            set_str: BTreeSet::new(),
            infile: String::new(),
            outfile: String::new(),
        }
    }
}

fn main() {
    argdemo::init_logging();
    if let Err(e) = run() {
        fail("argdemo", &e);
    }
}

fn run() -> Result<()> {
    let mut s = Settings::default();

    let seen = {
        let mut table = OptionTable::new();
        table.push(Opt::flag("verbose", count(&mut s.verbose)).short('v'));
        let version = table.push(Opt::flag("version", store_true(&mut s.version)).short('V'));

        let mut table = table
            .option(Opt::value("int8_t", store(&mut s.int8)))
            .option(Opt::value("int16_t", store(&mut s.int16)))
            .option(Opt::value("int32_t", store(&mut s.int32)))
            .option(Opt::value("int64_t", store(&mut s.int64)))
            .option(Opt::value("uint8_t", store(&mut s.uint8)))
            .option(Opt::value("uint16_t", store(&mut s.uint16)))
            .option(Opt::value("uint32_t", store(&mut s.uint32)))
            .option(Opt::value("uint64_t", store(&mut s.uint64)))
            .option(Opt::value("float", store(&mut s.float)))
            .option(Opt::value("double", store(&mut s.double)))
            .option(Opt::flag("toggle", toggle(&mut s.toggled)))
            .option(Opt::flag("store_true", store_true(&mut s.enabled)))
            .option(Opt::flag("store_false", store_false(&mut s.disabled)))
            .option(Opt::value("vec_str", insert(&mut s.vec_str)))
            .option(Opt::value("set_str", insert(&mut s.set_str)))
            .option(Opt::positional("INFILE", store(&mut s.infile)).required())
            .option(Opt::positional("OUTFILE", store(&mut s.outfile)));

        let state = table.parse_env()?;
        if state.is_present(version) {
            println!("argdemo {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        table.check_required(&state)?;

        info!(options = state.len(), "arguments parsed");
        state
            .iter()
            .filter_map(|(id, n)| table.get(id).map(|opt| (opt.display_name(), n)))
            .collect::<Vec<_>>()
    };

    let mut out = io::stdout().lock();
    report(&mut out, &s)?;
    if s.verbose > 0 {
        debug!(options = seen.len(), "printing occurrence counts");
        writeln!(out, "seen:")?;
        for (name, n) in &seen {
            writeln!(out, "  {:<12} {}", name, n)?;
        }
    }
    Ok(())
}

fn joined<'a>(items: impl Iterator<Item = &'a String>) -> String {
    items.map(String::as_str).collect::<Vec<_>>().join(",")
}

fn report<W: Write>(out: &mut W, s: &Settings) -> io::Result<()> {
    writeln!(out, "verbose      {}", s.verbose)?;
    writeln!(out, "int8_t       {}", s.int8)?;
    writeln!(out, "int16_t      {}", s.int16)?;
    writeln!(out, "int32_t      {}", s.int32)?;
    writeln!(out, "int64_t      {}", s.int64)?;
    writeln!(out, "uint8_t      {}", s.uint8)?;
    writeln!(out, "uint16_t     {}", s.uint16)?;
    writeln!(out, "uint32_t     {}", s.uint32)?;
    writeln!(out, "uint64_t     {}", s.uint64)?;
    writeln!(out, "float        {}", s.float)?;
    writeln!(out, "double       {}", s.double)?;
    writeln!(out, "toggle       {}", s.toggled)?;
    writeln!(out, "store_true   {}", s.enabled)?;
    writeln!(out, "store_false  {}", s.disabled)?;
    writeln!(out, "INFILE       {}", s.infile)?;
    writeln!(out, "OUTFILE      {}", s.outfile)?;
    writeln!(out, "vec_str      {}", joined(s.vec_str.iter()))?;
    writeln!(out, "set_str      {}", joined(s.set_str.iter()))?;
    Ok(())
}
