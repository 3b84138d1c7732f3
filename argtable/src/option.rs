use std::fmt;

use crate::action::Action;
use crate::error::{Error, Result};
use crate::parser;
use crate::state::OptionState;

// ============================================================================
// Opt
// ============================================================================

/// Identity of an option inside its table: the declaration index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OptionId(usize);

impl OptionId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One declared option: its names, how many values it takes and the
/// action that receives them.
pub struct Opt<'a> {
    id: OptionId,
    long_name: String,
    short_name: Option<char>,
    positional: bool,
    num_args: usize,
    required: bool,
    action: Box<dyn Action + 'a>,
}

impl<'a> Opt<'a> {
    /// An option taking `num_args` values per occurrence. Zero makes it a
    /// flag.
    pub fn new(long_name: &str, num_args: usize, action: impl Action + 'a) -> Self {
        Opt {
            id: OptionId(0),
            long_name: long_name.to_string(),
            short_name: None,
            positional: false,
            num_args,
            required: false,
            action: Box::new(action),
        }
    }

    pub fn flag(long_name: &str, action: impl Action + 'a) -> Self {
        Opt::new(long_name, 0, action)
    }

    pub fn value(long_name: &str, action: impl Action + 'a) -> Self {
        Opt::new(long_name, 1, action)
    }

    /// A positional slot that takes one token. Its name is only used for
    /// lookups and diagnostics; it never matches `--name`.
    pub fn positional(name: &str, action: impl Action + 'a) -> Self {
        Opt {
            positional: true,
            ..Opt::new(name, 1, action)
        }
    }

    /// A positional slot that takes every remaining positional token.
    pub fn remainder(name: &str, action: impl Action + 'a) -> Self {
        Opt::positional(name, action).nargs(usize::MAX)
    }

    pub fn short(mut self, c: char) -> Self {
        self.short_name = Some(c);
        self
    }

    /// Sets the number of values. For positionals this is the number of
    /// consecutive positional tokens the slot covers.
    pub fn nargs(mut self, num_args: usize) -> Self {
        self.num_args = num_args;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn id(&self) -> OptionId {
        self.id
    }

    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    /// Positionals never report a short name.
    pub fn short_name(&self) -> Option<char> {
        if self.positional {
            None
        } else {
            self.short_name
        }
    }

    pub fn is_positional(&self) -> bool {
        self.positional
    }

    pub fn num_args(&self) -> usize {
        self.num_args
    }

    pub fn takes_arg(&self) -> bool {
        self.num_args > 0
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// `--name`, `-c` or the bare positional name.
    pub fn display_name(&self) -> String {
        if self.positional {
            self.long_name.clone()
        } else if !self.long_name.is_empty() {
            format!("--{}", self.long_name)
        } else if let Some(c) = self.short_name {
            format!("-{}", c)
        } else {
            "<unnamed>".to_string()
        }
    }

    pub(crate) fn invoke(&mut self, value: Option<&str>) -> Result<()> {
        self.action
            .invoke(value)
            .map_err(|source| Error::BadValue {
                option: self.display_name(),
                source,
            })
    }
}

impl fmt::Debug for Opt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opt")
            .field("id", &self.id)
            .field("long_name", &self.long_name)
            .field("short_name", &self.short_name)
            .field("positional", &self.positional)
            .field("num_args", &self.num_args)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// OptionTable
// ============================================================================

/// Ordered set of declared options.
///
/// Lookups never change the table. Parsing borrows it mutably only because
/// the actions write through their borrowed targets.
#[derive(Debug)]
pub struct OptionTable<'a> {
    options: Vec<Opt<'a>>,
}

impl<'a> OptionTable<'a> {
    pub fn new() -> Self {
        OptionTable {
            options: Vec::new(),
        }
    }

    pub fn option(mut self, opt: Opt<'a>) -> Self {
        self.push(opt);
        self
    }

    /// Adds an option and returns the identity it was given.
    pub fn push(&mut self, mut opt: Opt<'a>) -> OptionId {
        let id = OptionId(self.options.len());
        opt.id = id;
        self.options.push(opt);
        id
    }

    /// First named option with short name `c`.
    pub fn find_short(&self, c: char) -> Option<&Opt<'a>> {
        self.named().find(|o| o.short_name == Some(c))
    }

    /// First named option whose long name is exactly `name`. An empty name
    /// matches nothing, so short-only options stay out of reach of `--=x`.
    pub fn find_long(&self, name: &str) -> Option<&Opt<'a>> {
        if name.is_empty() {
            return None;
        }
        self.named().find(|o| o.long_name == name)
    }

    /// The positional slot covering the `index`-th positional token.
    ///
    /// Slots are walked in declaration order and each one covers as many
    /// indices as it takes values.
    pub fn find_positional(&self, index: usize) -> Option<&Opt<'a>> {
        let mut index = index;
        for opt in self.options.iter().filter(|o| o.positional) {
            if index < opt.num_args {
                return Some(opt);
            }
            index -= opt.num_args;
        }
        None
    }

    /// Identity of the first option, positional or not, named `long_name`.
    pub fn lookup(&self, long_name: &str) -> Option<OptionId> {
        self.options
            .iter()
            .find(|o| o.long_name == long_name)
            .map(Opt::id)
    }

    pub fn get(&self, id: OptionId) -> Option<&Opt<'a>> {
        self.options.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: OptionId) -> &mut Opt<'a> {
        &mut self.options[id.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Opt<'a>> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    fn named(&self) -> impl Iterator<Item = &Opt<'a>> {
        self.options.iter().filter(|o| !o.positional)
    }

    /// Required options that `state` never saw.
    pub fn missing_required<'s>(
        &'s self,
        state: &'s OptionState,
    ) -> impl Iterator<Item = &'s Opt<'a>> + 's {
        self.options
            .iter()
            .filter(move |o| o.required && !state.is_present(o.id))
    }

    /// Fails on the first required option missing from `state`. Meant to
    /// run after a successful [`parse`](OptionTable::parse).
    pub fn check_required(&self, state: &OptionState) -> Result<()> {
        match self.missing_required(state).next() {
            Some(opt) => Err(Error::MissingRequired(opt.display_name())),
            None => Ok(()),
        }
    }

    /// Parses `args` (without the program name) against this table.
    pub fn parse<S: AsRef<str>>(&mut self, args: &[S]) -> Result<OptionState> {
        parser::parse_args(self, args)
    }

    /// Parses the arguments of the current process.
    pub fn parse_env(&mut self) -> Result<OptionState> {
        let args = std::env::args_os()
            .skip(1)
            .map(|arg| {
                arg.into_string()
                    .map_err(|arg| Error::NotUnicode(arg.to_string_lossy().into_owned()))
            })
            .collect::<Result<Vec<String>>>()?;
        self.parse(&args)
    }
}

impl Default for OptionTable<'_> {
    fn default() -> Self {
        Self::new()
    }
}
