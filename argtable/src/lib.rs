//! Table-driven command line option parsing.
//!
//! Options are declared up front in an [`OptionTable`]. Each [`Opt`] names a
//! long option, an optional short option or a positional slot, says how many
//! values it takes and carries an [`Action`] bound to the caller's variable.
//! Parsing walks the arguments once, runs the actions, and returns an
//! [`OptionState`] telling how often each option was seen.
//!
//! ```
//! use argtable::{insert, store, toggle, Opt, OptionTable};
//!
//! let mut verbose = false;
//! let mut level = 0u8;
//! let mut files: Vec<String> = Vec::new();
//!
//! let state = {
//!     let mut table = OptionTable::new()
//!         .option(Opt::flag("verbose", toggle(&mut verbose)).short('v'))
//!         .option(Opt::value("level", store(&mut level)).short('l'))
//!         .option(Opt::remainder("FILE", insert(&mut files)));
//!     table.parse(&["-vl3", "a.txt", "--", "-b.txt"])?
//! };
//!
//! assert!(verbose);
//! assert_eq!(level, 3);
//! assert_eq!(files, ["a.txt", "-b.txt"]);
//! assert_eq!(state.len(), 3);
//! # Ok::<(), argtable::Error>(())
//! ```
//!
//! Accepted spellings:
//! - `-f`, `-fvalue` and `-f value` for short options, with flags
//!   clustering as in `-abc`; the first option in a cluster that takes a
//!   value consumes the rest of the token.
//! - `--opt`, `--opt=value` and `--opt value` for long options.
//! - `--` ends option scanning; everything after it is positional.
//!
//! Long names must match exactly; abbreviations are not recognized.

mod action;
mod convert;
mod error;
mod option;
mod parser;
mod state;

pub use crate::action::{
    callback, count, decrement, increment, insert, push_front, store, store_const, store_false,
    store_true, toggle, Action, Callback, Container, Counter, Decrement, Increment, Insert,
    PushFront, Store, StoreConst, Toggle,
};
pub use crate::convert::{
    parse_float, parse_signed, parse_unsigned, ConversionError, FromArg, NumericKind,
};
pub use crate::error::{Error, Result};
pub use crate::option::{Opt, OptionId, OptionTable};
pub use crate::state::OptionState;
