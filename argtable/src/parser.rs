//! The tokenizer and dispatch loop.
//!
//! Tokens are classified one at a time as the cursor advances. Before `--`
//! the parser is scanning for options; after it every token is positional.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::option::{OptionId, OptionTable};
use crate::state::OptionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    ScanningOptions,
    PositionalOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'s> {
    NoDash(&'s str),
    /// The characters after the dash, one or more short options.
    SingleDash(&'s str),
    DoubleDash {
        name: &'s str,
        value: Option<&'s str>,
    },
    OptionsEnd,
}

impl<'s> Token<'s> {
    fn classify(arg: &'s str) -> Token<'s> {
        if arg == "--" {
            Token::OptionsEnd
        } else if let Some(body) = arg.strip_prefix("--") {
            match body.split_once('=') {
                Some((name, value)) => Token::DoubleDash {
                    name,
                    value: Some(value),
                },
                None => Token::DoubleDash {
                    name: body,
                    value: None,
                },
            }
        } else if let Some(cluster) = arg.strip_prefix('-') {
            // A lone "-" conventionally names stdin; keep it positional.
            if cluster.is_empty() {
                Token::NoDash(arg)
            } else {
                Token::SingleDash(cluster)
            }
        } else {
            Token::NoDash(arg)
        }
    }
}

struct Parser<'s, S> {
    args: &'s [S],
    next: usize,
    mode: Mode,
    positional_count: usize,
}

impl<'s, S: AsRef<str>> Parser<'s, S> {
    fn new(args: &'s [S]) -> Self {
        Parser {
            args,
            next: 0,
            mode: Mode::ScanningOptions,
            positional_count: 0,
        }
    }

    /// Takes the next raw argument whole, without classifying it.
    fn next_raw(&mut self) -> Option<&'s str> {
        let args: &'s [S] = self.args;
        let arg = args.get(self.next)?.as_ref();
        self.next += 1;
        Some(arg)
    }

    fn next_token(&mut self) -> Option<Token<'s>> {
        let arg = self.next_raw()?;
        Some(match self.mode {
            Mode::ScanningOptions => Token::classify(arg),
            Mode::PositionalOnly => Token::NoDash(arg),
        })
    }

    fn run(&mut self, table: &mut OptionTable<'_>, state: &mut OptionState) -> Result<()> {
        while let Some(token) = self.next_token() {
            trace!(?token, mode = ?self.mode, "classified argument");
            match token {
                Token::NoDash(arg) => self.positional(table, state, arg)?,
                Token::SingleDash(cluster) => self.short_cluster(table, state, cluster)?,
                Token::DoubleDash { name, value } => self.long_option(table, state, name, value)?,
                Token::OptionsEnd => self.mode = Mode::PositionalOnly,
            }
        }
        Ok(())
    }

    fn positional(
        &mut self,
        table: &mut OptionTable<'_>,
        state: &mut OptionState,
        arg: &'s str,
    ) -> Result<()> {
        let index = self.positional_count;
        // Advance even on failure so later slots keep their position.
        self.positional_count += 1;

        let id = table
            .find_positional(index)
            .map(|opt| opt.id())
            .ok_or_else(|| Error::UnknownArgument(arg.to_string()))?;
        apply(table, state, id, Some(arg))
    }

    fn short_cluster(
        &mut self,
        table: &mut OptionTable<'_>,
        state: &mut OptionState,
        cluster: &'s str,
    ) -> Result<()> {
        for (i, c) in cluster.char_indices() {
            let opt = table
                .find_short(c)
                .ok_or_else(|| Error::BadOption(format!("-{}", c)))?;
            let (id, num_args) = (opt.id(), opt.num_args());

            if num_args == 0 {
                apply(table, state, id, None)?;
                continue;
            }

            // The rest of the token is the value; if empty, the next token is.
            let rest = &cluster[i + c.len_utf8()..];
            let first = if rest.is_empty() {
                self.next_raw()
            } else {
                Some(rest)
            };
            self.take_values(table, id, &format!("-{}", c), first, num_args)?;
            state.record(id);
            return Ok(());
        }
        Ok(())
    }

    fn long_option(
        &mut self,
        table: &mut OptionTable<'_>,
        state: &mut OptionState,
        name: &'s str,
        inline: Option<&'s str>,
    ) -> Result<()> {
        let opt = table
            .find_long(name)
            .ok_or_else(|| Error::BadOption(format!("--{}", name)))?;
        let (id, num_args) = (opt.id(), opt.num_args());

        if num_args == 0 {
            if inline.is_some() {
                return Err(Error::UnwantedArg(format!("--{}", name)));
            }
            return apply(table, state, id, None);
        }

        let first = inline.or_else(|| self.next_raw());
        self.take_values(table, id, &format!("--{}", name), first, num_args)?;
        state.record(id);
        Ok(())
    }

    /// Feeds `num_args` values to the option: `first`, then whole raw
    /// tokens for the rest.
    fn take_values(
        &mut self,
        table: &mut OptionTable<'_>,
        id: OptionId,
        spelling: &str,
        first: Option<&'s str>,
        num_args: usize,
    ) -> Result<()> {
        let opt = table.get_mut(id);
        let mut value = first;
        for n in 0..num_args {
            if n > 0 {
                value = self.next_raw();
            }
            let value = value.ok_or_else(|| Error::MissingArg(spelling.to_string()))?;
            trace!(option = %opt.display_name(), value, "option resolved");
            opt.invoke(Some(value))?;
        }
        Ok(())
    }
}

fn apply(
    table: &mut OptionTable<'_>,
    state: &mut OptionState,
    id: OptionId,
    value: Option<&str>,
) -> Result<()> {
    let opt = table.get_mut(id);
    trace!(option = %opt.display_name(), value, "option resolved");
    opt.invoke(value)?;
    state.record(id);
    Ok(())
}

pub(crate) fn parse_args<S: AsRef<str>>(
    table: &mut OptionTable<'_>,
    args: &[S],
) -> Result<OptionState> {
    debug!(args = args.len(), options = table.len(), "parsing arguments");

    let mut parser = Parser::new(args);
    let mut state = OptionState::new();
    match parser.run(table, &mut state) {
        Ok(()) => {
            debug!(seen = state.len(), "parse finished");
            Ok(state)
        }
        Err(err) => {
            debug!(error = %err, consumed = parser.next, "parse aborted");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Token;

    #[test]
    fn classification() {
        assert_eq!(Token::classify("file"), Token::NoDash("file"));
        assert_eq!(Token::classify("-"), Token::NoDash("-"));
        assert_eq!(Token::classify("-abc"), Token::SingleDash("abc"));
        assert_eq!(Token::classify("--"), Token::OptionsEnd);
        assert_eq!(
            Token::classify("--name"),
            Token::DoubleDash {
                name: "name",
                value: None
            }
        );
        assert_eq!(
            Token::classify("--name=a=b"),
            Token::DoubleDash {
                name: "name",
                value: Some("a=b")
            }
        );
        assert_eq!(
            Token::classify("--name="),
            Token::DoubleDash {
                name: "name",
                value: Some("")
            }
        );
        assert_eq!(
            Token::classify("---x"),
            Token::DoubleDash {
                name: "-x",
                value: None
            }
        );
    }
}
