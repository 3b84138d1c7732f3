use std::io;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error(transparent)]
    Args(#[from] argtable::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DemoError>;

/// Print `<program>: <error>` and exit with status 1.
pub fn fail(program: &str, err: &DemoError) -> ! {
    eprintln!("{}: {}", program, err);
    std::process::exit(1);
}
