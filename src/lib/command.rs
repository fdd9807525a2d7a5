use std::io::{Result, Write};

use crate::dig::dig;
use crate::resolver::{LookupError, Resolve};

pub static USAGE: &'static str = "Usage: go-dig <hostname>";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Lookup(String),
    Usage,
}

impl Command {
    /// Parse process arguments. The first element is the program name, as
    /// with `std::env::args()`.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Self {
        match args.into_iter().nth(1) {
            Some(hostname) => Command::Lookup(hostname),
            None => Command::Usage,
        }
    }

    /// Carry out the command, writing everything to `out`.
    ///
    /// The resolver is only built for a lookup. A resolver that cannot be
    /// built is reported like a failed lookup.
    pub fn run<F, R, W>(self, make_resolver: F, out: &mut W) -> Result<()>
    where
        F: FnOnce() -> std::result::Result<R, LookupError>,
        R: Resolve,
        W: Write,
    {
        match self {
            Command::Usage => writeln!(out, "{}", USAGE),
            Command::Lookup(hostname) => match make_resolver() {
                Ok(resolver) => dig(&resolver, &hostname, out),
                Err(err) => writeln!(out, "{}", err),
            },
        }
    }
}
