use std::fmt::Display;
use std::io::{Result, Write};

use crate::resolver::Resolve;

/// Every item followed by a single space.
fn spaced<T: Display>(items: &[T]) -> String {
    let mut list = String::new();
    for item in items {
        list += &item.to_string();
        list.push(' ');
    }
    list
}

/// Print the A records of `hostname`, then a blank line and its NS records.
///
/// A failed lookup prints the resolver's error text in place of its list and
/// ends the report, so the NS lookup only runs after the A lookup succeeded.
/// The returned error is only ever a failure to write to `out`.
pub fn dig<R: Resolve, W: Write>(resolver: &R, hostname: &str, out: &mut W) -> Result<()> {
    let addresses = match resolver.lookup_addresses(hostname) {
        Ok(addresses) => addresses,
        Err(err) => return writeln!(out, "{}", err),
    };
    writeln!(out, "A records for {}: {}", hostname, spaced(&addresses))?;

    let nameservers = match resolver.lookup_nameservers(hostname) {
        Ok(nameservers) => nameservers,
        Err(err) => return writeln!(out, "{}", err),
    };
    writeln!(out, "\nNS records for {}: {}", hostname, spaced(&nameservers))
}
