pub use command::{Command, USAGE};
pub use dig::dig;
pub use resolver::{AddressList, LookupError, NameserverList, Resolve, SystemResolver};

mod command;
mod dig;
mod resolver;
