use std::net::IpAddr;

use hickory_resolver::config::LookupIpStrategy;
use hickory_resolver::error::ResolveError;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::{system_conf, Resolver};
use log::{debug, trace};
use thiserror::Error;

/// Addresses in the order the resolver returned them.
pub type AddressList = Vec<IpAddr>;

/// Nameserver host names in presentation form, in the order the resolver returned them.
pub type NameserverList = Vec<String>;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("{0}")]
    Setup(String),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

pub trait Resolve {
    fn lookup_addresses(&self, hostname: &str) -> Result<AddressList, LookupError>;
    fn lookup_nameservers(&self, hostname: &str) -> Result<NameserverList, LookupError>;
}

/// Synchronous resolver using the host's resolver configuration.
pub struct SystemResolver {
    inner: Resolver,
}

impl SystemResolver {
    /// Reads `/etc/resolv.conf` (or the platform equivalent). Addresses are
    /// looked up for both IPv4 and IPv6.
    pub fn from_system_conf() -> Result<Self, LookupError> {
        let (config, mut opts) =
            system_conf::read_system_conf().map_err(|e| LookupError::Setup(e.to_string()))?;
        opts.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;
        debug!("resolver using {} nameservers", config.name_servers().len());

        let inner = Resolver::new(config, opts).map_err(|e| LookupError::Setup(e.to_string()))?;
        Ok(SystemResolver { inner })
    }
}

impl Resolve for SystemResolver {
    fn lookup_addresses(&self, hostname: &str) -> Result<AddressList, LookupError> {
        debug!("A lookup for {}", hostname);
        let lookup = self.inner.lookup_ip(hostname)?;
        let addresses: AddressList = lookup.iter().collect();
        trace!("{} answered with {} addresses", hostname, addresses.len());
        Ok(addresses)
    }

    fn lookup_nameservers(&self, hostname: &str) -> Result<NameserverList, LookupError> {
        debug!("NS lookup for {}", hostname);
        let lookup = self.inner.lookup(hostname, RecordType::NS)?;
        let nameservers: NameserverList = lookup
            .iter()
            .filter_map(|rdata| match rdata {
                RData::NS(ns) => Some(ns.0.to_string()),
                _ => None,
            })
            .collect();
        trace!("{} answered with {} nameservers", hostname, nameservers.len());
        Ok(nameservers)
    }
}
