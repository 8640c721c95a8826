// Subnet lookup - maps an address to its announced network block

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::WatchError;
use crate::Result;
use ipnetwork::Ipv4Network;
use std::net::Ipv4Addr;
use tracing::warn;

/// Client for the IP intelligence service.
///
/// One lookup is issued per distinct address observed across all domains in
/// a run, sequentially. The lookup cannot fail outright: every failure mode
/// degrades to a heuristic /24 around the address.
pub struct SubnetLookup {
    client: reqwest::Client,
    base_url: String,
}

impl SubnetLookup {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.lookup_base_url.clone(),
        })
    }

    /// The network block containing `address`. Always yields a CIDR: a
    /// failed lookup is logged and replaced by [`fallback_subnet`].
    pub async fn subnet_for(&self, address: Ipv4Addr) -> Ipv4Network {
        match self.query_network(address).await {
            Ok(subnet) => subnet,
            Err(e) => {
                warn!("subnet lookup for {address} failed, falling back to /24: {e:#}");
                fallback_subnet(address)
            }
        }
    }

    async fn query_network(&self, address: Ipv4Addr) -> Result<Ipv4Network> {
        let url = format!("{}{}", self.base_url, address);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WatchError::HttpError {
                status: status.as_u16(),
                details: format!("lookup service returned {status} for {address}"),
            }
            .into());
        }

        let body: serde_json::Value = response.json().await?;
        let cidr = body
            .get("network")
            .and_then(|network| network.get("cidr"))
            .and_then(|cidr| cidr.as_str())
            .ok_or_else(|| WatchError::ParseError {
                message: format!("no network.cidr field in response for {address}"),
            })?;

        let parsed = cidr.parse::<Ipv4Network>().map_err(|e| WatchError::ParseError {
            message: format!("lookup returned unusable cidr {cidr:?}: {e}"),
        })?;

        // mask off host bits in case the service ever reports one
        Ok(Ipv4Network::new(parsed.network(), parsed.prefix()).expect("masked prefix is valid"))
    }
}

/// First three octets of `address` plus `/24`.
pub fn fallback_subnet(address: Ipv4Addr) -> Ipv4Network {
    let [a, b, c, _] = address.octets();
    Ipv4Network::new(Ipv4Addr::new(a, b, c, 0), 24).expect("/24 prefix is valid")
}
