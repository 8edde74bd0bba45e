//! Regional endpoint resolution.
//!
//! NLB is a regional product: every region exposes
//! `nlb.{region-id}.aliyuncs.com` and requests must go to the endpoint of
//! the region that owns the resource. An explicit override exists for
//! tests and private-access (VPC endpoint) deployments.

use url::Url;

use crate::error::Error;

const ENDPOINT_SUFFIX: &str = "aliyuncs.com";

/// Where requests for one region are sent.
#[derive(Debug, Clone)]
pub enum Endpoint {
    /// The public regional endpoint, `https://nlb.{region-id}.aliyuncs.com`.
    Regional { region_id: String },
    /// An explicit URL, e.g. a VPC endpoint or a local mock server.
    Custom(Url),
}

impl Endpoint {
    /// The standard endpoint for a region.
    pub fn regional(region_id: impl Into<String>) -> Self {
        Self::Regional {
            region_id: region_id.into(),
        }
    }

    /// An explicit endpoint URL. Scheme and host are taken as-is.
    pub fn custom(url: &str) -> Result<Self, Error> {
        Ok(Self::Custom(Url::parse(url)?))
    }

    /// Resolve to the URL requests are POSTed to.
    pub fn url(&self) -> Result<Url, Error> {
        match self {
            Self::Regional { region_id } => {
                let raw = format!("https://nlb.{region_id}.{ENDPOINT_SUFFIX}/");
                Ok(Url::parse(&raw)?)
            }
            Self::Custom(url) => Ok(url.clone()),
        }
    }

    /// The region this endpoint belongs to, when known.
    pub fn region_id(&self) -> Option<&str> {
        match self {
            Self::Regional { region_id } => Some(region_id),
            Self::Custom(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regional_url() {
        let ep = Endpoint::regional("cn-hangzhou");
        assert_eq!(ep.url().unwrap().as_str(), "https://nlb.cn-hangzhou.aliyuncs.com/");
    }

    #[test]
    fn custom_url_kept_verbatim() {
        let ep = Endpoint::custom("http://127.0.0.1:8080/").unwrap();
        assert_eq!(ep.url().unwrap().as_str(), "http://127.0.0.1:8080/");
        assert!(ep.region_id().is_none());
    }
}
