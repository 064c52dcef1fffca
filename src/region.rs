//! S3 regions and endpoint resolution.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::error::Result;

/// Identifier of an S3 region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RegionId {
    /// US East (N. Virginia)
    UsEast1,
    /// US East (Ohio)
    UsEast2,
    /// US West (N. California)
    UsWest1,
    /// US West (Oregon)
    UsWest2,
    /// Canada (Central)
    CaCentral1,
    /// Europe (Ireland)
    EuWest1,
    /// Europe (London)
    EuWest2,
    /// Europe (Paris)
    EuWest3,
    /// Europe (Frankfurt)
    EuCentral1,
    /// Europe (Stockholm)
    EuNorth1,
    /// Asia Pacific (Tokyo)
    ApNortheast1,
    /// Asia Pacific (Seoul)
    ApNortheast2,
    /// Asia Pacific (Singapore)
    ApSoutheast1,
    /// Asia Pacific (Sydney)
    ApSoutheast2,
    /// Asia Pacific (Mumbai)
    ApSouth1,
    /// South America (São Paulo)
    SaEast1,
}

impl RegionId {
    /// Region name as used in the credential scope.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionId::UsEast1 => "us-east-1",
            RegionId::UsEast2 => "us-east-2",
            RegionId::UsWest1 => "us-west-1",
            RegionId::UsWest2 => "us-west-2",
            RegionId::CaCentral1 => "ca-central-1",
            RegionId::EuWest1 => "eu-west-1",
            RegionId::EuWest2 => "eu-west-2",
            RegionId::EuWest3 => "eu-west-3",
            RegionId::EuCentral1 => "eu-central-1",
            RegionId::EuNorth1 => "eu-north-1",
            RegionId::ApNortheast1 => "ap-northeast-1",
            RegionId::ApNortheast2 => "ap-northeast-2",
            RegionId::ApSoutheast1 => "ap-southeast-1",
            RegionId::ApSoutheast2 => "ap-southeast-2",
            RegionId::ApSouth1 => "ap-south-1",
            RegionId::SaEast1 => "sa-east-1",
        }
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let id = match s {
            "us-east-1" => RegionId::UsEast1,
            "us-east-2" => RegionId::UsEast2,
            "us-west-1" => RegionId::UsWest1,
            "us-west-2" => RegionId::UsWest2,
            "ca-central-1" => RegionId::CaCentral1,
            "eu-west-1" => RegionId::EuWest1,
            "eu-west-2" => RegionId::EuWest2,
            "eu-west-3" => RegionId::EuWest3,
            "eu-central-1" => RegionId::EuCentral1,
            "eu-north-1" => RegionId::EuNorth1,
            "ap-northeast-1" => RegionId::ApNortheast1,
            "ap-northeast-2" => RegionId::ApNortheast2,
            "ap-southeast-1" => RegionId::ApSoutheast1,
            "ap-southeast-2" => RegionId::ApSoutheast2,
            "ap-south-1" => RegionId::ApSouth1,
            "sa-east-1" => RegionId::SaEast1,
            _ => return Err(Error::unknown_region(format!("region {s} is not known"))),
        };
        Ok(id)
    }
}

/// An S3 region together with its endpoint settings.
///
/// The default endpoint is derived from the region id. S3 compatible
/// services like MinIO pass their own host via [`Region::with_host`].
#[derive(Debug, Clone)]
pub struct Region {
    id: RegionId,
    host: Option<String>,
    secure: bool,
}

impl Region {
    /// Create a region with the default endpoint over HTTPS.
    pub fn new(id: RegionId) -> Self {
        Region {
            id,
            host: None,
            secure: true,
        }
    }

    /// Override the endpoint host, e.g. `127.0.0.1:9000` for MinIO.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Choose between HTTPS (default) and plain HTTP.
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Region name as used in the credential scope.
    pub fn name(&self) -> &str {
        self.id.as_str()
    }

    /// Endpoint host for this region.
    pub fn host(&self) -> String {
        match &self.host {
            Some(host) => host.clone(),
            None => format!("s3.{}.amazonaws.com", self.id),
        }
    }

    /// URI scheme for this region's endpoint.
    pub fn scheme(&self) -> http::uri::Scheme {
        if self.secure {
            http::uri::Scheme::HTTPS
        } else {
            http::uri::Scheme::HTTP
        }
    }
}

impl From<RegionId> for Region {
    fn from(id: RegionId) -> Self {
        Region::new(id)
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Region::new(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let region = Region::new(RegionId::EuWest2);
        assert_eq!(region.host(), "s3.eu-west-2.amazonaws.com");
        assert_eq!(region.scheme(), http::uri::Scheme::HTTPS);
    }

    #[test]
    fn test_host_override() {
        let region = Region::new(RegionId::UsEast1)
            .with_host("127.0.0.1:9000")
            .with_secure(false);
        assert_eq!(region.host(), "127.0.0.1:9000");
        assert_eq!(region.scheme(), http::uri::Scheme::HTTP);
    }

    #[test]
    fn test_from_str() {
        let region: Region = "ap-south-1".parse().expect("region must parse");
        assert_eq!(region.name(), "ap-south-1");

        let err = "moon-base-1".parse::<Region>().unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::UnknownRegion);
    }
}
