//! Signing S3 API requests without effort.
//!
//! `s3sign` computes AWS SigV4 (and legacy SigV2) signatures for S3
//! requests: it canonicalizes the request, derives the signing key and
//! attaches either an `Authorization` header or a presigned query
//! string. It never touches the network, the signed request can be
//! sent with any HTTP client.
//!
//! # Example
//!
//! ```no_run
//! use anyhow::Result;
//! use s3sign::Payload;
//! use s3sign::Region;
//! use s3sign::RegionId;
//! use s3sign::Signer;
//!
//! fn main() -> Result<()> {
//!     let signer = Signer::builder()
//!         .access_key("access_key_id")
//!         .secret_key("secret_access_key")
//!         .region(Region::new(RegionId::UsEast1))
//!         .build()?;
//!
//!     let req = http::Request::get("https://examplebucket.s3.us-east-1.amazonaws.com/test.txt")
//!         .body(())?;
//!     let (mut parts, body) = req.into_parts();
//!
//!     signer.sign(&mut parts, &Payload::Empty)?;
//!
//!     let req = http::Request::from_parts(parts, body);
//!     // Send the signed req with your favourite client.
//!     # let _ = req;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

mod constants;
mod hash;

mod credential;
pub use credential::Credential;

mod error;
pub use error::Error;
pub use error::ErrorKind;
pub use error::Result;

mod expiration;
pub use expiration::Expiration;

mod payload;
pub use payload::Payload;

mod region;
pub use region::Region;
pub use region::RegionId;

mod request;
mod time;

mod signer;
pub use signer::Builder;
pub use signer::Signer;
pub use signer::SigningVersion;

mod v2;
mod v4;
