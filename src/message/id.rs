use super::Query;
use crate::error::Error;
use crate::Result;
use core::fmt;
use hex::FromHex;
use rand::{rngs::ThreadRng, Fill};
use serde::{Serialize, Serializer};
use std::str::FromStr;

pub const IDL: usize = 8;
const ID0: [u8; IDL] = [0_u8; IDL];

/// World id: random bytes, hex on the wire and on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(pub [u8; IDL]);

impl FromStr for Id {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match <[u8; IDL]>::from_hex(s) {
            Ok(u) => Ok(Id(u)),
            Err(_) => Err(Error::ApiParseId),
        }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl Id {
    pub fn rand(rng: &mut ThreadRng) -> Result<Self> {
        let mut s = ID0;
        match s.try_fill(rng) {
            Ok(_) => Ok(Id(s)),
            Err(_) => Err(Error::Os),
        }
    }
    pub fn try_get(req: &hyper::Request<hyper::body::Incoming>, key: &str) -> Result<Self> {
        Id::from_str(Query::retrieve(req, key)?)
    }
}
