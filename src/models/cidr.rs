//! IPv4 CIDR block value type.
//!
//! Provides [`Cidr`], an immutable and always canonical (network address, prefix length)
//! pair, along with the mask helper it is built on.

use super::CidrError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    static ref CIDR_RE: Regex =
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})(?:/([0-9]{1,2}))?$")
            .expect("Invalid Regex?");
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cidr_set::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, CidrError> {
    if len > MAX_LENGTH {
        Err(CidrError::range(format!("Invalid bitmask: {len}")))
    } else {
        Ok(mask_bits(len))
    }
}

// len must already be <= MAX_LENGTH
fn mask_bits(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// One contiguous, power-of-two aligned block of IPv4 addresses.
///
/// The address never carries bits beyond the prefix length, so equality, hashing and
/// ordering all work on the canonical block. Ordering is by network address, then by
/// prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    address: u32,
    prefix_length: u8,
}

impl Cidr {
    /// Create a block from a raw address and prefix length, masking the address.
    ///
    /// # Examples
    /// ```
    /// use cidr_set::Cidr;
    /// let c = Cidr::new(1, 31).unwrap();
    /// assert_eq!(c.to_string(), "0.0.0.0/31");
    /// assert!(Cidr::new(0, 33).is_err());
    /// ```
    pub fn new(address: u32, prefix_length: u8) -> Result<Cidr, CidrError> {
        if prefix_length > MAX_LENGTH {
            return Err(CidrError::range(format!("Invalid bitmask: {prefix_length}")));
        }
        Ok(Cidr::masked(address, prefix_length))
    }

    /// Like [`Cidr::new`] but accepts a wider integer, rejecting anything above 2^32-1.
    pub fn from_u64(address: u64, prefix_length: u8) -> Result<Cidr, CidrError> {
        let address =
            u32::try_from(address).map_err(|_| CidrError::range(format!("Invalid ip: {address}")))?;
        Cidr::new(address, prefix_length)
    }

    /// Parse `"a.b.c.d"` or `"a.b.c.d/n"`. A missing prefix means a single host (/32).
    pub fn parse(s: &str) -> Result<Cidr, CidrError> {
        let caps = CIDR_RE.captures(s).ok_or_else(|| {
            log::debug!("rejected cidr text '{s}'");
            CidrError::format(format!("Invalid cidr format: {s}"))
        })?;

        let mut address: u32 = 0;
        for i in 1..=4usize {
            let octet: u32 = caps[i]
                .parse()
                .map_err(|_| CidrError::format(format!("Invalid cidr octet format: {}", &caps[i])))?;
            if octet > 255 {
                return Err(CidrError::format(format!("Invalid cidr octet format: {octet}")));
            }
            address = (address << 8) | octet;
        }

        let prefix_length = match caps.get(5) {
            Some(m) => {
                let len: u8 = m
                    .as_str()
                    .parse()
                    .map_err(|_| CidrError::format(format!("Invalid cidr bitmask: {}", m.as_str())))?;
                if len > MAX_LENGTH {
                    return Err(CidrError::format(format!(
                        "Invalid cidr bitmask (0-32): {len}"
                    )));
                }
                len
            }
            None => MAX_LENGTH,
        };

        Ok(Cidr::masked(address, prefix_length))
    }

    /// Build from parts the caller already knows are in range.
    pub(crate) fn masked(address: u32, prefix_length: u8) -> Cidr {
        debug_assert!(prefix_length <= MAX_LENGTH);
        Cidr {
            address: address & mask_bits(prefix_length),
            prefix_length,
        }
    }

    /// Canonical network address as an integer.
    pub fn address(&self) -> u32 {
        self.address
    }

    /// Number of significant high-order bits.
    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    /// Subnet mask for this prefix length.
    pub fn mask(&self) -> u32 {
        mask_bits(self.prefix_length)
    }

    /// Lowest (network) address in the block.
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.address)
    }

    /// Highest (broadcast) address in the block.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.address | !self.mask())
    }

    /// Number of addresses in the block.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix_length)
    }

    /// Value of the i-th most significant address bit, 1-indexed.
    ///
    /// Returns a range error for `i` outside `1..=32`.
    pub fn bit(&self, i: u8) -> Result<u8, CidrError> {
        if !(1..=MAX_LENGTH).contains(&i) {
            return Err(CidrError::range(format!("Invalid bit index (1-32): {i}")));
        }
        Ok(((self.address >> (MAX_LENGTH - i)) & 1) as u8)
    }

    /// True if every address of `other` lies inside this block.
    pub fn covers(&self, other: &Cidr) -> bool {
        self.prefix_length <= other.prefix_length
            && other.address & self.mask() == self.address
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.network(), self.prefix_length)
    }
}

impl FromStr for Cidr {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Cidr, CidrError> {
        Cidr::parse(s)
    }
}

impl TryFrom<&str> for Cidr {
    type Error = CidrError;

    fn try_from(s: &str) -> Result<Cidr, CidrError> {
        Cidr::parse(s)
    }
}

impl From<Ipv4Addr> for Cidr {
    fn from(addr: Ipv4Addr) -> Cidr {
        Cidr::masked(u32::from(addr), MAX_LENGTH)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::parse(&s).map_err(de::Error::custom)
    }
}
