//! Sets of IPv4 address ranges kept as their minimal list of disjoint CIDR blocks.
//!
//! - [`Cidr`] - one canonical block, parsed from `a.b.c.d[/n]` or built from raw values
//! - [`CidrSet`] - trie-backed set with `add`, `remove`, `contains`, `union`, `difference`

pub mod config;
pub mod models;
pub mod output;
pub mod set;

use std::error::Error;

pub use models::{Cidr, CidrError};
pub use set::CidrSet;

/// Build a set from command line style arguments.
///
/// Each argument is a CIDR to add, or a `-` prefixed CIDR to remove, applied in order.
///
/// # Examples
/// ```
/// let args = vec!["10.0.0.0/24".to_string(), "-10.0.0.128/25".to_string()];
/// let set = cidr_set::build_set(&args).unwrap();
/// assert_eq!(set.to_string(), "10.0.0.0/25");
/// ```
pub fn build_set(args: &[String]) -> Result<CidrSet, Box<dyn Error>> {
    let mut set = CidrSet::new();
    for arg in args {
        match arg.strip_prefix('-') {
            Some(text) => {
                let cidr: Cidr = text.parse()?;
                log::debug!("remove {cidr}");
                set.remove(cidr);
            }
            None => {
                let cidr: Cidr = arg.parse()?;
                log::debug!("add {cidr}");
                set.add(cidr);
            }
        }
    }
    log::info!("# Got {} block(s) from {} argument(s)", set.size(), args.len());
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_set_add_remove() {
        let set = build_set(&args(&["0.0.0.0/0", "-0.0.0.0/3"])).unwrap();
        assert_eq!(set.to_string(), "32.0.0.0/3, 64.0.0.0/2, 128.0.0.0/1");
    }

    #[test]
    fn test_build_set_order_matters() {
        let set = build_set(&args(&["-10.0.0.0/8", "10.0.0.0/8"])).unwrap();
        assert_eq!(set.to_string(), "10.0.0.0/8");
        let set = build_set(&args(&["10.0.0.0/8", "-10.0.0.0/8"])).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_build_set_empty() {
        let set = build_set(&[]).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_build_set_invalid() {
        let err = build_set(&args(&["10.0.0.0/8", "10.0.0.256"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "format error: Invalid cidr octet format: 256"
        );
        assert!(build_set(&args(&["--10.0.0.0/8"])).is_err());
    }
}
