//! Terminal output of a [`CidrSet`].

use crate::set::CidrSet;
use colored::Colorize;

/// One line per block: CIDR, first and last address, address count.
pub fn format_rows(set: &CidrSet) -> Vec<String> {
    set.iter()
        .map(|cidr| {
            format!(
                "{cidr:<18} {first:>15} - {last:<15} {size:>10}",
                cidr = cidr.to_string(),
                first = cidr.network().to_string(),
                last = cidr.broadcast().to_string(),
                size = cidr.size()
            )
        })
        .collect()
}

pub fn format_summary(set: &CidrSet) -> String {
    format!(
        "{blocks} block(s), {addresses} address(es)",
        blocks = set.size(),
        addresses = set.address_count()
    )
}

/// Print the set to stdout, blocks first then a summary line.
pub fn print_set(set: &CidrSet) {
    log::info!("#Start print_set() blocks={}", set.size());
    for row in format_rows(set) {
        println!("{}", row.green());
    }
    println!("{} {}", "#".on_blue(), format_summary(set));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cidr;

    #[test]
    fn test_format_rows() {
        let set: CidrSet = ["10.0.0.0/24", "192.168.1.7"]
            .iter()
            .map(|s| Cidr::parse(s).unwrap())
            .collect();
        let rows = format_rows(&set);
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            "10.0.0.0/24               10.0.0.0 - 10.0.0.255             256"
        );
        assert!(rows[1].starts_with("192.168.1.7/32 "));
        assert!(rows[1].ends_with(" 1"));
    }

    #[test]
    fn test_format_summary() {
        assert_eq!(format_summary(&CidrSet::new()), "0 block(s), 0 address(es)");
        let set: CidrSet = std::iter::once(Cidr::parse("10.0.0.0/30").unwrap()).collect();
        assert_eq!(format_summary(&set), "1 block(s), 4 address(es)");
    }
}
