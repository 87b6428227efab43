//! User-facing notice texts.

use crate::domain::model::{Domain, TeacherUri};
use std::collections::BTreeSet;

pub const CONNECTING_TO_TEACHERS: &str = "Connecting to preferred teacher nodes...";

pub const COLLECT_NODE_IPV4_ADDRESS: &str = "Enter the node's public-facing IPv4 address";

pub fn no_domain_peers(domains: &BTreeSet<Domain>) -> String {
    let joined: Vec<&str> = domains.iter().map(String::as_str).collect();
    format!("WARNING - No Peers Available for domains: {}", joined.join(","))
}

pub fn teacher_unreachable(uri: &TeacherUri) -> String {
    format!("Failed to connect to teacher: {}", uri)
}

pub fn teacher_not_staking(uri: &TeacherUri) -> String {
    format!("Teacher ({}) is not staking, Skipping", uri)
}

pub fn confirm_node_ipv4_address(address: &str) -> String {
    format!(
        "Is this the public-facing IPv4 address ({}) you want to use for this node?",
        address
    )
}

pub fn force_detect_ip_warning(address: &str) -> String {
    format!("WARNING: --force is set, using auto-detected IP '{}'", address)
}
