// SPDX-License-Identifier: Apache-2.0

//! VLAN sub-interfaces are named `<base>.<tag>`, e.g. `eth0.100`.

const VLAN_NAME_SEPARATOR: char = '.';
const VLAN_ID_MAX: u16 = 4094;

// Split `eth0.100` into `("eth0", "100")` when the suffix is all digits.
// A name without base such as `.100` is kept whole.
fn split_vlan_name(name: &str) -> Option<(&str, &str)> {
    let (base, tag) = name.rsplit_once(VLAN_NAME_SEPARATOR)?;
    if base.is_empty()
        || tag.is_empty()
        || !tag.chars().all(|c| c.is_ascii_digit())
    {
        None
    } else {
        Some((base, tag))
    }
}

/// Name of the physical interface carrying the VLAN sub-interface, or the
/// name itself when it does not encode a VLAN tag.
pub fn strip_vlan(name: &str) -> &str {
    match split_vlan_name(name) {
        Some((base, _)) => base,
        None => name,
    }
}

/// VLAN tag encoded in the interface name. `None` when the name carries no
/// numeric suffix or the suffix is not a valid 802.1Q tag.
pub fn vlan_id_of_name(name: &str) -> Option<u16> {
    let (_, tag) = split_vlan_name(name)?;
    match tag.parse::<u16>() {
        Ok(id) if id <= VLAN_ID_MAX => Some(id),
        _ => None,
    }
}
