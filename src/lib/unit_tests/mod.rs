// SPDX-License-Identifier: Apache-2.0

mod desired;
mod iface;
mod store;
mod vlan;
