/*
 * recipients.rs
 * Copyright (C) 2026 Chris Burdess
 *
 * This file is part of Graphmail, a Microsoft Graph mail transport.
 *
 * Graphmail is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Graphmail is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Graphmail.  If not, see <http://www.gnu.org/licenses/>.
 */

//! Recipient resolution and address mapping for sendMail.

use crate::mail::Address;

use super::payload::{EmailAddress, Recipient};

/// Primary recipients: envelope recipients that are not also CC or BCC recipients.
///
/// Order follows the envelope; duplicates among the remaining recipients are kept.
pub fn resolve_recipients(recipients: &[Address], cc: &[Address], bcc: &[Address]) -> Vec<Address> {
    recipients
        .iter()
        .filter(|r| !cc.contains(r) && !bcc.contains(r))
        .cloned()
        .collect()
}

/// `{"emailAddress":{"address":…}}`
pub fn map_address(address: &Address) -> Recipient {
    Recipient {
        email_address: EmailAddress {
            address: address.as_str().to_string(),
        },
    }
}

pub fn map_addresses(addresses: &[Address]) -> Vec<Recipient> {
    addresses.iter().map(map_address).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addrs(list: &[&str]) -> Vec<Address> {
        list.iter().map(|a| Address::new(*a)).collect()
    }

    #[test]
    fn excludes_cc_and_bcc() {
        let resolved = resolve_recipients(&addrs(&["a@x", "b@x", "c@x", "d@x"]), &addrs(&["b@x"]), &addrs(&["d@x"]));
        assert_eq!(resolved, addrs(&["a@x", "c@x"]));
    }

    #[test]
    fn keeps_duplicate_primary_recipients() {
        let resolved = resolve_recipients(&addrs(&["a@x", "a@x"]), &[], &[]);
        assert_eq!(resolved, addrs(&["a@x", "a@x"]));
    }

    #[test]
    fn empty_input() {
        assert!(resolve_recipients(&[], &addrs(&["b@x"]), &[]).is_empty());
    }

    #[test]
    fn maps_address() {
        let r = map_address(&Address::new("someone@example.com"));
        assert_eq!(r.email_address.address, "someone@example.com");
        assert_eq!(map_addresses(&addrs(&["a@x", "b@x"])).len(), 2);
    }
}
