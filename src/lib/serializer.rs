// SPDX-License-Identifier: Apache-2.0

pub(crate) fn is_option_string_empty(data: &Option<String>) -> bool {
    if let Some(s) = data {
        s.trim().is_empty()
    } else {
        true
    }
}

pub(crate) fn is_true(data: &bool) -> bool {
    *data
}

pub(crate) fn is_false(data: &bool) -> bool {
    !*data
}
