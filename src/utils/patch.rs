//! Patch helpers: a field is overwritten only when the caller supplied a
//! non-empty value.

use crate::models::string_list::StringList;

pub fn patch_string(target: &mut String, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        *target = value;
    }
}

pub fn patch_optional_string(target: &mut Option<String>, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        *target = Some(value);
    }
}

pub fn patch_list(target: &mut StringList, value: Option<Vec<String>>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        *target = StringList::from(value);
    }
}

pub fn patch_value<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}
