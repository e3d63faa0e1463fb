use std::fmt::{Display, Formatter};

use strum::{EnumMessage, IntoEnumIterator};

use crate::estimators::Method;

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

/// One selectable line of the method menu.
#[derive(Debug, Clone)]
pub struct MethodItem {
    pub method: Method,
    pub text: String,
}

impl Display for MethodItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Menu entries for every [`Method`], labelled with its message and a dimmed description.
pub fn method_items() -> Vec<MethodItem> {
    Method::iter()
        .map(|method| {
            let label = method.get_message().unwrap_or_else(|| method.into());
            let desc = method.get_detailed_message().unwrap_or("");
            let text = if desc.is_empty() {
                label.to_string()
            } else {
                format!("{label}  {DIM_ITALIC}{desc}{RESET}")
            };
            MethodItem { method, text }
        })
        .collect()
}
