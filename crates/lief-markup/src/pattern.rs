use std::sync::OnceLock;

use regex::Regex;

pub(crate) fn static_regex(cell: &'static OnceLock<Regex>, pattern: &'static str) -> &'static Regex {
    cell.get_or_init(|| match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(_) => unreachable!("static regex pattern"),
    })
}
