/// Normalise a variable name the way the host's script parser does.
///
/// A leading underscore is the script-friendly spelling of the hidden
/// variable prefix `~`.
pub fn normalize_tagname(name: &str) -> String {
    match name.strip_prefix('_') {
        Some(rest) => format!("~{rest}"),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underscore_prefix_becomes_tilde() {
        assert_eq!(normalize_tagname("_earliest"), "~earliest");
        assert_eq!(normalize_tagname("~earliest"), "~earliest");
        assert_eq!(normalize_tagname("earliest_date"), "earliest_date");
        assert_eq!(normalize_tagname("__x"), "~_x");
        assert_eq!(normalize_tagname(""), "");
    }
}
