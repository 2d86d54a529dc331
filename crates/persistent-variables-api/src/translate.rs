/// Translation hooks offered by the host.
///
/// The defaults return the untranslated text, which is what a host without a
/// catalogue for the plugin does.
pub trait Translate {
    fn tr(&self, _key: &str, default: &str) -> String {
        default.to_string()
    }

    /// Plural-aware translation. `{n}` in the chosen form is replaced by the
    /// thousands-separated count.
    fn trn(&self, _key: &str, singular: &str, plural: &str, n: usize) -> String {
        let form = if n == 1 { singular } else { plural };
        form.replace("{n}", &format_count(n))
    }
}

/// Format a count with `,` thousands separators.
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct Untranslated;

    impl Translate for Untranslated {}

    #[test]
    fn counts_are_grouped() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn plural_form_follows_count() {
        let tr = Untranslated;
        assert_eq!(tr.trn("k", "{n} item", "{n} items", 1), "1 item");
        assert_eq!(tr.trn("k", "{n} item", "{n} items", 0), "0 items");
        assert_eq!(tr.trn("k", "{n} item", "{n} items", 2500), "2,500 items");
        assert_eq!(tr.tr("k", "Album Variables"), "Album Variables");
    }
}
