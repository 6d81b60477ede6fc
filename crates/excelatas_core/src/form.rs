/// The two forms on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    /// Upload one PDF, download the spreadsheet report.
    Extract,
    /// Upload PDFs, show suggested names.
    Rename,
}

impl FormKind {
    pub const ALL: [FormKind; 2] = [FormKind::Extract, FormKind::Rename];

    pub fn endpoint(self) -> &'static str {
        match self {
            FormKind::Extract => "/api/extrair",
            FormKind::Rename => "/api/renomear",
        }
    }
}

/// Which revision of the page is being driven.
///
/// `Single` renames one PDF at a time; `Multi` accepts several and gets a
/// `sugestoes` list back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageVariant {
    Single,
    #[default]
    Multi,
}

impl PageVariant {
    /// Parses the `data-variant` attribute; anything but `single` is `Multi`.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("single") => PageVariant::Single,
            _ => PageVariant::Multi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FormKind, PageVariant};

    #[test]
    fn endpoints_are_fixed_per_form() {
        assert_eq!(FormKind::Extract.endpoint(), "/api/extrair");
        assert_eq!(FormKind::Rename.endpoint(), "/api/renomear");
    }

    #[test]
    fn variant_attr_defaults_to_multi() {
        assert_eq!(PageVariant::from_attr(None), PageVariant::Multi);
        assert_eq!(PageVariant::from_attr(Some("")), PageVariant::Multi);
        assert_eq!(PageVariant::from_attr(Some("multi")), PageVariant::Multi);
        assert_eq!(PageVariant::from_attr(Some(" Single ")), PageVariant::Single);
    }
}
