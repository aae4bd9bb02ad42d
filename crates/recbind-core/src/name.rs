//! Casing transforms reconciling JSON payload names with record field names.

/// camelCase splitter.
///
/// `Snake` and `Kebab` insert their separator at every boundary where an
/// ASCII lowercase letter or digit is immediately followed by an ASCII
/// uppercase letter, then lowercase the entire result, so a leading
/// uppercase letter is lowercased without an inserted separator. `None` is
/// identity. All variants are pure and idempotent on strings that contain
/// no uppercase letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameTransform {
    None,
    Snake,
    Kebab,
}

impl NameTransform {
    pub fn transform(self, from: &str) -> String {
        let separator = match self {
            NameTransform::None => return from.to_string(),
            NameTransform::Snake => '_',
            NameTransform::Kebab => '-',
        };

        let mut out = String::with_capacity(from.len() + 4);
        // True when the previous source character was [a-z0-9].
        let mut at_boundary = false;
        for c in from.chars() {
            if at_boundary && c.is_ascii_uppercase() {
                out.push(separator);
            }
            at_boundary = c.is_ascii_lowercase() || c.is_ascii_digit();
            for lower in c.to_lowercase() {
                out.push(lower);
            }
        }
        out
    }

    /// `Option` passthrough: an absent name transforms to an absent name.
    pub fn transform_opt(self, from: Option<&str>) -> Option<String> {
        from.map(|s| self.transform(s))
    }
}
