/// Path parameters handed to a category page.
///
/// `Single` comes from a `/store/<category>` request, `CatchAll` from the
/// optional catch-all form and may hold zero segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParams {
    Single(String),
    CatchAll(Vec<String>),
}

impl CategoryParams {
    /// Resolve the segments that followed `/store`.
    ///
    /// Exactly one segment resolves to `Single`; anything else, including
    /// no segments at all, resolves to `CatchAll`. Segments are kept verbatim
    /// and in order.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.len() == 1 {
            CategoryParams::Single(segments.remove(0))
        } else {
            CategoryParams::CatchAll(segments)
        }
    }

    /// Resolve a still-encoded path tail (`men/shoes`, `men%2Fshoes`).
    ///
    /// The tail is split on literal slashes first and each segment is
    /// percent-decoded afterwards, so an encoded `%2F` stays inside its
    /// segment. Empty segments from doubled or trailing slashes are dropped.
    /// A segment that does not decode to UTF-8 is kept as sent.
    pub fn from_encoded_path(raw: &str) -> Self {
        Self::from_segments(
            raw.split('/')
                .filter(|s| !s.is_empty())
                .map(|s| urlencoding::decode(s).unwrap_or_else(|_| s.into()).into_owned()),
        )
    }

    /// The value shown on the page. A sequence is comma-joined and an empty
    /// one shows nothing.
    pub fn display(&self) -> String {
        match self {
            CategoryParams::Single(category) => category.clone(),
            CategoryParams::CatchAll(categories) => categories.join(","),
        }
    }
}

impl Default for CategoryParams {
    fn default() -> Self {
        CategoryParams::CatchAll(Vec::new())
    }
}
