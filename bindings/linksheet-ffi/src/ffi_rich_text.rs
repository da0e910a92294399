#[derive(uniffi::Record, Clone)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl From<linksheet::Attribute> for Attribute {
    fn from(inner: linksheet::Attribute) -> Self {
        Self {
            key: inner.key,
            value: inner.value,
        }
    }
}

impl From<Attribute> for linksheet::Attribute {
    fn from(attribute: Attribute) -> Self {
        Self {
            key: attribute.key,
            value: attribute.value,
        }
    }
}

#[derive(uniffi::Enum, Clone)]
pub enum FormatKind {
    Link,
    Bold,
    Italic,
    Strikethrough,
    Underline,
    InlineCode,
}

impl From<linksheet::FormatKind> for FormatKind {
    fn from(inner: linksheet::FormatKind) -> Self {
        match inner {
            linksheet::FormatKind::Link => Self::Link,
            linksheet::FormatKind::Bold => Self::Bold,
            linksheet::FormatKind::Italic => Self::Italic,
            linksheet::FormatKind::Strikethrough => Self::Strikethrough,
            linksheet::FormatKind::Underline => Self::Underline,
            linksheet::FormatKind::InlineCode => Self::InlineCode,
        }
    }
}

impl From<FormatKind> for linksheet::FormatKind {
    fn from(kind: FormatKind) -> Self {
        match kind {
            FormatKind::Link => Self::Link,
            FormatKind::Bold => Self::Bold,
            FormatKind::Italic => Self::Italic,
            FormatKind::Strikethrough => Self::Strikethrough,
            FormatKind::Underline => Self::Underline,
            FormatKind::InlineCode => Self::InlineCode,
        }
    }
}

#[derive(uniffi::Record, Clone)]
pub struct Format {
    pub kind: FormatKind,
    pub attributes: Vec<Attribute>,
}

impl From<linksheet::Format> for Format {
    fn from(inner: linksheet::Format) -> Self {
        Self {
            kind: inner.kind().into(),
            attributes: inner
                .attributes()
                .iter()
                .cloned()
                .map(Attribute::from)
                .collect(),
        }
    }
}

impl From<Format> for linksheet::Format {
    fn from(format: Format) -> Self {
        linksheet::Format::with_attributes(
            format.kind.into(),
            format.attributes.into_iter().map(Into::into).collect(),
        )
    }
}

/// A contiguous run of UTF-16 code units carrying one format.
#[derive(uniffi::Record, Clone)]
pub struct FormatSpan {
    pub start: u32,
    pub end: u32,
    pub format: Format,
}

impl From<linksheet::FormatSpan> for FormatSpan {
    fn from(inner: linksheet::FormatSpan) -> Self {
        Self {
            start: inner.start as u32,
            end: inner.end as u32,
            format: inner.format.into(),
        }
    }
}

impl From<FormatSpan> for linksheet::FormatSpan {
    fn from(span: FormatSpan) -> Self {
        Self {
            start: span.start as usize,
            end: span.end as usize,
            format: span.format.into(),
        }
    }
}

/// The span form of a rich-text value, as platforms exchange it:
/// UTF-8 text with UTF-16 code-unit indices for spans and selection.
#[derive(uniffi::Record, Clone)]
pub struct RichTextValue {
    pub text: String,
    pub spans: Vec<FormatSpan>,
    pub start: u32,
    pub end: u32,
}

impl From<&linksheet::RichTextValue> for RichTextValue {
    fn from(inner: &linksheet::RichTextValue) -> Self {
        Self {
            text: inner.text_content(),
            spans: inner
                .format_spans()
                .into_iter()
                .map(FormatSpan::from)
                .collect(),
            start: inner.start() as u32,
            end: inner.end() as u32,
        }
    }
}

impl TryFrom<RichTextValue> for linksheet::RichTextValue {
    type Error = linksheet::ValueError;

    fn try_from(value: RichTextValue) -> Result<Self, Self::Error> {
        let spans: Vec<linksheet::FormatSpan> =
            value.spans.into_iter().map(Into::into).collect();
        linksheet::RichTextValue::with_spans(
            &value.text,
            &spans,
            value.start as usize,
            value.end as usize,
        )
    }
}
