/// A named unit of grounding context supplied with a chat question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub content: Option<String>,
    /// Base64 payload, optionally prefixed with a `data:<mime>;base64,` header.
    pub file_data: Option<String>,
    pub mime_type: Option<String>,
}

/// How a source contributes to the outbound prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind<'a> {
    File { data: &'a str, mime_type: &'a str },
    Text { content: &'a str },
}

impl Source {
    pub fn text(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Some(content.into()),
            file_data: None,
            mime_type: None,
        }
    }

    pub fn file(
        name: impl Into<String>,
        file_data: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            content: None,
            file_data: Some(file_data.into()),
            mime_type: Some(mime_type.into()),
        }
    }

    /// Classifies the source. A file payload takes precedence over inline
    /// content; `None` means the source is inert.
    pub fn kind(&self) -> Option<SourceKind<'_>> {
        fn present(v: &Option<String>) -> Option<&str> {
            v.as_deref().filter(|s| !s.is_empty())
        }

        if let (Some(data), Some(mime_type)) = (present(&self.file_data), present(&self.mime_type)) {
            return Some(SourceKind::File { data, mime_type });
        }

        present(&self.content).map(|content| SourceKind::Text { content })
    }
}
