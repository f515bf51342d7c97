use std::fmt;

/// Language label of a code sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Html,
    Css,
    JavaScript,
    Python,
}

impl Language {
    /// Display label, as shown above the sample.
    pub fn label(self) -> &'static str {
        match self {
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
        }
    }

    /// Class suffix used for `language-*` code classes.
    pub fn code_class(self) -> &'static str {
        match self {
            Language::Html => "html",
            Language::Css => "css",
            Language::JavaScript => "javascript",
            Language::Python => "python",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSample {
    pub language: Language,
    pub source: String,
}

/// Code samples in declaration order, at most one per language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeSamples(Vec<CodeSample>);

impl CodeSamples {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the sample for `language`, keeping its first position.
    pub fn insert(&mut self, language: Language, source: impl Into<String>) {
        let source = source.into();
        match self.0.iter_mut().find(|s| s.language == language) {
            Some(existing) => existing.source = source,
            None => self.0.push(CodeSample { language, source }),
        }
    }

    pub fn get(&self, language: Language) -> Option<&str> {
        self.0
            .iter()
            .find(|s| s.language == language)
            .map(|s| s.source.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CodeSample> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// A blog post or tutorial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Body in the restricted content format, see [`crate::formatting`].
    pub content: String,
    pub code_samples: Option<CodeSamples>,
}

impl ContentItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            content: content.into(),
            code_samples: None,
        }
    }

    /// Builder-style helper used by the static catalogs.
    pub fn with_sample(mut self, language: Language, source: impl Into<String>) -> Self {
        self.code_samples
            .get_or_insert_with(CodeSamples::new)
            .insert(language, source);
        self
    }

    pub fn sample(&self, language: Language) -> Option<&str> {
        self.code_samples
            .as_ref()
            .and_then(|samples| samples.get(language))
    }
}
