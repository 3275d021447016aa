use std::fmt;
use std::sync::Arc;

/// Inserts `_` before each uppercase ASCII letter and lowercases it.
///
/// Exact inverse of [`camel_case`] only for identifiers with no leading
/// uppercase letter and no double underscores. Inputs outside that
/// grammar are transformed best-effort, not rejected.
pub fn snake_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    for ch in input.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Removes each `_` and uppercases the letter that follows it.
///
/// See [`snake_case`] for the identifier grammar under which the two are
/// inverses.
pub fn camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut upper_next = false;
    for ch in input.chars() {
        if ch == '_' && !upper_next {
            upper_next = true;
        } else if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    if upper_next {
        out.push('_');
    }
    out
}

/// Casing used on the column side of the mapping. Attribute names are
/// assumed to carry the opposite casing; `Preserve` maps names through
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnCase {
    /// Columns are snake_case, attributes camelCase
    #[default]
    Snake,

    /// Columns are camelCase, attributes snake_case
    Camel,

    /// No conversion in either direction
    Preserve,
}

impl ColumnCase {
    pub fn to_column(&self, attribute: &str) -> String {
        match self {
            ColumnCase::Snake => snake_case(attribute),
            ColumnCase::Camel => camel_case(attribute),
            ColumnCase::Preserve => attribute.to_string(),
        }
    }

    pub fn to_attribute(&self, column: &str) -> String {
        match self {
            ColumnCase::Snake => camel_case(column),
            ColumnCase::Camel => snake_case(column),
            ColumnCase::Preserve => column.to_string(),
        }
    }
}

type NameFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Pluralization and singularization used for table-name derivation.
///
/// The default is a minimal suffix-rule heuristic and is documented as
/// best-effort; callers needing real linguistics supply their own
/// functions (or use [`NameResolver::linguistic`]) without touching any
/// other component.
#[derive(Clone)]
pub struct NameResolver {
    pluralize: NameFn,
    singularize: NameFn,
}

impl NameResolver {
    pub fn new(
        pluralize: impl Fn(&str) -> String + Send + Sync + 'static,
        singularize: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            pluralize: Arc::new(pluralize),
            singularize: Arc::new(singularize),
        }
    }

    /// A resolver backed by the `pluralizer` crate's inflection rules.
    pub fn linguistic() -> Self {
        Self::new(
            |word| pluralizer::pluralize(word, 2, false),
            |word| pluralizer::pluralize(word, 1, false),
        )
    }

    pub fn pluralize(&self, word: &str) -> String {
        (self.pluralize)(word)
    }

    pub fn singularize(&self, word: &str) -> String {
        (self.singularize)(word)
    }
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new(default_pluralize, default_singularize)
    }
}

impl fmt::Debug for NameResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameResolver").finish_non_exhaustive()
    }
}

fn default_pluralize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix('y') {
        return format!("{stem}ies");
    }
    if word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh")
    {
        return format!("{word}es");
    }
    format!("{word}s")
}

fn default_singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if let Some(stem) = word.strip_suffix("es") {
        if stem.ends_with('s')
            || stem.ends_with('x')
            || stem.ends_with('z')
            || stem.ends_with("ch")
            || stem.ends_with("sh")
        {
            return stem.to_string();
        }
    }
    if word.ends_with("ss") {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix('s') {
        return stem.to_string();
    }
    word.to_string()
}
