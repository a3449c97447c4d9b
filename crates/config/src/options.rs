use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The unified options record consumed by the formatting engine.
///
/// Every field is optional: absence means "the engine picks its default", not
/// a synthesized value. Unknown keys survive parsing in [`extra`] so the
/// validator can reject retired option names regardless of their value.
///
/// [`extra`]: FormatOptions::extra
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatOptions {
    /// SQL dialect identifier (e.g. "postgresql", "mysql")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Casing applied to keywords
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_case: Option<String>,
    /// Casing applied to data type names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type_case: Option<String>,
    /// Casing applied to function names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_case: Option<String>,
    /// Casing applied to identifiers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_case: Option<String>,
    /// Indentation style name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_style: Option<String>,
    /// Where newlines go around AND/OR
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logical_operator_newline: Option<String>,
    /// Maximum expression width; must be strictly positive when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression_width: Option<i64>,
    /// Blank lines between statements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines_between_queries: Option<u32>,
    /// Omit spaces around operators
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dense_operators: Option<bool>,
    /// Put the statement terminator on its own line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newline_before_semicolon: Option<bool>,
    /// Placeholder substitution values, by position or by name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<ParamsConfig>,
    /// Placeholder recognition configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param_types: Option<ParamTypesConfig>,
    /// Width of one indentation level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_width: Option<u32>,
    /// Indent with tabs instead of spaces
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_tabs: Option<bool>,
    /// Keys this record does not model, kept verbatim from the source document
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Placeholder values: positional placeholders take a list, named
/// placeholders take a mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamsConfig {
    /// Values for positional placeholders, in order
    List(Vec<Value>),
    /// Values for named placeholders
    Map(Map<String, Value>),
}

impl ParamsConfig {
    /// All placeholder values, shape-independent.
    pub fn values(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
        match self {
            Self::List(items) => Box::new(items.iter()),
            Self::Map(entries) => Box::new(entries.values()),
        }
    }
}

/// Which placeholder syntaxes the engine should recognize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParamTypesConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positional: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numbered: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quoted: Option<Vec<String>>,
    /// User-supplied placeholder patterns; each regex must be non-empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<Vec<CustomParamType>>,
}

/// One user-supplied placeholder pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomParamType {
    pub regex: String,
}

/// Resolved indentation for one formatting request.
///
/// Derived from exactly one source per invocation: either the override
/// settings or the ambient editor preferences, never a field-by-field mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentationConfig {
    /// Width of one indentation level; overrides are trusted as-is, so an
    /// absent override stays absent
    pub tab_width: Option<u32>,
    /// Indent with tabs instead of spaces
    pub use_tabs: bool,
}
