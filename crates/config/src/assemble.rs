use tracing::trace;

use crate::notify::NotificationSink;
use crate::options::{FormatOptions, IndentationConfig};
use crate::settings::{lookup, EditorIndentation, SettingsSource};
use crate::validate::{validate, ConfigError};

/// Sentinel dialect value meaning "use whatever was detected from the file
/// content".
pub const AUTO_DETECT_DIALECT: &str = "auto-detect";

/// Decide where indentation comes from: explicit override settings or the
/// ambient editor preferences. Exactly one source wins; override values are
/// trusted as-is, including absence.
pub fn resolve_indentation(
    settings: &dyn SettingsSource,
    editor: &EditorIndentation,
) -> IndentationConfig {
    let ignore_tab_settings: bool = lookup(settings, "ignoreTabSettings").unwrap_or(false);

    if ignore_tab_settings {
        IndentationConfig {
            tab_width: lookup(settings, "tabSizeOverride"),
            use_tabs: !lookup::<bool>(settings, "insertSpacesOverride").unwrap_or(false),
        }
    } else {
        IndentationConfig {
            tab_width: Some(editor.tab_size),
            use_tabs: !editor.insert_spaces,
        }
    }
}

/// Build the complete options record from the host's settings.
///
/// The dialect comes from the `dialect` setting unless it is the
/// auto-detect sentinel (or absent, which the host's default makes
/// equivalent), in which case `detected_dialect` wins. Every other field is
/// a direct lookup under its camelCase name; an absent setting stays absent
/// in the output, since defaulting belongs to the formatting engine.
///
/// The result is unvalidated; see [`assemble_validated`] for the checked
/// entry point.
pub fn assemble(
    settings: &dyn SettingsSource,
    editor: &EditorIndentation,
    detected_dialect: &str,
) -> FormatOptions {
    let indentation = resolve_indentation(settings, editor);

    let language = match lookup::<String>(settings, "dialect") {
        Some(dialect) if dialect != AUTO_DETECT_DIALECT => dialect,
        _ => detected_dialect.to_string(),
    };
    trace!("Assembling format options for dialect: {language}");

    FormatOptions {
        language: Some(language),
        keyword_case: lookup(settings, "keywordCase"),
        data_type_case: lookup(settings, "dataTypeCase"),
        function_case: lookup(settings, "functionCase"),
        identifier_case: lookup(settings, "identifierCase"),
        indent_style: lookup(settings, "indentStyle"),
        logical_operator_newline: lookup(settings, "logicalOperatorNewline"),
        expression_width: lookup(settings, "expressionWidth"),
        lines_between_queries: lookup(settings, "linesBetweenQueries"),
        dense_operators: lookup(settings, "denseOperators"),
        newline_before_semicolon: lookup(settings, "newlineBeforeSemicolon"),
        param_types: lookup(settings, "paramTypes"),
        tab_width: indentation.tab_width,
        use_tabs: Some(indentation.use_tabs),
        ..Default::default()
    }
}

/// Assemble and immediately validate.
///
/// Settings-derived records historically skipped validation, which lets a
/// host set e.g. `expressionWidth` to 0 unnoticed. New callers should go
/// through here; [`assemble`] stays for the unchecked path.
pub fn assemble_validated(
    settings: &dyn SettingsSource,
    editor: &EditorIndentation,
    detected_dialect: &str,
    sink: &dyn NotificationSink,
) -> Result<FormatOptions, ConfigError> {
    let options = assemble(settings, editor, detected_dialect);
    validate(&options, sink)?;
    Ok(options)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;
    use crate::notify::LogSink;
    use crate::settings::JsonSettings;

    const EDITOR: EditorIndentation = EditorIndentation {
        tab_size: 4,
        insert_spaces: true,
    };

    fn settings(value: Value) -> JsonSettings {
        match value {
            Value::Object(entries) => JsonSettings::new(entries),
            _ => unreachable!("test settings must be a JSON object"),
        }
    }

    #[test]
    fn overrides_win_when_tab_settings_are_ignored() {
        let source = settings(json!({
            "ignoreTabSettings": true,
            "tabSizeOverride": 2,
            "insertSpacesOverride": false,
        }));
        let ambient = EditorIndentation {
            tab_size: 8,
            insert_spaces: true,
        };

        assert_eq!(
            resolve_indentation(&source, &ambient),
            IndentationConfig {
                tab_width: Some(2),
                use_tabs: true,
            }
        );
    }

    #[test]
    fn ambient_preferences_win_by_default() {
        let source = settings(json!({
            "tabSizeOverride": 2,
            "insertSpacesOverride": false,
        }));

        assert_eq!(
            resolve_indentation(&source, &EDITOR),
            IndentationConfig {
                tab_width: Some(4),
                use_tabs: false,
            }
        );
    }

    #[test]
    fn absent_overrides_are_trusted_as_is() {
        let source = settings(json!({ "ignoreTabSettings": true }));

        assert_eq!(
            resolve_indentation(&source, &EDITOR),
            IndentationConfig {
                tab_width: None,
                use_tabs: true,
            }
        );
    }

    #[test]
    fn auto_detect_dialect_uses_the_detected_one() {
        let source = settings(json!({ "dialect": "auto-detect" }));
        let options = assemble(&source, &EDITOR, "postgresql");
        assert_eq!(options.language.as_deref(), Some("postgresql"));
    }

    #[test]
    fn explicit_dialect_wins_over_detection() {
        let source = settings(json!({ "dialect": "mysql" }));
        let options = assemble(&source, &EDITOR, "postgresql");
        assert_eq!(options.language.as_deref(), Some("mysql"));
    }

    #[test]
    fn absent_dialect_falls_back_to_detection() {
        let options = assemble(&settings(json!({})), &EDITOR, "sqlite");
        assert_eq!(options.language.as_deref(), Some("sqlite"));
    }

    #[test]
    fn absent_settings_stay_absent() {
        let options = assemble(&settings(json!({})), &EDITOR, "sql");

        assert_eq!(options.keyword_case, None);
        assert_eq!(options.expression_width, None);
        assert_eq!(options.param_types, None);
        // Indentation is the one merged-in piece.
        assert_eq!(options.tab_width, Some(4));
        assert_eq!(options.use_tabs, Some(false));
    }

    #[test]
    fn settings_populate_their_fields() {
        let source = settings(json!({
            "keywordCase": "upper",
            "identifierCase": "lower",
            "expressionWidth": 50,
            "linesBetweenQueries": 2,
            "denseOperators": true,
            "paramTypes": { "custom": [{ "regex": "%\\w+" }] },
        }));
        let options = assemble(&source, &EDITOR, "sql");

        assert_eq!(options.keyword_case.as_deref(), Some("upper"));
        assert_eq!(options.identifier_case.as_deref(), Some("lower"));
        assert_eq!(options.expression_width, Some(50));
        assert_eq!(options.lines_between_queries, Some(2));
        assert_eq!(options.dense_operators, Some(true));
        let custom = options.param_types.unwrap().custom.unwrap();
        assert_eq!(custom.len(), 1);
        assert_eq!(custom[0].regex, "%\\w+");
    }

    #[test]
    fn assemble_validated_catches_what_assemble_lets_through() {
        let source = settings(json!({ "expressionWidth": 0 }));

        assert_eq!(assemble(&source, &EDITOR, "sql").expression_width, Some(0));
        assert_eq!(
            assemble_validated(&source, &EDITOR, "sql", &LogSink).unwrap_err(),
            ConfigError::NonPositiveExpressionWidth { value: 0 }
        );
    }
}
