use std::{borrow::Cow, sync::OnceLock};

use regex::{Captures, Regex};

/// Matches `{{ env.VAR }}` and `{{ env.VAR | default("fallback") }}`
fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([a-zA-Z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#).expect("must be valid regex")
    })
}

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// A `default("...")` filter supplies the value when the variable is unset.
/// Lines starting with `#` are left untouched so commented-out settings never
/// require their variables to exist.
pub fn expand_env(input: &str) -> Result<String, String> {
    let lines = input
        .split_inclusive('\n')
        .map(expand_line)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(lines.concat())
}

fn expand_line(line: &str) -> Result<Cow<'_, str>, String> {
    if line.trim_start().starts_with('#') {
        return Ok(Cow::Borrowed(line));
    }

    let mut failure = None;
    let expanded = placeholder().replace_all(line, |captures: &Captures<'_>| {
        let default = captures.get(2).map(|m| m.as_str());
        resolve(&captures[1], default).unwrap_or_else(|e| {
            failure.get_or_insert(e);
            String::new()
        })
    });

    match failure {
        Some(e) => Err(e),
        None => Ok(expanded),
    }
}

fn resolve(key: &str, default: Option<&str>) -> Result<String, String> {
    let Some(var_name) = key.strip_prefix("env.").filter(|name| !name.contains('.')) else {
        return Err(format!("only variables scoped with 'env.' are supported: `{key}`"));
    };

    match (std::env::var(var_name), default) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(default)) => Ok(default.to_owned()),
        (Err(_), None) => Err(format!("environment variable not found: `{var_name}`")),
    }
}

/// Read an environment variable, treating blank values as unset
pub fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_without_placeholders_is_unchanged() {
        let input = "[storage]\nbucket = \"voice-files\"\n";
        assert_eq!(expand_env(input).unwrap(), input);
    }

    #[test]
    fn expands_bucket_and_key() {
        let vars = [("VOX_BUCKET", Some("voice-files")), ("VOX_KEY", Some("sk-test"))];
        temp_env::with_vars(vars, || {
            let input = "bucket = \"{{ env.VOX_BUCKET }}\"\napi_key = \"{{env.VOX_KEY}}\"";
            let result = expand_env(input).unwrap();
            assert_eq!(result, "bucket = \"voice-files\"\napi_key = \"sk-test\"");
        });
    }

    #[test]
    fn several_placeholders_on_one_line() {
        let vars = [("VOX_HOST", Some("localhost")), ("VOX_PORT", Some("9000"))];
        temp_env::with_vars(vars, || {
            let result = expand_env("endpoint = \"http://{{ env.VOX_HOST }}:{{ env.VOX_PORT }}\"").unwrap();
            assert_eq!(result, "endpoint = \"http://localhost:9000\"");
        });
    }

    #[test]
    fn missing_variable_is_reported_by_name() {
        temp_env::with_var_unset("VOX_MISSING", || {
            let err = expand_env("bucket = \"{{ env.VOX_MISSING }}\"").unwrap_err();
            assert!(err.contains("VOX_MISSING"));
        });
    }

    #[test]
    fn only_env_scope_is_supported() {
        let err = expand_env("bucket = \"{{ secrets.BUCKET }}\"").unwrap_err();
        assert!(err.contains("only variables scoped with 'env.'"));

        let err = expand_env("bucket = \"{{ env.A.B }}\"").unwrap_err();
        assert!(err.contains("only variables scoped with 'env.'"));
    }

    #[test]
    fn comment_lines_are_not_expanded() {
        temp_env::with_var_unset("VOX_MISSING", || {
            let input = "# api_key = \"{{ env.VOX_MISSING }}\"\n    # bucket = \"{{ env.VOX_MISSING }}\"\n";
            assert_eq!(expand_env(input).unwrap(), input);
        });
    }

    #[test]
    fn default_applies_only_when_unset() {
        temp_env::with_var_unset("VOX_REGION", || {
            let result = expand_env("region = \"{{ env.VOX_REGION | default(\"us-east-1\") }}\"").unwrap();
            assert_eq!(result, "region = \"us-east-1\"");
        });

        temp_env::with_var("VOX_REGION", Some("eu-west-1"), || {
            let result = expand_env("region = \"{{ env.VOX_REGION | default(\"us-east-1\") }}\"").unwrap();
            assert_eq!(result, "region = \"eu-west-1\"");
        });
    }

    #[test]
    fn empty_default_is_allowed() {
        temp_env::with_var_unset("VOX_OPTIONAL", || {
            let result = expand_env("model = \"{{ env.VOX_OPTIONAL | default(\"\") }}\"").unwrap();
            assert_eq!(result, "model = \"\"");
        });
    }

    #[test]
    fn trailing_newline_is_preserved() {
        temp_env::with_var("VOX_BUCKET", Some("b"), || {
            assert_eq!(expand_env("bucket = \"{{ env.VOX_BUCKET }}\"\n").unwrap(), "bucket = \"b\"\n");
        });
    }

    #[test]
    fn blank_variables_count_as_unset() {
        temp_env::with_var("VOX_BLANK", Some("   "), || {
            assert_eq!(non_empty_var("VOX_BLANK"), None);
        });
        temp_env::with_var("VOX_SET", Some(" voice-files "), || {
            assert_eq!(non_empty_var("VOX_SET").as_deref(), Some("voice-files"));
        });
    }
}
