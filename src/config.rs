use std::env;
use std::path::PathBuf;

const DEFAULT_TITLE: &str = "Поиск терминала";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("widget binding `{role}` is blank")]
    BlankBinding { role: &'static str },
    #[error("widget bindings `{first}` and `{second}` share the id `{id}`")]
    DuplicateBinding {
        first: &'static str,
        second: &'static str,
        id: String,
    },
}

/// Ids of the four UI areas the search widget drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetBindings {
    query_input: String,
    suggestions: String,
    result: String,
    clear_button: String,
}

impl WidgetBindings {
    pub fn new(
        query_input: impl Into<String>,
        suggestions: impl Into<String>,
        result: impl Into<String>,
        clear_button: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let bindings = Self {
            query_input: query_input.into(),
            suggestions: suggestions.into(),
            result: result.into(),
            clear_button: clear_button.into(),
        };
        bindings.validate()?;
        Ok(bindings)
    }

    fn roles(&self) -> [(&'static str, &str); 4] {
        [
            ("query_input", &self.query_input),
            ("suggestions", &self.suggestions),
            ("result", &self.result),
            ("clear_button", &self.clear_button),
        ]
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let roles = self.roles();
        for (i, &(role, id)) in roles.iter().enumerate() {
            if id.trim().is_empty() {
                return Err(ConfigError::BlankBinding { role });
            }
            if let Some(&(other, _)) = roles[..i].iter().find(|&&(_, other_id)| other_id == id) {
                return Err(ConfigError::DuplicateBinding {
                    first: other,
                    second: role,
                    id: id.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn query_input(&self) -> &str {
        &self.query_input
    }

    pub fn suggestions(&self) -> &str {
        &self.suggestions
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn clear_button(&self) -> &str {
        &self.clear_button
    }
}

impl Default for WidgetBindings {
    fn default() -> Self {
        Self {
            query_input: "search".to_string(),
            suggestions: "suggestions".to_string(),
            result: "result".to_string(),
            clear_button: "clearButton".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub bindings: WidgetBindings,
    /// JSON catalog to load; the built-in sample is used when unset.
    pub catalog_path: Option<PathBuf>,
    pub title: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            bindings: WidgetBindings::default(),
            catalog_path: None,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl SearchConfig {
    /// Read settings from the environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                tracing::warn!(error = %err, "failed to read .env file");
            }
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = WidgetBindings::default();
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let bindings = WidgetBindings::new(
            var("TERMINAL_CATALOG_INPUT_ID", defaults.query_input()),
            var("TERMINAL_CATALOG_SUGGESTIONS_ID", defaults.suggestions()),
            var("TERMINAL_CATALOG_RESULT_ID", defaults.result()),
            var("TERMINAL_CATALOG_CLEAR_ID", defaults.clear_button()),
        )?;

        let catalog_path = lookup("TERMINAL_CATALOG_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bindings,
            catalog_path,
            title: var("TERMINAL_CATALOG_TITLE", DEFAULT_TITLE),
        })
    }
}
