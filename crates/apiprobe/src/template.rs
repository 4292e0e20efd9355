//! URL template expansion
//!
//! Parameters target literal `[name]` placeholders in the URL template, e.g.
//! `http://api.openweathermap.org/data/2.5/weather?zip=[zip]&appid=[appid]`.

use crate::error::ProbeError;
use std::collections::HashMap;

/// Substitute every supplied parameter into its `[name]` placeholder.
///
/// Each substitution replaces the first occurrence of `[name]` in the
/// then-current string. A parameter whose placeholder is absent fails with
/// [`ProbeError::MissingPlaceholder`]; a partially substituted URL is never
/// returned as a success value.
pub fn expand(template: &str, params: &HashMap<String, String>) -> Result<String, ProbeError> {
    let mut url = template.to_string();

    for (name, value) in params {
        let target = format!("[{name}]");
        match url.find(&target) {
            Some(start) => url.replace_range(start..start + target.len(), value),
            None => {
                return Err(ProbeError::MissingPlaceholder {
                    name: name.clone(),
                })
            }
        }
    }

    Ok(url)
}
