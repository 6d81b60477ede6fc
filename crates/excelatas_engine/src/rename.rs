use serde::Deserialize;
use serde_json::Value;

use crate::{SubmitError, GENERIC_FAILURE};

/// The rename endpoint's answer, with its shape decided once here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameResponse {
    /// A bare `{ arquivo_original, novo_nome, numero_ata, ug }` object.
    Single(Suggestion),
    /// `{ "sugestoes": [...] }`, in server order.
    Batch(Vec<Suggestion>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub original_filename: String,
    pub outcome: SuggestionOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionOutcome {
    Renamed {
        suggested_name: String,
        minutes_number: String,
        unit_code: String,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug, Default, Deserialize)]
struct WireSuggestion {
    #[serde(default)]
    arquivo_original: Option<String>,
    #[serde(default)]
    novo_nome: Option<String>,
    #[serde(default)]
    numero_ata: Option<String>,
    #[serde(default)]
    ug: Option<String>,
    #[serde(default)]
    erro: Option<String>,
}

impl WireSuggestion {
    fn is_blank(&self) -> bool {
        self.arquivo_original.is_none() && self.novo_nome.is_none() && self.erro.is_none()
    }
}

impl From<WireSuggestion> for Suggestion {
    fn from(wire: WireSuggestion) -> Self {
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());
        // An entry carrying `erro` is a failure even if it also names a file.
        let outcome = match (non_empty(wire.erro), non_empty(wire.novo_nome)) {
            (Some(error), _) => SuggestionOutcome::Failed { error },
            (None, Some(suggested_name)) => SuggestionOutcome::Renamed {
                suggested_name,
                minutes_number: wire.numero_ata.unwrap_or_default(),
                unit_code: wire.ug.unwrap_or_default(),
            },
            (None, None) => SuggestionOutcome::Failed {
                error: GENERIC_FAILURE.to_string(),
            },
        };
        Suggestion {
            original_filename: wire.arquivo_original.unwrap_or_default(),
            outcome,
        }
    }
}

/// Decodes a successful rename body into [`RenameResponse`].
///
/// A `sugestoes` key selects the list shape (`null` counts as empty). Any
/// other object is a single suggestion, unless it carries none of the
/// suggestion fields, which counts as an empty list.
pub fn decode_rename_response(body: &[u8]) -> Result<RenameResponse, SubmitError> {
    let value: Value = serde_json::from_slice(body).map_err(invalid_body)?;
    let Value::Object(mut map) = value else {
        return Err(SubmitError::InvalidBody("expected a JSON object".to_string()));
    };

    if let Some(list) = map.remove("sugestoes") {
        let items: Vec<WireSuggestion> = if list.is_null() {
            Vec::new()
        } else {
            serde_json::from_value(list).map_err(invalid_body)?
        };
        return Ok(RenameResponse::Batch(
            items.into_iter().map(Suggestion::from).collect(),
        ));
    }

    let single: WireSuggestion = serde_json::from_value(Value::Object(map)).map_err(invalid_body)?;
    // An object with no suggestion fields reads as an empty list.
    if single.is_blank() {
        return Ok(RenameResponse::Batch(Vec::new()));
    }
    Ok(RenameResponse::Single(single.into()))
}

fn invalid_body(err: serde_json::Error) -> SubmitError {
    SubmitError::InvalidBody(err.to_string())
}
