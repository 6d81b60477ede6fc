use crate::texts::DEFAULT_DOWNLOAD_NAME;

/// Resolves the report's download name from a `Content-Disposition` value.
///
/// Takes whatever follows the first `filename=`, up to the closing quote (or
/// the next `;` when unquoted), with quotes stripped. Falls back to
/// `Relatorio.xlsx` when the header is missing or yields an empty name.
pub fn download_filename(content_disposition: Option<&str>) -> String {
    content_disposition
        .and_then(|value| value.split_once("filename="))
        .map(|(_, rest)| {
            let rest = rest.trim_start();
            let raw = match rest.strip_prefix('"') {
                Some(quoted) => quoted.split('"').next().unwrap_or(quoted),
                None => rest.split(';').next().unwrap_or(rest),
            };
            raw.replace('"', "").trim().to_string()
        })
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_DOWNLOAD_NAME.to_string())
}
