//! User-facing strings shown by the page.

pub const DEFAULT_DOWNLOAD_NAME: &str = "Relatorio.xlsx";
pub const DEFAULT_FILE_LABEL: &str = "Nenhum arquivo selecionado";

pub const EXTRACT_PENDING: &str = "Processando PDF...";
pub const RENAME_PENDING_SINGLE: &str = "Lendo metadados do PDF...";
pub const RENAME_PENDING_MULTI: &str = "Lendo metadados dos PDFs...";

pub const SUGGESTIONS_HEADING: &str = "Sugestões de nomes:";
pub const SINGLE_SUGGESTION_LEAD: &str = "Novo nome sugerido:";

pub fn extract_success(filename: &str) -> String {
    format!("Relatório gerado com sucesso: {filename}")
}

pub fn files_selected(count: usize) -> String {
    format!("{count} arquivos selecionados")
}

pub fn badge(minutes_number: &str, unit_code: &str) -> String {
    format!("Ata {minutes_number} • UG {unit_code}")
}
