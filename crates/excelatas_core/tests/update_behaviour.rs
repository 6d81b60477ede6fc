use std::sync::Once;

use excelatas_core::{
    update, AppState, Effect, FormKind, Msg, PageVariant, RenameReply, ReplyEntry, StatusContent,
    StatusTone, StatusView, SuggestionRow,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn submit(state: AppState, form: FormKind) -> (AppState, u64) {
    let (state, effects) = update(state, Msg::FormSubmitted(form));
    let submission_id = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::Submit {
                form: f,
                submission_id,
            } if *f == form => Some(*submission_id),
            _ => None,
        })
        .expect("submit effect");
    (state, submission_id)
}

fn text_status(tone: StatusTone, text: &str) -> Option<StatusView> {
    Some(StatusView {
        tone,
        content: StatusContent::Text(text.to_string()),
    })
}

#[test]
fn submit_sets_pending_before_network_effect() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::FormSubmitted(FormKind::Extract));

    assert_eq!(
        effects,
        vec![Effect::Submit {
            form: FormKind::Extract,
            submission_id: 1,
        }]
    );
    assert_eq!(
        state.view().extract.status,
        text_status(StatusTone::Pending, "Processando PDF...")
    );
    assert_eq!(state.view().rename.status, None);
    assert!(state.consume_dirty());
}

#[test]
fn extraction_downloads_with_header_name_then_reports_success() {
    init_logging();
    let (state, id) = submit(AppState::new(), FormKind::Extract);

    let (state, effects) = update(
        state,
        Msg::ExtractResponded {
            submission_id: id,
            body: b"PK\x03\x04".to_vec(),
            content_disposition: Some("attachment; filename=\"Relatorio_atas.xlsx\"".to_string()),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::TriggerDownload {
            submission_id: id,
            filename: "Relatorio_atas.xlsx".to_string(),
            bytes: b"PK\x03\x04".to_vec(),
        }]
    );
    // Still pending until the download is confirmed.
    assert_eq!(
        state.view().extract.status,
        text_status(StatusTone::Pending, "Processando PDF...")
    );

    let (state, effects) = update(
        state,
        Msg::DownloadTriggered {
            submission_id: id,
            filename: "Relatorio_atas.xlsx".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(
        state.view().extract.status,
        text_status(
            StatusTone::Success,
            "Relatório gerado com sucesso: Relatorio_atas.xlsx"
        )
    );
}

#[test]
fn extraction_without_header_uses_default_name() {
    init_logging();
    let (state, id) = submit(AppState::new(), FormKind::Extract);
    let (_state, effects) = update(
        state,
        Msg::ExtractResponded {
            submission_id: id,
            body: Vec::new(),
            content_disposition: None,
        },
    );
    assert!(matches!(
        effects.as_slice(),
        [Effect::TriggerDownload { filename, .. }] if filename == "Relatorio.xlsx"
    ));
}

#[test]
fn failure_shows_message_as_error() {
    init_logging();
    let (state, id) = submit(AppState::new(), FormKind::Extract);
    let (state, effects) = update(
        state,
        Msg::SubmissionFailed {
            form: FormKind::Extract,
            submission_id: id,
            message: "Nenhum item de CRO/2 foi encontrado no PDF enviado.".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(
        state.view().extract.status,
        text_status(
            StatusTone::Error,
            "Nenhum item de CRO/2 foi encontrado no PDF enviado."
        )
    );
}

#[test]
fn form_is_reusable_after_error() {
    init_logging();
    let (state, id) = submit(AppState::new(), FormKind::Rename);
    let (state, _) = update(
        state,
        Msg::SubmissionFailed {
            form: FormKind::Rename,
            submission_id: id,
            message: "Falha no processamento.".to_string(),
        },
    );
    let (state, next_id) = submit(state, FormKind::Rename);
    assert_eq!(next_id, id + 1);
    assert_eq!(
        state.view().rename.status,
        text_status(StatusTone::Pending, "Lendo metadados dos PDFs...")
    );
}

#[test]
fn rename_pending_text_depends_on_variant() {
    init_logging();
    let (state, _) = submit(AppState::with_variant(PageVariant::Single), FormKind::Rename);
    assert_eq!(
        state.view().rename.status,
        text_status(StatusTone::Pending, "Lendo metadados do PDF...")
    );
}

#[test]
fn batch_reply_renders_one_row_per_entry() {
    init_logging();
    let (state, id) = submit(AppState::new(), FormKind::Rename);
    let reply = RenameReply::Batch(vec![
        ReplyEntry::renamed("scan01.pdf", "ATA_12-2024_UG_160491.pdf", "12/2024", "160491"),
        ReplyEntry::failed(
            "scan02.pdf",
            "Não foi possível identificar número da ata e UG no arquivo.",
        ),
    ]);

    let (state, effects) = update(
        state,
        Msg::RenameResponded {
            submission_id: id,
            reply,
        },
    );
    assert!(effects.is_empty());

    let status = state.view().rename.status.expect("status");
    assert_eq!(status.tone, StatusTone::Success);
    let StatusContent::SuggestionList { heading, rows } = status.content else {
        panic!("expected a suggestion list");
    };
    assert_eq!(heading, "Sugestões de nomes:");
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0].to_string(),
        "scan01.pdf → ATA_12-2024_UG_160491.pdf (Ata 12/2024 • UG 160491)"
    );
    assert_eq!(
        rows[1].to_string(),
        "scan02.pdf: Não foi possível identificar número da ata e UG no arquivo."
    );
}

#[test]
fn empty_batch_still_renders_a_list() {
    init_logging();
    let (state, id) = submit(AppState::new(), FormKind::Rename);
    let (state, _) = update(
        state,
        Msg::RenameResponded {
            submission_id: id,
            reply: RenameReply::Batch(Vec::new()),
        },
    );
    assert_eq!(
        state.view().rename.status,
        Some(StatusView::success(StatusContent::SuggestionList {
            heading: "Sugestões de nomes:".to_string(),
            rows: Vec::new(),
        }))
    );
}

#[test]
fn single_reply_renders_one_block() {
    init_logging();
    let (state, id) = submit(AppState::with_variant(PageVariant::Single), FormKind::Rename);
    let (state, _) = update(
        state,
        Msg::RenameResponded {
            submission_id: id,
            reply: RenameReply::Single(ReplyEntry::renamed(
                "x.pdf",
                "ATA_3-2023_UG_160491.pdf",
                "3/2023",
                "160491",
            )),
        },
    );
    assert_eq!(
        state.view().rename.status,
        Some(StatusView::success(StatusContent::SingleSuggestion {
            lead: "Novo nome sugerido:".to_string(),
            suggested_name: "ATA_3-2023_UG_160491.pdf".to_string(),
            badge: "Ata 3/2023 • UG 160491".to_string(),
        }))
    );
}

#[test]
fn single_reply_with_error_is_an_error_status() {
    init_logging();
    let (state, id) = submit(AppState::with_variant(PageVariant::Single), FormKind::Rename);
    let (state, _) = update(
        state,
        Msg::RenameResponded {
            submission_id: id,
            reply: RenameReply::Single(ReplyEntry::failed("x.pdf", "sem metadados")),
        },
    );
    assert_eq!(
        state.view().rename.status,
        text_status(StatusTone::Error, "sem metadados")
    );
}

#[test]
fn forms_keep_disjoint_status_regions() {
    init_logging();
    let (state, extract_id) = submit(AppState::new(), FormKind::Extract);
    let (state, rename_id) = submit(state, FormKind::Rename);
    assert_ne!(extract_id, rename_id);

    let (state, _) = update(
        state,
        Msg::SubmissionFailed {
            form: FormKind::Rename,
            submission_id: rename_id,
            message: "Faça login para continuar.".to_string(),
        },
    );
    assert_eq!(
        state.view().extract.status,
        text_status(StatusTone::Pending, "Processando PDF...")
    );
    assert_eq!(
        state.view().rename.status,
        text_status(StatusTone::Error, "Faça login para continuar.")
    );
}

#[test]
fn last_resolving_submission_wins() {
    init_logging();
    let (state, first) = submit(AppState::new(), FormKind::Rename);
    let (state, second) = submit(state, FormKind::Rename);
    assert_eq!(state.latest_submission(FormKind::Rename), Some(second));

    // The newer request resolves first, the older one last.
    let (state, _) = update(
        state,
        Msg::RenameResponded {
            submission_id: second,
            reply: RenameReply::Batch(vec![ReplyEntry::renamed("b.pdf", "B.pdf", "2/2024", "1")]),
        },
    );
    let (state, _) = update(
        state,
        Msg::SubmissionFailed {
            form: FormKind::Rename,
            submission_id: first,
            message: "Falha no processamento.".to_string(),
        },
    );

    assert_eq!(
        state.view().rename.status,
        text_status(StatusTone::Error, "Falha no processamento.")
    );
    assert_eq!(state.latest_submission(FormKind::Rename), Some(second));
}

#[test]
fn suggestion_row_prefers_error_text() {
    let row = SuggestionRow::from(&ReplyEntry::failed("a.pdf", "erro"));
    assert_eq!(
        row,
        SuggestionRow::Failed {
            original: "a.pdf".to_string(),
            error: "erro".to_string(),
        }
    );
}

#[test]
fn dirty_flag_is_reported_once_per_change() {
    init_logging();
    let (mut state, _) = submit(AppState::new(), FormKind::Rename);
    let before = state.view();

    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
    assert_eq!(state.view(), before);

    let (mut state, _) = update(
        state,
        Msg::SubmissionFailed {
            form: FormKind::Rename,
            submission_id: 1,
            message: "Falha no processamento.".to_string(),
        },
    );
    assert!(state.consume_dirty());
}
