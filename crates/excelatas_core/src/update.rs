use crate::texts;
use crate::view_model::{StatusContent, StatusView, SuggestionRow};
use crate::{
    download_filename, AppState, Effect, EntryOutcome, FormKind, Msg, PageVariant, RenameReply,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::LabelBound { form, default_text } => {
            state.bind_label(form, default_text);
            Vec::new()
        }
        Msg::FilesSelected { form, names } => {
            state.select_files(form, &names);
            Vec::new()
        }
        Msg::FormSubmitted(form) => {
            let submission_id = state.begin_submission(form);
            state.set_status(form, StatusView::pending(pending_text(form, state.variant())));
            vec![Effect::Submit {
                form,
                submission_id,
            }]
        }
        Msg::ExtractResponded {
            submission_id,
            body,
            content_disposition,
        } => {
            // Status stays pending until the platform confirms the download started.
            let filename = download_filename(content_disposition.as_deref());
            vec![Effect::TriggerDownload {
                submission_id,
                filename,
                bytes: body,
            }]
        }
        Msg::DownloadTriggered { filename, .. } => {
            state.set_status(
                FormKind::Extract,
                StatusView::success(StatusContent::Text(texts::extract_success(&filename))),
            );
            Vec::new()
        }
        Msg::RenameResponded { reply, .. } => {
            state.set_status(FormKind::Rename, rename_status(&reply));
            Vec::new()
        }
        Msg::SubmissionFailed { form, message, .. } => {
            state.set_status(form, StatusView::error(message));
            Vec::new()
        }
    };

    (state, effects)
}

fn pending_text(form: FormKind, variant: PageVariant) -> &'static str {
    match (form, variant) {
        (FormKind::Extract, _) => texts::EXTRACT_PENDING,
        (FormKind::Rename, PageVariant::Single) => texts::RENAME_PENDING_SINGLE,
        (FormKind::Rename, PageVariant::Multi) => texts::RENAME_PENDING_MULTI,
    }
}

fn rename_status(reply: &RenameReply) -> StatusView {
    match reply {
        RenameReply::Batch(entries) => StatusView::success(StatusContent::SuggestionList {
            heading: texts::SUGGESTIONS_HEADING.to_string(),
            rows: entries.iter().map(SuggestionRow::from).collect(),
        }),
        RenameReply::Single(entry) => match &entry.outcome {
            EntryOutcome::Renamed {
                suggested_name,
                minutes_number,
                unit_code,
            } => StatusView::success(StatusContent::SingleSuggestion {
                lead: texts::SINGLE_SUGGESTION_LEAD.to_string(),
                suggested_name: suggested_name.clone(),
                badge: texts::badge(minutes_number, unit_code),
            }),
            EntryOutcome::Failed { error } => StatusView::error(error.clone()),
        },
    }
}
