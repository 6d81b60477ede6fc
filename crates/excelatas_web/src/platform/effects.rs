use engine_logging::{engine_debug, engine_error, engine_info, engine_warn};
use excelatas_core::{Effect, FormKind, Msg, RenameReply, SubmissionId};
use excelatas_engine::GENERIC_FAILURE;
use wasm_bindgen_futures::spawn_local;

use super::app::AppHandle;
use super::{download, form_data};
use crate::outcome::{failure, outcome_to_msg};

pub(crate) fn run(app: &AppHandle, effect: Effect) {
    match effect {
        Effect::Submit {
            form,
            submission_id,
        } => {
            let app = app.clone();
            spawn_local(async move {
                let msg = submit(&app, form, submission_id).await;
                if app.latest_submission(form) != Some(submission_id) {
                    engine_warn!(
                        "{:?} submission {} superseded by {:?}; applying its result anyway",
                        form,
                        submission_id,
                        app.latest_submission(form)
                    );
                }
                app.dispatch(msg);
            });
        }
        Effect::TriggerDownload {
            submission_id,
            filename,
            bytes,
        } => {
            let msg = match download::trigger(app.page().document(), &filename, &bytes) {
                Ok(()) => {
                    engine_info!(
                        "Download {} started for submission {} ({} bytes)",
                        filename,
                        submission_id,
                        bytes.len()
                    );
                    Msg::DownloadTriggered {
                        submission_id,
                        filename,
                    }
                }
                Err(err) => {
                    engine_error!("Download {} failed: {:?}", filename, err);
                    failure(FormKind::Extract, submission_id, GENERIC_FAILURE)
                }
            };
            app.dispatch(msg);
        }
    }
}

async fn submit(app: &AppHandle, form: FormKind, submission_id: SubmissionId) -> Msg {
    let element = app.page().form(form).form.clone();
    let submission = match form_data::read_form(&element).await {
        Ok(submission) => submission,
        Err(err) => {
            engine_error!("Reading {:?} form failed: {:?}", form, err);
            return failure(form, submission_id, GENERIC_FAILURE);
        }
    };

    engine_info!(
        "Submitting {:?} #{} to {} with {} part(s)",
        form,
        submission_id,
        form.endpoint(),
        submission.part_count()
    );
    let outcome = app.submitter().submit(form.endpoint(), submission).await;
    if let Err(err) = &outcome {
        engine_warn!("{:?} submission {} failed: {}", form, submission_id, err);
    }

    let msg = outcome_to_msg(form, submission_id, outcome);
    match &msg {
        Msg::RenameResponded {
            reply: RenameReply::Batch(entries),
            ..
        } => engine_info!("Rename #{} returned {} suggestion(s)", submission_id, entries.len()),
        Msg::SubmissionFailed { message, .. } => {
            engine_debug!("{:?} #{} shows error: {}", form, submission_id, message)
        }
        _ => {}
    }
    msg
}
