//! Turns a finished submission into the message the core understands.

use excelatas_core::{EntryOutcome, FormKind, Msg, RenameReply, ReplyEntry, SubmissionId};
use excelatas_engine::{
    decode_rename_response, RenameResponse, SubmitError, SubmitOutput, Suggestion,
    SuggestionOutcome,
};

/// Maps the submitter's result for `form` to a [`Msg`].
///
/// Every failure, including a rename body of neither shape, becomes
/// `SubmissionFailed` carrying the text the user should see.
pub fn outcome_to_msg(
    form: FormKind,
    submission_id: SubmissionId,
    outcome: Result<SubmitOutput, SubmitError>,
) -> Msg {
    let output = match outcome {
        Ok(output) => output,
        Err(err) => return failure(form, submission_id, &err.user_message()),
    };

    match form {
        FormKind::Extract => Msg::ExtractResponded {
            submission_id,
            body: output.body.to_vec(),
            content_disposition: output.content_disposition,
        },
        FormKind::Rename => match decode_rename_response(&output.body) {
            Ok(response) => Msg::RenameResponded {
                submission_id,
                reply: map_reply(response),
            },
            Err(err) => failure(form, submission_id, &err.user_message()),
        },
    }
}

pub fn failure(form: FormKind, submission_id: SubmissionId, message: &str) -> Msg {
    Msg::SubmissionFailed {
        form,
        submission_id,
        message: message.to_string(),
    }
}

pub fn map_reply(response: RenameResponse) -> RenameReply {
    match response {
        RenameResponse::Single(suggestion) => RenameReply::Single(map_entry(suggestion)),
        RenameResponse::Batch(suggestions) => {
            RenameReply::Batch(suggestions.into_iter().map(map_entry).collect())
        }
    }
}

fn map_entry(suggestion: Suggestion) -> ReplyEntry {
    let outcome = match suggestion.outcome {
        SuggestionOutcome::Renamed {
            suggested_name,
            minutes_number,
            unit_code,
        } => EntryOutcome::Renamed {
            suggested_name,
            minutes_number,
            unit_code,
        },
        SuggestionOutcome::Failed { error } => EntryOutcome::Failed { error },
    };
    ReplyEntry {
        original_filename: suggestion.original_filename,
        outcome,
    }
}
