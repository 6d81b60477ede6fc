use excelatas_core::{FormKind, FormView, PageViewModel, StatusContent, StatusView, SuggestionRow};

use super::constants::*;
use super::markup::Node;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomCommand {
    /// Replace a form's status region: class and all children.
    SetStatus {
        form: FormKind,
        class_name: &'static str,
        children: Vec<Node>,
    },
    /// Set the text of a form's bound file-name display.
    SetFileLabel { form: FormKind, text: String },
}

pub fn render(view: &PageViewModel) -> Vec<DomCommand> {
    let mut cmds = Vec::new();
    render_form(FormKind::Extract, &view.extract, &mut cmds);
    render_form(FormKind::Rename, &view.rename, &mut cmds);
    cmds
}

fn render_form(form: FormKind, view: &FormView, cmds: &mut Vec<DomCommand>) {
    if let Some(text) = &view.file_label {
        cmds.push(DomCommand::SetFileLabel {
            form,
            text: text.clone(),
        });
    }
    if let Some(status) = &view.status {
        cmds.push(render_status(form, status));
    }
}

fn render_status(form: FormKind, status: &StatusView) -> DomCommand {
    let children = match &status.content {
        StatusContent::Text(text) => vec![Node::text(text.as_str())],
        StatusContent::SuggestionList { heading, rows } => vec![
            Node::text(heading.as_str()),
            Node::classed("ol", RENAME_LIST_CLASS, rows.iter().map(render_row).collect()),
        ],
        StatusContent::SingleSuggestion {
            lead,
            suggested_name,
            badge,
        } => vec![
            Node::text(format!("{lead} ")),
            Node::element("strong", vec![Node::text(suggested_name.as_str())]),
            Node::element("br", Vec::new()),
            Node::classed("span", BADGE_CLASS, vec![Node::text(badge.as_str())]),
        ],
    };

    DomCommand::SetStatus {
        form,
        class_name: status_class(status.tone),
        children,
    }
}

fn render_row(row: &SuggestionRow) -> Node {
    let children = match row {
        SuggestionRow::Renamed {
            original,
            suggested,
            badge,
        } => vec![
            Node::element("strong", vec![Node::text(original.as_str())]),
            Node::text(" "),
            Node::classed("span", ARROW_CLASS, vec![Node::text("→")]),
            Node::text(" "),
            Node::element("strong", vec![Node::text(suggested.as_str())]),
            Node::element("br", Vec::new()),
            Node::classed("span", BADGE_CLASS, vec![Node::text(badge.as_str())]),
        ],
        SuggestionRow::Failed { original, error } => vec![
            Node::element("strong", vec![Node::text(original.as_str())]),
            Node::text(format!(": {error}")),
        ],
    };
    Node::element("li", children)
}
