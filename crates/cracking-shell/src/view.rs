//! Plain-text rendering of each page.

use cracking_core::education;
use cracking_core::models::audience::Audience;
use cracking_core::models::page::Page;
use cracking_core::models::profile::{ProfileRecord, Stage};
use cracking_portal::render::{PortalOptions, render_summary};
use cracking_questionnaire::Category;
use cracking_questionnaire::navigator::Navigator;
use cracking_questionnaire::question::{InputKind, Question};

use crate::error::AppError;
use crate::state::AppState;

const PROGRESS_WIDTH: usize = 20;

const SLOGAN: &str = "A tool to help families understand Alzheimer's, preserve personhood, \
                      and manage care with confidence.";

pub fn render(state: &AppState, portal: &PortalOptions) -> Result<String, AppError> {
    let body = match state.page() {
        Page::Home => render_home(),
        Page::Education => render_education(state),
        Page::Personalisation => render_personalisation(state.navigator(), state.profile()),
        Page::CarerPortal => render_summary(state.profile(), portal)?,
    };
    if state.page() == Page::Home {
        Ok(body)
    } else {
        Ok(format!("< Back to Home ('home')\n\n{body}"))
    }
}

pub fn render_home() -> String {
    let mut out = format!("{}\n\n{SLOGAN}\n\n", Page::Home.title());
    for (command, page) in [
        ("education", Page::Education),
        ("profile", Page::Personalisation),
        ("portal", Page::CarerPortal),
    ] {
        out.push_str(&format!("  > {:<16} ({command})\n", page.title()));
    }
    out
}

pub fn render_education(state: &AppState) -> String {
    let audience = state.audience();
    let mut out = String::from(
        "Education Centre\n\
         Understanding Alzheimer's is the first step to managing it.\n\n",
    );

    let toggle: Vec<String> = [Audience::Patient, Audience::Carer]
        .into_iter()
        .map(|a| {
            if a == audience {
                format!("[{}]", a.toggle_label())
            } else {
                format!(" {} ", a.toggle_label())
            }
        })
        .collect();
    out.push_str(&format!("{}\n\n", toggle.join("  ")));

    for entry in education::filter_by_audience(audience) {
        let expanded = state.accordion().is_expanded(entry.id);
        let marker = if expanded { '-' } else { '+' };
        out.push_str(&format!("[{marker}] {} ({})\n", entry.title, entry.id));
        if expanded {
            for line in entry.body.lines() {
                out.push_str(&format!("      {line}\n"));
            }
        }
    }

    out.push_str(&format!(
        "\nDid you know?\n{}\n",
        education::did_you_know(audience)
    ));
    out
}

pub fn render_personalisation(navigator: &Navigator<'_>, profile: &ProfileRecord) -> String {
    match (navigator.current_category(), navigator.current_question()) {
        (Some(category), Some(question)) => {
            render_flashcard(navigator, category, question, profile)
        }
        _ => render_overview(navigator, profile),
    }
}

fn render_overview(navigator: &Navigator<'_>, profile: &ProfileRecord) -> String {
    let mut out = String::from(
        "My Profile\n\
         Help us \"crack the code\" by filling out these four areas. \
         The more we know, the better we can help.\n\n",
    );
    for category in navigator.catalog().categories() {
        let check = if category.is_started(profile) { "[x]" } else { "[ ]" };
        out.push_str(&format!(
            "{check} {} ({})\n    {}\n    {} -> start {}\n",
            category.title(),
            category.id(),
            category.description(),
            category.card_action_label(profile),
            category.id()
        ));
    }
    out
}

fn render_flashcard(
    navigator: &Navigator<'_>,
    category: &dyn Category,
    question: &Question,
    profile: &ProfileRecord,
) -> String {
    let mut out = String::new();
    if let Some((number, total)) = navigator.question_number() {
        out.push_str(&format!(
            "{}  (Question {number} of {total})\n",
            category.title().to_uppercase()
        ));
    }
    let ratio = navigator.progress_ratio().unwrap_or_default();
    out.push_str(&format!("{}\n\n", progress_bar(ratio)));
    out.push_str(&format!("{}\n{}\n\n", question.prompt, question.helper_text));

    match question.kind {
        InputKind::ShortText | InputKind::LongText => {
            let value = profile.field(question.field);
            if value.is_empty() {
                let hint = question.placeholder.unwrap_or("");
                out.push_str(&format!("  (empty) {hint}\n"));
            } else {
                for line in value.lines() {
                    out.push_str(&format!("  | {line}\n"));
                }
            }
            out.push_str("\n  answer <text> to save, clear to empty\n");
        }
        InputKind::SingleChoiceStage => {
            for stage in Stage::ALL {
                let mark = if profile.stage == stage { "(*)" } else { "( )" };
                out.push_str(&format!(
                    "  {mark} {} -> answer {}\n      {}\n",
                    stage.label(),
                    stage,
                    stage.description()
                ));
            }
        }
    }

    let back = navigator.back_label().unwrap_or("Back");
    let next = navigator.next_label().unwrap_or("Next");
    out.push_str(&format!(
        "\n< {back} ('back')    {next} > ('next')    close\n"
    ));
    out
}

/// `[#####---------------] 25%`
pub fn progress_bar(ratio: f64) -> String {
    let ratio = ratio.clamp(0.0, 1.0);
    let filled = (ratio * PROGRESS_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:.0}%",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled),
        ratio * 100.0
    )
}
