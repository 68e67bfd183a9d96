use crate::error::WalkError;

use super::{AnxietyRating, WorryState};

/// Fixed rationale sentence for a terminal outcome.
pub fn rationale(state: WorryState) -> Option<&'static str> {
    match state {
        WorryState::ActionNow => Some(
            "This worry is about something I can control AND I can act on it now. Taking action is the best approach.",
        ),
        WorryState::ScheduleLater => Some(
            "This worry is about something I can control, but I cannot act on it right now. I've scheduled a time to address it.",
        ),
        WorryState::LetGo => Some(
            "This worry is about something outside my control. The healthiest response is to acknowledge it and let it go.",
        ),
        WorryState::LetGoHypothetical => Some(
            "This worry is about a hypothetical \"what if\" scenario that may never happen. I'm choosing to focus on the present.",
        ),
        _ => None,
    }
}

/// The action plan to show for `state`, if one applies.
fn applicable_plan(state: WorryState, action_plan: Option<&str>) -> Option<&str> {
    if !state.takes_action() {
        return None;
    }
    action_plan.map(str::trim).filter(|plan| !plan.is_empty())
}

/// Rationale for the outcome followed by the worry and, for action outcomes, the plan.
pub fn summarize(
    state: WorryState,
    worry: &str,
    action_plan: Option<&str>,
) -> Result<String, WalkError> {
    let rationale = rationale(state).ok_or(WalkError::NotFinished(state))?;

    let mut summary = format!("{rationale}\n\nMy worry: {}", worry.trim());
    if let Some(plan) = applicable_plan(state, action_plan) {
        summary.push_str("\n\nMy plan: ");
        summary.push_str(plan);
    }
    Ok(summary)
}

/// Markdown note appended to the user's journal once the walk is finished.
pub fn render_note(
    state: WorryState,
    worry: &str,
    action_plan: Option<&str>,
    before: AnxietyRating,
    after: Option<AnxietyRating>,
) -> Result<String, WalkError> {
    let rationale = rationale(state).ok_or(WalkError::NotFinished(state))?;

    let mut note = format!(
        "## Worry Decision Tree\n\n### My Worry\n{}\n\n### Decision Path\n{rationale}\n\n",
        worry.trim()
    );
    if let Some(plan) = applicable_plan(state, action_plan) {
        note.push_str(&format!("### Action Plan\n{plan}\n\n"));
    }
    note.push_str(&format!("### Anxiety Level\n- Before: {before}/10\n"));
    if let Some(after) = after {
        note.push_str(&format!("- After: {after}/10\n"));
    }
    Ok(note)
}
