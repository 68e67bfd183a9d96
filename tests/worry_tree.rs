use mindwell_lib::worry::{self, rationale, summarize};
use mindwell_lib::{WalkError, WorrySession, WorryState};

const HYPOTHETICAL: &str = "This worry is about a hypothetical \"what if\" scenario that may never happen. I'm choosing to focus on the present.";

#[test]
fn hypothetical_exam_worry() {
    let mut session = WorrySession::start();
    assert_eq!(session.current(), WorryState::Start);

    assert_eq!(
        session.submit_worry("I might fail my exam tomorrow"),
        Ok(WorryState::IsReal)
    );
    assert_eq!(session.choose(1), Ok(WorryState::LetGoHypothetical));
    assert!(session.is_finished());

    let summary = session.summary().unwrap();
    assert_eq!(
        summary,
        format!("{HYPOTHETICAL}\n\nMy worry: I might fail my exam tomorrow")
    );
    assert_eq!(
        summarize(
            WorryState::LetGoHypothetical,
            "I might fail my exam tomorrow",
            None
        )
        .unwrap(),
        summary
    );
}

#[test]
fn rationale_strings_are_exact() {
    assert_eq!(
        rationale(WorryState::ActionNow),
        Some("This worry is about something I can control AND I can act on it now. Taking action is the best approach.")
    );
    assert_eq!(
        rationale(WorryState::ScheduleLater),
        Some("This worry is about something I can control, but I cannot act on it right now. I've scheduled a time to address it.")
    );
    assert_eq!(
        rationale(WorryState::LetGo),
        Some("This worry is about something outside my control. The healthiest response is to acknowledge it and let it go.")
    );
    assert_eq!(rationale(WorryState::LetGoHypothetical), Some(HYPOTHETICAL));
}

#[test]
fn back_undoes_every_valid_choice() {
    for state in WorryState::ALL {
        for option in 0..state.options().len() {
            let mut history = vec![state];
            let next = worry::choose(state, option).unwrap();
            assert_ne!(next, state);
            assert_eq!(worry::back(&mut history), Ok(state));
        }
    }
}

#[test]
fn session_back_reverses_choose() {
    let mut session = WorrySession::start();
    session.submit_worry("job interview").unwrap();
    for option in 0..2 {
        let before = session.current();
        session.choose(option).unwrap();
        assert_eq!(session.back(), Ok(before));
    }
}

#[test]
fn terminal_state_rejects_further_choices() {
    let mut session = WorrySession::start();
    session.submit_worry("the roof leaks").unwrap();
    session.choose(0).unwrap();
    session.choose(0).unwrap();
    session.choose(0).unwrap();
    assert_eq!(session.current(), WorryState::ActionNow);

    for option in [0, 1] {
        assert_eq!(
            session.choose(option),
            Err(WalkError::InvalidTransition {
                from: WorryState::ActionNow,
                option
            })
        );
    }
    assert_eq!(session.current(), WorryState::ActionNow);
}

#[test]
fn full_walk_produces_note_and_record() {
    let mut session = WorrySession::start();
    session.set_anxiety_before(8).unwrap();
    session.submit_worry("  I haven't replied to my landlord  ").unwrap();
    session.choose(0).unwrap();
    session.choose(0).unwrap();
    session.choose(1).unwrap();
    session.set_action_plan("Write the email after work on Thursday");
    session.set_anxiety_after(5).unwrap();

    assert_eq!(
        session.path(),
        vec![
            WorryState::Start,
            WorryState::IsReal,
            WorryState::CanControl,
            WorryState::CanActNow,
            WorryState::ScheduleLater,
        ]
    );

    let record = session.finish().unwrap();
    assert_eq!(record.outcome, WorryState::ScheduleLater);
    assert_eq!(record.anxiety_change(), -3);
    assert_eq!(
        record.note,
        "## Worry Decision Tree\n\
         \n\
         ### My Worry\n\
         I haven't replied to my landlord\n\
         \n\
         ### Decision Path\n\
         This worry is about something I can control, but I cannot act on it right now. I've scheduled a time to address it.\n\
         \n\
         ### Action Plan\n\
         Write the email after work on Thursday\n\
         \n\
         ### Anxiety Level\n\
         - Before: 8/10\n\
         - After: 5/10\n"
    );
}
