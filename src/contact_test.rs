use super::*;

const ORIGINAL: &str = "<span>Send Message</span><svg class=\"icon\"></svg>";

fn cycle() -> SubmitCycle {
    SubmitCycle::new(ContactConfig::default())
}

#[test]
fn starts_idle() {
    assert_eq!(cycle().phase(), SubmitPhase::Idle);
}

#[test]
fn submit_shows_sending_and_disables() {
    let mut cycle = cycle();
    let step = cycle.submit(ORIGINAL).expect("idle cycle accepts submit");
    assert_eq!(step.view.html, "<span>Sending...</span>");
    assert!(step.view.disabled);
    assert_eq!(step.view.background, None);
    assert!(!step.reset_form);
    assert_eq!(step.next_delay_ms, Some(1500));
    assert_eq!(cycle.phase(), SubmitPhase::Sending);
}

#[test]
fn sent_step_resets_form_with_success_background() {
    let mut cycle = cycle();
    cycle.submit(ORIGINAL);
    let step = cycle.advance().expect("sending advances to sent");
    assert_eq!(step.view.html, "<span>Message Sent! \u{2713}</span>");
    assert!(step.view.disabled);
    assert_eq!(step.view.background.as_deref(), Some("var(--success)"));
    assert!(step.reset_form);
    assert_eq!(step.next_delay_ms, Some(3000));
    assert_eq!(cycle.phase(), SubmitPhase::Sent);
}

#[test]
fn full_cycle_restores_exact_original_button() {
    let mut cycle = cycle();
    cycle.submit(ORIGINAL);
    cycle.advance();
    let step = cycle.advance().expect("sent advances to idle");
    assert_eq!(
        step.view,
        ButtonView { html: ORIGINAL.to_owned(), disabled: false, background: None }
    );
    assert!(!step.reset_form);
    assert_eq!(step.next_delay_ms, None);
    assert_eq!(cycle.phase(), SubmitPhase::Idle);
}

#[test]
fn total_cycle_time_is_send_plus_hold() {
    let mut cycle = cycle();
    let mut total = 0;
    let mut next = cycle.submit(ORIGINAL).and_then(|s| s.next_delay_ms);
    while let Some(delay) = next {
        total += delay;
        next = cycle.advance().and_then(|s| s.next_delay_ms);
    }
    assert_eq!(total, 4500);
}

#[test]
fn resubmit_while_running_is_ignored() {
    let mut cycle = cycle();
    cycle.submit(ORIGINAL);
    assert_eq!(cycle.submit("<span>Sending...</span>"), None);
    cycle.advance();
    assert_eq!(cycle.submit("<span>Sent</span>"), None);
    let last = cycle.advance().expect("cycle completes");
    assert_eq!(last.view.html, ORIGINAL);
}

#[test]
fn can_submit_again_after_cycle() {
    let mut cycle = cycle();
    cycle.submit(ORIGINAL);
    cycle.advance();
    cycle.advance();
    assert!(cycle.submit(ORIGINAL).is_some());
}

#[test]
fn advance_when_idle_does_nothing() {
    let mut cycle = cycle();
    assert_eq!(cycle.advance(), None);
    assert_eq!(cycle.phase(), SubmitPhase::Idle);
}

#[test]
fn labels_are_escaped() {
    let config = ContactConfig { sending_label: "<b>&</b>".to_owned(), ..ContactConfig::default() };
    let mut cycle = SubmitCycle::new(config);
    let step = cycle.submit(ORIGINAL).expect("submit");
    assert_eq!(step.view.html, "<span>&lt;b&gt;&amp;&lt;/b&gt;</span>");
}
