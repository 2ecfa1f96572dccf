//! Debounce properties over random keystroke timings
//!
//! Time is driven by a manual clock, so every case runs instantly.

use dangerous_writing::editor::ScriptedDialog;
use dangerous_writing::input::Key;
use dangerous_writing::timer::ManualClock;
use dangerous_writing::{DangerousEditor, EditorConfig, ExpireOutcome};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

fn editor() -> (DangerousEditor<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let editor = DangerousEditor::with_clock(EditorConfig::default(), clock.clone()).unwrap();
    (editor, clock)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn keystrokes_closer_than_interval_never_prompt(
        gaps in proptest::collection::vec(0u64..5000, 1..40),
        text in "[a-z ]{1,40}"
    ) {
        let (mut editor, clock) = editor();
        let mut dialog = ScriptedDialog::new();
        let mut expected = String::new();

        for (gap, ch) in gaps.iter().zip(text.chars().cycle()) {
            clock.advance_ms(*gap);
            prop_assert_eq!(editor.tick(&mut dialog).unwrap(), None);
            editor.handle_key(&Key::char(ch));
            expected.push(ch);
        }

        prop_assert_eq!(dialog.shown_count(), 0);
        prop_assert_eq!(editor.text(), expected.as_str());
    }

    #[test]
    fn idle_interval_prompts_once_and_answer_decides(
        prefix in "[a-z]{1,20}",
        idle in 5000u64..60_000,
        answer in any::<bool>()
    ) {
        let (mut editor, clock) = editor();
        let mut dialog = ScriptedDialog::answering([answer]);

        for ch in prefix.chars() {
            editor.handle_key(&Key::char(ch));
        }
        clock.advance_ms(idle);

        let outcome = editor.tick(&mut dialog).unwrap();
        let expected = if answer { ExpireOutcome::Cleared } else { ExpireOutcome::Kept };
        prop_assert_eq!(outcome, Some(expected));
        prop_assert_eq!(editor.tick(&mut dialog).unwrap(), None);
        prop_assert_eq!(dialog.shown_count(), 1);

        let expected_text = if answer { "" } else { prefix.as_str() };
        prop_assert_eq!(editor.text(), expected_text);
    }
}
