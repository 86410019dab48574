//! Unit tests for the window lifecycle state machine.

use super::*;
use crate::dispatch::NewFileKind;

fn plan(devtools: bool) -> WindowPlan {
    WindowPlan {
        url: DocumentUrl::App("index.html".to_string()),
        width: 1280.0,
        height: 768.0,
        devtools,
        data_directory: None,
    }
}

fn created() -> WindowState {
    WindowState::Created { visible: true }
}

#[test]
fn test_ready_creates_window() {
    let machine = Machine::new(plan(false));
    let (state, effects) = machine.transition(WindowState::Uninitialized, ShellEvent::Ready);

    assert_eq!(state, created());
    assert_eq!(effects, vec![Effect::CreateWindow(plan(false))]);
}

#[test]
fn test_debug_mode_opens_devtools() {
    let machine = Machine::new(plan(true));
    let (_, effects) = machine.transition(WindowState::Uninitialized, ShellEvent::Ready);

    let Some(Effect::CreateWindow(window)) = effects.first() else {
        panic!("expected window creation, got {:?}", effects);
    };
    assert!(window.devtools);
    assert_eq!((window.width, window.height), (1280.0, 768.0));
}

#[test]
fn test_ready_is_handled_once() {
    let machine = Machine::new(plan(false));
    let (state, effects) = machine.transition(created(), ShellEvent::Ready);
    assert_eq!(state, created());
    assert!(effects.is_empty());

    let (state, effects) = machine.transition(WindowState::Closed, ShellEvent::Ready);
    assert_eq!(state, WindowState::Closed);
    assert!(effects.is_empty());
}

#[test]
fn test_window_close_drops_reference() {
    let machine = Machine::new(plan(false));
    let (state, effects) = machine.transition(created(), ShellEvent::WindowClosed);
    assert_eq!(state, WindowState::Closed);
    assert!(effects.is_empty());
}

#[test]
fn test_crash_hides_immediately_and_prompts() {
    let machine = Machine::new(plan(false));
    let (state, effects) = machine.transition(created(), ShellEvent::ContentCrashed);

    assert_eq!(state, WindowState::Created { visible: false });
    assert_eq!(effects, vec![Effect::HideWindow, Effect::PromptCrash]);
}

#[test]
fn test_crash_choices() {
    let machine = Machine::new(plan(false));
    let hidden = WindowState::Created { visible: false };

    let (state, effects) =
        machine.transition(hidden, ShellEvent::CrashChoice(CrashChoice::Reload));
    assert_eq!(state, hidden);
    assert_eq!(effects, vec![Effect::ReloadWindow]);

    let (state, effects) = machine.transition(hidden, ShellEvent::CrashChoice(CrashChoice::Close));
    assert_eq!(state, hidden);
    assert_eq!(effects, vec![Effect::CloseWindow]);
}

#[test]
fn test_shell_fault_reloads_only_live_window() {
    let machine = Machine::new(plan(false));

    let (_, effects) = machine.transition(created(), ShellEvent::ShellFault);
    assert_eq!(effects, vec![Effect::ReloadWindow]);

    for state in [WindowState::Uninitialized, WindowState::Closed] {
        let (next, effects) = machine.transition(state, ShellEvent::ShellFault);
        assert_eq!(next, state);
        assert!(effects.is_empty());
    }
}

#[test]
fn test_new_file_reveals_and_emits() {
    let machine = Machine::new(plan(false));
    let hidden = WindowState::Created { visible: false };
    let (state, effects) = machine.transition(
        hidden,
        ShellEvent::Action(ShellAction::NewFile(NewFileKind::Text)),
    );

    assert_eq!(state, created());
    assert_eq!(
        effects,
        vec![
            Effect::ShowWindow,
            Effect::Emit {
                event: "new-file",
                payload: "text"
            },
        ]
    );
}

#[test]
fn test_play_pause_keeps_window_hidden() {
    let machine = Machine::new(plan(false));
    let hidden = WindowState::Created { visible: false };
    let (state, effects) = machine.transition(hidden, ShellEvent::Action(ShellAction::PlayPause));

    assert_eq!(state, hidden);
    assert_eq!(
        effects,
        vec![Effect::Emit {
            event: "play-pause",
            payload: "test"
        }]
    );
}

#[test]
fn test_show_only_reveals() {
    let machine = Machine::new(plan(false));
    let (_, effects) = machine.transition(
        WindowState::Created { visible: false },
        ShellEvent::Action(ShellAction::Show),
    );
    assert_eq!(effects, vec![Effect::ShowWindow]);
}

#[test]
fn test_actions_without_window_are_ignored() {
    let machine = Machine::new(plan(false));
    for state in [WindowState::Uninitialized, WindowState::Closed] {
        for action in [ShellAction::Show, ShellAction::NextFile, ShellAction::PlayPause] {
            let (next, effects) = machine.transition(state, ShellEvent::Action(action));
            assert_eq!(next, state);
            assert!(effects.is_empty(), "{:?} in {:?} produced {:?}", action, state, effects);
        }
    }
}

#[test]
fn test_quit_releases_shortcuts_first() {
    let machine = Machine::new(plan(false));

    let (_, effects) = machine.transition(created(), ShellEvent::Action(ShellAction::Quit));
    assert_eq!(
        effects,
        vec![Effect::UnregisterShortcuts, Effect::CloseWindow, Effect::Quit]
    );

    let (_, effects) =
        machine.transition(WindowState::Closed, ShellEvent::Action(ShellAction::Quit));
    assert_eq!(effects, vec![Effect::UnregisterShortcuts, Effect::Quit]);
}

#[test]
fn test_will_quit_unregisters_shortcuts() {
    let machine = Machine::new(plan(false));
    for state in [created(), WindowState::Closed, WindowState::Uninitialized] {
        let (next, effects) = machine.transition(state, ShellEvent::WillQuit);
        assert_eq!(next, state);
        assert_eq!(effects, vec![Effect::UnregisterShortcuts]);
    }
}
