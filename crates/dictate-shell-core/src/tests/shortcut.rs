use crate::{
    Command, CommandDispatcher, MainKey, Modifiers, ShellError, ShortcutRegistrar,
    parse_descriptor,
    tests::fakes::FakeBackend,
};

use std::{cell::Cell, rc::Rc};

fn registrar() -> (ShortcutRegistrar<FakeBackend>, FakeBackend) {
    let backend = FakeBackend::default();
    let registrar = ShortcutRegistrar::new(backend.clone(), Rc::new(CommandDispatcher::new()));
    (registrar, backend)
}

/// WHAT: Modifiers translate to platform vocabulary in fixed order
/// WHY: The platform expects Control, Alt, Shift ordering
#[test]
#[allow(clippy::unwrap_used)]
fn given_ctrl_shift_s_when_registering_then_control_shift_s_claimed() {
    // Given: An empty registrar
    let (mut registrar, backend) = registrar();

    // When: Registering Ctrl+Shift+S
    let ok = registrar.register(Some("Ctrl+Shift+S"));

    // Then: Control+Shift+S is the only active claim
    assert!(ok);
    assert_eq!(backend.log.borrow().active, vec!["Control+Shift+S"]);
    assert_eq!(registrar.active().unwrap().to_string(), "Control+Shift+S");
}

/// WHAT: Modifier order in the descriptor does not matter
/// WHY: Users may type modifiers in any order
#[test]
#[allow(clippy::unwrap_used)]
fn given_shuffled_modifiers_when_parsing_then_canonical_order() {
    // Given/When: Modifiers listed backwards
    let accelerator = parse_descriptor("Shift+Alt+Ctrl+F5").unwrap();

    // Then: Canonical order with function key
    assert_eq!(accelerator.to_string(), "Control+Alt+Shift+F5");
    assert_eq!(accelerator.key, MainKey::Function(5));
}

/// WHAT: A bare digit is a valid shortcut
/// WHY: Main key alone, without modifiers, is legal
#[test]
#[allow(clippy::unwrap_used)]
fn given_single_digit_when_registering_then_digit_claimed_without_modifiers() {
    // Given: An empty registrar
    let (mut registrar, backend) = registrar();

    // When: Registering "5"
    let ok = registrar.register(Some("5"));

    // Then: "5" is claimed with no modifiers
    assert!(ok);
    assert_eq!(backend.log.borrow().active, vec!["5"]);
    assert!(registrar.active().unwrap().modifiers.is_empty());
}

/// WHAT: None and empty descriptors unbind and succeed
/// WHY: Clearing the shortcut is a valid request
#[test]
fn given_active_shortcut_when_registering_none_or_empty_then_unbound_and_true() {
    for descriptor in [None, Some("")] {
        // Given: An active shortcut
        let (mut registrar, backend) = registrar();
        assert!(registrar.register(Some("Ctrl+K")));

        // When: Registering nothing
        let ok = registrar.register(descriptor);

        // Then: Success and no claim remains
        assert!(ok);
        assert!(backend.log.borrow().active.is_empty());
        assert!(registrar.active().is_none());
    }
}

/// WHAT: Invalid main key fails and leaves the slot empty
/// WHY: A failed re-registration must not restore the previous shortcut
#[test]
fn given_active_shortcut_when_registering_invalid_main_key_then_false_and_unbound() {
    // Given: An active shortcut
    let (mut registrar, backend) = registrar();
    assert!(registrar.register(Some("Ctrl+K")));

    // When: Registering Ctrl+@
    let ok = registrar.register(Some("Ctrl+@"));

    // Then: Failure, no platform attempt for it, nothing active
    assert!(!ok);
    assert_eq!(backend.log.borrow().attempts, vec!["Control+K"]);
    assert!(backend.log.borrow().active.is_empty());
    assert!(registrar.active().is_none());
}

/// WHAT: Function keys beyond F19 are rejected
/// WHY: Only F1 through F19 are valid main keys
#[test]
fn given_out_of_range_function_keys_when_parsing_then_invalid_main_key() {
    for descriptor in ["Ctrl+F20", "F0", "F01", "F1a", "Ctrl+s", "Ctrl+Space", "Ctrl+"] {
        // When: Parsing
        let result = parse_descriptor(descriptor);

        // Then: Main key rejected
        assert!(
            matches!(result, Err(ShellError::InvalidMainKey { .. })),
            "descriptor: {}",
            descriptor
        );
    }
}

/// WHAT: Boundary function keys are accepted
/// WHY: F1 and F19 are both inside the valid range
#[test]
#[allow(clippy::unwrap_used)]
fn given_boundary_function_keys_when_parsing_then_accepted() {
    assert_eq!(parse_descriptor("F1").unwrap().key, MainKey::Function(1));
    assert_eq!(parse_descriptor("Alt+F19").unwrap().to_string(), "Alt+F19");
}

/// WHAT: Unknown modifier tokens are silently dropped
/// WHY: Only Ctrl, Alt and Shift are recognized and typos do not fail
#[test]
#[allow(clippy::unwrap_used)]
fn given_unknown_modifier_when_parsing_then_ignored() {
    // Given/When: A descriptor with a typo and a lowercase modifier
    let accelerator = parse_descriptor("Ctlr+shift+Alt+Q").unwrap();

    // Then: Only Alt survives
    assert_eq!(
        accelerator.modifiers,
        Modifiers {
            control: false,
            alt: true,
            shift: false
        }
    );
    assert_eq!(accelerator.to_string(), "Alt+Q");
}

/// WHAT: Platform refusal reports false and leaves the slot empty
/// WHY: Conflicts with other applications surface like validation errors
#[test]
fn given_claimed_accelerator_when_registering_then_false_and_unbound() {
    // Given: A backend that refuses Control+C
    let (mut registrar, backend) = registrar();
    backend.log.borrow_mut().reject.push("Control+C".to_string());

    // When: Registering Ctrl+C, and inspecting the detailed error on retry
    let ok = registrar.register(Some("Ctrl+C"));
    let detailed = registrar.try_register(Some("Ctrl+C"));

    // Then: Failure at the boundary, distinguished internally
    assert!(!ok);
    assert!(matches!(
        detailed,
        Err(ShellError::RegistrationRejected { .. })
    ));
    assert!(registrar.active().is_none());
}

/// WHAT: A second registration replaces the first
/// WHY: Only one global shortcut may be claimed at a time
#[test]
fn given_two_valid_descriptors_when_registered_in_turn_then_only_second_active() {
    // Given: An empty registrar
    let (mut registrar, backend) = registrar();

    // When: Registering two shortcuts
    assert!(registrar.register(Some("Ctrl+A")));
    assert!(registrar.register(Some("Alt+Shift+9")));

    // Then: Only the second is active
    assert_eq!(backend.log.borrow().active, vec!["Alt+Shift+9"]);
}

/// WHAT: Fired shortcut dispatches start-stop-recording
/// WHY: The global shortcut toggles recording in the content layer
#[test]
#[allow(clippy::unwrap_used)]
fn given_active_shortcut_when_fired_then_recording_command_dispatched() {
    // Given: A dispatcher counting recording toggles
    let toggles = Rc::new(Cell::new(0));
    let mut dispatcher = CommandDispatcher::new();
    let counter = Rc::clone(&toggles);
    dispatcher
        .bind(Command::StartStopRecording, move || {
            counter.set(counter.get() + 1)
        })
        .unwrap();
    let backend = FakeBackend::default();
    let mut registrar = ShortcutRegistrar::new(backend, Rc::new(dispatcher));
    assert!(registrar.register(Some("Ctrl+R")));

    // When: Our hotkey fires, then a foreign one
    let ours = registrar.handle_fired(1);
    let foreign = registrar.handle_fired(42);

    // Then: Only ours dispatched
    assert!(ours);
    assert!(!foreign);
    assert_eq!(toggles.get(), 1);
}

/// WHAT: Dropping the registrar releases the claim
/// WHY: Hotkeys must be released on every shutdown path
#[test]
fn given_active_shortcut_when_registrar_dropped_then_released() {
    // Given: An active shortcut
    let (mut registrar, backend) = registrar();
    assert!(registrar.register(Some("Ctrl+Alt+D")));

    // When: Dropping the registrar
    drop(registrar);

    // Then: Nothing remains claimed
    assert!(backend.log.borrow().active.is_empty());
}
