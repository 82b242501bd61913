//! Behavioural tests of the writer buffer across module boundaries.

use evscribe::{AND1, CONT, Class, Covenant, EventWriter, RestartType, WriteError};

#[test]
fn header_always_comes_first_and_instructions_follow_call_order() {
    let mut e = EventWriter::new(11810099, RestartType::RerunOnRest);
    e.wait(1.5);
    e.end();
    assert_eq!(e.lines()[0], "11810099, 1");
    assert_eq!(e.lines()[1], " 1001[00] (1.5)");
    assert_eq!(e.lines()[2], " 1000[04] (0)");
    assert_eq!(e.instruction_count(), 2);
}

#[test]
fn every_call_appends_exactly_one_line() {
    let mut e = EventWriter::new(0, RestartType::RunOnce);
    for flag in 0..50 {
        e.set_event_flag(flag, flag % 2 == 0);
    }
    assert_eq!(e.instruction_count(), 50);
    assert_eq!(e.render().lines().count(), 51);
}

#[test]
fn booleans_and_enums_render_as_their_stored_numbers() {
    let mut e = EventWriter::new(0, RestartType::RunOnce);
    e.set_event_flag(100, true);
    e.set_event_flag(100, false);
    e.if_ai_state(CONT, 1810800, evscribe::AiState::Alert);
    assert_eq!(e.lines()[1], " 2003[02] (100, 1)");
    assert_eq!(e.lines()[2], " 2003[02] (100, 0)");
    assert_eq!(e.lines()[3], "    4[09] (0, 1810800, 2)");
}

#[test]
fn out_of_range_values_pass_through_unvalidated() {
    // The engine and the external tool own validation; the writer renders
    // whatever the author typed.
    let mut e = EventWriter::new(0, RestartType::RunOnce);
    e.set_event_flag(-1, true);
    e.wait(-3.25);
    assert_eq!(e.lines()[1], " 2003[02] (-1, 1)");
    assert_eq!(e.lines()[2], " 1001[00] (-3.25)");
}

#[test]
fn class_names_numbers_and_enums_are_interchangeable() {
    let mut by_enum = EventWriter::new(0, RestartType::RunOnce);
    let mut by_number = EventWriter::new(0, RestartType::RunOnce);
    let mut by_name = EventWriter::new(0, RestartType::RunOnce);
    by_enum.if_player_class(AND1, Class::Deprived).unwrap();
    by_number.if_player_class(AND1, 9u8).unwrap();
    by_name.if_player_class(AND1, "DEPRIVED").unwrap();
    assert_eq!(by_enum.lines(), by_number.lines());
    assert_eq!(by_enum.lines(), by_name.lines());
}

#[test]
fn covenant_lookup_rejects_unknown_names_without_writing() {
    let mut e = EventWriter::new(0, RestartType::RunOnce);
    e.if_player_covenant(CONT, Covenant::Darkwraith).unwrap();
    let err = e.if_player_covenant(CONT, "blades of mercy").unwrap_err();
    assert!(matches!(err, WriteError::UnrecognizedCovenant(_)));
    assert_eq!(err.to_string(), "unrecognized covenant name 'blades of mercy'");
    assert_eq!(e.instruction_count(), 1);
}

#[test]
fn rendered_header_round_trips_back_to_its_fields() {
    let mut e = EventWriter::new(11810001, RestartType::RunOnce);
    e.debug_pendant();
    let text = e.render();

    let header = text.lines().next().unwrap();
    let (event_id, restart) = header.split_once(", ").unwrap();
    assert_eq!(event_id.parse::<u32>().unwrap(), 11810001);
    assert_eq!(restart.parse::<u8>().unwrap(), RestartType::RunOnce as u8);
    assert_eq!(text.lines().count() - 1, e.instruction_count());
}

#[test]
fn param_substitution_marker_follows_its_instruction() {
    let mut e = EventWriter::new(11810005, RestartType::RunOnce);
    e.initialize_event(11810010, &[50000060]);
    e.set_event_flag(0, true);
    e.load_arg(0, 0, 4);
    assert_eq!(e.lines()[2], " 2003[02] (0, 1)");
    assert_eq!(e.lines()[3], "    ^(0 <- 0, 4)");
}
