//! Line-for-line check of a complete boss death event against the unpacked
//! text the external rebuilder expects.

use evscribe::{CONT, EventWriter, FlagType, RestartType, SoundType};

const ASYLUM_DEMON: i32 = 1810800;

fn asylum_demon_death() -> EventWriter {
    let mut e = EventWriter::new(11810001, RestartType::RunOnce);
    e.if_entity_health_less_than_or_equal(CONT, ASYLUM_DEMON, 0.0);
    e.play_sound_effect(ASYLUM_DEMON, SoundType::Sfx, 777777777);
    e.if_entity_dead(CONT, ASYLUM_DEMON);
    e.set_event_flag(16, true);
    e.kill_boss(ASYLUM_DEMON);
    e.disable_object(1811990);
    e.delete_map_sfx(1811991, true);
    e.force_animation(1811111, 1, false, false, false);
    e.skip_if_event_flag_off(1, FlagType::EventFlag, 11810312);
    e.force_animation(1811115, 1, false, false, false);
    e.disable_object_activation(1811111, -1);
    e
}

#[test]
fn asylum_demon_death_event_matches_known_good_output() {
    let expected = [
        "11810001, 0",
        "    4[02] (0, 1810800, 5, 0.0)",
        " 2010[02] (1810800, 5, 777777777)",
        "    4[00] (0, 1810800, 1)",
        " 2003[02] (16, 1)",
        " 2003[12] (1810800)",
        " 2005[03] (1811990, 0)",
        " 2006[01] (1811991, 1)",
        " 2003[18] (1811111, 1, 0, 0, 0)",
        " 1003[01] (1, 0, 0, 11810312)",
        " 2003[18] (1811115, 1, 0, 0, 0)",
        " 2005[06] (1811111, -1, 0)",
    ];
    let e = asylum_demon_death();
    assert_eq!(e.lines(), expected);
}

#[test]
fn render_joins_lines_and_terminates_with_a_newline() {
    let e = asylum_demon_death();
    let text = e.render();
    assert!(text.starts_with("11810001, 0\n"));
    assert!(text.ends_with(" 2005[06] (1811111, -1, 0)\n"));
    assert_eq!(text.lines().count(), 12);
}

#[test]
fn building_the_same_event_twice_is_deterministic() {
    assert_eq!(asylum_demon_death().render(), asylum_demon_death().render());
}
