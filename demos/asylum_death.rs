//! Builds the Asylum Demon death event and prints its unpacked text.
//!
//! Run with: cargo run --example asylum_death

use evscribe::{CONT, EventWriter, FlagType, RestartType, SoundType};

const ASYLUM_DEMON: i32 = 1810800;
const BOSS_DEATH_SOUND_EFFECT: i32 = 777777777;
const FOG_GATE: i32 = 1811990;
const FOG_SFX: i32 = 1811991;
const FRONT_DOOR: i32 = 1811111;
const FRONT_DOOR_ANIM: i32 = 1;
const PORTCULLIS: i32 = 1811115;
const PORTCULLIS_ANIM: i32 = 1;
const FLAG_ASYLUM_DEMON_DEAD: i32 = 16;
const FLAG_PORTCULLIS_CLOSED: i32 = 11810312;

fn asylum_demon_death() -> EventWriter {
    let mut e = EventWriter::new(11810001, RestartType::RunOnce);
    e.if_entity_health_less_than_or_equal(CONT, ASYLUM_DEMON, 0.0);
    e.play_sound_effect(ASYLUM_DEMON, SoundType::Sfx, BOSS_DEATH_SOUND_EFFECT);
    e.if_entity_dead(CONT, ASYLUM_DEMON);
    e.set_event_flag(FLAG_ASYLUM_DEMON_DEAD, true);
    e.kill_boss(ASYLUM_DEMON);
    e.disable_object(FOG_GATE);
    e.delete_map_sfx(FOG_SFX, true);
    e.force_animation(FRONT_DOOR, FRONT_DOOR_ANIM, false, false, false);
    e.skip_if_event_flag_off(1, FlagType::EventFlag, FLAG_PORTCULLIS_CLOSED);
    e.force_animation(PORTCULLIS, PORTCULLIS_ANIM, false, false, false);
    e.disable_object_activation(FRONT_DOOR, -1);
    e
}

fn main() {
    print!("{}", asylum_demon_death().render());
}
