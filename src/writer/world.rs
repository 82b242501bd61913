//! Groups 2008-2012: camera, script registration, sound, hitboxes and map
//! parts

use super::EventWriter;
use crate::types::{Arg, SoundType};

impl EventWriter {
    /// 2008[03]
    pub fn set_locked_camera_slot_number(
        &mut self,
        area_id: u8,
        block_id: u8,
        locked_camera_slot_number: u16,
    ) {
        self.raw(
            2008,
            3,
            &[
                area_id.into(),
                block_id.into(),
                locked_camera_slot_number.into(),
            ],
        );
    }

    /// 2009[00]: called on area initialization to make ladders interactable.
    pub fn register_ladder(&mut self, event_flag_id_1: i32, event_flag_id_2: i32, entity_id: i32) {
        self.raw(
            2009,
            0,
            &[
                event_flag_id_1.into(),
                event_flag_id_2.into(),
                entity_id.into(),
            ],
        );
    }

    /// 2009[03]: the reaction arguments restrict the distance and angle
    /// from which the bonfire can be activated.
    pub fn register_bonfire(
        &mut self,
        event_flag_id: i32,
        entity_id: i32,
        reaction_distance: f32,
        reaction_angle: f32,
        initial_basic_spot_point: i32,
    ) {
        self.raw(
            2009,
            3,
            &[
                event_flag_id.into(),
                entity_id.into(),
                reaction_distance.into(),
                reaction_angle.into(),
                initial_basic_spot_point.into(),
            ],
        );
    }

    /// 2009[04]
    pub fn activate_npc_buffs(&mut self, entity_id: i32) {
        self.raw(2009, 4, &[entity_id.into()]);
    }

    /// 2009[06]: notifies summons that the player has challenged the boss.
    pub fn notify_boss_room_entry(&mut self) {
        self.raw(2009, 6, &[Arg::U8(0)]);
    }

    /// 2010[02]: the entity specifies the sound's origin.
    pub fn play_sound_effect(&mut self, entity_id: i32, sound_type: SoundType, sound_id: i32) {
        self.raw(
            2010,
            2,
            &[entity_id.into(), sound_type.into(), sound_id.into()],
        );
    }

    /// 2010[03]: includes boss music, the most common use.
    pub fn set_map_sound(&mut self, entity_id: i32, state: bool) {
        self.raw(2010, 3, &[entity_id.into(), state.into()]);
    }

    pub fn enable_map_sound(&mut self, entity_id: i32) {
        self.set_map_sound(entity_id, true);
    }

    pub fn disable_map_sound(&mut self, entity_id: i32) {
        self.set_map_sound(entity_id, false);
    }

    /// 2011[01]: 1 = hitbox is enabled.
    pub fn set_hitbox_state(&mut self, entity_id: i32, state: bool) {
        self.raw(2011, 1, &[entity_id.into(), state.into()]);
    }

    pub fn enable_hitbox(&mut self, entity_id: i32) {
        self.set_hitbox_state(entity_id, true);
    }

    pub fn disable_hitbox(&mut self, entity_id: i32) {
        self.set_hitbox_state(entity_id, false);
    }

    /// 2012[01]
    pub fn set_map_part_state(&mut self, map_part_id: i32, state: bool) {
        self.raw(2012, 1, &[map_part_id.into(), state.into()]);
    }

    pub fn enable_map_part(&mut self, map_part_id: i32) {
        self.set_map_part_state(map_part_id, true);
    }

    pub fn disable_map_part(&mut self, map_part_id: i32) {
        self.set_map_part_state(map_part_id, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RestartType;

    #[test]
    fn sound_effect_renders_the_bank_as_its_stored_number() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        w.play_sound_effect(1810800, SoundType::Sfx, 777777777);
        assert_eq!(w.lines()[1], " 2010[02] (1810800, 5, 777777777)");
    }
}
