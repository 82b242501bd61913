//! Group 2004: character instructions

use super::EventWriter;
use crate::types::Arg;

impl EventWriter {
    /// 2004[01]
    pub fn set_ai(&mut self, entity_id: i32, state: bool) {
        self.raw(2004, 1, &[entity_id.into(), state.into()]);
    }

    pub fn enable_ai(&mut self, entity_id: i32) {
        self.set_ai(entity_id, true);
    }

    pub fn disable_ai(&mut self, entity_id: i32) {
        self.set_ai(entity_id, false);
    }

    /// 2004[02]: teams 0..13 plus 255 for default; 6/7 are the hostile
    /// enemy teams, 8 is ally, 9 is hostile ally.
    pub fn switch_allegiance(&mut self, entity_id: i32, new_team: i8) {
        self.raw(2004, 2, &[entity_id.into(), new_team.into()]);
    }

    pub fn make_npc_friendly(&mut self, entity_id: i32) {
        self.switch_allegiance(entity_id, 8);
    }

    pub fn make_npc_hostile(&mut self, entity_id: i32) {
        self.switch_allegiance(entity_id, 9);
    }

    /// 2004[03]: technically a warp request.
    pub fn warp(
        &mut self,
        entity_id: i32,
        warp_destination_type: u8,
        destination_target_id: i32,
        damipoly_id: i32,
    ) {
        self.raw(
            2004,
            3,
            &[
                entity_id.into(),
                warp_destination_type.into(),
                destination_target_id.into(),
                damipoly_id.into(),
            ],
        );
    }

    /// 2004[04]: technically a kill request.
    pub fn kill(&mut self, entity_id: i32, yields_souls: bool) {
        self.raw(2004, 4, &[entity_id.into(), yields_souls.into()]);
    }

    /// 2004[05]
    pub fn set_character_state(&mut self, entity_id: i32, state: bool) {
        self.raw(2004, 5, &[entity_id.into(), state.into()]);
    }

    pub fn enable(&mut self, entity_id: i32) {
        self.set_character_state(entity_id, true);
    }

    pub fn disable(&mut self, entity_id: i32) {
        self.set_character_state(entity_id, false);
    }

    /// 2004[06]: slot number from 0-3.
    pub fn ezstate_instruction_request(&mut self, entity_id: i32, command_id: i32, slot_number: u8) {
        self.raw(
            2004,
            6,
            &[entity_id.into(), command_id.into(), slot_number.into()],
        );
    }

    /// 2004[07]: technically creates a bullet owner.
    pub fn create_spawner(&mut self, entity_id: i32) {
        self.raw(2004, 7, &[entity_id.into()]);
    }

    /// 2004[08]: special effect as in buff/debuff, not graphics.
    pub fn set_special_effect(&mut self, entity_id: i32, special_effect_id: i32) {
        self.raw(2004, 8, &[entity_id.into(), special_effect_id.into()]);
    }

    pub fn set_standby_animation_settings_to_default(&mut self, entity_id: i32) {
        self.set_standby_animation_settings(entity_id, -1, -1, -1, -1, -1);
    }

    /// 2004[09]: -1 keeps the default for each category.
    pub fn set_standby_animation_settings(
        &mut self,
        entity_id: i32,
        standby_animation: i32,
        damage_animation: i32,
        cancel_animation: i32,
        death_animation: i32,
        standby_return_animation: i32,
    ) {
        self.raw(
            2004,
            9,
            &[
                entity_id.into(),
                standby_animation.into(),
                damage_animation.into(),
                cancel_animation.into(),
                death_animation.into(),
                standby_return_animation.into(),
            ],
        );
    }

    /// 2004[10]: 1 = disabled. Does not freeze the body; it only stops the
    /// entity from changing height as it moves.
    pub fn set_gravity(&mut self, entity_id: i32, disabled: bool) {
        self.raw(2004, 10, &[entity_id.into(), disabled.into()]);
    }

    pub fn enable_gravity(&mut self, entity_id: i32) {
        self.set_gravity(entity_id, false);
    }

    pub fn disable_gravity(&mut self, entity_id: i32) {
        self.set_gravity(entity_id, true);
    }

    /// 2004[12]: character takes damage but cannot die.
    pub fn set_immortality(&mut self, entity_id: i32, state: bool) {
        self.raw(2004, 12, &[entity_id.into(), state.into()]);
    }

    /// 2004[13]: home point for entity AI.
    pub fn set_nest(&mut self, entity_id: i32, area_id: i32) {
        self.raw(2004, 13, &[entity_id.into(), area_id.into()]);
    }

    /// 2004[14]
    pub fn rotate_to_face_entity(&mut self, entity_id: i32, target_entity_id: i32) {
        self.raw(2004, 14, &[entity_id.into(), target_entity_id.into()]);
    }

    /// 2004[15]: character cannot take damage or die.
    pub fn set_invincibility(&mut self, entity_id: i32, state: bool) {
        self.raw(2004, 15, &[entity_id.into(), state.into()]);
    }

    pub fn enable_invincibility(&mut self, entity_id: i32) {
        self.set_invincibility(entity_id, true);
    }

    pub fn disable_invincibility(&mut self, entity_id: i32) {
        self.set_invincibility(entity_id, false);
    }

    /// 2004[16]
    pub fn clear_ai_target_list(&mut self, entity_id: i32) {
        self.raw(2004, 16, &[entity_id.into()]);
    }

    /// 2004[17]
    pub fn ai_instruction(&mut self, entity_id: i32, command_id: i32, slot_number: u8) {
        self.raw(
            2004,
            17,
            &[entity_id.into(), command_id.into(), slot_number.into()],
        );
    }

    /// 2004[18]
    pub fn set_event_point(
        &mut self,
        entity_id: i32,
        event_area_entity_id: i32,
        reaction_range: f32,
    ) {
        self.raw(
            2004,
            18,
            &[
                entity_id.into(),
                event_area_entity_id.into(),
                reaction_range.into(),
            ],
        );
    }

    /// 2004[19]
    pub fn set_ai_id(&mut self, entity_id: i32, ai_id: i32) {
        self.raw(2004, 19, &[entity_id.into(), ai_id.into()]);
    }

    /// 2004[20]: force the entity to re-plan its AI.
    pub fn replan_ai(&mut self, entity_id: i32) {
        self.raw(2004, 20, &[entity_id.into()]);
    }

    /// 2004[21]
    pub fn cancel_special_effect(&mut self, entity_id: i32, special_effect_id: i32) {
        self.raw(2004, 21, &[entity_id.into(), special_effect_id.into()]);
    }

    /// 2004[22]
    #[allow(clippy::too_many_arguments)]
    pub fn create_multipart_npc_part(
        &mut self,
        entity_id: i32,
        part_npc_type: i16,
        part_index: i16,
        part_health: i32,
        damage_correction: f32,
        body_damage_correction: f32,
        is_invincible: bool,
        start_in_stop_state: bool,
    ) {
        self.raw(
            2004,
            22,
            &[
                entity_id.into(),
                part_npc_type.into(),
                part_index.into(),
                part_health.into(),
                damage_correction.into(),
                body_damage_correction.into(),
                is_invincible.into(),
                start_in_stop_state.into(),
            ],
        );
    }

    /// 2004[23]
    pub fn set_multipart_npc_part_health(
        &mut self,
        entity_id: i32,
        part_npc_type: i32,
        desired_hp: i32,
        overwrite_max: bool,
    ) {
        self.raw(
            2004,
            23,
            &[
                entity_id.into(),
                part_npc_type.into(),
                desired_hp.into(),
                overwrite_max.into(),
            ],
        );
    }

    /// 2004[24]
    pub fn set_multipart_npc_part_effects(
        &mut self,
        entity_id: i32,
        part_npc_type: i32,
        material_special_effect_id: i32,
        material_sfx_id: i32,
    ) {
        self.raw(
            2004,
            24,
            &[
                entity_id.into(),
                part_npc_type.into(),
                material_special_effect_id.into(),
                material_sfx_id.into(),
            ],
        );
    }

    /// 2004[25]
    pub fn set_multipart_npc_part_bullet_damage_scaling(
        &mut self,
        entity_id: i32,
        part_npc_type: i32,
        desired_scaling: f32,
    ) {
        self.raw(
            2004,
            25,
            &[
                entity_id.into(),
                part_npc_type.into(),
                desired_scaling.into(),
            ],
        );
    }

    /// 2004[26]: switch type: 0 = off, 1 = on, 2 = change.
    pub fn set_display_mask(&mut self, entity_id: i32, bit_number: u8, switch_type: u8) {
        self.raw(
            2004,
            26,
            &[entity_id.into(), bit_number.into(), switch_type.into()],
        );
    }

    /// 2004[27]: switch type: 0 = off, 1 = on, 2 = change.
    pub fn set_hitbox_mask(&mut self, entity_id: i32, bit_number: u8, switch_type: u8) {
        self.raw(
            2004,
            27,
            &[entity_id.into(), bit_number.into(), switch_type.into()],
        );
    }

    /// 2004[28]: 0 = normal, 4095 = forced.
    pub fn set_network_update_authority(&mut self, entity_id: i32, authority_level: i32) {
        self.raw(2004, 28, &[entity_id.into(), authority_level.into()]);
    }

    /// 2004[29]: 1 = remove from backread, involved in permanent disabling.
    pub fn set_backread_state(&mut self, entity_id: i32, remove: bool) {
        self.raw(2004, 29, &[entity_id.into(), remove.into()]);
    }

    pub fn enable_backread(&mut self, entity_id: i32) {
        self.set_backread_state(entity_id, false);
    }

    pub fn disable_backread(&mut self, entity_id: i32) {
        self.set_backread_state(entity_id, true);
    }

    /// 2004[30]: the normal bar, not the boss bar.
    pub fn set_health_bar_display(&mut self, entity_id: i32, state: bool) {
        self.raw(2004, 30, &[entity_id.into(), state.into()]);
    }

    pub fn enable_health_bar(&mut self, entity_id: i32) {
        self.set_health_bar_display(entity_id, true);
    }

    pub fn disable_health_bar(&mut self, entity_id: i32) {
        self.set_health_bar_display(entity_id, false);
    }

    /// 2004[31]: 1 = no collision.
    pub fn set_collision(&mut self, entity_id: i32, disabled: bool) {
        self.raw(2004, 31, &[entity_id.into(), disabled.into()]);
    }

    pub fn enable_collision(&mut self, entity_id: i32) {
        self.set_collision(entity_id, false);
    }

    pub fn disable_collision(&mut self, entity_id: i32) {
        self.set_collision(entity_id, true);
    }

    /// 2004[32]
    pub fn ai_event(
        &mut self,
        entity_id: i32,
        command_id: i32,
        slot_number: u8,
        start_event_flag_id: i32,
        end_event_flag_id: i32,
    ) {
        self.raw(
            2004,
            32,
            &[
                entity_id.into(),
                command_id.into(),
                slot_number.into(),
                start_event_flag_id.into(),
                end_event_flag_id.into(),
            ],
        );
    }

    /// 2004[33]: damage to the first entity affects the second.
    pub fn refer_damage_to_entity(&mut self, entity_id: i32, target_entity_id: i32) {
        self.raw(2004, 33, &[entity_id.into(), target_entity_id.into()]);
    }

    /// 2004[34]: frequency: -1 never, 0 always, 2/5 every N frames.
    pub fn set_network_update_rate(&mut self, entity_id: i32, is_fixed: bool, frequency: i8) {
        self.raw(
            2004,
            34,
            &[entity_id.into(), is_fixed.into(), frequency.into()],
        );
    }

    /// 2004[35]
    pub fn set_backread_state_alternate(&mut self, entity_id: i32, state: bool) {
        self.raw(2004, 35, &[entity_id.into(), state.into()]);
    }

    /// 2004[36]
    pub fn hellkite_breath_control(&mut self, entity_id: i32, object_entity_id: i32, animation_id: i32) {
        self.raw(
            2004,
            36,
            &[
                entity_id.into(),
                object_entity_id.into(),
                animation_id.into(),
            ],
        );
    }

    /// 2004[37]: forces the drop of mandatory treasure.
    pub fn drop_mandatory_treasure(&mut self, entity_id: i32) {
        self.raw(2004, 37, &[entity_id.into()]);
    }

    /// 2004[38]
    pub fn betray_current_covenant(&mut self) {
        self.raw(2004, 38, &[Arg::U8(0)]);
    }

    /// 2004[39]
    pub fn set_animation_state(&mut self, entity_id: i32, state: bool) {
        self.raw(2004, 39, &[entity_id.into(), state.into()]);
    }

    pub fn enable_animations(&mut self, entity_id: i32) {
        self.set_animation_state(entity_id, true);
    }

    pub fn disable_animations(&mut self, entity_id: i32) {
        self.set_animation_state(entity_id, false);
    }

    /// 2004[40]: destination type: 0 = object, 1 = area, 2 = character.
    pub fn warp_and_set_floor(
        &mut self,
        entity_id: i32,
        warp_destination_type: u8,
        damipoly_id: i32,
        destination_entity_id: i32,
    ) {
        self.raw(
            2004,
            40,
            &[
                entity_id.into(),
                warp_destination_type.into(),
                damipoly_id.into(),
                destination_entity_id.into(),
            ],
        );
    }

    /// 2004[41]
    pub fn short_warp(
        &mut self,
        entity_id: i32,
        warp_destination_type: u8,
        destination_target_id: i32,
        damipoly_id: i32,
    ) {
        self.raw(
            2004,
            41,
            &[
                entity_id.into(),
                warp_destination_type.into(),
                destination_target_id.into(),
                damipoly_id.into(),
            ],
        );
    }

    /// 2004[42]: destination type: 0 = object, 1 = area, 2 = character.
    pub fn warp_and_copy_floor(
        &mut self,
        entity_id: i32,
        warp_destination_type: u8,
        destination_target_id: i32,
        damipoly_id: i32,
        copy_floor_of_entity_id: i32,
    ) {
        self.raw(
            2004,
            42,
            &[
                entity_id.into(),
                warp_destination_type.into(),
                destination_target_id.into(),
                damipoly_id.into(),
                copy_floor_of_entity_id.into(),
            ],
        );
    }

    /// 2004[43]: 0 = interpolated, 1 = not interpolated.
    pub fn reset_animation(&mut self, entity_id: i32, disable_interpolation: bool) {
        self.raw(
            2004,
            43,
            &[entity_id.into(), disable_interpolation.into()],
        );
    }

    /// 2004[44]: see [`switch_allegiance`](Self::switch_allegiance) for teams.
    pub fn change_allegiance_and_exit_standby_animation(&mut self, entity_id: i32, new_team: u8) {
        self.raw(2004, 44, &[entity_id.into(), new_team.into()]);
    }

    /// 2004[45]: always called to initialize NPCs who drop humanity.
    pub fn npc_humanity_registration(&mut self, entity_id: i32, event_flag_id: i32) {
        self.raw(2004, 45, &[entity_id.into(), event_flag_id.into()]);
    }

    /// 2004[46]
    pub fn increment_player_pvp_sin(&mut self) {
        self.raw(2004, 46, &[Arg::U8(0)]);
    }

    /// 2004[47]: takes no arguments; speculated to trigger a garbage
    /// collection pass.
    pub fn equal_recovery(&mut self) {
        self.raw(2004, 47, &[]);
    }
}
