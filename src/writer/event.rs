//! Group 2003: event instructions

use super::EventWriter;
use crate::types::Arg;

impl EventWriter {
    /// 2003[01]
    pub fn animation_playback_request(
        &mut self,
        entity_id: i32,
        animation_id: i32,
        looped: bool,
        wait_for_completion: bool,
    ) {
        self.raw(
            2003,
            1,
            &[
                entity_id.into(),
                animation_id.into(),
                looped.into(),
                wait_for_completion.into(),
            ],
        );
    }

    /// 2003[02]
    pub fn set_event_flag(&mut self, event_flag_id: i32, state: bool) {
        self.raw(2003, 2, &[event_flag_id.into(), state.into()]);
    }

    pub fn enable_event_flag(&mut self, event_flag_id: i32) {
        self.set_event_flag(event_flag_id, true);
    }

    pub fn disable_event_flag(&mut self, event_flag_id: i32) {
        self.set_event_flag(event_flag_id, false);
    }

    /// 2003[03]
    pub fn set_spawner_state(&mut self, entity_id: i32, state: bool) {
        self.raw(2003, 3, &[entity_id.into(), state.into()]);
    }

    pub fn enable_spawner(&mut self, entity_id: i32) {
        self.set_spawner_state(entity_id, true);
    }

    pub fn disable_spawner(&mut self, entity_id: i32) {
        self.set_spawner_state(entity_id, false);
    }

    /// 2003[04]: directly gives the lot to the player (pops up on screen).
    pub fn award_item_lot(&mut self, item_lot_id: i32) {
        self.raw(2003, 4, &[item_lot_id.into()]);
    }

    /// 2003[05]
    pub fn shoot_projectile(
        &mut self,
        owner_entity_id: i32,
        projectile_entity_id: i32,
        damipoly_id: i32,
        behavior_id: i32,
        launch_angle_x: i32,
        launch_angle_y: i32,
        launch_angle_z: i32,
    ) {
        self.raw(
            2003,
            5,
            &[
                owner_entity_id.into(),
                projectile_entity_id.into(),
                damipoly_id.into(),
                behavior_id.into(),
                launch_angle_x.into(),
                launch_angle_y.into(),
                launch_angle_z.into(),
            ],
        );
    }

    /// 2003[08]
    pub fn set_event_id_state_with_slot(
        &mut self,
        event_id: i32,
        event_slot_id: i32,
        state: bool,
    ) {
        self.raw(
            2003,
            8,
            &[event_id.into(), event_slot_id.into(), state.into()],
        );
    }

    pub fn restart_event_id(&mut self, event_id: i32) {
        self.set_event_id_state_with_slot(event_id, 0, true);
    }

    pub fn cancel_event_id(&mut self, event_id: i32) {
        self.set_event_id_state_with_slot(event_id, 0, false);
    }

    pub fn restart_event_id_with_slot(&mut self, event_id: i32, event_slot_id: i32) {
        self.set_event_id_state_with_slot(event_id, event_slot_id, true);
    }

    pub fn cancel_event_id_with_slot(&mut self, event_id: i32, event_slot_id: i32) {
        self.set_event_id_state_with_slot(event_id, event_slot_id, false);
    }

    /// 2003[11]: slot number can only be 0 (bottom) or 1 (top).
    pub fn set_boss_health_bar_with_slot(
        &mut self,
        state: bool,
        entity_id: i32,
        slot_number: i16,
        name_id: i16,
    ) {
        self.raw(
            2003,
            11,
            &[
                state.into(),
                entity_id.into(),
                slot_number.into(),
                name_id.into(),
            ],
        );
    }

    pub fn enable_boss_health_bar(&mut self, entity_id: i32, name_id: i16) {
        self.set_boss_health_bar_with_slot(true, entity_id, 0, name_id);
    }

    pub fn disable_boss_health_bar(&mut self, entity_id: i32, name_id: i16) {
        self.set_boss_health_bar_with_slot(false, entity_id, 0, name_id);
    }

    pub fn enable_boss_health_bar_with_slot(
        &mut self,
        entity_id: i32,
        slot_number: i16,
        name_id: i16,
    ) {
        self.set_boss_health_bar_with_slot(true, entity_id, slot_number, name_id);
    }

    pub fn disable_boss_health_bar_with_slot(
        &mut self,
        entity_id: i32,
        slot_number: i16,
        name_id: i16,
    ) {
        self.set_boss_health_bar_with_slot(false, entity_id, slot_number, name_id);
    }

    /// 2003[12]
    pub fn kill_boss(&mut self, entity_id: i32) {
        self.raw(2003, 12, &[entity_id.into()]);
    }

    /// 2003[13]: modification type: 0 = add, 1 = delete, 2 = invert.
    pub fn modify_navmesh_collision_bitflags(
        &mut self,
        entity_id: i32,
        navmesh_collision_bit: u32,
        modification_type: u8,
    ) {
        self.raw(
            2003,
            13,
            &[
                entity_id.into(),
                navmesh_collision_bit.into(),
                modification_type.into(),
            ],
        );
    }

    /// 2003[14]
    pub fn warp_player(&mut self, area_id: u8, block_id: u8, area_entity_id: i32) {
        self.raw(
            2003,
            14,
            &[area_id.into(), block_id.into(), area_entity_id.into()],
        );
    }

    /// 2003[16]
    pub fn trigger_multiplayer_event(&mut self, multiplayer_event_id: i32) {
        self.raw(2003, 16, &[multiplayer_event_id.into()]);
    }

    /// 2003[17]
    pub fn randomly_set_one_flag_in_range(
        &mut self,
        start_event_flag_id: u32,
        end_event_flag_id: u32,
        state: bool,
    ) {
        self.raw(
            2003,
            17,
            &[
                start_event_flag_id.into(),
                end_event_flag_id.into(),
                state.into(),
            ],
        );
    }

    pub fn randomly_enable_one_flag_in_range(
        &mut self,
        start_event_flag_id: u32,
        end_event_flag_id: u32,
    ) {
        self.randomly_set_one_flag_in_range(start_event_flag_id, end_event_flag_id, true);
    }

    pub fn randomly_disable_one_flag_in_range(
        &mut self,
        start_event_flag_id: u32,
        end_event_flag_id: u32,
    ) {
        self.randomly_set_one_flag_in_range(start_event_flag_id, end_event_flag_id, false);
    }

    /// 2003[18]
    pub fn force_animation(
        &mut self,
        entity_id: i32,
        animation_id: i32,
        looped: bool,
        wait_for_completion: bool,
        do_not_wait_for_transition: bool,
    ) {
        self.raw(
            2003,
            18,
            &[
                entity_id.into(),
                animation_id.into(),
                looped.into(),
                wait_for_completion.into(),
                do_not_wait_for_transition.into(),
            ],
        );
    }

    /// 2003[19]
    pub fn set_area_texture_parambank_slot_index(
        &mut self,
        area_id: i16,
        texture_parambank_slot_index: i16,
    ) {
        self.raw(
            2003,
            19,
            &[area_id.into(), texture_parambank_slot_index.into()],
        );
    }

    /// 2003[21]
    pub fn increment_ngplus_counter(&mut self) {
        self.raw(2003, 21, &[Arg::U8(0)]);
    }

    /// 2003[22]
    pub fn set_all_flags_in_range(
        &mut self,
        start_event_flag_id: i32,
        end_event_flag_id: i32,
        state: bool,
    ) {
        self.raw(
            2003,
            22,
            &[
                start_event_flag_id.into(),
                end_event_flag_id.into(),
                state.into(),
            ],
        );
    }

    pub fn enable_all_flags_in_range(&mut self, start_event_flag_id: i32, end_event_flag_id: i32) {
        self.set_all_flags_in_range(start_event_flag_id, end_event_flag_id, true);
    }

    pub fn disable_all_flags_in_range(&mut self, start_event_flag_id: i32, end_event_flag_id: i32) {
        self.set_all_flags_in_range(start_event_flag_id, end_event_flag_id, false);
    }

    /// 2003[23]
    pub fn set_player_respawn_point(&mut self, respawn_point_id: i32) {
        self.raw(2003, 23, &[respawn_point_id.into()]);
    }

    /// 2003[24]: quantity may be broken (always removes all).
    pub fn remove_items_from_player(&mut self, item_type: i32, item_id: i32, quantity: i32) {
        self.raw(
            2003,
            24,
            &[item_type.into(), item_id.into(), quantity.into()],
        );
    }

    /// 2003[25]
    pub fn place_npc_summon_sign(
        &mut self,
        sign_type: i32,
        entity_id: i32,
        summon_point: i32,
        summon_event_flag_id: i32,
        dismissal_event_flag_id: i32,
    ) {
        self.raw(
            2003,
            25,
            &[
                sign_type.into(),
                entity_id.into(),
                summon_point.into(),
                summon_event_flag_id.into(),
                dismissal_event_flag_id.into(),
            ],
        );
    }

    /// 2003[26]
    pub fn set_tip_message_visibility(&mut self, entity_id: i32, state: bool) {
        self.raw(2003, 26, &[entity_id.into(), state.into()]);
    }

    /// 2003[28]
    pub fn award_achievement(&mut self, achievement_id: i32) {
        self.raw(2003, 28, &[achievement_id.into()]);
    }

    /// 2003[30]: 1 = disable.
    pub fn set_vagrant_spawning(&mut self, disabled: bool) {
        self.raw(2003, 30, &[disabled.into()]);
    }

    /// 2003[31]
    pub fn increment_event_value(&mut self, event_flag_id: i32, number_bits: u32, max_value: u32) {
        self.raw(
            2003,
            31,
            &[event_flag_id.into(), number_bits.into(), max_value.into()],
        );
    }

    /// 2003[32]
    pub fn clear_event_value(&mut self, event_flag_id: i32, number_bits: u32) {
        self.raw(2003, 32, &[event_flag_id.into(), number_bits.into()]);
    }

    /// 2003[33]
    pub fn set_snuggly_next_trade(&mut self, event_flag_id: i32) {
        self.raw(2003, 33, &[event_flag_id.into()]);
    }

    /// 2003[34]
    pub fn snuggly_item_drop(
        &mut self,
        item_lot_id: i32,
        area_entity_id: i32,
        event_flag_id: i32,
        hitbox_entity_id: i32,
    ) {
        self.raw(
            2003,
            34,
            &[
                item_lot_id.into(),
                area_entity_id.into(),
                event_flag_id.into(),
                hitbox_entity_id.into(),
            ],
        );
    }

    /// 2003[35]
    pub fn move_dropped_items_and_bloodstains(
        &mut self,
        source_area_entity_id: i32,
        destination_area_entity_id: i32,
    ) {
        self.raw(
            2003,
            35,
            &[
                source_area_entity_id.into(),
                destination_area_entity_id.into(),
            ],
        );
    }

    /// 2003[36]
    pub fn award_item_to_host_only(&mut self, item_lot_id: i32) {
        self.raw(2003, 36, &[item_lot_id.into()]);
    }

    /// 2003[41]
    pub fn activate_player_killplane(
        &mut self,
        map_id: i32,
        block_id: i32,
        threshold_y: f32,
        target_model_id: i32,
    ) {
        self.raw(
            2003,
            41,
            &[
                map_id.into(),
                block_id.into(),
                threshold_y.into(),
                target_model_id.into(),
            ],
        );
    }
}
