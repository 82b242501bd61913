//! Group 2007: message instructions

use super::EventWriter;

impl EventWriter {
    /// 2007[01]: message box that appears on screen and awaits a response.
    /// Button type: 0 = YES/NO, 1 = OK/CANCEL; button count: 1, 2 or 6 (no
    /// buttons).
    pub fn display_generic_dialog(
        &mut self,
        message_id: i32,
        button_type: i16,
        number_buttons: i16,
        entity_id: i32,
        display_distance: f32,
    ) {
        self.raw(
            2007,
            1,
            &[
                message_id.into(),
                button_type.into(),
                number_buttons.into(),
                entity_id.into(),
                display_distance.into(),
            ],
        );
    }

    /// 2007[02]: large preset banners; 1 = Demon Killed, 2 = Death,
    /// 3 = Revival, 4 = Soul Acquisition, 5 = Target Killed, ...
    pub fn display_text_banner(&mut self, banner_type: u8) {
        self.raw(2007, 2, &[banner_type.into()]);
    }

    /// 2007[03]: messages explaining curse, no bonfire warp, etc.
    pub fn display_status_explanation_message(&mut self, message_id: i32, pad_enabled: bool) {
        self.raw(2007, 3, &[message_id.into(), pad_enabled.into()]);
    }

    /// 2007[04]
    pub fn display_battlefield_message(&mut self, message_id: i32, display_location_index: u8) {
        self.raw(
            2007,
            4,
            &[message_id.into(), display_location_index.into()],
        );
    }
}
