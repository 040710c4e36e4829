//! Pointer state and card geometry for the social deck.

/// Index of the card the fan is centred on, for a deck of four.
pub const CENTER_OFFSET: f64 = 1.5;

const REST_ROTATION_DEG: f64 = 4.0;
const FAN_ROTATION_DEG: f64 = 10.0;
const REST_SPREAD_PX: f64 = 10.0;
const FAN_SPREAD_PX: f64 = 60.0;
const REST_DROP_PX: f64 = 4.0;
const LIFT_PX: f64 = -40.0;
const HOVER_SCALE: f64 = 1.1;
pub const HOVER_Z_INDEX: usize = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeckHover {
    hovered: Option<usize>,
    inside: bool,
}

impl DeckHover {
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    pub fn enter_deck(&mut self) {
        self.inside = true;
    }

    pub fn leave_deck(&mut self) {
        self.inside = false;
        self.hovered = None;
    }

    pub fn enter_card(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    /// Only clears the hovered card if it is still `index`.
    pub fn leave_card(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        }
    }

    pub fn is_card_hovered(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub rotate_deg: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub z_index: usize,
}

impl CardTransform {
    pub fn for_card(index: usize, hover: &DeckHover) -> Self {
        let offset = index as f64 - CENTER_OFFSET;
        let card_hovered = hover.is_card_hovered(index);
        let fanned = hover.is_inside();

        let rotate_deg = match (card_hovered, fanned) {
            (true, _) => 0.0,
            (false, true) => offset * FAN_ROTATION_DEG,
            (false, false) => offset * REST_ROTATION_DEG,
        };
        let translate_x = if fanned {
            offset * FAN_SPREAD_PX
        } else {
            offset * REST_SPREAD_PX
        };
        let translate_y = match (card_hovered, fanned) {
            (true, _) => LIFT_PX,
            (false, true) => 0.0,
            (false, false) => offset * REST_DROP_PX,
        };

        Self {
            rotate_deg,
            translate_x,
            translate_y,
            scale: if card_hovered { HOVER_SCALE } else { 1.0 },
            z_index: if card_hovered { HOVER_Z_INDEX } else { index },
        }
    }

    /// Inline `style` value for the card anchor.
    pub fn to_style(&self) -> String {
        format!(
            "transform: rotate({}deg) translate({}px, {}px) scale({}); z-index: {};",
            self.rotate_deg, self.translate_x, self.translate_y, self.scale, self.z_index
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resting(index: usize) -> (f64, f64, f64) {
        let offset = index as f64 - 1.5;
        (offset * 4.0, offset * 10.0, offset * 4.0)
    }

    #[test]
    fn test_resting_stack() {
        let hover = DeckHover::default();
        for i in 0..4 {
            let t = CardTransform::for_card(i, &hover);
            let (rot, x, y) = resting(i);
            assert_eq!(t.rotate_deg, rot);
            assert_eq!(t.translate_x, x);
            assert_eq!(t.translate_y, y);
            assert_eq!(t.scale, 1.0);
            assert_eq!(t.z_index, i);
        }
    }

    #[test]
    fn test_fanned_without_card_hover() {
        let mut hover = DeckHover::default();
        hover.enter_deck();
        let t = CardTransform::for_card(0, &hover);
        assert_eq!(t.rotate_deg, -15.0);
        assert_eq!(t.translate_x, -90.0);
        assert_eq!(t.translate_y, 0.0);
        let t = CardTransform::for_card(3, &hover);
        assert_eq!(t.rotate_deg, 15.0);
        assert_eq!(t.translate_x, 90.0);
    }

    #[test]
    fn test_hovered_card_flat_lifted_and_on_top() {
        let mut hover = DeckHover::default();
        hover.enter_deck();
        hover.enter_card(1);
        let t = CardTransform::for_card(1, &hover);
        assert_eq!(t.rotate_deg, 0.0);
        assert_eq!(t.translate_y, -40.0);
        assert_eq!(t.scale, 1.1);
        for other in [0, 2, 3] {
            let o = CardTransform::for_card(other, &hover);
            assert!(t.z_index > o.z_index);
            assert_eq!(o.translate_y, 0.0);
        }
    }

    #[test]
    fn test_leave_deck_resets_everything() {
        let mut hover = DeckHover::default();
        hover.enter_deck();
        hover.enter_card(2);
        hover.leave_deck();
        assert_eq!(hover, DeckHover::default());
        for i in 0..4 {
            let t = CardTransform::for_card(i, &hover);
            assert_eq!(t.rotate_deg, (i as f64 - 1.5) * 4.0);
            assert_eq!(t.translate_x, (i as f64 - 1.5) * 10.0);
        }
    }

    #[test]
    fn test_leave_card_only_clears_own_index() {
        let mut hover = DeckHover::default();
        hover.enter_card(0);
        hover.enter_card(1);
        hover.leave_card(0);
        assert_eq!(hover.hovered, Some(1));
        hover.leave_card(1);
        assert_eq!(hover.hovered, None);
    }

    #[test]
    fn test_style_string() {
        let hover = DeckHover::default();
        let style = CardTransform::for_card(3, &hover).to_style();
        assert_eq!(
            style,
            "transform: rotate(6deg) translate(15px, 6px) scale(1); z-index: 3;"
        );
    }
}
