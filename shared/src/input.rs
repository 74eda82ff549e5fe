use winit::event::VirtualKeyCode;
use winit_input_helper::WinitInputHelper;

use crate::models::viewport::Pan;

/// Level-triggered keyboard query: is the key for `pan` held right now?
pub trait KeyboardState {
    fn is_held(&self, pan: Pan) -> bool;
}

pub fn key_code(pan: Pan) -> VirtualKeyCode {
    match pan {
        Pan::Up => VirtualKeyCode::Up,
        Pan::Down => VirtualKeyCode::Down,
        Pan::Left => VirtualKeyCode::Left,
        Pan::Right => VirtualKeyCode::Right,
    }
}

impl KeyboardState for WinitInputHelper {
    fn is_held(&self, pan: Pan) -> bool {
        self.key_held(key_code(pan))
    }
}

/// Fixed set of held keys, for driving the viewer without a window.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeldKeys {
    held: [bool; 4],
}

impl HeldKeys {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with(mut self, pan: Pan) -> Self {
        self.held[pan as usize] = true;
        self
    }
}

impl KeyboardState for HeldKeys {
    fn is_held(&self, pan: Pan) -> bool {
        self.held[pan as usize]
    }
}
