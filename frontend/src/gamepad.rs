use serde::Serialize;

/// SDL GameController axis numbering.
pub mod axis {
    pub const LEFT_X: i32 = 0;
    pub const LEFT_Y: i32 = 1;
    pub const RIGHT_X: i32 = 2;
    pub const RIGHT_Y: i32 = 3;
    pub const TRIGGER_LEFT: i32 = 4;
    pub const TRIGGER_RIGHT: i32 = 5;
}

/// SDL GameController button numbering.
pub mod button {
    pub const A: i32 = 0;
    pub const B: i32 = 1;
    pub const X: i32 = 2;
    pub const Y: i32 = 3;
    pub const BACK: i32 = 4;
    pub const GUIDE: i32 = 5;
    pub const START: i32 = 6;
    pub const LEFT_STICK: i32 = 7;
    pub const RIGHT_STICK: i32 = 8;
    pub const LEFT_SHOULDER: i32 = 9;
    pub const RIGHT_SHOULDER: i32 = 10;
    pub const DPAD_UP: i32 = 11;
    pub const DPAD_DOWN: i32 = 12;
    pub const DPAD_LEFT: i32 = 13;
    pub const DPAD_RIGHT: i32 = 14;
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    AxisNegative,
    AxisPositive,
    Button,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct GamepadControl {
    pub kind: ControlKind,
    /// Axis or button number, depending on `kind`.
    pub index: i32,
    /// Config key the binding was read from, e.g. `ButtonA`.
    pub label: String,
    pub cmd: String,
    /// Frames left before a held input fires again.
    #[serde(skip)]
    pub repeat: i32,
}

/// `[Gamepad]` keys that bind an input to a command.
pub const BINDING_KEYS: &[(&str, ControlKind, i32)] = &[
    ("LStickX-", ControlKind::AxisNegative, axis::LEFT_X),
    ("LStickX+", ControlKind::AxisPositive, axis::LEFT_X),
    ("LStickY-", ControlKind::AxisNegative, axis::LEFT_Y),
    ("LStickY+", ControlKind::AxisPositive, axis::LEFT_Y),
    ("RStickX-", ControlKind::AxisNegative, axis::RIGHT_X),
    ("RStickX+", ControlKind::AxisPositive, axis::RIGHT_X),
    ("RStickY-", ControlKind::AxisNegative, axis::RIGHT_Y),
    ("RStickY+", ControlKind::AxisPositive, axis::RIGHT_Y),
    ("LTrigger", ControlKind::AxisPositive, axis::TRIGGER_LEFT),
    ("RTrigger", ControlKind::AxisPositive, axis::TRIGGER_RIGHT),
    ("ButtonA", ControlKind::Button, button::A),
    ("ButtonB", ControlKind::Button, button::B),
    ("ButtonX", ControlKind::Button, button::X),
    ("ButtonY", ControlKind::Button, button::Y),
    ("ButtonBack", ControlKind::Button, button::BACK),
    ("ButtonGuide", ControlKind::Button, button::GUIDE),
    ("ButtonStart", ControlKind::Button, button::START),
    ("ButtonLeftStick", ControlKind::Button, button::LEFT_STICK),
    ("ButtonRightStick", ControlKind::Button, button::RIGHT_STICK),
    ("ButtonLeftShoulder", ControlKind::Button, button::LEFT_SHOULDER),
    ("ButtonRightShoulder", ControlKind::Button, button::RIGHT_SHOULDER),
    ("ButtonDPadUp", ControlKind::Button, button::DPAD_UP),
    ("ButtonDPadDown", ControlKind::Button, button::DPAD_DOWN),
    ("ButtonDPadLeft", ControlKind::Button, button::DPAD_LEFT),
    ("ButtonDPadRight", ControlKind::Button, button::DPAD_RIGHT),
];

pub fn binding_for_key(key: &str) -> Option<(ControlKind, i32)> {
    BINDING_KEYS
        .iter()
        .find(|(name, _, _)| *name == key)
        .map(|&(_, kind, index)| (kind, index))
}

#[cfg(feature = "sdl2")]
impl GamepadControl {
    pub fn sdl_axis(&self) -> Option<sdl2::controller::Axis> {
        use sdl2::controller::Axis;
        if self.kind == ControlKind::Button {
            return None;
        }
        match self.index {
            axis::LEFT_X => Some(Axis::LeftX),
            axis::LEFT_Y => Some(Axis::LeftY),
            axis::RIGHT_X => Some(Axis::RightX),
            axis::RIGHT_Y => Some(Axis::RightY),
            axis::TRIGGER_LEFT => Some(Axis::TriggerLeft),
            axis::TRIGGER_RIGHT => Some(Axis::TriggerRight),
            _ => None,
        }
    }

    pub fn sdl_button(&self) -> Option<sdl2::controller::Button> {
        use sdl2::controller::Button;
        if self.kind != ControlKind::Button {
            return None;
        }
        match self.index {
            button::A => Some(Button::A),
            button::B => Some(Button::B),
            button::X => Some(Button::X),
            button::Y => Some(Button::Y),
            button::BACK => Some(Button::Back),
            button::GUIDE => Some(Button::Guide),
            button::START => Some(Button::Start),
            button::LEFT_STICK => Some(Button::LeftStick),
            button::RIGHT_STICK => Some(Button::RightStick),
            button::LEFT_SHOULDER => Some(Button::LeftShoulder),
            button::RIGHT_SHOULDER => Some(Button::RightShoulder),
            button::DPAD_UP => Some(Button::DPadUp),
            button::DPAD_DOWN => Some(Button::DPadDown),
            button::DPAD_LEFT => Some(Button::DPadLeft),
            button::DPAD_RIGHT => Some(Button::DPadRight),
            _ => None,
        }
    }
}
