// Adapter: a legacy game-port joystick exposed through a USB-shaped
// interface. The adapter owns one legacy device and forwards every
// call unchanged; the legacy implementation is never modified.

use crate::console::Console;

/// Old interface, as shipped by the legacy device.
pub trait GamePort {
    fn connect_to_port(&self, out: &dyn Console);
    fn read_inputs(&self) -> u8;
}

/// Target interface the rest of the code is written against.
pub trait UsbDevice {
    fn connect_to_usb(&self, out: &dyn Console);
    fn read_data(&self) -> u8;
}

/// Legacy device with a fixed input reading (0-255).
pub struct LegacyJoystick {
    inputs: u8,
}

impl LegacyJoystick {
    pub fn new(inputs: u8) -> Self {
        Self { inputs }
    }
}

impl GamePort for LegacyJoystick {
    fn connect_to_port(&self, out: &dyn Console) {
        out.line("Joystick connected to game port");
    }

    fn read_inputs(&self) -> u8 {
        self.inputs
    }
}

/// Owns one legacy joystick and forwards calls transparently: no
/// transformation, no caching, no behavior of its own.
pub struct JoystickAdapter {
    legacy: LegacyJoystick,
}

impl JoystickAdapter {
    pub fn new(legacy: LegacyJoystick) -> Self {
        Self { legacy }
    }
}

impl UsbDevice for JoystickAdapter {
    fn connect_to_usb(&self, out: &dyn Console) {
        self.legacy.connect_to_port(out);
    }

    fn read_data(&self) -> u8 {
        self.legacy.read_inputs()
    }
}

/// Client code sees only the USB shape.
pub fn poll_device(out: &dyn Console, device: &dyn UsbDevice) -> u8 {
    device.connect_to_usb(out);
    device.read_data()
}

pub fn demo(out: &dyn Console) {
    let adapter = JoystickAdapter::new(LegacyJoystick::new(87));
    let reading = poll_device(out, &adapter);
    out.line(&format!("Joystick inputs: {}", reading));
}
