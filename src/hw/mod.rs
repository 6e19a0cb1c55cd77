pub mod gamepad;
pub mod lookup;
pub mod motor;

pub use gamepad::DirectionalInput;
pub use gamepad::DpadState;
pub use lookup::MotorProvider;
pub use motor::Direction;
pub use motor::EncoderMotor;
pub use motor::RunMode;
pub use motor::ZeroPowerBehavior;
