// Form Controller: owns the input fields and the generation lifecycle for one
// form instance, and sequences resolver → prompt builder → completion proxy.

pub mod controller;
pub mod handlers;
pub mod state;
